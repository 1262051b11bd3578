//! `ValidJson` extractor: JSON body deserialization plus `validator` checks.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use booster_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that passed its `Validate` rules.
///
/// Malformed JSON and rule violations are both reported as validation
/// errors, one per offending property in name order.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(|errors| validation_error(&errors))?;
        Ok(ValidJson(value))
    }
}

fn validation_error(errors: &ValidationErrors) -> ApiError {
    let mut fields = Vec::new();
    collect_invalid_fields(errors, &mut fields);
    let mut named = Vec::with_capacity(fields.len());
    for field in fields {
        let field = to_camel_case(&field);
        if !named.contains(&field) {
            named.push(field);
        }
    }
    ApiError::invalid_fields(named)
}

/// Names of every failing leaf field in name order, descending into nested
/// structs and lists.
fn collect_invalid_fields(errors: &ValidationErrors, out: &mut Vec<String>) {
    let map: &HashMap<_, _> = errors.errors();
    let mut keys: Vec<_> = map.keys().collect();
    keys.sort();

    for key in keys {
        match &map[key] {
            ValidationErrorsKind::Field(_) => out.push(key.to_string()),
            ValidationErrorsKind::Struct(inner) => collect_invalid_fields(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_invalid_fields(inner, out);
                }
            }
        }
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
