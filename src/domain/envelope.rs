//! GraphQL response envelope handling, shared by every data need.
//!
//! A body without a `data` key — or with a populated `errors` array and
//! null data — is a malformed response and surfaces as an error. A present
//! `data` value whose inner connection is absent or empty is *not* an
//! error: a collection with zero activity is a valid zero-row result.

use crate::error::MalformedResponse;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Extract the `data` payload from a raw response body.
pub fn take_data(body: Value) -> Result<Value, MalformedResponse> {
    let envelope: GraphqlEnvelope = serde_json::from_value(body)?;
    match envelope.data {
        Some(data) if !data.is_null() => Ok(data),
        _ => match envelope.errors {
            Some(errors) if !errors.is_empty() => Err(MalformedResponse::Graphql(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => Err(MalformedResponse::MissingData),
        },
    }
}
