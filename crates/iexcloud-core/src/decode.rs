use serde::de::DeserializeOwned;

use crate::error::IexError;

/// Decodes a structured JSON body into `T`.
pub fn decode_json<T>(body: &str) -> Result<T, IexError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(body)?)
}

/// Decodes a bare plain-text number such as the `/price` response.
pub fn decode_price(body: &str) -> Result<f64, IexError> {
    body.trim()
        .parse::<f64>()
        .map_err(|source| IexError::InvalidPrice {
            body: body.to_owned(),
            source,
        })
}
