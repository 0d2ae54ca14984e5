use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::HttpTransport;
use crate::error::FetchError;

pub async fn make_request(
    transport: &dyn HttpTransport,
    url: &str,
    query: &[(&str, String)],
    headers: &[(&str, &str)],
) -> Result<Value, FetchError> {
    let res = transport.get(url, query, headers).await?;

    if !res.is_success() {
        return Err(FetchError::Status(*res.status()));
    }

    let data = serde_json::from_str::<Value>(res.body())?;

    Ok(data)
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| FetchError::Payload(format!("{}: {}", error_msg, e))),
        _ => Err(FetchError::Payload(
            "Unexpected API response format: not an object".to_string(),
        )),
    }
}

/// Whole seconds since the epoch; fractional parts are truncated.
pub fn parse_epoch_seconds(seconds: f64, field_name: &str) -> Result<DateTime<Utc>, FetchError> {
    DateTime::<Utc>::from_timestamp(seconds.trunc() as i64, 0)
        .ok_or_else(|| FetchError::Payload(format!("Invalid {} '{}'", field_name, seconds)))
}
