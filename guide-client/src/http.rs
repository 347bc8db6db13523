//! Shared HTTP plumbing for the catalog and door-lock clients

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// Current Unix time in milliseconds (cache-busting query value)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Map a non-success status to an error, otherwise hand the response back
pub(crate) async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        _ => ClientError::Status {
            status: status.as_u16(),
            body: text,
        },
    })
}

/// Status check, then the body as text
pub(crate) async fn handle_text(response: Response) -> ClientResult<String> {
    Ok(check_status(response).await?.text().await?)
}

/// Status check, then the body as JSON
pub(crate) async fn handle_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let text = handle_text(response).await?;
    serde_json::from_str(&text).map_err(Into::into)
}
