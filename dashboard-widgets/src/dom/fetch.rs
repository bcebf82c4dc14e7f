//! JSON GET over `fetch`

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::logic::threat::FetchError;

/// GET `url` and decode a 2xx body as JSON
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
