use tracing::error;

use crate::config::AppState;
use crate::types::external::ApiCountry;
use crate::utils::error::AppError;

pub async fn request_countries(state: &AppState) -> Result<Vec<ApiCountry>, AppError> {
    let resp = state
        .http
        .get(&state.api_url)
        .header("X-Api-Key", &state.api_key)
        .query(&[
            ("min_population", state.min_population.to_string()),
            ("limit", state.limit.to_string()),
        ])
        .send()
        .await
        .map_err(|e| AppError::External(format!("Could not fetch data from the country API: {}", e)))?;

    // Non-2xx responses keep whatever body the API sent; it is the only
    // diagnostic available for quota and auth failures.
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(AppError::External(format!(
            "Country API returned {}: {}",
            status, body
        )));
    }

    resp.json()
        .await
        .map_err(|e| AppError::External(format!("Could not parse country data: {}", e)))
}

/// Fetch boundary: failures are logged here and folded into an
/// absence-of-data signal instead of ending the run.
pub async fn fetch_countries(state: &AppState) -> Option<Vec<ApiCountry>> {
    match request_countries(state).await {
        Ok(countries) => Some(countries),
        Err(e) => {
            error!("Error fetching data from API: {}", e);
            None
        }
    }
}
