use folio::api::{ApiConfig, HttpApiClient};
use folio::service::PortfolioService;

/// The portfolio service as used by the frontend, backed by the browser's `fetch`.
pub type PortfolioApi = PortfolioService<HttpApiClient>;

/// Create a service pointed at the backend configured at build time
/// (`FOLIO_BACKEND_URL`).
pub fn create() -> PortfolioApi {
    PortfolioService::new(HttpApiClient::new(ApiConfig::from_env()))
}
