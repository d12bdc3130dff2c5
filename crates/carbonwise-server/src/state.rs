//! Shared application state

use std::sync::Arc;

use anyhow::Result;
use carbonwise_core::{
    ActivityProvider, EmissionRates, LiveTextAdvisor, RandomActivityProvider, TextAdvisor,
};

/// State injected into every handler
///
/// The provider and advisor sit behind trait objects so tests swap in
/// fixtures without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub rates: EmissionRates,
    pub provider: Arc<dyn ActivityProvider>,
    pub advisor: Option<Arc<dyn TextAdvisor>>,
}

impl AppState {
    pub fn new(
        rates: EmissionRates,
        provider: Arc<dyn ActivityProvider>,
        advisor: Option<Arc<dyn TextAdvisor>>,
    ) -> Self {
        Self {
            rates,
            provider,
            advisor,
        }
    }

    /// Production defaults: canonical rates, synthetic provider, and the
    /// live advisor when credentials are present (fallback-only otherwise)
    pub fn with_defaults() -> Result<Self> {
        let rates = EmissionRates::default();
        let provider = Arc::new(RandomActivityProvider::new(rates));

        let advisor: Option<Arc<dyn TextAdvisor>> = match LiveTextAdvisor::from_env()? {
            Some(advisor) => Some(Arc::new(advisor)),
            None => {
                tracing::info!("no advisor credentials found, running with fallback text only");
                None
            }
        };

        Ok(Self::new(rates, provider, advisor))
    }
}
