use std::sync::Arc;

use log::{debug, warn};

use crate::{
    api::{HttpTransport, yahoo},
    config::QuoteConfig,
    error::FetchError,
    models::Quote,
};

pub struct QuoteFetcher {
    transport: Arc<dyn HttpTransport>,
    config: QuoteConfig,
}

impl QuoteFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, config: QuoteConfig) -> Self {
        Self { transport, config }
    }

    /// Fetches the live quote for `symbol`.
    ///
    /// Any transport or payload failure is absorbed and replaced by
    /// [`Quote::fallback`], so this never fails.
    pub async fn fetch_quote(&self, symbol: &str) -> Quote {
        match self.get_live_quote(symbol).await {
            Ok(quote) => {
                debug!("Quote for {}: {} {}", quote.symbol(), quote.price(), quote.currency());
                quote
            }
            Err(err) => {
                warn!("Using fallback quote for {}: {}", symbol.to_uppercase(), err);
                Quote::fallback(symbol)
            }
        }
    }

    async fn get_live_quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let dto = yahoo::get_quote(
            symbol,
            self.transport.as_ref(),
            &self.config.quote_url,
            &self.config.user_agent,
        )
        .await?;

        dto.to_quote(symbol)
    }
}
