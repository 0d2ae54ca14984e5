use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use super::utils::parse_epoch_seconds;
use crate::{
    error::FetchError,
    models::{Quote, quote::DEFAULT_CURRENCY},
};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteEnvelopeDto {
    quote_response: YahooQuoteResponseDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct YahooQuoteResponseDto {
    result: Vec<YahooQuoteDto>,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteDto {
    regular_market_price: Option<f64>,
    regular_market_time: Option<f64>,
    currency: Option<String>,
    regular_market_change: Option<f64>,
    regular_market_change_percent: Option<f64>,
    market_state: Option<String>,
}

impl YahooQuoteDto {
    /// Price and market time are required; everything else is optional.
    pub fn to_quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let (Some(price), Some(market_time)) = (self.regular_market_price, self.regular_market_time)
        else {
            return Err(FetchError::Payload(
                "Quote payload missing price or timestamp".to_string(),
            ));
        };

        Ok(Quote::new(
            symbol.to_uppercase(),
            price,
            self.currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            parse_epoch_seconds(market_time, "regularMarketTime")?,
            self.regular_market_change,
            self.regular_market_change_percent,
            self.market_state.clone(),
            false,
        ))
    }
}
