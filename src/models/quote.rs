use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const FALLBACK_PRICE: f64 = 249.99;
pub const FALLBACK_MARKET_STATE: &str = "OFFLINE";

/// Most recent quote for a single symbol.
#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    symbol: String,
    price: f64,
    currency: String,
    market_time: DateTime<Utc>,
    change: Option<f64>,
    percent_change: Option<f64>,
    market_state: Option<String>,
    is_fallback: bool,
}

impl Quote {
    /// Deterministic offline substitute used whenever the live quote cannot be obtained.
    pub fn fallback(symbol: &str) -> Self {
        Self::new(
            symbol.to_uppercase(),
            FALLBACK_PRICE,
            DEFAULT_CURRENCY.to_string(),
            Utc::now(),
            None,
            None,
            Some(FALLBACK_MARKET_STATE.to_string()),
            true,
        )
    }
}
