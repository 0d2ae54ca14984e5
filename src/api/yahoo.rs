use super::{
    HttpTransport,
    utils::{make_request, parse_response_object},
    yahoo_dto::{YahooQuoteDto, YahooQuoteEnvelopeDto},
};
use crate::error::FetchError;

pub const QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

pub async fn get_quote(
    symbol: &str,
    transport: &dyn HttpTransport,
    base_url: &str,
    user_agent: &str,
) -> Result<YahooQuoteDto, FetchError> {
    let query = [("symbols", symbol.to_string())];
    let headers = [("User-Agent", user_agent)];
    let res = make_request(transport, base_url, &query, &headers).await?;

    let envelope = parse_response_object::<YahooQuoteEnvelopeDto>(
        res,
        "Unexpected payload structure from quote API",
    )?;

    envelope
        .quote_response()
        .result()
        .first()
        .cloned()
        .ok_or_else(|| FetchError::Payload(format!("No quote results for symbol {}", symbol)))
}
