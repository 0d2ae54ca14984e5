#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::{
        app::{
            Dashboard,
            dashboard::{NEWS_ERROR, QUOTE_WARNING},
            render::{escape_html, render_dashboard},
        },
        config::{NewsConfig, QuoteConfig},
        error::FetchError,
        services::{NewsCache, NewsFetcher, QuoteFetcher},
        test::{FakeTransport, Scripted, listing, post, quote_payload},
    };

    async fn render(quote: Scripted, news: Scripted) -> String {
        let dashboard = Dashboard::new(
            Arc::new(QuoteFetcher::new(
                Arc::new(FakeTransport::new(vec![quote])),
                QuoteConfig::default(),
            )),
            Arc::new(NewsFetcher::new(
                Arc::new(FakeTransport::new(vec![news])),
                Arc::new(NewsCache::default()),
                NewsConfig::default(),
            )),
            "TSLA".to_string(),
            5,
        );
        render_dashboard(&dashboard.load().await)
    }

    #[test]
    fn escape_html_escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[tokio::test]
    async fn renders_live_quote_and_news() {
        let html = render(
            Scripted::json(200, quote_payload()),
            Scripted::json(
                200,
                listing(vec![post("Model <Y> & more", "https://example.com/y", 1700000000)]),
            ),
        )
        .await;

        assert!(html.contains("250.12 USD"));
        assert!(html.contains("+3.45 (+1.40%)"));
        assert!(html.contains("Market: REGULAR"));
        assert!(html.contains("2023-11-14 22:13 UTC"));
        assert!(html.contains("Model &lt;Y&gt; &amp; more"));
        assert!(html.contains("r/TeslaMotors"));
        assert!(!html.contains(QUOTE_WARNING));
    }

    #[tokio::test]
    async fn renders_warning_and_news_error() {
        let html = render(
            Scripted::Fail(FetchError::Transport("timed out".to_string())),
            Scripted::json(503, json!({})),
        )
        .await;

        assert!(html.contains(QUOTE_WARNING));
        assert!(html.contains("249.99 USD"));
        assert!(html.contains("Market: OFFLINE"));
        assert!(html.contains(NEWS_ERROR));
    }

    #[tokio::test]
    async fn renders_empty_news_list() {
        let html = render(
            Scripted::json(200, quote_payload()),
            Scripted::json(200, listing(vec![])),
        )
        .await;

        assert!(html.contains("No news available."));
    }
}
