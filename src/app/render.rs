use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::DashboardView;
use crate::models::{NewsItem, Quote};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn render_quote(quote: &Quote) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<h2>{}</h2><p class=\"price\">{:.2} {}</p>",
        escape_html(quote.symbol()),
        quote.price(),
        escape_html(quote.currency())
    );

    if let Some(change) = quote.change() {
        let percent = quote
            .percent_change()
            .as_ref()
            .map(|p| format!(" ({:+.2}%)", p))
            .unwrap_or_default();
        let _ = write!(html, "<p class=\"change\">{:+.2}{}</p>", change, percent);
    }

    if let Some(state) = quote.market_state() {
        let _ = write!(html, "<p class=\"state\">Market: {}</p>", escape_html(state));
    }

    let _ = write!(
        html,
        "<p class=\"time\">As of {}</p>",
        format_time(quote.market_time())
    );
    html
}

fn render_news_item(item: &NewsItem) -> String {
    format!(
        "<li><a href=\"{}\" rel=\"noopener\">{}</a> <span class=\"source\">{}</span> <time>{}</time></li>",
        escape_html(item.url()),
        escape_html(item.title()),
        escape_html(item.source()),
        format_time(item.published_at())
    )
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut stock = String::new();
    if let Some(error) = view.quote_error() {
        let _ = write!(stock, "<p class=\"error\">{}</p>", escape_html(error));
    }
    if let Some(warning) = view.quote_warning() {
        let _ = write!(stock, "<p class=\"warning\">{}</p>", escape_html(warning));
    }
    if let Some(quote) = view.quote() {
        stock.push_str(&render_quote(quote));
    }

    let news = match view.news_error() {
        Some(error) => format!("<p class=\"error\">{}</p>", escape_html(error)),
        None if view.news_items().is_empty() => "<p>No news available.</p>".to_string(),
        None => {
            let items: String = view.news_items().iter().map(render_news_item).collect();
            format!("<ul>{}</ul>", items)
        }
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Dashboard</title></head><body>\
         <section id=\"stock\">{}</section>\
         <section id=\"news\"><h2>Latest news</h2>{}</section>\
         </body></html>\n",
        stock, news
    )
}
