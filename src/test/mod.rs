mod render;

use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{
    api::{HttpResponse, HttpTransport},
    error::FetchError,
};

#[derive(Clone, Debug)]
pub enum Scripted {
    Respond(u16, String),
    Fail(FetchError),
}

impl Scripted {
    pub fn json(status: u16, body: Value) -> Self {
        Scripted::Respond(status, body.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Replays scripted responses in order; the last one repeats once the script runs out.
pub struct FakeTransport {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
    delay: Option<Duration>,
}

impl FakeTransport {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn next(&self) -> Scripted {
        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script
                .front()
                .cloned()
                .unwrap_or_else(|| Scripted::Fail(FetchError::Transport("no script".into())))
        }
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, FetchError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                url: url.to_string(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.next() {
            Scripted::Respond(status, body) => Ok(HttpResponse::new(status, body)),
            Scripted::Fail(err) => Err(err),
        }
    }
}

/// Transport that panics on use, standing in for an unexpected fetcher crash.
pub struct PanickingTransport;

#[async_trait]
impl HttpTransport for PanickingTransport {
    async fn get(
        &self,
        url: &str,
        _query: &[(&str, String)],
        _headers: &[(&str, &str)],
    ) -> Result<HttpResponse, FetchError> {
        panic!("unexpected failure talking to {}", url);
    }
}

pub fn quote_payload() -> Value {
    json!({
        "quoteResponse": {
            "result": [{
                "symbol": "TSLA",
                "regularMarketPrice": 250.12,
                "currency": "USD",
                "regularMarketTime": 1700000000,
                "regularMarketChange": 3.45,
                "regularMarketChangePercent": 1.4,
                "marketState": "REGULAR"
            }]
        }
    })
}

pub fn post(title: &str, url: &str, created_utc: i64) -> Value {
    json!({
        "data": {
            "title": title,
            "url": url,
            "created_utc": created_utc,
            "subreddit": "TeslaMotors"
        }
    })
}

pub fn listing(children: Vec<Value>) -> Value {
    json!({ "data": { "children": children } })
}
