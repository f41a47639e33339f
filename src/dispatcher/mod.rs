//! Lookup dispatcher module
//!
//! Classifies the query, builds the single upstream GET, and maps every
//! failure to one generic message. Upstream error detail never crosses this
//! boundary towards the caller; it is written to the log only.

mod cache;

pub use cache::ResponseCache;

use crate::classifier::{self, QueryKind};
use crate::error::{LookupError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Default upstream registry host.
pub const DEFAULT_BASE_URL: &str = "https://eemis.mglsd.go.ug";

/// Field stripped from every upstream response before use.
pub const RESERVED_STATUS_FIELD: &str = "transactionStatus";

/// The only failure message ever surfaced for an upstream problem.
pub const FAILED_QUERY_MESSAGE: &str = "Failed query data";

/// What a lookup produces: the upstream record with the reserved status
/// field removed, or a flat failure message. The caller never distinguishes
/// failure subtypes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Record(Map<String, Value>),
    Failure { message: String },
}

impl LookupOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, LookupOutcome::Failure { .. })
    }
}

/// Where a successful record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Upstream,
}

pub struct Dispatcher {
    client: reqwest::Client,
    base_url: String,
    cache_path: PathBuf,
    use_cache: bool,
}

impl Dispatcher {
    pub fn new(base_url: String, use_cache: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_path: ResponseCache::default_path(),
            use_cache,
        }
    }

    pub fn with_cache_path(mut self, path: PathBuf) -> Self {
        self.cache_path = path;
        self
    }

    /// Lookup URL for a classified query. The value is passed through raw,
    /// exactly as typed.
    pub fn lookup_url(&self, kind: QueryKind, query: &str) -> String {
        format!("{}/api_route?{}={}", self.base_url, kind.param_name(), query)
    }

    /// Run one lookup: classify, consult the cache, fetch on miss.
    ///
    /// Exactly one request attempt is made; there are no retries. Every
    /// upstream problem collapses to the fixed failure message, with the
    /// detail logged. An unclassifiable query fails before any request.
    pub async fn dispatch(&self, query: &str) -> (LookupOutcome, Option<Source>) {
        let kind = match classifier::classify(query) {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("{}", e);
                return (
                    LookupOutcome::Failure {
                        message: format!("Unrecognized query format: {}", query),
                    },
                    None,
                );
            }
        };

        let url = self.lookup_url(kind, query);

        if self.use_cache {
            let cached = ResponseCache::load(&self.cache_path);
            if let Some(record) = cached.get(&url) {
                log::debug!("cache hit for {}", url);
                return (LookupOutcome::Record(record.clone()), Some(Source::Cache));
            }
        }

        match self.fetch_record(&url).await {
            Ok(record) => {
                if self.use_cache {
                    let mut cached = ResponseCache::load(&self.cache_path);
                    cached.insert(url, record.clone());
                    if let Err(e) = cached.save(&self.cache_path) {
                        log::warn!("failed to write response cache: {}", e);
                    }
                }
                (LookupOutcome::Record(record), Some(Source::Upstream))
            }
            Err(e) => {
                log::warn!("lookup failed: {}", e);
                (
                    LookupOutcome::Failure {
                        message: FAILED_QUERY_MESSAGE.to_string(),
                    },
                    None,
                )
            }
        }
    }

    /// Single GET attempt against the registry.
    async fn fetch_record(&self, url: &str) -> Result<Map<String, Value>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(LookupError::MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        Ok(strip_reserved_status(map))
    }
}

/// Remove the reserved transaction status field from an upstream record.
pub fn strip_reserved_status(mut record: Map<String, Value>) -> Map<String, Value> {
    record.remove(RESERVED_STATUS_FIELD);
    record
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
