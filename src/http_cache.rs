use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};

// Bodies fetched within this window are reused without touching the network;
// beyond it a conditional request revalidates the entry. In-memory only: the
// feed is re-fetched every cycle anyway, persistence would buy nothing.
const FRESH_TTL: Duration = Duration::from_secs(60);

static CACHE: Lazy<Mutex<HashMap<String, CacheEntry>>> = Lazy::new(|| Mutex::new(HashMap::new()));

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    etag: Option<String>,
    last_modified: Option<String>,
    fetched_at: Instant,
}

/// Plain GET returning the body, no caching.
pub fn fetch_json(client: &Client, url: &str, extra_headers: &[(&str, String)]) -> Result<String> {
    let mut req = client.get(url);
    for (name, value) in extra_headers {
        req = req.header(*name, value.as_str());
    }
    let resp = req.send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }
    Ok(body)
}

/// GET with conditional-request revalidation against the in-memory cache.
pub fn fetch_json_cached(
    client: &Client,
    url: &str,
    extra_headers: &[(&str, String)],
) -> Result<String> {
    let cached = {
        let guard = CACHE.lock().expect("http cache lock poisoned");
        guard.get(url).cloned()
    };

    if let Some(entry) = cached.as_ref() {
        if entry.fetched_at.elapsed() < FRESH_TTL {
            return Ok(entry.body.clone());
        }
    }

    let mut req = client.get(url);
    for (name, value) in extra_headers {
        req = req.header(*name, value.as_str());
    }
    if let Some(entry) = cached.as_ref() {
        if let Some(etag) = entry.etag.as_ref() {
            req = req.header(IF_NONE_MATCH, etag.as_str());
        }
        if let Some(last_modified) = entry.last_modified.as_ref() {
            req = req.header(IF_MODIFIED_SINCE, last_modified.as_str());
        }
    }

    let resp = req.send().context("request failed")?;
    let status = resp.status();
    let headers = resp.headers().clone();

    if status == StatusCode::NOT_MODIFIED {
        if let Some(mut entry) = cached {
            entry.fetched_at = Instant::now();
            let body = entry.body.clone();
            store_entry(url, entry);
            return Ok(body);
        }
        return Err(anyhow::anyhow!("received 304 without cache body"));
    }

    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }

    let etag = headers
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let last_modified = headers
        .get(LAST_MODIFIED)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    store_entry(
        url,
        CacheEntry {
            body: body.clone(),
            etag,
            last_modified,
            fetched_at: Instant::now(),
        },
    );
    Ok(body)
}

fn store_entry(url: &str, entry: CacheEntry) {
    let mut guard = CACHE.lock().expect("http cache lock poisoned");
    guard.insert(url.to_string(), entry);
}
