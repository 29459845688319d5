use anyhow::{Error, Result};
use reqwest::Client;
use tracing::info;

use crate::{
    data::{
        self,
        cache::{Clock, ReferenceCache, SystemClock},
    },
    models::{ReferenceRecord, TickerRecord},
};

/// Per-session state: the reference-table cache and the uploaded ticker
/// list. Each session owns its tables outright, so concurrent sessions
/// never share a mutable view.
pub struct Session<C: Clock = SystemClock> {
    client: Client,
    reference: ReferenceCache<C>,
    tickers: Option<Vec<TickerRecord>>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_cache(ReferenceCache::default())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_cache(reference: ReferenceCache<C>) -> Self {
        Self {
            client: Client::new(),
            reference,
            tickers: None,
        }
    }

    /// The reference table, re-fetched only when the cached copy has aged
    /// out of its TTL window.
    pub async fn reference_table(&mut self, url: &str) -> Result<&[ReferenceRecord]> {
        if self.reference.fresh().is_none() {
            let records = data::reference::load_reference_table(url, &self.client).await?;
            self.reference.store(records);
        } else {
            info!("using cached reference table");
        }

        self.reference
            .fresh()
            .ok_or_else(|| Error::msg("Reference cache expired immediately after load"))
    }

    /// Drops the cached reference table so the next lookup re-fetches.
    pub fn refresh_reference(&mut self) {
        self.reference.invalidate();
    }

    pub fn load_tickers(&mut self, path: &str) -> Result<usize> {
        let tickers = data::read_ticker_file(path)?;
        let count = tickers.len();
        self.tickers = Some(tickers);
        Ok(count)
    }

    pub fn tickers(&self) -> Option<&[TickerRecord]> {
        self.tickers.as_deref()
    }

    pub fn clear_tickers(&mut self) {
        self.tickers = None;
    }
}
