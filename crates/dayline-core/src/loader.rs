// File: crates/dayline-core/src/loader.rs
// Summary: Day-file URL building and blocking HTTP fetch into chart state.

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::chart::ChartState;
use crate::error::ChartError;
use crate::options::ChartOptions;

/// Fetches one day's TSV file and turns it into a [`ChartState`].
///
/// A load is a single blocking request with no retry and no cancellation;
/// completion is the returned value, so callers decide when (and whether)
/// to render the result.
pub struct DataLoader {
    client: reqwest::blocking::Client,
    options: ChartOptions,
}

impl DataLoader {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            options,
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// URL of the day file: `base_url + prefix + YYYYMMDD + ".tsv"`.
    pub fn day_url(&self, date: NaiveDate) -> String {
        format!(
            "{}{}{}.tsv",
            self.options.base_url,
            self.options.prefix,
            date.format("%Y%m%d")
        )
    }

    /// Fetch and parse the given day's file.
    pub fn load_day(&self, date: NaiveDate) -> Result<ChartState, ChartError> {
        let url = self.day_url(date);
        debug!(%url, "fetching day file");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ChartError::Http { url: url.clone(), source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Status { url, status: status.as_u16() });
        }
        let text = response
            .text()
            .map_err(|source| ChartError::Http { url, source })?;
        ChartState::from_tsv(self.options.clone(), &text)
    }

    /// Like [`load_day`](Self::load_day), but absorbs the failure the way the
    /// component always has: log it and fall back to the empty state.
    pub fn load_day_or_empty(&self, date: NaiveDate) -> ChartState {
        match self.load_day(date) {
            Ok(state) => state,
            Err(err) => {
                error!("day load failed: {err}");
                ChartState::empty(self.options.clone())
            }
        }
    }
}
