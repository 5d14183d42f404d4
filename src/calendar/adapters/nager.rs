//! Nager.Date public holiday client.
//!
//! Calls `GET {base_url}/PublicHolidays/{year}/{country}`, which answers with
//! a JSON array of holiday objects. Only `date` and `name` are kept.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::calendar::{
    domain::{CountryCode, Holiday},
    ports::{HolidaySource, HolidaySourceError, HolidaySourceResult},
};

/// Default API root of the public Nager.Date service.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Holiday source backed by the Nager.Date REST API.
#[derive(Debug, Clone)]
pub struct NagerHolidaySource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NagerHoliday {
    date: NaiveDate,
    name: String,
}

impl NagerHolidaySource {
    /// Creates a source with a default HTTP client.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a source that reuses an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, country: &CountryCode, year: i32) -> String {
        format!(
            "{}/PublicHolidays/{year}/{country}",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for NagerHolidaySource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn parse_payload(body: &str) -> HolidaySourceResult<Vec<Holiday>> {
    let entries: Vec<NagerHoliday> =
        serde_json::from_str(body).map_err(|err| HolidaySourceError::Decode(err.to_string()))?;
    Ok(entries
        .into_iter()
        .map(|entry| Holiday::new(entry.date, entry.name))
        .collect())
}

#[async_trait]
impl HolidaySource for NagerHolidaySource {
    async fn fetch(&self, country: &CountryCode, year: i32) -> HolidaySourceResult<Vec<Holiday>> {
        let url = self.endpoint(country, year);
        tracing::debug!(%url, "fetching public holidays");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(HolidaySourceError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidaySourceError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(HolidaySourceError::transport)?;
        parse_payload(&body)
    }
}
