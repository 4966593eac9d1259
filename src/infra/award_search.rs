//! Thin asynchronous client for the award-availability lookup.
//!
//! The endpoint is a black-box collaborator: it takes an origin, destination,
//! and travel date and answers with the lowest award-miles level plus the
//! cash fare. Nothing in the valuation core depends on this contract.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

use crate::util::version;

const DEFAULT_BASE_URL: &str = "https://api.united.com/award-search/";

/// Travel dates are exchanged as plain `YYYY-MM-DD` strings.
pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum AwardSearchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid travel date (expected YYYY-MM-DD): {0}")]
    InvalidDate(#[from] time::error::Parse),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

/// Lowest-level award seat for a route and date.
#[derive(Clone, Debug, PartialEq)]
pub struct AwardQuote {
    pub origin: String,
    pub destination: String,
    pub date: Date,
    pub miles_required: f64,
    pub cash_price: f64,
}

#[derive(Debug, Deserialize)]
struct AwardQuoteDto {
    lowest_miles: Option<f64>,
    cash_price: Option<f64>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct AwardSearchClient {
    http: Client,
    base_url: Url,
}

impl AwardSearchClient {
    pub fn new() -> Result<Self, AwardSearchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, AwardSearchError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(format!(
                "miles-deal-scanner/{}",
                version::version_label()
            ))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Looks up the lowest award level for a route. `date` must already be a
    /// validated [`Date`]; use [`parse_travel_date`] on raw form input.
    pub async fn get_award_quote(
        &self,
        origin: &str,
        destination: &str,
        date: Date,
    ) -> Result<AwardQuote, AwardSearchError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("origin", origin)
            .append_pair("destination", destination)
            .append_pair("date", &format_date(date));

        println!("Requesting award availability from {url}");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let dto = response.json::<AwardQuoteDto>().await?;

        match (dto.lowest_miles, dto.cash_price) {
            (Some(miles_required), Some(cash_price)) => Ok(AwardQuote {
                origin: origin.to_string(),
                destination: destination.to_string(),
                date,
                miles_required,
                cash_price,
            }),
            _ => Err(AwardSearchError::Api(
                dto.message
                    .unwrap_or_else(|| "no award seats found".to_string()),
            )),
        }
    }
}

/// Parses a `YYYY-MM-DD` form input into a [`Date`].
pub fn parse_travel_date(input: &str) -> Result<Date, AwardSearchError> {
    Ok(Date::parse(input.trim(), DATE_FORMAT)?)
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_date_round_trips() {
        let date = parse_travel_date("2025-06-15").unwrap();
        assert_eq!(format_date(date), "2025-06-15");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(parse_travel_date("06/15/2025").is_err());
        assert!(parse_travel_date("sometime soon").is_err());
    }
}
