//! Ryanair `farfnd` cheapest-per-day client.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::source::MonthFareSource;
use crate::config::SOURCE;
use crate::domain::{DayQuote, MonthMap};

pub struct RyanairSource {
    client: Client,
}

impl RyanairSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(SOURCE.timeout_secs))
            .user_agent(SOURCE.user_agent)
            .build()?;
        Ok(RyanairSource { client })
    }

    fn endpoint(origin: &str, dest: &str) -> String {
        SOURCE
            .endpoint_template
            .replace("{origin}", origin)
            .replace("{dest}", dest)
    }
}

#[derive(Debug, Deserialize)]
struct CheapestPerDayResponse {
    outbound: Option<OutboundFares>,
}

#[derive(Debug, Deserialize)]
struct OutboundFares {
    #[serde(default)]
    fares: Vec<RawFare>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFare {
    day: Option<String>,
    #[serde(default)]
    unavailable: bool,
    price: Option<RawPrice>,
    departure_date: Option<String>,
    arrival_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
    value: Option<f64>,
}

/// Keep only days the source actually priced: skip entries flagged
/// unavailable and any record missing a day string or a numeric price value.
fn collect_fares(payload: CheapestPerDayResponse) -> MonthMap {
    let fares = payload.outbound.map(|o| o.fares).unwrap_or_default();
    let mut map = MonthMap::new();
    for fare in fares {
        if fare.unavailable {
            continue;
        }
        let (Some(day), Some(value)) = (fare.day, fare.price.and_then(|p| p.value)) else {
            continue;
        };
        map.insert(
            day.clone(),
            DayQuote {
                day,
                price: value,
                dep_iso: fare.departure_date,
                arr_iso: fare.arrival_date,
            },
        );
    }
    map
}

#[async_trait]
impl MonthFareSource for RyanairSource {
    fn signature(&self) -> &'static str {
        "Ryanair farfnd API"
    }

    async fn cheapest_per_day(
        &self,
        origin: &str,
        dest: &str,
        year: i32,
        month: u32,
        currency: &str,
    ) -> MonthMap {
        let url = Self::endpoint(origin, dest);
        let month_start = format!("{year:04}-{month:02}-01");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("outboundMonthOfDate", month_start.as_str()),
                ("currency", currency),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{origin}→{dest} {month_start}: request failed: {e}");
                return MonthMap::new();
            }
        };
        if !response.status().is_success() {
            log::warn!("{origin}→{dest} {month_start}: HTTP {}", response.status());
            return MonthMap::new();
        }

        match response.json::<CheapestPerDayResponse>().await {
            Ok(payload) => collect_fares(payload),
            Err(e) => {
                log::warn!("{origin}→{dest} {month_start}: unparseable payload: {e}");
                MonthMap::new()
            }
        }
    }
}
