//! [`TimetableSource`] adapter for the personalisation calendar endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use reqwest::Method;
use tracing::{debug, instrument, warn};
use uoacal_common::time::format_week_start;
use uoacal_core::TimetableSource;
use uoacal_domain::{HttpConfig, Result, TimetableConfig, TimetableEntry, UoaCalError};

use super::schema::WeekResponse;
use crate::http::HttpClient;

/// Fetches one timetable week per call.
#[derive(Clone)]
pub struct TimetableClient {
    config: TimetableConfig,
    http: HttpClient,
}

impl TimetableClient {
    pub fn new(config: TimetableConfig, http: &HttpConfig) -> Result<Self> {
        Ok(Self { config, http: HttpClient::from_config(http, true)? })
    }

    /// Build from an already configured client (tests share one).
    pub fn with_client(config: TimetableConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

#[async_trait]
impl TimetableSource for TimetableClient {
    #[instrument(skip(self, access_token))]
    async fn fetch_week(
        &self,
        access_token: &str,
        week_start: NaiveDate,
    ) -> Result<Vec<TimetableEntry>> {
        let start_date = format_week_start(week_start);
        let request = self
            .http
            .request(Method::GET, &self.config.calendar_url)
            .query(&[("start_date", start_date.as_str())])
            .header(ACCEPT, "application/json")
            .bearer_auth(access_token);

        let response = self.http.send(request).await.map_err(|err| {
            warn!(%start_date, error = %err, "timetable request failed");
            UoaCalError::Fetch(format!("week {start_date}: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%start_date, %status, "timetable endpoint answered non-success");
            return Err(UoaCalError::Fetch(format!("week {start_date} answered {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| UoaCalError::Fetch(format!("week {start_date} unreadable: {err}")))?;
        let week: WeekResponse = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(%start_date, error = %err, "timetable week has unexpected shape");
            UoaCalError::Fetch(format!("week {start_date} has unexpected shape: {err}"))
        })?;

        let entries = week.into_entries();
        debug!(%start_date, count = entries.len(), "timetable week fetched");
        Ok(entries)
    }
}
