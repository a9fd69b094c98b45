//! Time-entry request construction and dispatch
//!
//! The Harvest v2 endpoint takes everything via query parameters and
//! headers; the POST body stays empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::consts::{DATE_FORMAT, TIME_ENTRIES_URL};
use crate::entry::TaskEntry;
use crate::error::AppError;

/// A fully-assembled submission, ready to send or preview.
#[derive(Debug)]
pub(crate) struct TimeEntryRequest {
    url: Url,
    headers: Vec<(&'static str, String)>,
}

/// What `--dry-run` prints: the exact request that would have been sent.
#[derive(Debug, Serialize)]
pub(crate) struct RequestPreview {
    method: &'static str,
    url: String,
    headers: BTreeMap<&'static str, String>,
}

pub(crate) fn build(
    cfg: &Config,
    task: &TaskEntry,
    spent_date: NaiveDate,
) -> Result<TimeEntryRequest, AppError> {
    build_at(TIME_ENTRIES_URL, cfg, task, spent_date)
}

fn build_at(
    endpoint: &str,
    cfg: &Config,
    task: &TaskEntry,
    spent_date: NaiveDate,
) -> Result<TimeEntryRequest, AppError> {
    let label = task.label();

    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("project_id", &cfg.project_id)
        .append_pair("task_id", &cfg.task_id)
        .append_pair("user_id", &cfg.user_id)
        .append_pair("spent_date", &spent_date.format(DATE_FORMAT).to_string())
        .append_pair("notes", &task.notes())
        .append_pair("external_reference[group_id]", &task.project)
        .append_pair("external_reference[id]", &label)
        .append_pair(
            "external_reference[permalink]",
            &task.permalink(&cfg.permalink_prefix),
        );

    let headers = vec![
        ("Harvest-Account-Id", cfg.account_id.clone()),
        ("Authorization", format!("Bearer {}", cfg.token)),
        ("Content-Type", "application/json".to_string()),
        ("Accept", "application/json".to_string()),
    ];

    Ok(TimeEntryRequest { url, headers })
}

impl TimeEntryRequest {
    pub(crate) fn preview(&self) -> RequestPreview {
        RequestPreview {
            method: "POST",
            url: self.url.to_string(),
            headers: self
                .headers
                .iter()
                .map(|(name, value)| (*name, value.clone()))
                .collect(),
        }
    }

    /// Send synchronously and drain the body. Non-2xx statuses are not
    /// errors at this layer; whatever the API answers comes back verbatim.
    pub(crate) fn send(&self) -> Result<String, AppError> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        let mut request = agent.post(self.url.as_str());
        for (name, value) in &self.headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send_empty().map_err(AppError::Transport)?;
        let mut body = response.into_body();
        body.read_to_string().map_err(AppError::ResponseBody)
    }
}
