//! Hosted database repository over its PostgREST interface

use super::row::{NationRow, TaleRow};
use crate::config::HostedConfig;
use crate::contract::{Tale, TaleQuery};
use crate::domain::filter::distinct_nations;
use crate::domain::repository::{ReachabilityProbe, TaleRepository};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;

/// Read-only access to the hosted `tales` table
#[derive(Clone)]
pub struct HostedTaleRepository {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HostedTaleRepository {
    pub fn new(config: &HostedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: table_endpoint(&config.url, &config.table),
            api_key: config.api_key.clone(),
        })
    }

    async fn select<T>(&self, params: &[(&str, String)], what: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .query(params);
        if !self.api_key.is_empty() {
            request = request
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key);
        }

        request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {what}"))?
            .error_for_status()
            .with_context(|| format!("Hosted database rejected {what} query"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse {what} response"))
    }
}

/// `{url}/rest/v1/{table}`
pub fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Escape LIKE metacharacters so the user's text matches literally
pub fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Query parameters for a filtered select
pub fn find_params(query: &TaleQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("select", "*".to_string()),
        ("order", "id.asc".to_string()),
        ("limit", query.limit.to_string()),
    ];
    if let Some(search) = &query.search {
        params.push(("title", format!("ilike.%{}%", escape_like(search))));
    }
    if let Some(nation) = &query.nation {
        params.push(("nation", format!("eq.{}", nation)));
    }
    params
}

#[async_trait]
impl TaleRepository for HostedTaleRepository {
    async fn find(&self, query: &TaleQuery) -> Result<Vec<Tale>> {
        let rows: Vec<TaleRow> = self.select(&find_params(query), "tales").await?;
        tracing::debug!(rows = rows.len(), limit = query.limit, "Hosted tale query");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tale>> {
        let params = [
            ("select", "*".to_string()),
            ("id", format!("eq.{id}")),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<TaleRow> = self.select(&params, "tale").await?;
        Ok(rows.into_iter().next().map(Into::into))
    }

    async fn list_nations(&self) -> Result<Vec<String>> {
        let params = [("select", "nation".to_string())];
        let rows: Vec<NationRow> = self.select(&params, "nations").await?;
        Ok(distinct_nations(rows.into_iter().filter_map(|r| r.nation)))
    }
}

#[async_trait]
impl ReachabilityProbe for HostedTaleRepository {
    async fn ping(&self) -> Result<()> {
        let params = [("select", "id".to_string()), ("limit", "1".to_string())];
        let _: Vec<serde_json::Value> = self.select(&params, "reachability").await?;
        Ok(())
    }
}
