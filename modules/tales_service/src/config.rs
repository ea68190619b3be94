//! Configuration for the tales service module

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Tales service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hosted database connection
    #[serde(default)]
    pub hosted: HostedConfig,

    /// Offline snapshot file, also served at `/data/offlineTales.json`
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Page size of the home view
    #[serde(default = "default_home_page_size")]
    pub home_page_size: usize,

    /// Page size of the explore view
    #[serde(default = "default_explore_page_size")]
    pub explore_page_size: usize,

    /// Upper bound for any requested row limit
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Rows written by `export-snapshot` when no count is given
    #[serde(default = "default_export_count")]
    pub export_count: usize,

    /// Start pinned offline (serve the snapshot only)
    #[serde(default)]
    pub start_offline: bool,

    /// Reachability probe of the hosted database
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Contact form relay
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Hosted database (PostgREST) settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostedConfig {
    /// Project base URL, e.g. `https://<project>.supabase.co`
    #[serde(default = "default_hosted_url", deserialize_with = "scalar_string")]
    pub url: String,

    /// Anonymous API key sent as `apikey` and bearer token
    #[serde(default, deserialize_with = "scalar_string")]
    pub api_key: String,

    /// Table holding the tales
    #[serde(default = "default_table", deserialize_with = "scalar_string")]
    pub table: String,

    /// Per-request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

/// Connectivity probe settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_probe_interval", with = "humantime_serde")]
    pub interval: Duration,
}

/// Contact relay settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Form relay endpoint; submissions are only logged when unset
    #[serde(default, deserialize_with = "scalar_string_opt")]
    pub relay_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosted: HostedConfig::default(),
            snapshot_path: default_snapshot_path(),
            home_page_size: default_home_page_size(),
            explore_page_size: default_explore_page_size(),
            max_limit: default_max_limit(),
            export_count: default_export_count(),
            start_offline: false,
            probe: ProbeConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            url: default_hosted_url(),
            api_key: String::new(),
            table: default_table(),
            timeout: default_timeout(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: default_probe_interval(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data/offlineTales.json")
}

fn default_home_page_size() -> usize {
    6
}

fn default_explore_page_size() -> usize {
    12
}

fn default_max_limit() -> usize {
    500
}

fn default_export_count() -> usize {
    6
}

fn default_hosted_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_table() -> String {
    "tales".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_probe_interval() -> Duration {
    Duration::from_secs(30)
}

fn default_true() -> bool {
    true
}

/// Text setting that also accepts a bare number or boolean
///
/// Environment values are typed by their look, so an API key such as
/// `12345` arrives as an integer.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(ScalarStringVisitor)?
        .ok_or_else(|| de::Error::invalid_type(de::Unexpected::Unit, &"a string"))
}

/// Optional form of [`scalar_string`]; `null` reads as unset
pub fn scalar_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(ScalarStringVisitor)
}

struct ScalarStringVisitor;

impl<'de> Visitor<'de> for ScalarStringVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}
