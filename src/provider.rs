// Usage data provider: the fixed payload behind GET /api/usageData.
// Loaded once at startup, from a JSON file when configured, otherwise the built-in sample.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::instrument;

use crate::error::DataError;
use crate::models::{AssetDurations, UsageDocument};

/// Built-in sample payload (August 2022 daily points).
pub const SAMPLE_USAGE_JSON: &str = include_str!("../data/usage_data.json");

/// Where the payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageSource {
    Builtin,
    File(PathBuf),
}

impl UsageSource {
    /// `None` or empty path means the built-in sample.
    pub fn from_config(data_file: Option<&str>) -> Self {
        match data_file {
            Some(p) if !p.trim().is_empty() => UsageSource::File(PathBuf::from(p)),
            _ => UsageSource::Builtin,
        }
    }
}

/// Holds the fetched document; every request is served from this immutable copy.
/// `payload` is the JSON exactly as loaded, so GET /api/usageData returns it unchanged.
#[derive(Debug, Clone)]
pub struct UsageProvider {
    payload: Arc<serde_json::Value>,
    document: Arc<UsageDocument>,
    asset_durations: Arc<AssetDurations>,
}

impl UsageProvider {
    /// Provider over an in-memory document; the served payload is its serialized form.
    pub fn new(document: UsageDocument) -> Self {
        let payload = serde_json::to_value(&document).unwrap_or_default();
        Self::from_parts(payload, document)
    }

    fn from_parts(payload: serde_json::Value, document: UsageDocument) -> Self {
        let asset_durations = AssetDurations::from_document(&document);
        Self {
            payload: Arc::new(payload),
            document: Arc::new(document),
            asset_durations: Arc::new(asset_durations),
        }
    }

    /// Parses `json` once, keeping both the raw payload and the typed document.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let payload: serde_json::Value = serde_json::from_str(json)?;
        let document = UsageDocument::deserialize(&payload)?;
        Ok(Self::from_parts(payload, document))
    }

    /// Provider over the built-in sample payload.
    pub fn sample() -> Result<Self, DataError> {
        Self::from_json(SAMPLE_USAGE_JSON)
    }

    #[instrument(fields(provider = "usage", operation = "load"))]
    pub fn load(source: &UsageSource) -> Result<Self, DataError> {
        let provider = match source {
            UsageSource::Builtin => Self::sample()?,
            UsageSource::File(path) => Self::from_json(&read_payload(path)?)?,
        };
        let doc = provider.document();
        tracing::info!(
            bandwidth_points = doc.bandwidth_consumption.len(),
            duration_points = doc.asset_duration.len(),
            storage_points = doc.storage_unit.len(),
            top_assets = doc.top_assets.as_ref().map(Vec::len),
            "usage data loaded"
        );
        if doc.top_assets.is_none() {
            tracing::warn!(
                operation = "load",
                "usage data has no top_assets; dashboard will stay in loading state"
            );
        }
        Ok(provider)
    }

    pub fn document(&self) -> &UsageDocument {
        &self.document
    }

    /// The payload as loaded, for serving verbatim.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    pub fn asset_durations(&self) -> Arc<AssetDurations> {
        self.asset_durations.clone()
    }
}

pub fn parse_document(json: &str) -> Result<UsageDocument, DataError> {
    Ok(serde_json::from_str(json)?)
}

fn read_payload(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })
}
