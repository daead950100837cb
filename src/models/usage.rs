// Usage payload models (GET /api/usageData wire format, snake_case)

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One observation of a usage series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub units: f64,
    /// Unix seconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopAsset {
    pub collection_id: String,
    pub asset_id: String,
    pub units: f64,
    pub collection_name: String,
}

/// Full usage payload. Series are chronological.
/// A missing or malformed `top_assets` parses as `None`; the dashboard then stays in its loading state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageDocument {
    #[serde(default)]
    pub bandwidth_consumption: Vec<TimeSeriesPoint>,
    #[serde(
        default,
        deserialize_with = "lenient_top_assets",
        skip_serializing_if = "Option::is_none"
    )]
    pub top_assets: Option<Vec<TopAsset>>,
    #[serde(default)]
    pub asset_duration: Vec<TimeSeriesPoint>,
    #[serde(default)]
    pub storage_unit: Vec<TimeSeriesPoint>,
}

fn lenient_top_assets<'de, D>(deserializer: D) -> Result<Option<Vec<TopAsset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => match Vec::<TopAsset>::deserialize(value) {
            Ok(assets) => Ok(Some(assets)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "parse_top_assets",
                    "malformed top_assets ignored"
                );
                Ok(None)
            }
        },
    }
}

/// Explicit asset_id -> duration (seconds) relation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetDurations(HashMap<String, f64>);

impl AssetDurations {
    /// Pairs `top_assets[i]` with `asset_duration[i]`. Assets past the end of the duration series get no entry.
    pub fn from_document(doc: &UsageDocument) -> Self {
        let map = doc
            .top_assets
            .iter()
            .flatten()
            .zip(doc.asset_duration.iter())
            .map(|(asset, point)| (asset.asset_id.clone(), point.units))
            .collect();
        Self(map)
    }

    pub fn get(&self, asset_id: &str) -> Option<f64> {
        self.0.get(asset_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
