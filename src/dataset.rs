use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Pathway, Stop};

/// Stops and pathways for one station, stored as a JSON document:
///
/// ```json
/// {
///   "stops": [
///     { "stop_id": "floor_1", "stop_name": "Floor 1", "stop_lat": 40.735657, "stop_lon": -74.172366 }
///   ],
///   "pathways": [
///     { "pathway_id": "elevator_1", "from_stop_id": "floor_1", "to_stop_id": "floor_2",
///       "pathway_mode": 4, "is_bidirectional": 1, "length": 10 }
///   ]
/// }
/// ```
///
/// Optional pathway columns may be left out or set to `null`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub stops: Vec<Stop>,
    pub pathways: Vec<Pathway>,
}

impl Dataset {
    /// Loads a dataset from a JSON file at `path`.
    #[tracing::instrument]
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        let dataset: Dataset =
            serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path))?;
        debug!(
            stops = dataset.stops.len(),
            pathways = dataset.pathways.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Writes the dataset to `path` as pretty-printed JSON.
    #[tracing::instrument(skip(self))]
    pub fn save(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path))?;
        Ok(())
    }
}
