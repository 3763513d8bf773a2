//! Row types for the GTFS `stops.txt` and `pathways.txt` tables.
//!
//! Field names match the GTFS column names, so the same structs serialize
//! to CSV rows and to dataset JSON. Nothing here is validated: values are
//! stored and written exactly as the caller supplied them.

use serde::{Deserialize, Serialize};

/// A numeric pathway measurement that keeps the form it was given in.
///
/// `2` exports as `2` and `2.5` as `2.5`, so an integer width or length is
/// never rewritten as `2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A row of `stops.txt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

impl Stop {
    pub fn new(
        stop_id: impl Into<String>,
        stop_name: impl Into<String>,
        stop_lat: f64,
        stop_lon: f64,
    ) -> Self {
        Stop {
            stop_id: stop_id.into(),
            stop_name: stop_name.into(),
            stop_lat,
            stop_lon,
        }
    }
}

/// A row of `pathways.txt`.
///
/// `from_stop_id` and `to_stop_id` are plain strings; they are not checked
/// against any stop table. `pathway_mode` and `is_bidirectional` are the raw
/// GTFS codes (e.g. 4 for an elevator, 0/1 for direction) and are passed
/// through as-is.
///
/// Every optional column is `None` until set, which exports as an empty
/// field. `Some` values are exported even when they look empty (`0`, `""`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pathway {
    pub pathway_id: String,
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub pathway_mode: i32,
    pub is_bidirectional: i32,
    pub length: Option<Number>,
    pub stair_count: Option<i32>,
    pub max_slope: Option<String>,
    pub min_width: Option<Number>,
    pub signposted_as: Option<String>,
    pub reversed_signposted_as: Option<String>,
    pub description: Option<String>,
}

impl Pathway {
    /// Creates a pathway with only the mandatory columns set.
    pub fn new(
        pathway_id: impl Into<String>,
        from_stop_id: impl Into<String>,
        to_stop_id: impl Into<String>,
        pathway_mode: i32,
        is_bidirectional: i32,
    ) -> Self {
        Pathway {
            pathway_id: pathway_id.into(),
            from_stop_id: from_stop_id.into(),
            to_stop_id: to_stop_id.into(),
            pathway_mode,
            is_bidirectional,
            length: None,
            stair_count: None,
            max_slope: None,
            min_width: None,
            signposted_as: None,
            reversed_signposted_as: None,
            description: None,
        }
    }

    /// Horizontal length in meters.
    pub fn with_length(mut self, length: impl Into<Number>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn with_stair_count(mut self, stair_count: i32) -> Self {
        self.stair_count = Some(stair_count);
        self
    }

    /// Maximum slope, kept as text so values like `5%` survive untouched.
    pub fn with_max_slope(mut self, max_slope: impl Into<String>) -> Self {
        self.max_slope = Some(max_slope.into());
        self
    }

    /// Minimum width in meters.
    pub fn with_min_width(mut self, min_width: impl Into<Number>) -> Self {
        self.min_width = Some(min_width.into());
        self
    }

    pub fn with_signposted_as(mut self, signposted_as: impl Into<String>) -> Self {
        self.signposted_as = Some(signposted_as.into());
        self
    }

    pub fn with_reversed_signposted_as(mut self, reversed: impl Into<String>) -> Self {
        self.reversed_signposted_as = Some(reversed.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
