//! Append-only, insertion-ordered tables of stops and pathways.

use tracing::debug;

use crate::model::{Pathway, Stop};

/// Ordered `stops.txt` rows. Duplicate ids are kept as separate rows.
#[derive(Debug, Default, Clone)]
pub struct StopTable {
    rows: Vec<Stop>,
}

impl StopTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, stop: Stop) {
        debug!(stop_id = %stop.stop_id, row = self.rows.len(), "Stop added");
        self.rows.push(stop);
    }

    pub fn rows(&self) -> &[Stop] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered `pathways.txt` rows. Endpoints are not checked against any stops.
#[derive(Debug, Default, Clone)]
pub struct PathwayTable {
    rows: Vec<Pathway>,
}

impl PathwayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pathway(&mut self, pathway: Pathway) {
        debug!(
            pathway_id = %pathway.pathway_id,
            from_stop_id = %pathway.from_stop_id,
            to_stop_id = %pathway.to_stop_id,
            pathway_mode = pathway.pathway_mode,
            row = self.rows.len(),
            "Pathway added"
        );
        self.rows.push(pathway);
    }

    pub fn rows(&self) -> &[Pathway] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
