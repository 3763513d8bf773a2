//! Builds the stop and pathway tables for one station and exports them.

use anyhow::Result;
use std::path::Path;

use crate::dataset::Dataset;
use crate::model::{Pathway, Stop};
use crate::output::{ExportSummary, export_tables};
use crate::sample;
use crate::tables::{PathwayTable, StopTable};

/// Accumulates stops and pathways until they are exported.
///
/// Rows are never validated, reordered or deduplicated. Exporting does not
/// consume the generator, so rows can be added and exported again.
#[derive(Debug, Default)]
pub struct Generator {
    stops: StopTable,
    pathways: PathwayTable,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(
        &mut self,
        stop_id: impl Into<String>,
        stop_name: impl Into<String>,
        stop_lat: f64,
        stop_lon: f64,
    ) {
        self.stops
            .add_stop(Stop::new(stop_id, stop_name, stop_lat, stop_lon));
    }

    /// Adds a pathway. Optional columns are set on the [`Pathway`] beforehand
    /// through its `with_*` builders.
    pub fn add_pathway(&mut self, pathway: Pathway) {
        self.pathways.add_pathway(pathway);
    }

    /// Adds the example elevator, escalator and ramp from [`sample::standard_pathways`].
    pub fn add_standard_pathways(&mut self) {
        for pathway in sample::standard_pathways() {
            self.add_pathway(pathway);
        }
    }

    /// Appends every stop of `dataset`, then every pathway, in order.
    pub fn load_dataset(&mut self, dataset: &Dataset) {
        for stop in &dataset.stops {
            self.stops.add_stop(stop.clone());
        }
        for pathway in &dataset.pathways {
            self.add_pathway(pathway.clone());
        }
    }

    pub fn stops(&self) -> &[Stop] {
        self.stops.rows()
    }

    pub fn pathways(&self) -> &[Pathway] {
        self.pathways.rows()
    }

    /// Writes `stops.txt` and `pathways.txt` into `directory`.
    pub fn export(&self, directory: impl AsRef<Path>) -> Result<ExportSummary> {
        export_tables(directory.as_ref(), &self.stops, &self.pathways)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_standard_pathways_appends_after_existing() {
        let mut generator = Generator::new();
        generator.add_pathway(Pathway::new("first", "A", "B", 1, 1));
        generator.add_standard_pathways();

        let ids: Vec<_> = generator
            .pathways()
            .iter()
            .map(|p| p.pathway_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "first",
                "elevator_1",
                "escalator_3_4_to_5",
                "ramp_concourse_to_track1"
            ]
        );
        assert!(generator.stops().is_empty());
    }

    #[test]
    fn test_add_standard_pathways_twice_duplicates_rows() {
        let mut generator = Generator::new();
        generator.add_standard_pathways();
        generator.add_standard_pathways();

        assert_eq!(generator.pathways().len(), 6);
    }

    #[test]
    fn test_load_dataset_keeps_order() {
        let mut generator = Generator::new();
        generator.add_stop("X", "Existing", 0.0, 0.0);
        generator.load_dataset(&sample::example_station());

        assert_eq!(generator.stops().len(), 6);
        assert_eq!(generator.stops()[0].stop_id, "X");
        assert_eq!(generator.stops()[1].stop_id, "floor_1");
        assert_eq!(generator.pathways().len(), 4);
    }

    #[test]
    fn test_add_stop_stores_arguments() {
        let mut generator = Generator::new();
        generator.add_stop("A", "Stop A", 1.0, 2.0);

        assert_eq!(generator.stops(), &[Stop::new("A", "Stop A", 1.0, 2.0)]);
    }
}
