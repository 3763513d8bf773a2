//! CSV export of the stop and pathway tables.
//!
//! Writes `stops.txt` and `pathways.txt` in the GTFS text layout. Each export
//! rewrites both files from the full table contents.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::tables::{PathwayTable, StopTable};

pub const STOPS_FILE: &str = "stops.txt";
pub const PATHWAYS_FILE: &str = "pathways.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "gtfs_output";

pub const STOP_HEADERS: [&str; 4] = ["stop_id", "stop_name", "stop_lat", "stop_lon"];

pub const PATHWAY_HEADERS: [&str; 12] = [
    "pathway_id",
    "from_stop_id",
    "to_stop_id",
    "pathway_mode",
    "is_bidirectional",
    "length",
    "stair_count",
    "max_slope",
    "min_width",
    "signposted_as",
    "reversed_signposted_as",
    "description",
];

/// What a single export wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub directory: PathBuf,
    pub stops_path: PathBuf,
    pub pathways_path: PathBuf,
    pub stop_count: usize,
    pub pathway_count: usize,
}

/// Writes both tables into `directory`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written. A failure part way through can leave a truncated file behind.
#[tracing::instrument(skip_all, fields(directory = %directory.display()))]
pub fn export_tables(
    directory: &Path,
    stops: &StopTable,
    pathways: &PathwayTable,
) -> Result<ExportSummary> {
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create output directory {}", directory.display()))?;

    let stops_path = directory.join(STOPS_FILE);
    let pathways_path = directory.join(PATHWAYS_FILE);

    write_table(&stops_path, &STOP_HEADERS, stops.rows())?;
    write_table(&pathways_path, &PATHWAY_HEADERS, pathways.rows())?;

    let summary = ExportSummary {
        directory: directory.to_path_buf(),
        stops_path,
        pathways_path,
        stop_count: stops.len(),
        pathway_count: pathways.len(),
    };

    info!(
        directory = %summary.directory.display(),
        stops = summary.stop_count,
        pathways = summary.pathway_count,
        "Files saved"
    );

    Ok(summary)
}

/// Truncates `path` and writes a header row followed by one row per record.
///
/// The header is written explicitly so an empty table still gets one.
pub fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV table");

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    writer
        .write_record(headers)
        .with_context(|| format!("failed to write header to {}", path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pathway, Stop};
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("gtfs_pathways_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir); // clean up any prior run
        dir
    }

    #[test]
    fn test_export_creates_nested_directory() {
        let base = temp_dir("nested");
        let dir = base.join("a").join("b");

        let summary = export_tables(&dir, &StopTable::new(), &PathwayTable::new()).unwrap();

        assert!(summary.stops_path.exists());
        assert!(summary.pathways_path.exists());
        assert_eq!(summary.stop_count, 0);

        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_empty_tables_still_have_headers() {
        let dir = temp_dir("empty");

        export_tables(&dir, &StopTable::new(), &PathwayTable::new()).unwrap();

        let stops = fs::read_to_string(dir.join(STOPS_FILE)).unwrap();
        let pathways = fs::read_to_string(dir.join(PATHWAYS_FILE)).unwrap();
        assert_eq!(stops, "stop_id,stop_name,stop_lat,stop_lon\n");
        assert_eq!(
            pathways,
            "pathway_id,from_stop_id,to_stop_id,pathway_mode,is_bidirectional,length,\
             stair_count,max_slope,min_width,signposted_as,reversed_signposted_as,description\n"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_table_quotes_commas() {
        let dir = temp_dir("quotes");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(STOPS_FILE);

        let rows = vec![Stop::new("s1", "Main St, North", 1.5, -2.25)];
        write_table(&path, &STOP_HEADERS, &rows).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[1], "s1,\"Main St, North\",1.5,-2.25");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_table_truncates_previous_contents() {
        let dir = temp_dir("truncate");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(PATHWAYS_FILE);

        let two = vec![
            Pathway::new("p1", "A", "B", 1, 1),
            Pathway::new("p2", "B", "C", 1, 1),
        ];
        write_table(&path, &PATHWAY_HEADERS, &two).unwrap();
        write_table(&path, &PATHWAY_HEADERS, &two[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_fails_when_parent_is_a_file() {
        let dir = temp_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let result = export_tables(&blocker.join("out"), &StopTable::new(), &PathwayTable::new());

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to create output directory"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
