//! Example data for a single station layout.
//!
//! This is fixture data, not generation logic: each function returns a
//! literal list of rows.

use crate::dataset::Dataset;
use crate::model::{Pathway, Stop};

/// The standard pathways: an elevator between floors, a one-way escalator,
/// and a wheelchair-accessible ramp.
pub fn standard_pathways() -> Vec<Pathway> {
    vec![
        Pathway::new("elevator_1", "floor_1", "floor_2", 4, 1)
            .with_length(10)
            .with_description(
                "Elevator connecting Floor 1 to Floor 2, accessible for mobility assistance.",
            ),
        Pathway::new("escalator_3_4_to_5", "tracks_3_4", "track_5", 3, 0)
            .with_length(15)
            .with_signposted_as("To Track 5")
            .with_description("Escalator providing one-way access from Tracks 3/4 up to Track 5."),
        Pathway::new("ramp_concourse_to_track1", "concourse", "track_1", 7, 1)
            .with_length(30)
            .with_max_slope("5%")
            .with_min_width(2)
            .with_signposted_as("To Track 1")
            .with_reversed_signposted_as("To Concourse")
            .with_description(
                "Ramp connecting concourse to Track 1, accessible for wheelchairs with a 5% slope.",
            ),
    ]
}

/// Stops placed on the example floor plan.
pub fn example_stops() -> Vec<Stop> {
    vec![
        Stop::new("floor_1", "Floor 1", 40.735657, -74.172366),
        Stop::new("floor_2", "Floor 2", 40.735757, -74.172266),
        Stop::new("track_1", "Track 1", 40.735557, -74.172166),
        Stop::new("track_5", "Track 5", 40.735157, -74.171766),
        Stop::new("concourse", "Concourse", 40.735957, -74.172666),
    ]
}

pub fn main_entrance_gate() -> Pathway {
    Pathway::new("ticket_gate_main", "main_entrance", "concourse", 5, 0)
        .with_length(5)
        .with_signposted_as("Entry Gate")
        .with_description("Fare gate at the main entrance.")
}

/// The whole example station: stops, then standard pathways, then the
/// main entrance gate.
pub fn example_station() -> Dataset {
    let mut pathways = standard_pathways();
    pathways.push(main_entrance_gate());

    Dataset {
        stops: example_stops(),
        pathways,
    }
}
