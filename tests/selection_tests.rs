use railmap::{
    catalog::{Catalog, LineRecord, StationRecord},
    proximity::{BandSet, classify},
    selection::{Error, Provenance, Selection, SelectionState},
    shared::geo::GeoPoint,
};

fn station(name: &str, lines: &[&str]) -> StationRecord {
    StationRecord {
        id: name.to_lowercase().replace(' ', "-").into(),
        normalized_name: name.to_lowercase().into(),
        name: name.into(),
        location: Some(GeoPoint::new(80.2, 13.0)),
        lines: lines.iter().map(|line| (*line).into()).collect(),
        ..Default::default()
    }
}

fn line(name: &str) -> LineRecord {
    LineRecord {
        id: name.to_lowercase().replace(' ', "-").into(),
        normalized_name: name.to_lowercase().into(),
        name: name.into(),
        color: "#3280c3".into(),
        ..Default::default()
    }
}

fn sample_catalog() -> Catalog {
    Catalog::new().with_records(
        vec![
            station("Alandur", &["Blue Line", "Green Line"]),
            station("Guindy", &["Blue Line"]),
            station("Nandanam", &["Green Line"]),
        ],
        vec![line("Blue Line"), line("Green Line")],
    )
}

#[test]
fn select_station_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    let selection = state.select_station(&catalog, "Alandur").unwrap();
    let expected = catalog.station_by_name("Alandur").unwrap().clone();
    assert_eq!(
        *selection,
        Selection::Station {
            station: expected,
            from: None,
        }
    );
}

#[test]
fn select_unknown_station_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    let result = state.select_station(&catalog, "Atlantis");
    assert!(matches!(result, Err(Error::UnknownStation)));
    // A failed call must not disturb the current selection.
    assert!(state.current().is_idle());
}

#[test]
fn select_unknown_line_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    let result = state.select_line(&catalog, "Ghost Line");
    assert!(matches!(result, Err(Error::UnknownLine)));
    assert!(state.current().is_idle());
}

#[test]
fn station_to_line_and_back_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Alandur").unwrap();
    let selection = state.select_line_from_station(&catalog, "Blue Line").unwrap();

    let alandur = catalog.station_by_name("Alandur").unwrap().clone();
    assert_eq!(
        *selection,
        Selection::Line {
            name: "Blue Line".into(),
            from: Some(Provenance::Station(alandur.clone())),
        }
    );

    // Back restores the station with the provenance consumed.
    let restored = state.go_back().unwrap();
    assert_eq!(
        *restored,
        Selection::Station {
            station: alandur,
            from: None,
        }
    );
    assert!(matches!(state.go_back(), Err(Error::NoProvenance)));
}

#[test]
fn line_to_station_and_back_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    state.select_line(&catalog, "Green Line").unwrap();
    let selection = state
        .select_station_from_line(&catalog, "Nandanam")
        .unwrap();
    assert_eq!(
        selection.provenance(),
        Some(&Provenance::Line("Green Line".into()))
    );

    let restored = state.go_back().unwrap();
    assert_eq!(
        *restored,
        Selection::Line {
            name: "Green Line".into(),
            from: None,
        }
    );
}

#[test]
fn provenance_is_single_level_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    // Station -> line -> station again: the original station provenance
    // is dropped, back only ever returns one hop.
    state.select_station(&catalog, "Alandur").unwrap();
    state.select_line_from_station(&catalog, "Blue Line").unwrap();
    state.select_station_from_line(&catalog, "Guindy").unwrap();

    let restored = state.go_back().unwrap();
    assert_eq!(
        *restored,
        Selection::Line {
            name: "Blue Line".into(),
            from: None,
        }
    );
    assert!(matches!(state.go_back(), Err(Error::NoProvenance)));
}

#[test]
fn plain_selection_carries_no_provenance_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Alandur").unwrap();
    state.select_station(&catalog, "Guindy").unwrap();
    assert_eq!(state.current().provenance(), None);
    assert!(matches!(state.go_back(), Err(Error::NoProvenance)));
}

#[test]
fn forced_transition_requires_focus_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    let result = state.select_line_from_station(&catalog, "Blue Line");
    assert!(matches!(result, Err(Error::NoStationFocus)));

    let result = state.select_station_from_line(&catalog, "Guindy");
    assert!(matches!(result, Err(Error::NoLineFocus)));
}

#[test]
fn close_clears_everything_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Alandur").unwrap();
    state.select_line_from_station(&catalog, "Blue Line").unwrap();
    state.close();

    assert!(state.current().is_idle());
    // No back after a close.
    assert!(matches!(state.go_back(), Err(Error::NoProvenance)));
}

#[test]
fn show_nearest_replaces_selection_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Alandur").unwrap();
    let origin = GeoPoint::new(80.2, 13.0);
    let results = classify(&origin, catalog.stations(), &BandSet::default()).unwrap();
    let selection = state.show_nearest(results.clone());

    assert_eq!(*selection, Selection::NearestStations { results });
    assert!(matches!(state.go_back(), Err(Error::NoProvenance)));
}

#[test]
fn one_selection_at_a_time_test() {
    let catalog = sample_catalog();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Alandur").unwrap();
    assert!(matches!(state.current(), Selection::Station { .. }));
    state.select_line(&catalog, "Blue Line").unwrap();
    assert!(matches!(state.current(), Selection::Line { .. }));
    state.close();
    assert!(matches!(state.current(), Selection::Idle));
}
