use chrono::Utc;
use railmap::{
    catalog::{Catalog, LineRecord, StationRecord},
    proximity::{self, BandSet},
    selection::{GeolocateError, PositionFix, Selection, SelectionState, locate},
    shared::geo::GeoPoint,
};

const ORIGIN: GeoPoint = GeoPoint::new(80.237617, 13.067439);

fn sample_catalog() -> Catalog {
    let station = |name: &str, latitude: f64| StationRecord {
        id: name.to_lowercase().into(),
        normalized_name: name.to_lowercase().into(),
        name: name.into(),
        location: Some(GeoPoint::new(80.237617, latitude)),
        lines: ["Blue Line".into()].into(),
        ..Default::default()
    };
    Catalog::new().with_records(
        vec![
            // Roughly 300 m and 800 m north of the origin.
            station("Little Mount", 13.070136964817866),
            station("Saidapet", 13.074633572847645),
        ],
        vec![LineRecord {
            id: "blue-line".into(),
            normalized_name: "blue line".into(),
            name: "Blue Line".into(),
            color: "#3280c3".into(),
            ..Default::default()
        }],
    )
}

fn fix_at(location: GeoPoint) -> PositionFix {
    PositionFix {
        location,
        time: Utc::now(),
    }
}

#[test]
fn locate_success_test() {
    let catalog = sample_catalog();
    let bands = BandSet::default();
    let mut state = SelectionState::new();

    let token = state.begin_locate();
    let selection = state
        .complete_locate(&catalog, &bands, token, Ok(fix_at(ORIGIN)))
        .unwrap()
        .expect("token is still current");

    let Selection::NearestStations { results } = selection else {
        panic!("expected nearest stations, got {selection:?}");
    };
    assert_eq!(results.total(), 2);
}

#[test]
fn stale_after_selection_change_test() {
    let catalog = sample_catalog();
    let bands = BandSet::default();
    let mut state = SelectionState::new();

    let token = state.begin_locate();
    // The user clicks a station while the provider is still working.
    state.select_station(&catalog, "Saidapet").unwrap();

    let outcome = state
        .complete_locate(&catalog, &bands, token, Ok(fix_at(ORIGIN)))
        .unwrap();
    assert!(outcome.is_none());
    assert!(matches!(state.current(), Selection::Station { .. }));
}

#[test]
fn stale_after_newer_locate_test() {
    let catalog = sample_catalog();
    let bands = BandSet::default();
    let mut state = SelectionState::new();

    let first = state.begin_locate();
    let second = state.begin_locate();

    let outcome = state
        .complete_locate(&catalog, &bands, first, Ok(fix_at(ORIGIN)))
        .unwrap();
    assert!(outcome.is_none());
    assert!(state.current().is_idle());

    let outcome = state
        .complete_locate(&catalog, &bands, second, Ok(fix_at(ORIGIN)))
        .unwrap();
    assert!(outcome.is_some());
}

#[test]
fn provider_failure_keeps_selection_test() {
    let catalog = sample_catalog();
    let bands = BandSet::default();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Little Mount").unwrap();
    let before = state.current().clone();

    let token = state.begin_locate();
    let result = state.complete_locate(&catalog, &bands, token, Err(GeolocateError::PermissionDenied));
    assert!(matches!(
        result,
        Err(locate::Error::Geolocate(GeolocateError::PermissionDenied))
    ));
    assert_eq!(*state.current(), before);
}

#[test]
fn invalid_fix_keeps_selection_test() {
    let catalog = sample_catalog();
    let bands = BandSet::default();
    let mut state = SelectionState::new();

    state.select_station(&catalog, "Little Mount").unwrap();
    let before = state.current().clone();

    let token = state.begin_locate();
    let bogus = GeoPoint::new(80.237617, 200.0);
    let result = state.complete_locate(&catalog, &bands, token, Ok(fix_at(bogus)));
    assert!(matches!(
        result,
        Err(locate::Error::Proximity(proximity::Error::InvalidCoordinate))
    ));
    assert_eq!(*state.current(), before);
}
