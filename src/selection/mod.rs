use std::sync::Arc;

pub mod locate;
pub use locate::*;

use thiserror::Error;
use tracing::trace;

use crate::{
    catalog::{Catalog, StationRecord},
    proximity::CategorizedProximityResults,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Station name does not match any entry")]
    UnknownStation,
    #[error("Line name does not match any entry")]
    UnknownLine,
    #[error("No previous selection to go back to")]
    NoProvenance,
    #[error("Cross-navigation requires a focused station")]
    NoStationFocus,
    #[error("Cross-navigation requires a focused line")]
    NoLineFocus,
}

/// The selection a navigation departed from. Exactly one hop deep: a
/// provenance never carries a provenance of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    Station(StationRecord),
    Line(Arc<str>),
}

/// What the map is focused on. The rendering layer derives every panel
/// decision from this one value: which surface to show and whether a
/// back affordance applies (`provenance()` is Some).
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Selection {
    #[default]
    Idle,
    Station {
        station: StationRecord,
        from: Option<Provenance>,
    },
    Line {
        name: Arc<str>,
        from: Option<Provenance>,
    },
    NearestStations {
        results: CategorizedProximityResults,
    },
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn provenance(&self) -> Option<&Provenance> {
        match self {
            Self::Station { from, .. } | Self::Line { from, .. } => from.as_ref(),
            _ => None,
        }
    }

    /// The provenance this selection leaves behind when the user
    /// navigates away from it.
    fn departing(&self) -> Option<Provenance> {
        match self {
            Self::Station { station, .. } => Some(Provenance::Station(station.clone())),
            Self::Line { name, .. } => Some(Provenance::Line(name.clone())),
            _ => None,
        }
    }
}

/// Owns the single active [`Selection`]. Every transition replaces the
/// value wholesale, there is no panel state to fall out of sync with it.
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    current: Selection,
    /// Bumped on every transition; in-flight locate attempts carry the
    /// epoch they started at and are discarded once it moves on.
    epoch: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    fn replace(&mut self, selection: Selection) -> &Selection {
        self.epoch += 1;
        self.current = selection;
        &self.current
    }

    /// Focuses a station. A focused line is kept as provenance so one
    /// back step returns to it; any other previous selection is dropped.
    pub fn select_station(&mut self, catalog: &Catalog, name: &str) -> Result<&Selection, Error> {
        let station = catalog
            .station_by_name(name)
            .ok_or(Error::UnknownStation)?
            .clone();
        let from = match &self.current {
            Selection::Line { .. } => self.current.departing(),
            _ => None,
        };
        trace!("Focusing station {}", station.name);
        Ok(self.replace(Selection::Station { station, from }))
    }

    /// Focuses a line. A focused station is kept as provenance; any other
    /// previous selection is dropped.
    pub fn select_line(&mut self, catalog: &Catalog, name: &str) -> Result<&Selection, Error> {
        let line = catalog.line_by_name(name).ok_or(Error::UnknownLine)?;
        let from = match &self.current {
            Selection::Station { .. } => self.current.departing(),
            _ => None,
        };
        trace!("Focusing line {}", line.name);
        Ok(self.replace(Selection::Line {
            name: line.name.clone(),
            from,
        }))
    }

    /// Cross-navigation from a station panel to one of its lines. The
    /// departing station is always recorded as provenance; calling this
    /// without a focused station is a caller bug.
    pub fn select_line_from_station(
        &mut self,
        catalog: &Catalog,
        name: &str,
    ) -> Result<&Selection, Error> {
        if !matches!(self.current, Selection::Station { .. }) {
            return Err(Error::NoStationFocus);
        }
        self.select_line(catalog, name)
    }

    /// Cross-navigation from a line panel to one of its stations.
    pub fn select_station_from_line(
        &mut self,
        catalog: &Catalog,
        name: &str,
    ) -> Result<&Selection, Error> {
        if !matches!(self.current, Selection::Line { .. }) {
            return Err(Error::NoLineFocus);
        }
        self.select_station(catalog, name)
    }

    /// Restores the provenance selection with its own provenance cleared,
    /// so back never chains more than one hop.
    pub fn go_back(&mut self) -> Result<&Selection, Error> {
        let provenance = self
            .current
            .provenance()
            .cloned()
            .ok_or(Error::NoProvenance)?;
        let restored = match provenance {
            Provenance::Station(station) => Selection::Station {
                station,
                from: None,
            },
            Provenance::Line(name) => Selection::Line { name, from: None },
        };
        Ok(self.replace(restored))
    }

    /// Presents a fresh set of classified nearest stations. Carries no
    /// provenance.
    pub fn show_nearest(&mut self, results: CategorizedProximityResults) -> &Selection {
        self.replace(Selection::NearestStations { results })
    }

    /// Clears the selection entirely, provenance included.
    pub fn close(&mut self) {
        self.replace(Selection::Idle);
    }
}
