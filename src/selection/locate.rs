use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    catalog::Catalog,
    proximity::{self, BandSet, classify},
    selection::{Selection, SelectionState},
    shared::geo::GeoPoint,
};

/// The failures the external geolocation provider can report. Never
/// produced here, only passed through to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocateError {
    #[error("Permission to read the device location was denied")]
    PermissionDenied,
    #[error("Device location is unavailable")]
    Unavailable,
    #[error("Timed out waiting for a location fix")]
    Timeout,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geolocate(#[from] GeolocateError),
    #[error(transparent)]
    Proximity(#[from] proximity::Error),
}

/// A position delivered by the geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub location: GeoPoint,
    pub time: DateTime<Utc>,
}

/// Ties an in-flight locate attempt to the selection epoch it started
/// from. Completions whose token no longer matches are stale and must
/// not overwrite a newer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateToken {
    epoch: u64,
}

impl SelectionState {
    /// Starts a locate attempt, superseding any attempt still in flight.
    pub fn begin_locate(&mut self) -> LocateToken {
        self.epoch += 1;
        trace!("Locate attempt {} started", self.epoch);
        LocateToken { epoch: self.epoch }
    }

    /// Completes a locate attempt with whatever the provider returned.
    ///
    /// Stale completions are discarded and report `Ok(None)`. Provider
    /// failures and classifier rejections propagate as errors and leave
    /// the current selection untouched, so whatever the user had focused
    /// stays focused.
    pub fn complete_locate(
        &mut self,
        catalog: &Catalog,
        bands: &BandSet,
        token: LocateToken,
        fix: Result<PositionFix, GeolocateError>,
    ) -> Result<Option<&Selection>, self::Error> {
        if token.epoch != self.epoch {
            debug!("Discarding stale locate attempt {}", token.epoch);
            return Ok(None);
        }
        let fix = fix?;
        let results = classify(&fix.location, catalog.stations(), bands)?;
        Ok(Some(self.show_nearest(results)))
    }
}
