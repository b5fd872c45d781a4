use std::{cmp::Ordering, sync::Arc};

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::StationRecord,
    shared::geo::{Distance, GeoPoint},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Origin coordinate is outside the valid range")]
    InvalidCoordinate,
    #[error("Band {0} breaks the ascending contiguous band order")]
    InvalidConfiguration(usize),
}

/// A half-open distance interval `(lower, upper]` used to bucket nearby
/// stations for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBand {
    /// Display label in the panel's format, e.g. "0-500m" or "1km-1.5km".
    pub label: Arc<str>,
    pub lower: Distance,
    pub upper: Distance,
}

impl DistanceBand {
    pub fn new(lower: Distance, upper: Distance) -> Self {
        let label = format!("{}-{}", edge_label(lower), edge_label(upper));
        Self {
            label: label.into(),
            lower,
            upper,
        }
    }

    /// The lower edge is exclusive, the upper inclusive, so a station
    /// sitting exactly on a boundary lands in the nearer band.
    pub fn contains(&self, distance: Distance) -> bool {
        self.lower < distance && distance <= self.upper
    }
}

fn edge_label(distance: Distance) -> String {
    let meters = distance.as_meters();
    if meters == 0.0 {
        "0".to_string()
    } else if meters < 1000.0 {
        format!("{}m", meters)
    } else {
        format!("{}km", meters / 1000.0)
    }
}

/// A validated set of distance bands: ascending, contiguous and
/// non-overlapping. The edges are configuration, not derived data.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    bands: Box<[DistanceBand]>,
}

impl Default for BandSet {
    /// The band edges the map ships with: 500 m, 1 km and 1.5 km.
    fn default() -> Self {
        const EDGES: [f64; 4] = [0.0, 500.0, 1000.0, 1500.0];
        let bands = EDGES
            .windows(2)
            .map(|pair| {
                DistanceBand::new(
                    Distance::from_meters(pair[0]),
                    Distance::from_meters(pair[1]),
                )
            })
            .collect();
        Self { bands }
    }
}

impl BandSet {
    /// Validates the band invariant up front so a malformed configuration
    /// never surfaces halfway through a classification.
    pub fn new(bands: Vec<DistanceBand>) -> Result<Self, self::Error> {
        for (i, band) in bands.iter().enumerate() {
            if band.upper <= band.lower {
                return Err(self::Error::InvalidConfiguration(i));
            }
            if i > 0 && bands[i - 1].upper != band.lower {
                return Err(self::Error::InvalidConfiguration(i));
            }
        }
        Ok(Self {
            bands: bands.into(),
        })
    }

    pub fn bands(&self) -> &[DistanceBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// The index of the band containing `distance`, or None when it falls
    /// outside every band. The set's lowest edge is inclusive: a distance
    /// of zero still belongs in the nearest band.
    pub fn slot(&self, distance: Distance) -> Option<usize> {
        if let Some(first) = self.bands.first()
            && distance == first.lower
        {
            return Some(0);
        }
        self.bands.iter().position(|band| band.contains(distance))
    }
}

/// One station with its computed distance from the origin of a locate
/// call. Rebuilt from scratch on every classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityResult {
    pub station: StationRecord,
    pub distance: Distance,
}

/// The results of one band, sorted ascending by distance.
#[derive(Debug, Clone, PartialEq)]
pub struct BandBucket {
    pub band: DistanceBand,
    pub results: Box<[ProximityResult]>,
}

/// An immutable snapshot of one classification: every band of the set in
/// order, each holding its stations sorted by distance. Replaced
/// wholesale by the next locate call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedProximityResults {
    buckets: Box<[BandBucket]>,
    skipped: usize,
}

impl CategorizedProximityResults {
    pub fn buckets(&self) -> &[BandBucket] {
        &self.buckets
    }

    /// How many input stations were skipped for lacking a usable
    /// location.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.results.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Buckets every station by great-circle distance from `origin`.
///
/// Pure and deterministic: no interior state, safe to call repeatedly.
/// The distance map step runs in parallel, bucketing and sorting are
/// sequential. Stations beyond the last band are dropped, stations
/// without a usable location are counted as skipped.
pub fn classify(
    origin: &GeoPoint,
    stations: &[StationRecord],
    bands: &BandSet,
) -> Result<CategorizedProximityResults, self::Error> {
    if !origin.is_valid() {
        return Err(self::Error::InvalidCoordinate);
    }

    let distances: Vec<Option<Distance>> = stations
        .par_iter()
        .map(|station| {
            station
                .location
                .filter(GeoPoint::is_valid)
                .map(|location| origin.distance_to(&location))
        })
        .collect();

    let mut buckets: Vec<Vec<ProximityResult>> = vec![Vec::new(); bands.len()];
    let mut skipped = 0;
    for (station, distance) in stations.iter().zip(distances) {
        let Some(distance) = distance else {
            skipped += 1;
            continue;
        };
        let Some(slot) = bands.slot(distance) else {
            continue;
        };
        buckets[slot].push(ProximityResult {
            station: station.clone(),
            distance,
        });
    }
    if skipped > 0 {
        debug!("Skipped {skipped} stations without a usable location");
    }

    for results in buckets.iter_mut() {
        results.sort_unstable_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.station.name.cmp(&b.station.name))
        });
    }

    let buckets: Box<[BandBucket]> = bands
        .bands()
        .iter()
        .cloned()
        .zip(buckets)
        .map(|(band, results)| BandBucket {
            band,
            results: results.into(),
        })
        .collect();
    Ok(CategorizedProximityResults { buckets, skipped })
}
