use std::{fmt::Display, sync::Arc};

use crate::shared::{Identifiable, geo::GeoPoint};

/// Which part of the network a station or line belongs to. Display-only
/// grouping, it carries no routing meaning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Metro,
    Suburban,
    Mrts,
    #[default]
    Other,
}

impl From<&str> for Network {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "metro" => Self::Metro,
            "suburban" => Self::Suburban,
            "mrts" => Self::Mrts,
            _ => Self::Other,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Metro => "Metro",
            Self::Suburban => "Suburban",
            Self::Mrts => "MRTS",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// How the platform sits relative to street level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StationKind {
    Underground,
    Elevated,
    AtGrade,
    #[default]
    Unknown,
}

impl From<&str> for StationKind {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "underground" => Self::Underground,
            "elevated" => Self::Elevated,
            "grade" => Self::AtGrade,
            _ => Self::Unknown,
        }
    }
}

impl Display for StationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Underground => "underground",
            Self::Elevated => "elevated",
            Self::AtGrade => "at grade",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Presence of a station facility. Source data only says "yes" or "no",
/// anything else stays unknown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Available,
    Unavailable,
    #[default]
    Unknown,
}

impl From<&str> for Amenity {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "yes" => Self::Available,
            "no" => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

impl Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Available => "yes",
            Self::Unavailable => "no",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The facility flags a station panel shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Amenities {
    pub parking: Amenity,
    pub accessible: Amenity,
    pub escalator: Amenity,
}

/// One physical transit station. Loaded once at startup and read-only
/// after that, cheap to clone.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StationRecord {
    /// External identifier from the source data.
    pub id: Arc<str>,
    /// Display name, unique within the dataset.
    pub name: Arc<str>,
    /// Lowercased name used for fuzzy search comparisons.
    pub normalized_name: Arc<str>,
    /// Name in the local script, when the dataset carries one.
    pub native_name: Option<Arc<str>>,
    /// Missing when the source feature had no usable geometry; such
    /// stations are skipped by proximity classification.
    pub location: Option<GeoPoint>,
    /// Names of the lines serving this station. May be empty.
    pub lines: Box<[Arc<str>]>,
    pub network: Network,
    pub kind: StationKind,
    pub amenities: Amenities,
    /// Service frequency as displayed, e.g. "10 min".
    pub frequency: Option<Arc<str>>,
}

impl Identifiable for StationRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// One transit line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineRecord {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    /// Hex color used by the rendering layer, e.g. "#3280c3".
    pub color: Arc<str>,
    pub network: Network,
}

impl Identifiable for LineRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}
