use railmap::{catalog::StationRecord, shared::geo::GeoPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub native_name: Option<String>,
    pub location: Option<GeoPoint>,
    pub lines: Vec<String>,
    pub network: String,
    pub kind: String,
    pub parking: String,
    pub accessible: String,
    pub escalator: String,
    pub frequency: Option<String>,
}

impl StationDto {
    pub fn from(station: &StationRecord) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.to_string(),
            native_name: station.native_name.as_ref().map(|name| name.to_string()),
            location: station.location,
            lines: station.lines.iter().map(|line| line.to_string()).collect(),
            network: station.network.to_string(),
            kind: station.kind.to_string(),
            parking: station.amenities.parking.to_string(),
            accessible: station.amenities.accessible.to_string(),
            escalator: station.amenities.escalator.to_string(),
            frequency: station.frequency.as_ref().map(|value| value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborDto {
    pub line: String,
    pub station: StationDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDetailDto {
    pub station: StationDto,
    pub lines: Vec<super::LineDto>,
    pub neighbors: Vec<NeighborDto>,
}
