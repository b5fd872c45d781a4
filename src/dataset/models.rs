use serde::Deserialize;

use crate::catalog::{Amenities, LineRecord, Network, StationKind, StationRecord};
use crate::shared::geo::GeoPoint;

#[derive(Debug, Deserialize)]
pub struct StationCollection {
    #[serde(default)]
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
pub struct StationFeature {
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
    #[serde(default)]
    pub properties: StationProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    /// GeoJSON order, longitude first.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StationProperties {
    pub name: Option<String>,
    pub name_ta: Option<String>,
    /// Comma-separated line names, e.g. "Blue Line, Green Line".
    pub line: Option<String>,
    pub network: Option<String>,
    pub id: Option<String>,
    pub parking: Option<String>,
    pub accessible: Option<String>,
    pub escalator: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub frequency: Option<String>,
}

impl StationFeature {
    /// Turns a raw feature into a catalog record. None when the feature
    /// has no name, the one property a station cannot be addressed
    /// without.
    pub fn into_record(self) -> Option<StationRecord> {
        let properties = self.properties;
        let name = properties.name?;

        let location = self.geometry.and_then(|geometry| {
            let [longitude, latitude] = *geometry.coordinates.first_chunk()?;
            Some(GeoPoint::new(longitude, latitude))
        });

        let lines: Box<[_]> = properties
            .line
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Into::into)
            .collect();

        Some(StationRecord {
            id: properties.id.unwrap_or_default().into(),
            normalized_name: name.to_lowercase().into(),
            name: name.into(),
            native_name: properties.name_ta.map(Into::into),
            location,
            lines,
            network: properties.network.as_deref().map(Network::from).unwrap_or_default(),
            kind: properties.kind.as_deref().map(StationKind::from).unwrap_or_default(),
            amenities: Amenities {
                parking: properties.parking.as_deref().map(Into::into).unwrap_or_default(),
                accessible: properties.accessible.as_deref().map(Into::into).unwrap_or_default(),
                escalator: properties.escalator.as_deref().map(Into::into).unwrap_or_default(),
            },
            frequency: properties.frequency.map(Into::into),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LineCollection {
    #[serde(default)]
    pub features: Vec<LineFeature>,
}

/// Line geometry belongs to the rendering layer, only the properties are
/// read here.
#[derive(Debug, Deserialize)]
pub struct LineFeature {
    #[serde(default)]
    pub properties: LineProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct LineProperties {
    pub name: Option<String>,
    pub color: Option<String>,
    pub network: Option<String>,
    pub id: Option<String>,
}

/// Fallback when the dataset does not assign a color.
const DEFAULT_LINE_COLOR: &str = "#9E9E9E";

impl LineFeature {
    pub fn into_record(self) -> Option<LineRecord> {
        let properties = self.properties;
        let name = properties.name?;
        Some(LineRecord {
            id: properties.id.unwrap_or_default().into(),
            normalized_name: name.to_lowercase().into(),
            name: name.into(),
            color: properties.color.unwrap_or_else(|| DEFAULT_LINE_COLOR.into()).into(),
            network: properties.network.as_deref().map(Network::from).unwrap_or_default(),
        })
    }
}
