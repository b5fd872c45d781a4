use railmap::catalog::{Catalog, LineRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub network: String,
    pub station_count: usize,
}

impl LineDto {
    pub fn from(line: &LineRecord, catalog: &Catalog) -> Self {
        let station_count = catalog
            .stations_by_line(&line.name)
            .map(|stations| stations.len())
            .unwrap_or(0);
        Self {
            id: line.id.to_string(),
            name: line.name.to_string(),
            color: line.color.to_string(),
            network: line.network.to_string(),
            station_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineDetailDto {
    pub line: LineDto,
    pub stations: Vec<super::StationDto>,
}
