use railmap::proximity::CategorizedProximityResults;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearStationDto {
    pub name: String,
    pub distance_m: f64,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearBandDto {
    pub label: String,
    pub stations: Vec<NearStationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearDto {
    pub bands: Vec<NearBandDto>,
    pub skipped: usize,
}

impl NearDto {
    pub fn from(results: &CategorizedProximityResults) -> Self {
        let bands = results
            .buckets()
            .iter()
            .map(|bucket| NearBandDto {
                label: bucket.band.label.to_string(),
                stations: bucket
                    .results
                    .iter()
                    .map(|result| NearStationDto {
                        name: result.station.name.to_string(),
                        distance_m: result.distance.as_meters(),
                        lines: result
                            .station
                            .lines
                            .iter()
                            .map(|line| line.to_string())
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            bands,
            skipped: results.skipped(),
        }
    }
}
