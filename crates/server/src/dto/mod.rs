mod line;
mod near;
mod station;

pub use line::*;
pub use near::*;
pub use station::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsDto {
    pub stations: Vec<StationDto>,
    pub lines: Vec<LineDto>,
}
