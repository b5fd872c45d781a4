pub mod catalog;
pub mod dataset;
pub mod layers;
pub mod proximity;
pub mod selection;
pub mod shared;

pub mod prelude {
    pub use crate::catalog::{Catalog, LineRecord, Network, StationRecord};
    pub use crate::layers::LayerVisibility;
    pub use crate::proximity::{BandSet, CategorizedProximityResults, DistanceBand, classify};
    pub use crate::selection::{Selection, SelectionState};
    pub use crate::shared::geo::{Distance, GeoPoint};
}
