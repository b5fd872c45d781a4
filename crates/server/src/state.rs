use railmap::{catalog::Catalog, proximity::BandSet};

pub struct AppState {
    pub catalog: Catalog,
    pub bands: BandSet,
}

impl AppState {
    pub fn new(catalog: Catalog, bands: BandSet) -> Self {
        Self { catalog, bands }
    }
}
