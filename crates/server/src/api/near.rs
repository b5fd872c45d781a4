use std::{collections::HashMap, sync::Arc};

use crate::{dto::NearDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use railmap::{proximity::classify, shared::geo::GeoPoint};

pub async fn near(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let latitude: f64 = parse_param(&params, "lat")?;
    let longitude: f64 = parse_param(&params, "lon")?;

    let origin = GeoPoint::new(longitude, latitude);
    let results = classify(&origin, state.catalog.stations(), &state.bands)
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(NearDto::from(&results)).into_response())
}

fn parse_param(params: &HashMap<String, String>, key: &str) -> Result<f64, StatusCode> {
    params
        .get(key)
        .ok_or(StatusCode::BAD_REQUEST)?
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)
}
