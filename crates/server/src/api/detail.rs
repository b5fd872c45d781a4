use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{LineDetailDto, LineDto, NeighborDto, StationDetailDto, StationDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn station(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let name = params.get("name").ok_or(StatusCode::BAD_REQUEST)?;
    let station = state
        .catalog
        .station_by_name(name)
        .ok_or(StatusCode::NOT_FOUND)?;

    let lines: Vec<_> = state
        .catalog
        .lines_by_station(name)
        .unwrap_or_default()
        .into_iter()
        .map(|line| LineDto::from(line, &state.catalog))
        .collect();
    let neighbors: Vec<_> = state
        .catalog
        .adjacent_stations(name)
        .unwrap_or_default()
        .into_iter()
        .map(|(line, neighbor)| NeighborDto {
            line: line.name.to_string(),
            station: StationDto::from(neighbor),
        })
        .collect();

    Ok(Json(StationDetailDto {
        station: StationDto::from(station),
        lines,
        neighbors,
    })
    .into_response())
}

pub async fn line(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let name = params.get("name").ok_or(StatusCode::BAD_REQUEST)?;
    let line = state
        .catalog
        .line_by_name(name)
        .ok_or(StatusCode::NOT_FOUND)?;

    let stations: Vec<_> = state
        .catalog
        .stations_by_line(name)
        .unwrap_or_default()
        .into_iter()
        .map(StationDto::from)
        .collect();

    Ok(Json(LineDetailDto {
        line: LineDto::from(line, &state.catalog),
        stations,
    })
    .into_response())
}
