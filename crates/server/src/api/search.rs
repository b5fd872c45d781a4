use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{LineDto, SearchResultsDto, StationDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if let Some(query) = params.get("q") {
        let count: usize = match params.get("count") {
            Some(value) => match value.parse() {
                Ok(value) => value,
                Err(_) => return Err(StatusCode::BAD_REQUEST),
            },
            None => 5,
        };
        let stations: Vec<_> = state
            .catalog
            .search_stations_by_name(query)
            .into_iter()
            .take(count)
            .map(StationDto::from)
            .collect();
        let lines: Vec<_> = state
            .catalog
            .search_lines_by_name(query)
            .into_iter()
            .take(count)
            .map(|line| LineDto::from(line, &state.catalog))
            .collect();
        Ok(Json(SearchResultsDto { stations, lines }).into_response())
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}
