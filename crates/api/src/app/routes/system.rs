use axum::{Json, http::StatusCode};

use rngci_pathway::GRID_REGIONS;

use crate::app::dto::GridRegionList;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn grid_regions() -> Json<GridRegionList> {
    Json(GridRegionList {
        items: GRID_REGIONS,
    })
}
