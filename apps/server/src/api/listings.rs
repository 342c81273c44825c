use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use marketdesk_core::{
    listings::{BuybackBoard, GmpItem, NcdIssueItem, RightsIssueBoard},
    utils::today_in_display_tz,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Default, Deserialize)]
struct GmpParams {
    sort: Option<String>,
}

async fn get_gmp(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GmpParams>,
) -> ApiResult<Json<Vec<GmpItem>>> {
    let sort_by_gain = match params.sort.as_deref() {
        None | Some("gain") => true,
        Some("date") => false,
        Some(other) => {
            return Err(ApiError::BadRequest(format!(
                "Unknown sort '{}', expected 'gain' or 'date'",
                other
            )))
        }
    };
    let items = state
        .listing_service
        .get_gmp_listings(sort_by_gain, today_in_display_tz())?;
    Ok(Json(items))
}

async fn get_buybacks(State(state): State<Arc<AppState>>) -> ApiResult<Json<BuybackBoard>> {
    let board = state.listing_service.get_buybacks(today_in_display_tz())?;
    Ok(Json(board))
}

async fn get_rights_issues(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RightsIssueBoard>> {
    let board = state
        .listing_service
        .get_rights_issues(today_in_display_tz())?;
    Ok(Json(board))
}

async fn get_ncds(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<NcdIssueItem>>> {
    let items = state.listing_service.get_ncd_issues(today_in_display_tz())?;
    Ok(Json(items))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/gmp", get(get_gmp))
        .route("/buybacks", get(get_buybacks))
        .route("/rights-issues", get(get_rights_issues))
        .route("/ncds", get(get_ncds))
}
