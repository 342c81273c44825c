use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use marketdesk_core::{
    ipo::IpoViewModel,
    listings::{IpoCalendarFilter, IpoCalendarItem},
    utils::today_in_display_tz,
};

use crate::{error::ApiResult, main_lib::AppState};

/// IPO calendar, optionally filtered by `status` and `segment`.
async fn list_ipos(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<IpoCalendarFilter>,
) -> ApiResult<Json<Vec<IpoCalendarItem>>> {
    let items = state
        .listing_service
        .get_ipo_calendar(&filter, today_in_display_tz())?;
    Ok(Json(items))
}

/// Display-ready IPO record fetched from the upstream API.
async fn get_ipo(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<IpoViewModel>> {
    let view = state.ipo_service.get_ipo(&slug).await?;
    Ok(Json(view))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ipos", get(list_ipos))
        .route("/ipos/{slug}", get(get_ipo))
}
