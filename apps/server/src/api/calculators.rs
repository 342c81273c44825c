use std::sync::Arc;

use axum::{routing::post, Json, Router};
use marketdesk_core::calculators::{
    calculate_emi, calculate_fd, calculate_lumpsum, calculate_rd, calculate_sip,
    CalculatorResult, EmiInput, EmiResult, FdInput, LumpsumInput, RdInput, SipInput,
};

use crate::{error::ApiResult, main_lib::AppState};

async fn sip(Json(input): Json<SipInput>) -> ApiResult<Json<CalculatorResult>> {
    Ok(Json(calculate_sip(&input)?))
}

async fn lumpsum(Json(input): Json<LumpsumInput>) -> ApiResult<Json<CalculatorResult>> {
    Ok(Json(calculate_lumpsum(&input)?))
}

async fn fd(Json(input): Json<FdInput>) -> ApiResult<Json<CalculatorResult>> {
    Ok(Json(calculate_fd(&input)?))
}

async fn rd(Json(input): Json<RdInput>) -> ApiResult<Json<CalculatorResult>> {
    Ok(Json(calculate_rd(&input)?))
}

async fn emi(Json(input): Json<EmiInput>) -> ApiResult<Json<EmiResult>> {
    Ok(Json(calculate_emi(&input)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculators/sip", post(sip))
        .route("/calculators/lumpsum", post(lumpsum))
        .route("/calculators/fd", post(fd))
        .route("/calculators/rd", post(rd))
        .route("/calculators/emi", post(emi))
}
