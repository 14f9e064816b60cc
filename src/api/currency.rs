//! Exchange-rate lookup endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, services::currency::ExchangeRate};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RateQuery {
    /// Source currency code, e.g. "JPY"
    pub base: String,
    /// Target currency code, e.g. "EUR"
    pub target: String,
}

/// Latest conversion rate between two currencies
#[utoipa::path(
    get,
    path = "/currency/rate",
    tag = "lookups",
    params(RateQuery),
    responses(
        (status = 200, description = "Exchange rate", body = ExchangeRate),
        (status = 502, description = "Currency collaborator failed")
    )
)]
pub async fn exchange_rate(
    State(state): State<crate::AppState>,
    Query(query): Query<RateQuery>,
) -> AppResult<Json<ExchangeRate>> {
    let rate = state.services.currency.rate(&query.base, &query.target).await?;
    Ok(Json(rate))
}
