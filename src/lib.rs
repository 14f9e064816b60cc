//! Wayfarer Travel Itinerary Planner
//!
//! A Rust implementation of the Wayfarer personal trip planner,
//! providing a local REST JSON API for managing multi-day itineraries,
//! expenses, packing checklists and trip sharing.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Trips
        .route("/trips", get(api::trips::list_trips))
        .route("/trips", post(api::trips::create_trip))
        .route("/trips/:id", get(api::trips::get_trip))
        .route("/trips/:id", put(api::trips::update_trip))
        .route("/trips/:id", delete(api::trips::delete_trip))
        .route("/trips/:id/duplicate", post(api::trips::duplicate_trip))
        .route("/trips/:id/reset", post(api::trips::reset_trip))
        // Days
        .route("/trips/:id/days", get(api::days::list_days))
        .route("/trips/:id/days", post(api::days::append_day))
        .route("/trips/:id/days", put(api::days::update_days))
        .route("/trips/:id/days/reorder", post(api::days::reorder_days))
        .route("/trips/:id/days/:day_id", get(api::days::get_day))
        .route("/trips/:id/days/:day_id", delete(api::days::delete_day))
        .route("/trips/:id/days/:day_id/pass", put(api::days::apply_pass))
        .route("/trips/:id/days/:day_id/pass", delete(api::days::remove_pass))
        .route("/trips/:id/days/:day_id/weather", put(api::days::set_weather))
        // Generation
        .route("/trips/:id/generate", post(api::generation::generate_itinerary))
        // Expenses
        .route("/trips/:id/expenses", get(api::expenses::list_expenses))
        .route("/trips/:id/expenses", post(api::expenses::create_expense))
        .route("/trips/:id/expenses/summary", get(api::expenses::expense_summary))
        .route("/trips/:id/expenses/:expense_id", delete(api::expenses::delete_expense))
        // Checklist
        .route("/trips/:id/checklist", get(api::checklist::get_checklist))
        .route("/trips/:id/checklist/categories", post(api::checklist::create_category))
        .route("/trips/:id/checklist/categories/:category_id", put(api::checklist::update_category))
        .route("/trips/:id/checklist/categories/:category_id", delete(api::checklist::delete_category))
        .route("/trips/:id/checklist/categories/:category_id/items", post(api::checklist::create_item))
        .route("/trips/:id/checklist/items/:item_id/toggle", post(api::checklist::toggle_item))
        .route("/trips/:id/checklist/items/:item_id", delete(api::checklist::delete_item))
        // Transfer (backup / share codes)
        .route("/trips/:id/export", get(api::transfer::export_trip))
        .route("/trips/:id/export/code", get(api::transfer::export_code))
        .route("/trips/:id/import", post(api::transfer::import_trip))
        .route("/trips/:id/import/code", post(api::transfer::import_code))
        // External lookups
        .route("/weather", get(api::weather::lookup_weather))
        .route("/currency/rate", get(api::currency::exchange_rate))
        // Preferences
        .route("/preferences", get(api::preferences::get_preferences))
        .route("/preferences", put(api::preferences::update_preferences))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
