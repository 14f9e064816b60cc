//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    checklist, currency, days, expenses, generation, health, preferences, transfer, trips,
    weather,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wayfarer API",
        version = "0.3.0",
        description = "Travel itinerary planner REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Trips
        trips::list_trips,
        trips::get_trip,
        trips::create_trip,
        trips::update_trip,
        trips::delete_trip,
        trips::duplicate_trip,
        trips::reset_trip,
        // Days
        days::list_days,
        days::get_day,
        days::append_day,
        days::update_days,
        days::reorder_days,
        days::delete_day,
        days::apply_pass,
        days::remove_pass,
        days::set_weather,
        // Generation
        generation::generate_itinerary,
        // Expenses
        expenses::list_expenses,
        expenses::create_expense,
        expenses::expense_summary,
        expenses::delete_expense,
        // Checklist
        checklist::get_checklist,
        checklist::create_category,
        checklist::update_category,
        checklist::delete_category,
        checklist::create_item,
        checklist::toggle_item,
        checklist::delete_item,
        // Transfer
        transfer::export_trip,
        transfer::export_code,
        transfer::import_trip,
        transfer::import_code,
        // Lookups
        weather::lookup_weather,
        currency::exchange_rate,
        // Preferences
        preferences::get_preferences,
        preferences::update_preferences,
    ),
    components(
        schemas(
            // Trips
            crate::models::trip::Trip,
            crate::models::trip::CreateTrip,
            crate::models::trip::UpdateTrip,
            crate::models::trip::DuplicateTrip,
            // Days
            crate::models::day::Day,
            crate::models::day::DayPayload,
            crate::models::day::ItineraryEvent,
            crate::models::day::Accommodation,
            crate::models::day::WeatherSnapshot,
            crate::models::day::ReorderDays,
            crate::models::day::UpdateDays,
            crate::models::day::ApplyPass,
            days::UpdateDaysResponse,
            // Enums
            crate::models::enums::Season,
            crate::models::enums::EventCategory,
            crate::models::enums::ExpenseCategory,
            crate::models::enums::WeatherIcon,
            // Generation
            generation::GenerateRequest,
            // Expenses
            crate::models::expense::ExpenseItem,
            crate::models::expense::CreateExpense,
            crate::models::expense::CategoryTotal,
            crate::models::expense::ExpenseSummary,
            // Checklist
            crate::models::checklist::ChecklistCategory,
            crate::models::checklist::ChecklistItem,
            crate::models::checklist::CreateChecklistCategory,
            crate::models::checklist::UpdateChecklistCategory,
            crate::models::checklist::CreateChecklistItem,
            // Transfer
            crate::models::transfer::TripExport,
            crate::models::transfer::ShareCode,
            // Lookups
            crate::services::weather::WeatherReport,
            crate::services::weather::DailyForecast,
            crate::services::currency::ExchangeRate,
            // Preferences
            crate::models::preferences::Preferences,
            crate::models::preferences::UpdatePreferences,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "trips", description = "Trip management"),
        (name = "days", description = "Day sequence management"),
        (name = "generation", description = "Itinerary generation"),
        (name = "expenses", description = "Expense tracking"),
        (name = "checklist", description = "Packing checklist"),
        (name = "transfer", description = "Trip export and import"),
        (name = "lookups", description = "Weather and currency lookups"),
        (name = "preferences", description = "Global preferences")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
