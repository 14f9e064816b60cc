//! Business logic services

pub mod checklist;
pub mod currency;
pub mod expenses;
pub mod generation;
pub mod itinerary;
pub mod preferences;
pub mod transfer;
pub mod trips;
pub mod weather;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub trips: trips::TripsService,
    pub itinerary: itinerary::ItineraryService,
    pub expenses: expenses::ExpensesService,
    pub checklist: checklist::ChecklistService,
    pub transfer: transfer::TransferService,
    pub generation: generation::GenerationService,
    pub weather: weather::WeatherService,
    pub currency: currency::CurrencyService,
    pub preferences: preferences::PreferencesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            trips: trips::TripsService::new(repository.clone()),
            itinerary: itinerary::ItineraryService::new(repository.clone()),
            expenses: expenses::ExpensesService::new(repository.clone()),
            checklist: checklist::ChecklistService::new(repository.clone()),
            transfer: transfer::TransferService::new(repository.clone()),
            generation: generation::GenerationService::new(config.generation.clone())?,
            weather: weather::WeatherService::new(config.weather.clone())?,
            currency: currency::CurrencyService::new(config.currency.clone())?,
            preferences: preferences::PreferencesService::new(repository),
        })
    }
}
