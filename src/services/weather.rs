//! Weather lookups through the Open-Meteo geocoding and forecast APIs

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::ToSchema;

use crate::{
    config::WeatherConfig,
    error::{AppError, AppResult},
    models::day::WeatherSnapshot,
    models::enums::WeatherIcon,
};

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
    daily: DailyWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
    weather_code: u16,
}

#[derive(Debug, Deserialize)]
struct DailyWeather {
    time: Vec<NaiveDate>,
    weather_code: Vec<u16>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

/// Forecast for one calendar day
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub icon: WeatherIcon,
    /// Display range, e.g. "2°C / 9°C"
    pub temperature: String,
}

/// Weather lookup response: current conditions plus the daily outlook
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Resolved place name
    pub location: String,
    pub current: WeatherSnapshot,
    pub daily: Vec<DailyForecast>,
}

impl WeatherReport {
    /// Snapshot suitable for pinning on a day card: the daily entry for
    /// the given date when the forecast covers it, current conditions
    /// otherwise.
    pub fn snapshot_for(&self, date: Option<NaiveDate>) -> WeatherSnapshot {
        date.and_then(|date| self.daily.iter().find(|f| f.date == date))
            .map(|f| WeatherSnapshot {
                icon: f.icon,
                temperature: f.temperature.clone(),
            })
            .unwrap_or_else(|| self.current.clone())
    }
}

#[derive(Clone)]
pub struct WeatherService {
    client: Client,
    config: WeatherConfig,
}

impl WeatherService {
    pub fn new(config: WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("http client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Geocode a free-text location and fetch its forecast.
    pub async fn lookup(&self, location: &str) -> AppResult<WeatherReport> {
        let place = self.geocode(location).await?;
        let forecast = self.forecast(place.latitude, place.longitude).await?;

        let daily = forecast
            .daily
            .time
            .iter()
            .zip(&forecast.daily.weather_code)
            .zip(
                forecast
                    .daily
                    .temperature_2m_min
                    .iter()
                    .zip(&forecast.daily.temperature_2m_max),
            )
            .map(|((date, code), (min, max))| DailyForecast {
                date: *date,
                icon: WeatherIcon::from_wmo_code(*code),
                temperature: format!("{}°C / {}°C", min.round(), max.round()),
            })
            .collect();

        Ok(WeatherReport {
            location: place.name,
            current: WeatherSnapshot {
                icon: WeatherIcon::from_wmo_code(forecast.current.weather_code),
                temperature: format!("{}°C", forecast.current.temperature_2m.round()),
            },
            daily,
        })
    }

    async fn geocode(&self, location: &str) -> AppResult<GeocodingResult> {
        let response = self
            .client
            .get(&self.config.geocoding_url)
            .query(&[("name", location), ("count", "1")])
            .send()
            .await
            .map_err(|e| AppError::Weather(format!("geocoding request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Weather(format!("geocoding failed: {e}")))?;

        let parsed: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| AppError::Weather(format!("unreadable geocoding response: {e}")))?;
        parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Weather(format!("unknown location {location:?}")))
    }

    async fn forecast(&self, latitude: f64, longitude: f64) -> AppResult<ForecastResponse> {
        let response = self
            .client
            .get(&self.config.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m,weather_code".to_string()),
                (
                    "daily",
                    "weather_code,temperature_2m_max,temperature_2m_min".to_string(),
                ),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Weather(format!("forecast request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Weather(format!("forecast failed: {e}")))?;

        response
            .json()
            .await
            .map_err(|e| AppError::Weather(format!("unreadable forecast response: {e}")))
    }
}
