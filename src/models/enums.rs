//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Trip season tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Weather icon used for freshly created placeholder days
    pub fn placeholder_icon(self) -> WeatherIcon {
        match self {
            Season::Winter => WeatherIcon::Snow,
            Season::Summer => WeatherIcon::Sunny,
            Season::Spring | Season::Autumn => WeatherIcon::Cloudy,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EventCategory
// ---------------------------------------------------------------------------

/// Category tag for an itinerary event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Sightseeing,
    Food,
    Transport,
    Shopping,
    Activity,
    Flight,
    Hotel,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EventCategory::Sightseeing => "sightseeing",
            EventCategory::Food => "food",
            EventCategory::Transport => "transport",
            EventCategory::Shopping => "shopping",
            EventCategory::Activity => "activity",
            EventCategory::Flight => "flight",
            EventCategory::Hotel => "hotel",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ExpenseCategory
// ---------------------------------------------------------------------------

/// Category tag for an expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Shopping,
    Transport,
    Hotel,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Shopping,
        ExpenseCategory::Transport,
        ExpenseCategory::Hotel,
        ExpenseCategory::Other,
    ];
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Hotel => "hotel",
            ExpenseCategory::Other => "other",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// WeatherIcon
// ---------------------------------------------------------------------------

/// Coarse weather classification shown on a day card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sunny,
    Cloudy,
    Rain,
    Snow,
}

impl WeatherIcon {
    /// Map a WMO weather interpretation code to an icon.
    ///
    /// Codes follow the open-meteo convention: 0-1 clear, 2-48 clouds/fog,
    /// 51-67 and 80-82 rain, 71-77 and 85-86 snow, 95+ thunderstorms.
    pub fn from_wmo_code(code: u16) -> Self {
        match code {
            0 | 1 => WeatherIcon::Sunny,
            2..=48 => WeatherIcon::Cloudy,
            71..=77 | 85 | 86 => WeatherIcon::Snow,
            _ => WeatherIcon::Rain,
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WeatherIcon::Sunny => "sunny",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
        };
        write!(f, "{}", label)
    }
}
