//! Domain models for Wayfarer

pub mod checklist;
pub mod day;
pub mod enums;
pub mod expense;
pub mod preferences;
pub mod transfer;
pub mod trip;

pub use checklist::{ChecklistCategory, ChecklistItem};
pub use day::{Day, DayPayload, ItineraryEvent};
pub use enums::{EventCategory, ExpenseCategory, Season, WeatherIcon};
pub use expense::ExpenseItem;
pub use preferences::Preferences;
pub use transfer::TripExport;
pub use trip::Trip;
