//! API handlers for Wayfarer REST endpoints

pub mod checklist;
pub mod currency;
pub mod days;
pub mod expenses;
pub mod generation;
pub mod health;
pub mod openapi;
pub mod preferences;
pub mod transfer;
pub mod trips;
pub mod weather;
