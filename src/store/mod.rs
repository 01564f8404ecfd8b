pub mod sql;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::entities::booking;
use crate::error::AppResult;

pub use sql::SqlStore;

/// Canonical normalized booking fields, as written by intake and update.
/// Server-assigned columns (id, timestamps) are owned by the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingData {
    pub owner_name: String,
    pub phone_number: String,
    pub pet_name: String,
    pub breed: Option<String>,
    pub gender: String,
    pub is_neutered: bool,
    pub weight: Option<f64>,
    pub medical_details: Option<String>,
    pub is_taking_medication: bool,
    pub medication_details: Option<String>,
    pub personality: Option<String>,
    pub service_type: String,
    pub photo_consent: bool,
    pub is_agreed: bool,
}

/// The storage contract for bookings. One implementation per backend;
/// the active one is chosen at configuration time.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a new booking, assigning id and timestamps.
    async fn create(&self, data: BookingData) -> AppResult<booking::Model>;

    /// Fetch one booking by id.
    async fn get(&self, id: i32) -> AppResult<Option<booking::Model>>;

    /// All bookings, newest first. Unbounded by design (low-volume domain).
    async fn list(&self) -> AppResult<Vec<booking::Model>>;

    /// Bookings whose owner name, phone number or pet name contain
    /// `keyword`, newest first.
    async fn search(&self, keyword: &str) -> AppResult<Vec<booking::Model>>;

    /// Full replace of every mutable field. Returns the number of rows
    /// affected; zero means the id did not exist.
    async fn update(&self, id: i32, data: BookingData) -> AppResult<u64>;

    /// Remove a booking. Returns the number of rows affected.
    async fn delete(&self, id: i32) -> AppResult<u64>;
}
