//! In-memory [`BookingStore`] used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::entities::booking;
use crate::error::AppResult;
use crate::store::{BookingData, BookingStore};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<booking::Model>,
    next_id: i32,
}

fn to_model(id: i32, data: BookingData) -> booking::Model {
    let now = Utc::now().into();
    booking::Model {
        id,
        owner_name: data.owner_name,
        phone_number: data.phone_number,
        pet_name: data.pet_name,
        breed: data.breed,
        gender: data.gender,
        is_neutered: data.is_neutered,
        weight: data.weight,
        medical_details: data.medical_details,
        is_taking_medication: data.is_taking_medication,
        medication_details: data.medication_details,
        personality: data.personality,
        service_type: data.service_type,
        photo_consent: data.photo_consent,
        is_agreed: data.is_agreed,
        created_at: now,
        updated_at: now,
    }
}

// Newest first; id breaks ties since in-process inserts can share a timestamp.
fn sorted_desc(mut rows: Vec<booking::Model>) -> Vec<booking::Model> {
    rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    rows
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create(&self, data: BookingData) -> AppResult<booking::Model> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let row = to_model(inner.next_id, data);
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: i32) -> AppResult<Option<booking::Model>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<booking::Model>> {
        let inner = self.inner.lock().unwrap();
        Ok(sorted_desc(inner.rows.clone()))
    }

    async fn search(&self, keyword: &str) -> AppResult<Vec<booking::Model>> {
        let keyword = keyword.to_lowercase();
        let inner = self.inner.lock().unwrap();
        let matches = inner
            .rows
            .iter()
            .filter(|r| {
                r.owner_name.to_lowercase().contains(&keyword)
                    || r.phone_number.to_lowercase().contains(&keyword)
                    || r.pet_name.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect();
        Ok(sorted_desc(matches))
    }

    async fn update(&self, id: i32, data: BookingData) -> AppResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                let created_at = row.created_at;
                *row = to_model(id, data);
                row.created_at = created_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|r| r.id != id);
        Ok((before - inner.rows.len()) as u64)
    }
}
