use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use crate::entities::booking;
use crate::error::{AppError, AppResult};
use crate::store::BookingData;
use crate::AppState;

const MISSING_FIELDS: &str = "missing required fields";
const DEFAULT_SERVICE_TYPE: &str = "unspecified";

/// Intake form body. One canonical schema: snake_case keys, with the
/// PascalCase aliases of the legacy deployment accepted at the boundary.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingPayload {
    #[serde(alias = "OwnerName")]
    pub owner_name: Option<String>,
    #[serde(alias = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(alias = "PetName")]
    pub pet_name: Option<String>,
    #[serde(alias = "Breed")]
    pub breed: Option<String>,
    #[serde(alias = "Gender")]
    pub gender: Option<String>,
    #[serde(alias = "IsNeutered", deserialize_with = "boolish")]
    pub is_neutered: Option<bool>,
    #[serde(alias = "Weight")]
    pub weight: Option<f64>,
    #[serde(alias = "MedicalDetails")]
    pub medical_details: Option<String>,
    #[serde(alias = "IsTakingMedication", deserialize_with = "boolish")]
    pub is_taking_medication: Option<bool>,
    #[serde(alias = "MedicationDetails")]
    pub medication_details: Option<String>,
    #[serde(alias = "Personality")]
    pub personality: Option<String>,
    #[serde(alias = "ServiceType")]
    pub service_type: Option<String>,
    #[serde(alias = "PhotoConsent", deserialize_with = "boolish")]
    pub photo_consent: Option<bool>,
    #[serde(alias = "IsAgreed", deserialize_with = "boolish")]
    pub is_agreed: Option<bool>,
}

/// Accept JSON booleans as well as the `"true"` strings some form clients
/// submit. Any other string coerces to false.
fn boolish<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
    }

    let value = Option::<BoolLike>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        BoolLike::Bool(b) => b,
        BoolLike::Text(s) => s == "true",
    }))
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn check_weight(weight: Option<f64>) -> AppResult<()> {
    if weight.is_some_and(|w| w < 0.0) {
        return Err(AppError::BadRequest(
            "weight must be non-negative".to_string(),
        ));
    }
    Ok(())
}

impl BookingPayload {
    /// Validate an intake submission and produce the canonical record.
    ///
    /// Required booleans are checked for presence, not truthiness, so
    /// `false` is a legitimate answer for the neutering and medication
    /// questions. Consent is the exception: is_agreed must be true.
    pub fn validate_intake(self) -> AppResult<BookingData> {
        let complete = non_blank(&self.owner_name).is_some()
            && non_blank(&self.phone_number).is_some()
            && non_blank(&self.pet_name).is_some()
            && non_blank(&self.gender).is_some()
            && self.is_neutered.is_some()
            && self.is_taking_medication.is_some()
            && self.is_agreed == Some(true);

        if !complete {
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        }
        check_weight(self.weight)?;
        Ok(self.normalize())
    }

    /// Produce the replacement record for a full-replace update. Absent
    /// fields default rather than being rejected; only the weight
    /// constraint is enforced.
    pub fn into_replacement(self) -> AppResult<BookingData> {
        check_weight(self.weight)?;
        Ok(self.normalize())
    }

    fn normalize(self) -> BookingData {
        BookingData {
            owner_name: non_blank(&self.owner_name).unwrap_or_default(),
            phone_number: non_blank(&self.phone_number).unwrap_or_default(),
            pet_name: non_blank(&self.pet_name).unwrap_or_default(),
            breed: non_blank(&self.breed),
            gender: non_blank(&self.gender).unwrap_or_default(),
            is_neutered: self.is_neutered.unwrap_or(false),
            weight: self.weight,
            medical_details: non_blank(&self.medical_details),
            is_taking_medication: self.is_taking_medication.unwrap_or(false),
            medication_details: non_blank(&self.medication_details),
            personality: non_blank(&self.personality),
            service_type: non_blank(&self.service_type)
                .unwrap_or_else(|| DEFAULT_SERVICE_TYPE.to_string()),
            photo_consent: self.photo_consent.unwrap_or(false),
            is_agreed: self.is_agreed.unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
}

/// Intake: validate, normalize and persist a new booking.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookingPayload>,
) -> AppResult<impl IntoResponse> {
    let data = payload.validate_intake()?;
    let booking = state.store.create(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "booking": booking })),
    ))
}

/// Fetch one booking by id.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<booking::Model>> {
    let booking = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))?;

    Ok(Json(booking))
}

/// All bookings, newest first.
pub async fn list_bookings(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<booking::Model>>> {
    let bookings = state.store.list().await?;
    Ok(Json(bookings))
}

/// Substring search over owner name, phone number and pet name. Without a
/// keyword this is the same as listing.
pub async fn search_bookings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<booking::Model>>> {
    let keyword = params
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty());

    let bookings = match keyword {
        Some(keyword) => state.store.search(keyword).await?,
        None => state.store.list().await?,
    };

    Ok(Json(bookings))
}

/// Full replace of every mutable field. Updating an id that does not exist
/// is a tolerated no-op, mirroring delete.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookingPayload>,
) -> AppResult<Json<Value>> {
    let data = payload.into_replacement()?;
    let rows = state.store.update(id, data).await?;
    if rows == 0 {
        tracing::debug!("update of booking {} affected no rows", id);
    }

    Ok(Json(json!({ "success": true })))
}

/// Remove a booking. Deleting an id that does not exist is not an error.
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    state.store.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
