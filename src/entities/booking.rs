use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
