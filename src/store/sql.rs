use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::booking;
use crate::error::AppResult;
use crate::store::{BookingData, BookingStore};

/// Relational-store adapter. Works against MySQL or PostgreSQL, whichever
/// the connection was opened for.
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(data: BookingData) -> booking::ActiveModel {
    booking::ActiveModel {
        owner_name: Set(data.owner_name),
        phone_number: Set(data.phone_number),
        pet_name: Set(data.pet_name),
        breed: Set(data.breed),
        gender: Set(data.gender),
        is_neutered: Set(data.is_neutered),
        weight: Set(data.weight),
        medical_details: Set(data.medical_details),
        is_taking_medication: Set(data.is_taking_medication),
        medication_details: Set(data.medication_details),
        personality: Set(data.personality),
        service_type: Set(data.service_type),
        photo_consent: Set(data.photo_consent),
        is_agreed: Set(data.is_agreed),
        ..Default::default()
    }
}

#[async_trait]
impl BookingStore for SqlStore {
    async fn create(&self, data: BookingData) -> AppResult<booking::Model> {
        // id and timestamps stay NotSet so the store assigns them.
        let row = to_active_model(data).insert(&self.db).await?;
        Ok(row)
    }

    async fn get(&self, id: i32) -> AppResult<Option<booking::Model>> {
        let row = booking::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<booking::Model>> {
        let rows = booking::Entity::find()
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn search(&self, keyword: &str) -> AppResult<Vec<booking::Model>> {
        let rows = booking::Entity::find()
            .filter(
                Condition::any()
                    .add(booking::Column::OwnerName.contains(keyword))
                    .add(booking::Column::PhoneNumber.contains(keyword))
                    .add(booking::Column::PetName.contains(keyword)),
            )
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, data: BookingData) -> AppResult<u64> {
        let mut active = to_active_model(data);
        active.updated_at = Set(Utc::now().into());

        let result = booking::Entity::update_many()
            .set(active)
            .filter(booking::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = booking::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
