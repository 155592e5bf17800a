use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an order owned by the given user, stamped with the current time.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    entity::order::ActiveModel {
        created_at: ActiveValue::Set(Utc::now()),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
