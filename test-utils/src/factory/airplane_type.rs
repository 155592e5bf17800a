use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an airplane type with a generated unique name.
pub async fn create_airplane_type(
    db: &DatabaseConnection,
) -> Result<entity::airplane_type::Model, DbErr> {
    entity::airplane_type::ActiveModel {
        name: ActiveValue::Set(format!("Type {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
