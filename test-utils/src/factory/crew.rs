use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a crew member with generated unique names.
pub async fn create_crew(db: &DatabaseConnection) -> Result<entity::crew::Model, DbErr> {
    let id = next_id();
    entity::crew::ActiveModel {
        first_name: ActiveValue::Set(format!("First {}", id)),
        last_name: ActiveValue::Set(format!("Last {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
