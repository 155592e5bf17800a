use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct AirplaneTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new airplane type.
    pub async fn create(&self, name: String) -> Result<entity::airplane_type::Model, DbErr> {
        entity::airplane_type::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all airplane types ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::airplane_type::Model>, DbErr> {
        entity::prelude::AirplaneType::find()
            .order_by_asc(entity::airplane_type::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds an airplane type by id.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::airplane_type::Model>, DbErr> {
        entity::prelude::AirplaneType::find_by_id(id)
            .one(self.db)
            .await
    }
}
