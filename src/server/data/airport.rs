use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct AirportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new airport.
    pub async fn create(
        &self,
        name: String,
        closest_big_city: String,
    ) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            name: ActiveValue::Set(name),
            closest_big_city: ActiveValue::Set(closest_big_city),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all airports ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::airport::Model>, DbErr> {
        entity::prelude::Airport::find()
            .order_by_asc(entity::airport::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds an airport by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::airport::Model>, DbErr> {
        entity::prelude::Airport::find_by_id(id).one(self.db).await
    }
}
