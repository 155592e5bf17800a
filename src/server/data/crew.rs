use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CrewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new crew member.
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<entity::crew::Model, DbErr> {
        entity::crew::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all crew members ordered by first then last name.
    pub async fn get_all(&self) -> Result<Vec<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find()
            .order_by_asc(entity::crew::Column::FirstName)
            .order_by_asc(entity::crew::Column::LastName)
            .all(self.db)
            .await
    }

    /// Finds a crew member by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::crew::Model>, DbErr> {
        entity::prelude::Crew::find_by_id(id).one(self.db).await
    }

    /// Finds all crew members with the given ids.
    ///
    /// Returns only the rows that exist; callers comparing the result length
    /// against the input length can detect dangling references.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::crew::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Crew::find()
            .filter(entity::crew::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
