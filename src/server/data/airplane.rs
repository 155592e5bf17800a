use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct AirplaneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new airplane of the given type.
    pub async fn create(
        &self,
        name: String,
        rows: i32,
        seats_in_row: i32,
        airplane_type_id: i32,
    ) -> Result<entity::airplane::Model, DbErr> {
        entity::airplane::ActiveModel {
            name: ActiveValue::Set(name),
            rows: ActiveValue::Set(rows),
            seats_in_row: ActiveValue::Set(seats_in_row),
            airplane_type_id: ActiveValue::Set(airplane_type_id),
            image: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all airplanes with their type, ordered by name.
    pub async fn get_all_with_type(
        &self,
    ) -> Result<Vec<(entity::airplane::Model, entity::airplane_type::Model)>, DbErr> {
        let rows = entity::prelude::Airplane::find()
            .find_also_related(entity::prelude::AirplaneType)
            .order_by_asc(entity::airplane::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(airplane, airplane_type)| Some((airplane, airplane_type?)))
            .collect())
    }

    /// Finds an airplane by id together with its type.
    pub async fn find_by_id_with_type(
        &self,
        id: i32,
    ) -> Result<Option<(entity::airplane::Model, entity::airplane_type::Model)>, DbErr> {
        let row = entity::prelude::Airplane::find_by_id(id)
            .find_also_related(entity::prelude::AirplaneType)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(airplane, airplane_type)| Some((airplane, airplane_type?))))
    }

    /// Finds a bare airplane row by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::airplane::Model>, DbErr> {
        entity::prelude::Airplane::find_by_id(id).one(self.db).await
    }

    /// Records the stored image path for an airplane.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated airplane
    /// - `Err(DbErr::RecordNotFound)` - No airplane with that id
    pub async fn set_image(
        &self,
        id: i32,
        image: String,
    ) -> Result<entity::airplane::Model, DbErr> {
        let airplane = entity::prelude::Airplane::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Airplane {} not found",
                id
            )))?;

        let mut active_model: entity::airplane::ActiveModel = airplane.into();
        active_model.image = ActiveValue::Set(Some(image));

        active_model.update(self.db).await
    }
}
