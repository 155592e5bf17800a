use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::route::RouteWithAirports;

pub struct RouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new route between two airports.
    pub async fn create(
        &self,
        source_id: i32,
        destination_id: i32,
        distance: i32,
    ) -> Result<entity::route::Model, DbErr> {
        entity::route::ActiveModel {
            source_id: ActiveValue::Set(source_id),
            destination_id: ActiveValue::Set(destination_id),
            distance: ActiveValue::Set(distance),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all routes with their endpoint airports resolved.
    ///
    /// Airports are fetched in one batch and joined in memory; a route whose
    /// airports have been deleted out from under it is skipped.
    pub async fn get_all_with_airports(&self) -> Result<Vec<RouteWithAirports>, DbErr> {
        let routes = entity::prelude::Route::find()
            .order_by_asc(entity::route::Column::SourceId)
            .order_by_asc(entity::route::Column::DestinationId)
            .all(self.db)
            .await?;

        let airport_ids: Vec<i32> = routes
            .iter()
            .flat_map(|r| [r.source_id, r.destination_id])
            .collect();
        let airports: HashMap<i32, entity::airport::Model> = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(airport_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(routes
            .into_iter()
            .filter_map(|route| {
                let source = airports.get(&route.source_id)?.clone();
                let destination = airports.get(&route.destination_id)?.clone();
                Some(RouteWithAirports {
                    route,
                    source,
                    destination,
                })
            })
            .collect())
    }

    /// Finds a route by id with its endpoint airports resolved.
    pub async fn find_by_id_with_airports(
        &self,
        id: i32,
    ) -> Result<Option<RouteWithAirports>, DbErr> {
        let Some(route) = entity::prelude::Route::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let source = entity::prelude::Airport::find_by_id(route.source_id)
            .one(self.db)
            .await?;
        let destination = entity::prelude::Airport::find_by_id(route.destination_id)
            .one(self.db)
            .await?;

        Ok(match (source, destination) {
            (Some(source), Some(destination)) => Some(RouteWithAirports {
                route,
                source,
                destination,
            }),
            _ => None,
        })
    }

    /// Finds a bare route row by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::route::Model>, DbErr> {
        entity::prelude::Route::find_by_id(id).one(self.db).await
    }
}
