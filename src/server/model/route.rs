use crate::model::{airport::AirportDto, route::RouteDto};

/// Route with both endpoint airports resolved, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct RouteWithAirports {
    pub route: entity::route::Model,
    pub source: entity::airport::Model,
    pub destination: entity::airport::Model,
}

impl RouteWithAirports {
    pub fn into_dto(self) -> RouteDto {
        RouteDto {
            id: self.route.id,
            source: AirportDto {
                id: self.source.id,
                name: self.source.name,
                closest_big_city: self.source.closest_big_city,
            },
            destination: AirportDto {
                id: self.destination.id,
                name: self.destination.name,
                closest_big_city: self.destination.closest_big_city,
            },
            distance: self.route.distance,
        }
    }
}
