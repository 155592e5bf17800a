use crate::model::airplane::{AirplaneDto, AirplaneTypeDto};

/// Airplane with its type resolved, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct AirplaneWithType {
    pub airplane: entity::airplane::Model,
    pub airplane_type: entity::airplane_type::Model,
}

impl AirplaneWithType {
    pub fn new(
        (airplane, airplane_type): (entity::airplane::Model, entity::airplane_type::Model),
    ) -> Self {
        Self {
            airplane,
            airplane_type,
        }
    }

    pub fn into_dto(self) -> AirplaneDto {
        AirplaneDto {
            id: self.airplane.id,
            name: self.airplane.name,
            rows: self.airplane.rows,
            seats_in_row: self.airplane.seats_in_row,
            airplane_type: AirplaneTypeDto {
                id: self.airplane_type.id,
                name: self.airplane_type.name,
            },
            image: self.airplane.image,
        }
    }
}
