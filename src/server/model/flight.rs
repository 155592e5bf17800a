//! Flight operation parameter types.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::flight::CreateFlightDto;

/// Parameters for creating or replacing a flight. The crew vector is the
/// complete set of assigned crew member ids.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<i32>,
}

impl CreateFlightParams {
    pub fn from_dto(dto: CreateFlightDto) -> Self {
        Self {
            route_id: dto.route,
            airplane_id: dto.airplane,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
            crew: dto.crew,
        }
    }
}

/// Optional flight listing filters; present filters compose with AND.
#[derive(Debug, Clone, Default)]
pub struct FlightFilters {
    /// Calendar-day match against the departure timestamp.
    pub date: Option<NaiveDate>,
    pub route_id: Option<i32>,
    pub airplane_id: Option<i32>,
}
