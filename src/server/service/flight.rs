use sea_orm::DatabaseConnection;

use crate::{
    model::{
        crew::CrewDto,
        flight::{AvailableSeatsDto, FlightDetailDto, FlightListDto},
    },
    server::{
        data::{
            airplane::AirplaneRepository, crew::CrewRepository, flight::FlightRepository,
            route::RouteRepository, ticket::TicketRepository,
        },
        error::{validation::ValidationError, AppError},
        model::{
            airplane::AirplaneWithType,
            flight::{CreateFlightParams, FlightFilters},
        },
    },
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a flight after checking every referenced object exists.
    ///
    /// # Returns
    /// - `Ok(FlightDetailDto)` - The created flight with relations expanded
    /// - `Err(AppError::ValidationErr)` - Dangling route/airplane/crew id
    pub async fn create(&self, params: CreateFlightParams) -> Result<FlightDetailDto, AppError> {
        self.validate_references(&params).await?;

        let flight = FlightRepository::new(self.db).create(params).await?;

        self.get_detail(flight.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flight not found after creation".to_string()))
    }

    /// Updates a flight, replacing its crew set wholesale.
    pub async fn update(
        &self,
        id: i32,
        params: CreateFlightParams,
    ) -> Result<FlightDetailDto, AppError> {
        let repo = FlightRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Flight not found".to_string()));
        }

        self.validate_references(&params).await?;

        repo.update(id, params).await?;

        self.get_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flight not found after update".to_string()))
    }

    /// Gets flights matching the filters, in the minimal list shape.
    pub async fn list(&self, filters: &FlightFilters) -> Result<Vec<FlightListDto>, AppError> {
        let flights = FlightRepository::new(self.db).get_filtered(filters).await?;

        Ok(flights
            .into_iter()
            .map(|flight| FlightListDto {
                id: flight.id,
                route: flight.route_id,
                departure_time: flight.departure_time,
                arrival_time: flight.arrival_time,
            })
            .collect())
    }

    /// Gets one flight with route, airplane and crew expanded.
    pub async fn get_detail(&self, id: i32) -> Result<Option<FlightDetailDto>, AppError> {
        let repo = FlightRepository::new(self.db);

        let Some(flight) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let route = RouteRepository::new(self.db)
            .find_by_id_with_airports(flight.route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        let airplane = AirplaneRepository::new(self.db)
            .find_by_id_with_type(flight.airplane_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Airplane not found".to_string()))?;

        let crew = repo
            .get_crew(flight.id)
            .await?
            .into_iter()
            .map(|c| CrewDto {
                id: c.id,
                first_name: c.first_name,
                last_name: c.last_name,
            })
            .collect();

        Ok(Some(FlightDetailDto {
            id: flight.id,
            route: route.into_dto(),
            airplane: AirplaneWithType::new(airplane).into_dto(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            crew,
        }))
    }

    /// Deletes a flight; dependent tickets cascade away with it.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(FlightRepository::new(self.db).delete(id).await?)
    }

    /// Computes the remaining seat count for a flight.
    ///
    /// Capacity is `rows * seats_in_row` of the assigned airplane, minus the
    /// number of tickets already booked. Recomputed on demand, never cached.
    pub async fn available_seats(&self, id: i32) -> Result<Option<AvailableSeatsDto>, AppError> {
        let Some(flight) = FlightRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let airplane = AirplaneRepository::new(self.db)
            .find_by_id(flight.airplane_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Airplane not found".to_string()))?;

        let total_seats = i64::from(airplane.rows) * i64::from(airplane.seats_in_row);
        let booked = TicketRepository::new(self.db)
            .count_by_flight(flight.id)
            .await?;

        Ok(Some(AvailableSeatsDto {
            available_seats: total_seats - booked as i64,
        }))
    }

    /// Checks that the route, airplane and every crew id reference existing
    /// rows, failing with a field-keyed error naming the first missing one.
    async fn validate_references(&self, params: &CreateFlightParams) -> Result<(), AppError> {
        if RouteRepository::new(self.db)
            .find_by_id(params.route_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::field("route", "route does not exist").into());
        }

        if AirplaneRepository::new(self.db)
            .find_by_id(params.airplane_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::field("airplane", "airplane does not exist").into());
        }

        let found = CrewRepository::new(self.db)
            .find_by_ids(&params.crew)
            .await?;
        if found.len() != params.crew.len() {
            return Err(
                ValidationError::field("crew", "one or more crew members do not exist").into(),
            );
        }

        Ok(())
    }
}
