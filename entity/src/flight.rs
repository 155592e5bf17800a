use sea_orm::entity::prelude::*;

/// A scheduled operation of one airplane over one route. Crew assignments
/// live in the `flight_crew` join table. `arrival_time` is not constrained to
/// follow `departure_time`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: DateTimeUtc,
    pub arrival_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route::Entity",
        from = "Column::RouteId",
        to = "super::route::Column::Id"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::airplane::Entity",
        from = "Column::AirplaneId",
        to = "super::airplane::Column::Id"
    )]
    Airplane,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
    #[sea_orm(has_many = "super::flight_crew::Entity")]
    FlightCrew,
}

impl Related<super::route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Route.def()
    }
}

impl Related<super::airplane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airplane.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::flight_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightCrew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
