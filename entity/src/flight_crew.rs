use sea_orm::entity::prelude::*;

/// Join table assigning crew members to flights.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_crew")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub crew_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::crew::Entity",
        from = "Column::CrewId",
        to = "super::crew::Column::Id"
    )]
    Crew,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
