use sea_orm::entity::prelude::*;

/// A directed source -> destination airport pair. Degenerate routes with
/// `source_id == destination_id` are representable on purpose.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::SourceId",
        to = "super::airport::Column::Id"
    )]
    SourceAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DestinationId",
        to = "super::airport::Column::Id"
    )]
    DestinationAirport,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
