use sea_orm::entity::prelude::*;

/// Airplane with a seat grid of `rows` x `seats_in_row`. The optional `image`
/// column stores a path relative to the media root.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airplane")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: i32,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airplane_type::Entity",
        from = "Column::AirplaneTypeId",
        to = "super::airplane_type::Column::Id"
    )]
    AirplaneType,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::airplane_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AirplaneType.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
