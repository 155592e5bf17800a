use sea_orm::entity::prelude::*;

/// A seat reservation on one flight. The (flight_id, row, seat) triple is
/// covered by a unique index created in the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seat: i32,
    pub flight_id: i32,
    pub order_id: i32,
    // `row` is declared last: the DeriveEntityModel-generated
    // `from_query_result_nullable` reads columns via a local binding also named
    // `row` (the &QueryResult), so a field called `row` shadows it for any
    // field read afterwards. Keeping it last avoids the shadow. Column mapping
    // is by name, so declaration order has no runtime effect.
    pub row: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
