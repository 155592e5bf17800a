pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_airport_table;
mod m20260301_000003_create_airplane_type_table;
mod m20260301_000004_create_airplane_table;
mod m20260301_000005_create_crew_table;
mod m20260301_000006_create_route_table;
mod m20260301_000007_create_flight_table;
mod m20260301_000008_create_flight_crew_table;
mod m20260301_000009_create_order_table;
mod m20260301_000010_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_airport_table::Migration),
            Box::new(m20260301_000003_create_airplane_type_table::Migration),
            Box::new(m20260301_000004_create_airplane_table::Migration),
            Box::new(m20260301_000005_create_crew_table::Migration),
            Box::new(m20260301_000006_create_route_table::Migration),
            Box::new(m20260301_000007_create_flight_table::Migration),
            Box::new(m20260301_000008_create_flight_crew_table::Migration),
            Box::new(m20260301_000009_create_order_table::Migration),
            Box::new(m20260301_000010_create_ticket_table::Migration),
        ]
    }
}
