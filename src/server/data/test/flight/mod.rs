use crate::server::{
    data::flight::FlightRepository,
    model::flight::{CreateFlightParams, FlightFilters},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_filtered;
mod update;
