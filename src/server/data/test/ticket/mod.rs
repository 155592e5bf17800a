use crate::server::{data::ticket::TicketRepository, model::ticket::CreateTicketParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_owner;
mod get_filtered;
