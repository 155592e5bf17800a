mod flight;
mod order;
mod ticket;
mod user;
