mod flight;
mod ticket;
mod user;
