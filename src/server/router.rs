use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{airplane, airplane_type, airport, crew, flight, order, route, ticket, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        airport::get_airports,
        airport::create_airport,
        airport::get_airport,
        route::get_routes,
        route::create_route,
        route::get_route,
        airplane_type::get_airplane_types,
        airplane_type::create_airplane_type,
        airplane_type::get_airplane_type,
        airplane::get_airplanes,
        airplane::create_airplane,
        airplane::get_airplane,
        airplane::upload_airplane_image,
        crew::get_crews,
        crew::create_crew,
        crew::get_crew,
        flight::get_flights,
        flight::create_flight,
        flight::get_flight,
        flight::update_flight,
        flight::delete_flight,
        flight::available_seats,
        ticket::get_tickets,
        ticket::create_ticket,
        ticket::get_ticket,
        ticket::update_ticket,
        ticket::delete_ticket,
        order::get_orders,
        order::create_order,
        order::my_tickets,
        order::get_order,
        user::register,
        user::token,
        user::get_me,
        user::update_me,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::ValidationErrorDto,
        model::airport::AirportDto,
        model::airport::CreateAirportDto,
        model::route::RouteDto,
        model::route::CreateRouteDto,
        model::airplane::AirplaneTypeDto,
        model::airplane::CreateAirplaneTypeDto,
        model::airplane::AirplaneDto,
        model::airplane::CreateAirplaneDto,
        model::crew::CrewDto,
        model::crew::CreateCrewDto,
        model::flight::FlightListDto,
        model::flight::FlightDetailDto,
        model::flight::CreateFlightDto,
        model::flight::AvailableSeatsDto,
        model::ticket::TicketListDto,
        model::ticket::TicketDetailDto,
        model::ticket::CreateTicketDto,
        model::ticket::OrderTicketDto,
        model::order::OrderListDto,
        model::order::OrderDetailDto,
        model::order::CreateOrderDto,
        model::order::PaginatedOrdersDto,
        model::user::UserDto,
        model::user::RegisterUserDto,
        model::user::TokenRequestDto,
        model::user::TokenDto,
        model::user::UpdateProfileDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    // Account creation is the only anonymous write; throttle it per peer.
    let register_governor = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("governor configuration is valid"),
    );

    Router::new()
        .route(
            "/api/airports",
            get(airport::get_airports).post(airport::create_airport),
        )
        .route("/api/airports/{id}", get(airport::get_airport))
        .route(
            "/api/routes",
            get(route::get_routes).post(route::create_route),
        )
        .route("/api/routes/{id}", get(route::get_route))
        .route(
            "/api/airplane-types",
            get(airplane_type::get_airplane_types).post(airplane_type::create_airplane_type),
        )
        .route(
            "/api/airplane-types/{id}",
            get(airplane_type::get_airplane_type),
        )
        .route(
            "/api/airplanes",
            get(airplane::get_airplanes).post(airplane::create_airplane),
        )
        .route("/api/airplanes/{id}", get(airplane::get_airplane))
        .route(
            "/api/airplanes/{id}/image",
            post(airplane::upload_airplane_image),
        )
        .route("/api/crews", get(crew::get_crews).post(crew::create_crew))
        .route("/api/crews/{id}", get(crew::get_crew))
        .route(
            "/api/flights",
            get(flight::get_flights).post(flight::create_flight),
        )
        .route(
            "/api/flights/{id}",
            get(flight::get_flight)
                .put(flight::update_flight)
                .delete(flight::delete_flight),
        )
        .route(
            "/api/flights/{id}/available_seats",
            get(flight::available_seats),
        )
        .route(
            "/api/tickets",
            get(ticket::get_tickets).post(ticket::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(ticket::get_ticket)
                .put(ticket::update_ticket)
                .delete(ticket::delete_ticket),
        )
        .route(
            "/api/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route("/api/orders/my_tickets", get(order::my_tickets))
        .route("/api/orders/{id}", get(order::get_order))
        .route(
            "/api/user/register",
            post(user::register).layer(GovernorLayer::new(register_governor)),
        )
        .route("/api/user/token", post(user::token))
        .route("/api/user/me", get(user::get_me).patch(user::update_me))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
