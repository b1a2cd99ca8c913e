use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD over users kept in an in-memory store. Nothing survives a restart.\n\n**Identifiers** are generated by the server on create and never accepted from the client."
    ),
    paths(
        // Users
        crate::api::users::get_user,
        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::models::UserEnvelope,
            crate::models::UsersEnvelope,
            crate::utils::ErrorResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete users."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;
