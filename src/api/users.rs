use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::{
    database::UserStore,
    models::{UserEnvelope, UserPayload, UsersEnvelope},
    services::user_service,
    utils::{respond_json, AppError, ErrorResponse},
};

/// Rotas de /api/users
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api/users")
            .route("", web::get().to(get_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

/// Corpo JSON aceito com qualquer Content-Type; erro de decode vira 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, req| {
            log::warn!("⚠️ Malformed body on {} {}: {}", req.method(), req.path(), err);
            AppError::MalformedBody(err.to_string()).into()
        })
}

fn fail(e: AppError) -> HttpResponse {
    if e.status_code().is_server_error() {
        log::error!("❌ {}", e);
    } else {
        log::warn!("⚠️ {}", e);
    }
    e.error_response()
}

/// GET /api/users/{id} - Busca usuário pelo id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, description = "Unknown identifier", body = ErrorResponse)
    )
)]
pub async fn get_user(store: web::Data<UserStore>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔍 GET /api/users/{}", id);

    match user_service::find_user(&store, &id) {
        Ok(user) => respond_json(StatusCode::OK, &UserEnvelope { user }),
        Err(e) => fail(e),
    }
}

/// GET /api/users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, in no particular order", body = UsersEnvelope)
    )
)]
pub async fn get_users(store: web::Data<UserStore>) -> HttpResponse {
    match user_service::list_users(&store) {
        Ok(users) => {
            log::info!("📋 GET /api/users - {} users", users.len());
            respond_json(StatusCode::OK, &UsersEnvelope { users })
        }
        Err(e) => fail(e),
    }
}

/// POST /api/users - Cria usuário (todos os campos obrigatórios)
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing fields or malformed body", body = ErrorResponse)
    )
)]
pub async fn create_user(store: web::Data<UserStore>, body: web::Json<UserPayload>) -> HttpResponse {
    log::info!("📝 POST /api/users");

    match user_service::create_user(&store, body.into_inner()) {
        Ok(user) => respond_json(StatusCode::CREATED, &UserEnvelope { user }),
        Err(e) => fail(e),
    }
}

/// PUT /api/users/{id} - Atualiza os campos enviados não vazios
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Merged user as stored", body = UserEnvelope),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Unknown identifier", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
    body: web::Json<UserPayload>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔧 PUT /api/users/{}", id);

    match user_service::update_user(&store, &id, body.into_inner()) {
        Ok(user) => respond_json(StatusCode::OK, &UserEnvelope { user }),
        Err(e) => fail(e),
    }
}

/// DELETE /api/users/{id} - Remove e devolve o usuário removido
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User as it was before removal", body = UserEnvelope),
        (status = 404, description = "Unknown identifier", body = ErrorResponse)
    )
)]
pub async fn delete_user(store: web::Data<UserStore>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /api/users/{}", id);

    match user_service::delete_user(&store, &id) {
        Ok(user) => respond_json(StatusCode::OK, &UserEnvelope { user }),
        Err(e) => fail(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{MALFORMED_BODY, MISSING_FIELDS, USER_NOT_FOUND};
    use actix_web::{http::header::ContentType, test, App};
    use serde_json::{json, Value};

    fn store() -> web::Data<UserStore> {
        web::Data::new(UserStore::new())
    }

    #[actix_web::test]
    async fn test_user_lifecycle() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "biography": "Mathematician"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["user"]["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let req = test::TestRequest::get().uri(&format!("/api/users/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(json!({ "first_name": "Augusta" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(
            updated,
            json!({
                "user": {
                    "id": id,
                    "first_name": "Augusta",
                    "last_name": "Lovelace",
                    "biography": "Mathematician"
                }
            })
        );

        let req = test::TestRequest::delete().uri(&format!("/api/users/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let deleted: Value = test::read_body_json(resp).await;
        assert_eq!(deleted, updated);

        let req = test::TestRequest::get().uri(&format!("/api/users/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": USER_NOT_FOUND }));
    }

    #[actix_web::test]
    async fn test_list_users() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "users": [] }));

        for name in ["Ada", "Grace"] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .set_json(json!({ "first_name": name, "last_name": "X", "biography": "Y" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_ne!(users[0]["id"], users[1]["id"]);
    }

    #[actix_web::test]
    async fn test_create_with_missing_fields() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "first_name": "Ada", "last_name": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": MISSING_FIELDS }));
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], MALFORMED_BODY);
        assert!(body["error"].is_string());

        // decode acontece antes da busca pelo id
        let req = test::TestRequest::put()
            .uri("/api/users/unknown")
            .insert_header(ContentType::json())
            .set_payload(r#"{"first_name": 1}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_body_is_decoded_regardless_of_content_type() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;
        let payload = r#"{"first_name":"Ada","last_name":"Lovelace","biography":"Mathematician"}"#;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(ContentType::plaintext())
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let app = test::init_service(App::new().app_data(store()).configure(configure)).await;

        let requests = vec![
            test::TestRequest::get().uri("/api/users/missing").to_request(),
            test::TestRequest::put()
                .uri("/api/users/missing")
                .set_json(json!({ "first_name": "Ada" }))
                .to_request(),
            test::TestRequest::delete().uri("/api/users/missing").to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], USER_NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn test_delete_removes_from_list() {
        let store = store();
        let app = test::init_service(App::new().app_data(store.clone()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "first_name": "Ada", "last_name": "Lovelace", "biography": "Mathematician" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["user"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete().uri(&format!("/api/users/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "users": [] }));
        assert_eq!(store.len().unwrap(), 0);
    }
}
