use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde::Serialize;

use super::error::INTERNAL_ERROR;

/// Serializa `body` como JSON e monta a resposta com o status informado.
///
/// Se a serialização falhar não dá para confiar em JSON, então responde
/// 500 com texto puro.
pub fn respond_json<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(bytes),
        Err(e) => {
            log::error!("❌ Failed to encode response: {}", e);
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(INTERNAL_ERROR)
        }
    }
}
