use crate::models::prompt::{ChatResponse, ErrorBody, PromptRequest};
use crate::services::TextProvider;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, warn};

pub async fn chat_handler(
    request: web::Json<PromptRequest>,
    provider: web::Data<dyn TextProvider>,
) -> impl Responder {
    let prompt = request.into_inner().prompt;

    match provider.generate(&prompt).await {
        Ok(text) => HttpResponse::Ok().json(ChatResponse { response: text }),
        Err(provider_err) => {
            error!(
                "generation failed for model {}: {}",
                provider.model(),
                provider_err
            );

            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Failed to generate a response".to_string(),
                details: provider_err.to_string(),
            })
        }
    }
}

/// Rejects bodies that are not `{"prompt": <string>}` before the handler runs.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("rejected chat request: {}", err);

    let response = HttpResponse::BadRequest().json(ErrorBody {
        error: "Invalid request body".to_string(),
        details: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}
