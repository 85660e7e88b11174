use crate::handlers;
use crate::services::TextProvider;
use actix_web::{web, Resource};

pub fn chat_routes(provider: web::Data<dyn TextProvider>) -> Resource {
    web::resource("/chat")
        .app_data(provider)
        .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .route(web::post().to(handlers::chat_handler))
}
