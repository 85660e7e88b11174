use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use gemini_chat_proxy::config::Config;
use gemini_chat_proxy::routes;
use gemini_chat_proxy::services::{gemini_service::GeminiService, TextProvider};
use log::{error, info};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let service = GeminiService::new(config.gemini.clone()).map_err(|e| {
        error!("failed to create gemini client: {}", e);
        io::Error::other(e)
    })?;
    let provider: web::Data<dyn TextProvider> =
        web::Data::from(Arc::new(service) as Arc<dyn TextProvider>);

    info!(
        "listening on {}:{} (model {})",
        config.host, config.port, config.gemini.model
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .service(routes::gemini::chat_routes(provider.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
