use actix_web::{HttpServer, web};
use blogging_website::app::create_app;
use blogging_website::config::AppConfig;
use blogging_website::post::post_store::PostStore;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // One store for every worker, empty until the first post arrives
    let post_store = web::Data::new(PostStore::new());
    let app_config = config.clone();

    let server = HttpServer::new(move || create_app(post_store.clone(), &app_config))
        .bind((config.host.as_str(), config.port))?;

    info!("Server is running on port {}", config.port);
    server.run().await?;

    info!("Server has stopped");

    Ok(())
}
