use actix_web::{middleware, web, App, HttpServer};
use actix_files as fs;
use log::info;

use crate::config::AppConfig;
use crate::store::Store;
use crate::web::handlers;

/// Start the web server for the Rallypoint UI
pub async fn start_web_server(config: AppConfig, store: Store) -> std::io::Result<()> {
    info!(
        "Starting web server on http://{}:{}",
        config.host, config.port
    );

    // Create shared application state
    let app_state = web::Data::new(AppState { store });
    let bind_addr = (config.host, config.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            // Static files
            .service(fs::Files::new("/static", "./src/web/static"))
            // API routes
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::api::health))
                    .route("/projects", web::get().to(handlers::api::list_projects))
                    .route("/postings", web::get().to(handlers::api::list_postings)),
            )
            // Page routes
            .route("/", web::get().to(handlers::pages::index))
            .route("/", web::post().to(handlers::projects::submit_project))
            .route("/success", web::get().to(handlers::pages::submission_success))
            .route("/admin", web::get().to(handlers::pages::admin_dashboard))
            .route("/admin", web::post().to(handlers::postings::create_posting))
            .route("/admin/status", web::post().to(handlers::projects::update_status))
            .route("/postings", web::get().to(handlers::pages::postings))
            // Default route for 404
            .default_service(web::get().to(handlers::pages::not_found))
    })
    .bind(bind_addr)?
    .run();

    server.await
}

/// Shared application state for web handlers
pub struct AppState {
    pub store: Store,
}
