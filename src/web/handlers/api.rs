//! JSON endpoints exposing the same data as the HTML pages.

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::error;
use serde_json::json;

use crate::web::models::ErrorResponse;
use crate::web::server::AppState;

/// Service health, version and server time
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}

/// All project submissions as JSON, newest first
pub async fn list_projects(data: web::Data<AppState>) -> impl Responder {
    match data.store.all_projects().await {
        Ok(projects) => HttpResponse::Ok().json(json!({
            "count": projects.len(),
            "projects": projects,
        })),
        Err(e) => {
            error!("Error listing projects: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                success: false,
                error: format!("{}", e),
                error_code: "store_error".to_string(),
            })
        }
    }
}

/// All job postings as JSON, newest first
pub async fn list_postings(data: web::Data<AppState>) -> impl Responder {
    match data.store.all_postings().await {
        Ok(postings) => HttpResponse::Ok().json(json!({
            "count": postings.len(),
            "postings": postings,
        })),
        Err(e) => {
            error!("Error listing postings: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                success: false,
                error: format!("{}", e),
                error_code: "store_error".to_string(),
            })
        }
    }
}
