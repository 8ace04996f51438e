use actix_web::{web, HttpResponse, Responder};
use handlebars::Handlebars;
use serde_json::json;
use std::sync::Arc;
use log::error;

use crate::web::server::AppState;

/// Timestamp format shown on rendered pages
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shared handlebars instance
lazy_static::lazy_static! {
    static ref HBS: Arc<Handlebars<'static>> = {
        let mut hbs = Handlebars::new();
        // Register templates
        if let Err(e) = hbs.register_templates_directory(".hbs", "./src/web/templates") {
            error!("Error registering Handlebars templates: {}", e);
        }
        Arc::new(hbs)
    };
}

/// Serve the client submission form
pub async fn index() -> impl Responder {
    let context = json!({
        "title": "Submit a Project | Rallypoint",
    });

    match HBS.render("index", &context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template rendering error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

/// Serve the thank-you page shown after a successful submission
pub async fn submission_success() -> impl Responder {
    let context = json!({
        "title": "Thank You | Rallypoint",
    });

    match HBS.render("success", &context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template rendering error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

/// Serve the admin dashboard with all submissions and the posting form
pub async fn admin_dashboard(data: web::Data<AppState>) -> impl Responder {
    let projects = match data.store.all_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            error!("Error loading projects for admin dashboard: {}", e);
            return HttpResponse::InternalServerError().body("Failed to load projects");
        }
    };

    let rows: Vec<serde_json::Value> = projects
        .iter()
        .map(|project| {
            json!({
                "id": project.id,
                "name": project.name,
                "email": project.email,
                "title": project.title,
                "description": project.description,
                "status": project.status.as_str(),
                "created_at": project.created_at.format(DISPLAY_FORMAT).to_string(),
            })
        })
        .collect();

    let context = json!({
        "title": "Admin Dashboard | Rallypoint",
        "project_count": rows.len(),
        "projects": rows,
    });

    match HBS.render("admin", &context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template rendering error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

/// Serve the public list of freelance opportunities
pub async fn postings(data: web::Data<AppState>) -> impl Responder {
    let postings = match data.store.all_postings().await {
        Ok(postings) => postings,
        Err(e) => {
            error!("Error loading postings: {}", e);
            return HttpResponse::InternalServerError().body("Failed to load postings");
        }
    };

    let rows: Vec<serde_json::Value> = postings
        .iter()
        .map(|posting| {
            json!({
                "id": posting.id,
                "title": posting.title,
                "description": posting.description,
                "posted_at": posting.posted_at.format(DISPLAY_FORMAT).to_string(),
            })
        })
        .collect();

    let context = json!({
        "title": "Open Opportunities | Rallypoint",
        "postings": rows,
    });

    match HBS.render("postings", &context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            error!("Template rendering error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

/// 404 Not Found handler
pub async fn not_found() -> impl Responder {
    let context = json!({
        "title": "Page Not Found | Rallypoint",
    });

    match HBS.render("404", &context) {
        Ok(body) => HttpResponse::NotFound().content_type("text/html").body(body),
        Err(e) => {
            error!("Template rendering error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}
