//! Form handler for admin-created job postings.

use actix_web::{http::header, web, HttpResponse, Responder};
use log::{error, warn};

use crate::web::models::PostingForm;
use crate::web::server::AppState;

/// Handle creation of a new freelance job posting by the admin.
///
/// The posting is stored only when both fields are non-blank; the dashboard
/// is reloaded either way.
pub async fn create_posting(
    form: web::Form<PostingForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    if form.is_complete() {
        if let Err(e) = data.store.add_posting(&form.title, &form.description).await {
            error!("Error storing job posting: {}", e);
            return HttpResponse::InternalServerError().body("Failed to store posting");
        }
    } else {
        warn!("Dropping incomplete job posting '{}'", form.title);
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin"))
        .finish()
}
