//! Form handlers for client project submissions.

use actix_web::{http::header, web, HttpResponse, Responder};
use log::{error, warn};

use crate::store::ProjectStatus;
use crate::web::models::{ProjectForm, StatusForm};
use crate::web::server::AppState;

/// Handle submission of a new project from the client form.
///
/// The submission is stored only when all four fields are non-blank; an
/// incomplete form is dropped and the client is still sent to the success
/// page. The redirect does not depend on whether a row was written.
pub async fn submit_project(
    form: web::Form<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();

    if form.is_complete() {
        if let Err(e) = data
            .store
            .add_project(&form.name, &form.email, &form.title, &form.description)
            .await
        {
            error!("Error storing project submission: {}", e);
            return HttpResponse::InternalServerError().body("Failed to store submission");
        }
    } else {
        warn!(
            "Dropping incomplete project submission from '{}'",
            form.email
        );
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/success"))
        .finish()
}

/// Handle a project status change from the admin dashboard.
///
/// Unknown status values and ids are logged and ignored; the dashboard is
/// reloaded either way.
pub async fn update_status(
    form: web::Form<StatusForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match ProjectStatus::parse(&form.status) {
        Some(status) => match data.store.set_project_status(form.id, status).await {
            Ok(true) => {}
            Ok(false) => warn!("Status update for unknown project id {}", form.id),
            Err(e) => {
                error!("Error updating status for project {}: {}", form.id, e);
                return HttpResponse::InternalServerError().body("Failed to update status");
            }
        },
        None => warn!("Ignoring status update with unknown status '{}'", form.status),
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin"))
        .finish()
}
