use crate::{
    domain::contact::{models::submission::ContactRequest, ports::ContactService},
    inbound::http::{errors::AppError, SharedContactState},
};
use actix_web::{web, HttpResponse};

#[derive(serde::Serialize)]
struct ContactAccepted {
    success: bool,
    message: &'static str,
}

#[tracing::instrument(
    name = "Receiving a contact submission",
    skip(request, state),
    fields(
        sender_email = %request.email,
        sender_name = %request.name,
    )
)]
pub async fn submit_contact<CS: ContactService>(
    request: web::Json<ContactRequest>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    state.contact_service().submit(request).await?;

    Ok(HttpResponse::Ok().json(ContactAccepted {
        success: true,
        message: "Message sent successfully!",
    }))
}
