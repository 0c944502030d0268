use actix_web::HttpResponse;

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "Server is running!",
    })
}
