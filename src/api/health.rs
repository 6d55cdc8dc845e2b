use actix_web::HttpResponse;

use crate::models::HealthResponse;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn get_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        message: "API Periferia Social operativa".to_string(),
    })
}
