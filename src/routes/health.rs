use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Saude {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = Saude),
    ),
    tag = "Saude"
)]
pub async fn health_check() -> Json<Saude> {
    Json(Saude {
        status: "ok".to_string(),
    })
}
