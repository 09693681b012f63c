use axum::Json;
use contracts::domain::a001_character::HealthStatus;

/// GET /api/health
pub async fn check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        message: "Character tracker API is running".to_string(),
    })
}
