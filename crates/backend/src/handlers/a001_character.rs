use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_character::{
    CharacterRecord, CharacterSummary, CharacterUpdate, SaveAck,
};

use crate::domain::a001_character;
use crate::shared::data::db::get_connection;

/// GET /api/character/:id
pub async fn get_by_id(Path(id): Path<i32>) -> Result<Json<CharacterRecord>, StatusCode> {
    match a001_character::service::get_sheet(get_connection(), id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load character {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/character/:id
pub async fn update(
    Path(id): Path<i32>,
    Json(update): Json<CharacterUpdate>,
) -> Result<Json<SaveAck>, StatusCode> {
    match a001_character::service::save_sheet(get_connection(), id, &update).await {
        Ok(()) => Ok(Json(SaveAck {
            success: true,
            message: "Character updated successfully".to_string(),
        })),
        Err(e) => {
            tracing::error!("Failed to save character {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/characters
pub async fn list_all() -> Result<Json<Vec<CharacterSummary>>, StatusCode> {
    match a001_character::service::list_summaries(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list characters: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
