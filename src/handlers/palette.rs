//! Palette HTTP handlers.

use crate::{
    error::AppError,
    models::missing_field_message,
    models::palette::{Palette, PaletteRequest},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Get a single palette by id.
///
/// # Errors
/// Returns an error if the lookup fails or no palette matches.
pub async fn get_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Palette>, AppError> {
    let palette = match id.parse::<i64>() {
        Ok(palette_id) => state.db.palettes.get(palette_id)?,
        Err(_) => None,
    };
    match palette {
        Some(palette) => Ok(Json(palette)),
        None => Err(AppError::NotFound(format!(
            "No matching palette found with id {id}."
        ))),
    }
}

/// Create a palette from the posted fields. All six fields plus `project_id`
/// are required; the 422 message names the first missing one.
///
/// # Errors
/// Returns an error if a field is missing, the name is already used in the
/// project, or the insert fails (including an unknown `project_id`, which
/// the foreign key rejects).
pub async fn create_palette(
    State(state): State<AppState>,
    payload: Option<Json<PaletteRequest>>,
) -> Result<(StatusCode, Json<Palette>), AppError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let new_palette = req
        .into_create()
        .map_err(|field| AppError::UnprocessableEntity(missing_field_message(field)))?;

    let palette = state.db.palettes.create(&new_palette)?;
    Ok((StatusCode::CREATED, Json(palette)))
}

/// Replace a palette's name and colors. `project_id` is not accepted here;
/// updates never move a palette to another project.
///
/// # Errors
/// Returns an error if a field is missing, the palette is absent, or the
/// update fails.
pub async fn update_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<PaletteRequest>>,
) -> Result<StatusCode, AppError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let fields = req
        .into_update()
        .map_err(|field| AppError::UnprocessableEntity(missing_field_message(field)))?;

    let updated = match id.parse::<i64>() {
        Ok(palette_id) => state.db.palettes.update(palette_id, &fields)?,
        Err(_) => false,
    };
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No matching palette found with id {id}."
        )))
    }
}

/// Delete one palette by id.
///
/// # Errors
/// Returns an error if the palette is absent or the delete fails.
pub async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = match id.parse::<i64>() {
        Ok(palette_id) => state.db.palettes.delete(palette_id)?,
        Err(_) => false,
    };
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No matching palette found with id {id}"
        )))
    }
}
