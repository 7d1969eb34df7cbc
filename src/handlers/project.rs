//! Project HTTP handlers.

use crate::{
    error::AppError,
    models::palette::Palette,
    models::project::{Project, ProjectRequest},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub name: Option<String>,
}

// Path ids are opaque lookup keys: a non-numeric id never matches anything
// and falls through to the not-found message citing it verbatim.
fn find_project(state: &AppState, id: &str) -> Result<Option<Project>, AppError> {
    match id.parse::<i64>() {
        Ok(id) => state.db.projects.get(id),
        Err(_) => Ok(None),
    }
}

/// List all projects, optionally filtered by a case-insensitive name
/// substring. An empty result is reported as not found, not as an error.
///
/// # Errors
/// Returns an error if the listing fails or nothing matches.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.db.projects.list(query.name.as_deref())?;
    if projects.is_empty() {
        return Err(AppError::NotFound("No matching projects found.".to_string()));
    }
    Ok(Json(projects))
}

/// Get a single project by id.
///
/// # Errors
/// Returns an error if the lookup fails or no project matches.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    match find_project(&state, &id)? {
        Some(project) => Ok(Json(project)),
        None => Err(AppError::NotFound(format!(
            "No matching project found with id {id}."
        ))),
    }
}

/// List the palettes owned by a project. The project must exist; a project
/// with zero palettes yields an empty array, not a 404.
///
/// # Errors
/// Returns an error if the project is absent or a select fails.
pub async fn list_project_palettes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Palette>>, AppError> {
    let Some(project) = find_project(&state, &id)? else {
        return Err(AppError::NotFound(format!(
            "No matching palettes found with project id {id}."
        )));
    };

    let palettes = state.db.palettes.list_for_project(project.id)?;
    Ok(Json(palettes))
}

/// Create a project from the posted name.
///
/// # Errors
/// Returns an error if the name is missing, already taken, or the insert
/// fails.
pub async fn create_project(
    State(state): State<AppState>,
    payload: Option<Json<ProjectRequest>>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let Some(name) = req.name() else {
        return Err(AppError::UnprocessableEntity(
            "No project name provided".to_string(),
        ));
    };

    let project = state.db.projects.create(name)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Rename a project in place.
///
/// # Errors
/// Returns an error if the name is missing, the project is absent, or the
/// update fails.
pub async fn rename_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<ProjectRequest>>,
) -> Result<StatusCode, AppError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();
    let Some(name) = req.name() else {
        return Err(AppError::UnprocessableEntity(
            "Please provide a name.".to_string(),
        ));
    };

    let renamed = match id.parse::<i64>() {
        Ok(project_id) => state.db.projects.rename(project_id, name)?,
        Err(_) => false,
    };
    if renamed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No matching project found with id {id}."
        )))
    }
}

/// Delete a project and, in the same transaction, every palette it owns.
///
/// # Errors
/// Returns an error if the project is absent or the delete fails.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let deleted = match id.parse::<i64>() {
        Ok(project_id) => state.db.projects.delete(project_id)?,
        Err(_) => false,
    };
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No matching project found with id {id}"
        )))
    }
}
