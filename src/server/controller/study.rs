use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, study::StudyDto},
    server::{
        error::AppError,
        model::study::{Study, UpsertStudyParams},
        service::study::StudyService,
        state::AppState,
    },
};

/// Tag for grouping study endpoints in OpenAPI documentation
pub static STUDY_TAG: &str = "study";

/// Decodes the JSON request body into a study DTO.
///
/// A malformed body is reported as a 400 bad request with the underlying
/// cause logged, before any store interaction.
fn parse_study_payload(payload: Result<Json<StudyDto>, JsonRejection>) -> Result<StudyDto, AppError> {
    let Json(payload) = payload.map_err(|err| {
        tracing::error!("Failed to parse study payload: {}", err);
        AppError::BadRequest("Could not parse JSON".to_string())
    })?;

    Ok(payload)
}

/// List all studies.
///
/// Returns every study in the collection with its nested levels and values.
/// The order of the returned array is not guaranteed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - JSON array of studies (possibly empty)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/studies",
    tag = STUDY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved studies", body = Vec<StudyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_studies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudyService::new(&state.db);

    let studies = service.list().await?;

    tracing::debug!("Number of studies retrieved {}", studies.len());

    Ok((
        StatusCode::OK,
        Json(
            studies
                .into_iter()
                .map(Study::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create or upsert a study.
///
/// Stores the study from the request body, assigning a new identifier when
/// the body carries none. When the body carries an identifier of an existing
/// study, that study is replaced.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Study document
///
/// # Returns
/// - `200 OK` - The stored study including its assigned identifier
/// - `400 Bad Request` - Malformed body, or the store rejected the upsert
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/studies",
    tag = STUDY_TAG,
    request_body = StudyDto,
    responses(
        (status = 200, description = "Successfully stored study", body = StudyDto),
        (status = 400, description = "Malformed body or store failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_study(
    State(state): State<AppState>,
    payload: Result<Json<StudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_study_payload(payload)?;

    let service = StudyService::new(&state.db);

    // Convert DTO to server model
    let params = UpsertStudyParams::from_dto(payload);

    let study = service.upsert(params).await?;

    // Return the study we just stored so the client can see the id
    Ok((StatusCode::OK, Json(study.into_dto())))
}

/// Get a specific study by identifier.
///
/// Returns the full study document including its nested levels and values.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Study identifier from the path
///
/// # Returns
/// - `200 OK` - Study document
/// - `404 Not Found` - No study with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/studies/{id}",
    tag = STUDY_TAG,
    params(
        ("id" = String, Path, description = "Study identifier")
    ),
    responses(
        (status = 200, description = "Successfully retrieved study", body = StudyDto),
        (status = 404, description = "Study not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudyService::new(&state.db);

    let study = service.get_by_id(&id).await?;

    match study {
        Some(study) => Ok((StatusCode::OK, Json(study.into_dto()))),
        None => Err(AppError::NotFound(format!("Could not find study {}", id))),
    }
}

/// Replace a study by identifier.
///
/// Replaces the complete stored document, including levels and values, with
/// the request body. The path identifier wins over any identifier in the
/// body.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Study identifier from the path
/// - `payload` - Replacement study document
///
/// # Returns
/// - `200 OK` - Empty JSON object
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - No study with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/studies/{id}",
    tag = STUDY_TAG,
    params(
        ("id" = String, Path, description = "Study identifier")
    ),
    request_body = StudyDto,
    responses(
        (status = 200, description = "Successfully replaced study"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Study not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_study_payload(payload)?;

    let service = StudyService::new(&state.db);

    let params = UpsertStudyParams::from_dto(payload);

    let replaced = service.replace(&id, params).await?;

    match replaced {
        Some(_) => Ok((StatusCode::OK, Json(serde_json::json!({})))),
        None => Err(AppError::NotFound(format!("Could not find study {}", id))),
    }
}

/// Delete a study by identifier.
///
/// Removes the study and its nested rows. Deleting an unknown identifier is
/// not an error from the caller's perspective; store failures are logged and
/// swallowed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Study identifier from the path
///
/// # Returns
/// - `200 OK` - Empty JSON object
#[utoipa::path(
    delete,
    path = "/studies/{id}",
    tag = STUDY_TAG,
    params(
        ("id" = String, Path, description = "Study identifier")
    ),
    responses(
        (status = 200, description = "Study removed (or did not exist)")
    ),
)]
pub async fn delete_study(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudyService::new(&state.db);

    if let Err(err) = service.delete(&id).await {
        tracing::error!("Could not delete study {}: {}", id, err);
    }

    Ok((StatusCode::OK, Json(serde_json::json!({}))))
}
