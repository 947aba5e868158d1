use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        camp::CampDto,
        patch::PatchOperationDto,
    },
    server::{
        controller::param::IncludeSpeakersParam,
        error::AppError,
        middleware::json::parse_body,
        model::{
            camp::{CampParams, UpdateCampParams},
            link::LinkContext,
        },
        service::camp::CampService,
        state::AppState,
    },
};

pub static CAMP_TAG: &str = "camp";

/// Lists all camps ordered by event date.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/camps",
    tag = CAMP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved camps", body = Vec<CampDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camps(
    State(state): State<AppState>,
    links: LinkContext,
) -> Result<impl IntoResponse, AppError> {
    let camps = CampService::new(&state.db).get_all().await?;

    let dtos: Vec<CampDto> = camps.into_iter().map(|camp| camp.into_dto(&links)).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Gets one camp by its moniker.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `moniker` - Camp moniker, matched case-insensitively
/// - `includeSpeakers` - Embed the speakers and their talks
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        IncludeSpeakersParam
    ),
    responses(
        (status = 200, description = "Successfully retrieved camp", body = CampDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camp(
    State(state): State<AppState>,
    links: LinkContext,
    Path(moniker): Path<String>,
    Query(params): Query<IncludeSpeakersParam>,
) -> Result<impl IntoResponse, AppError> {
    let camp = CampService::new(&state.db)
        .get_by_moniker(&moniker, params.include_speakers)
        .await?;

    Ok((StatusCode::OK, Json(camp.into_dto(&links))))
}

/// Creates a camp.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - With the camp and its URL in `Location`
/// - `400 Bad Request` - Invalid payload or moniker already in use
#[utoipa::path(
    post,
    path = "/api/camps",
    tag = CAMP_TAG,
    request_body = CampDto,
    responses(
        (status = 201, description = "Successfully created camp", body = CampDto),
        (status = 400, description = "Invalid camp data or duplicate moniker", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camp(
    State(state): State<AppState>,
    links: LinkContext,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CampDto = parse_body(&body)?;
    let params = CampParams::from_dto(payload)?;

    let camp = CampService::new(&state.db).create(params).await?;
    let dto = camp.into_dto(&links);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, dto.url.clone())],
        Json(dto),
    ))
}

/// Updates a camp; fields absent from the body keep their stored values.
///
/// # Access Control
/// - Public
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    request_body = CampDto,
    responses(
        (status = 200, description = "Successfully updated camp", body = CampDto),
        (status = 400, description = "Invalid camp data or duplicate moniker", body = ValidationErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 409, description = "Camp was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camp(
    State(state): State<AppState>,
    links: LinkContext,
    Path(moniker): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CampDto = parse_body(&body)?;
    let params = UpdateCampParams::from_dto(payload)?;

    let camp = CampService::new(&state.db).update(&moniker, params).await?;

    Ok((StatusCode::OK, Json(camp.into_dto(&links))))
}

/// Applies a JSON Patch document to a camp.
///
/// # Access Control
/// - Public
#[utoipa::path(
    patch,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    request_body = Vec<PatchOperationDto>,
    responses(
        (status = 200, description = "Successfully patched camp", body = CampDto),
        (status = 400, description = "Invalid patch document or patched camp", body = ValidationErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 409, description = "Camp was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_camp(
    State(state): State<AppState>,
    links: LinkContext,
    Path(moniker): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let operations: Vec<PatchOperationDto> = parse_body(&body)?;

    let camp = CampService::new(&state.db)
        .patch(&moniker, &operations, &links)
        .await?;

    Ok((StatusCode::OK, Json(camp.into_dto(&links))))
}

/// Deletes a camp with its speakers and talks.
///
/// # Access Control
/// - Public
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}",
    tag = CAMP_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    responses(
        (status = 200, description = "Successfully deleted camp"),
        (status = 400, description = "Camp could not be deleted", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CampService::new(&state.db)
        .delete(&moniker, &state.talk_tags)
        .await?;

    Ok(StatusCode::OK)
}
