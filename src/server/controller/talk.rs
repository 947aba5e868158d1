use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        talk::TalkDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard, conditional::Preconditions, json::parse_body, version::ApiVersion,
        },
        model::{
            link::LinkContext,
            talk::{CreateTalkParams, UpdateTalkParams},
        },
        service::talk::TalkService,
        state::AppState,
    },
};

pub static TALK_TAG: &str = "talk";

const STALE_TAG: &str = "The talk has changed since it was read";

/// Lists a speaker's talks ordered by title.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/speakers/{speaker_id}/talks",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved talks", body = Vec<TalkDto>),
        (status = 400, description = "Speaker is not in the camp", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talks(
    State(state): State<AppState>,
    _version: ApiVersion,
    links: LinkContext,
    Path((moniker, speaker_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let talks = TalkService::new(&state.db, &state.talk_tags)
        .get_by_speaker(&moniker, speaker_id)
        .await?;

    let dtos: Vec<TalkDto> = talks.into_iter().map(|talk| talk.into_dto(&links)).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Gets one talk with its current `ETag`.
///
/// A request whose `If-None-Match` lists a tag recently issued for the talk is
/// answered `304 Not Modified` without a body, repeating the matched `ETag`.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/speakers/{speaker_id}/talks/{talk_id}",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID"),
        ("talk_id" = i32, Path, description = "Talk ID"),
        ("If-None-Match" = Option<String>, Header, description = "Previously received ETag")
    ),
    responses(
        (status = 200, description = "Successfully retrieved talk", body = TalkDto),
        (status = 304, description = "Talk unchanged since the presented tag"),
        (status = 400, description = "Talk is not under the speaker and camp", body = ErrorDto),
        (status = 404, description = "Talk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talk(
    State(state): State<AppState>,
    _version: ApiVersion,
    preconditions: Preconditions,
    links: LinkContext,
    Path((moniker, speaker_id, talk_id)): Path<(String, i32, i32)>,
) -> Result<Response, AppError> {
    let service = TalkService::new(&state.db, &state.talk_tags);

    if let Some(condition) = &preconditions.if_none_match {
        if let Some(tag) = service.not_modified_tag(talk_id, condition).await? {
            return Ok((
                StatusCode::NOT_MODIFIED,
                [(header::ETAG, tag.header_value())],
            )
                .into_response());
        }
    }

    let (talk, tag) = service.get_by_id(&moniker, speaker_id, talk_id).await?;

    Ok((
        StatusCode::OK,
        [(header::ETAG, tag.header_value())],
        Json(talk.into_dto(&links)),
    )
        .into_response())
}

/// Adds a talk to a speaker.
///
/// Only available in API version 2.0.
///
/// # Access Control
/// - The speaker's owner
///
/// # Returns
/// - `201 Created` - With the talk, its URL in `Location` and its `ETag`
#[utoipa::path(
    post,
    path = "/api/camps/{moniker}/speakers/{speaker_id}/talks",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID"),
        ("ver" = Option<String>, Query, description = "API version, must be 2.0")
    ),
    request_body = TalkDto,
    responses(
        (status = 201, description = "Successfully created talk", body = TalkDto),
        (status = 400, description = "Invalid talk data, wrong API version or speaker not in camp", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the speaker", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_talk(
    State(state): State<AppState>,
    session: Session,
    version: ApiVersion,
    links: LinkContext,
    Path((moniker, speaker_id)): Path<(String, i32)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if version != ApiVersion::V2_0 {
        return Err(AppError::BadRequest(format!(
            "Creating talks is not supported in API version '{}'",
            version
        )));
    }

    let service = TalkService::new(&state.db, &state.talk_tags);
    let speaker = service
        .get_owned_speaker(&moniker, speaker_id, &user)
        .await?;

    let payload: TalkDto = parse_body(&body)?;
    let params = CreateTalkParams::from_dto(speaker.id, payload)?;

    let (talk, tag) = service.create(&speaker, params).await?;
    let dto = talk.into_dto(&links);

    Ok((
        StatusCode::CREATED,
        [
            (header::LOCATION, dto.url.clone()),
            (header::ETAG, tag.header_value()),
        ],
        Json(dto),
    ))
}

/// Updates a talk; fields absent from the body keep their stored values.
///
/// # Access Control
/// - The speaker's owner
///
/// # Returns
/// - `200 OK` - With the talk and its new `ETag`
/// - `412 Precondition Failed` - `If-Match` lists no current tag
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}/speakers/{speaker_id}/talks/{talk_id}",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID"),
        ("talk_id" = i32, Path, description = "Talk ID"),
        ("If-Match" = Option<String>, Header, description = "ETag the update is based on")
    ),
    request_body = TalkDto,
    responses(
        (status = 200, description = "Successfully updated talk", body = TalkDto),
        (status = 400, description = "Invalid talk data or talk not under speaker", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the speaker", body = ErrorDto),
        (status = 404, description = "Talk not found", body = ErrorDto),
        (status = 409, description = "Talk was modified concurrently", body = ErrorDto),
        (status = 412, description = "Presented ETag is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_talk(
    State(state): State<AppState>,
    session: Session,
    _version: ApiVersion,
    preconditions: Preconditions,
    links: LinkContext,
    Path((moniker, speaker_id, talk_id)): Path<(String, i32, i32)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TalkService::new(&state.db, &state.talk_tags);
    let talk = service
        .get_owned(&moniker, speaker_id, talk_id, &user)
        .await?;

    if !preconditions.if_match_holds(&talk.row_version.tag()) {
        return Err(AppError::PreconditionFailed(STALE_TAG.to_string()));
    }

    let payload: TalkDto = parse_body(&body)?;
    let params = UpdateTalkParams::from_dto(payload)?;

    let (talk, tag) = service
        .update(talk, params, preconditions.if_match.is_some())
        .await?;

    Ok((
        StatusCode::OK,
        [(header::ETAG, tag.header_value())],
        Json(talk.into_dto(&links)),
    ))
}

/// Deletes a talk.
///
/// # Access Control
/// - The speaker's owner
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}/speakers/{speaker_id}/talks/{talk_id}",
    tag = TALK_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID"),
        ("talk_id" = i32, Path, description = "Talk ID"),
        ("If-Match" = Option<String>, Header, description = "ETag the deletion is based on")
    ),
    responses(
        (status = 200, description = "Successfully deleted talk"),
        (status = 400, description = "Talk not under the speaker and camp", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the speaker", body = ErrorDto),
        (status = 404, description = "Talk not found", body = ErrorDto),
        (status = 409, description = "Talk was modified concurrently", body = ErrorDto),
        (status = 412, description = "Presented ETag is stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_talk(
    State(state): State<AppState>,
    session: Session,
    _version: ApiVersion,
    preconditions: Preconditions,
    Path((moniker, speaker_id, talk_id)): Path<(String, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TalkService::new(&state.db, &state.talk_tags);
    let talk = service
        .get_owned(&moniker, speaker_id, talk_id, &user)
        .await?;

    if !preconditions.if_match_holds(&talk.row_version.tag()) {
        return Err(AppError::PreconditionFailed(STALE_TAG.to_string()));
    }

    service
        .delete(&talk, preconditions.if_match.is_some())
        .await?;

    Ok(StatusCode::OK)
}
