use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        speaker::{CountedSpeakersDto, SpeakerDto, SpeakerListDto, TimestampedSpeakersDto},
    },
    server::{
        controller::param::IncludeTalksParam,
        error::AppError,
        middleware::{auth::AuthGuard, json::parse_body, version::ApiVersion},
        model::{
            link::LinkContext,
            speaker::{CreateSpeakerParams, UpdateSpeakerParams},
        },
        service::speaker::SpeakerService,
        state::AppState,
    },
};

pub static SPEAKER_TAG: &str = "speaker";

/// Lists the speakers of a camp ordered by name.
///
/// The response shape depends on the API version: a bare array for 1.0, a
/// `{count, results}` object for 1.1 and `{currentTime, count, results}` for 2.0.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/speakers",
    tag = SPEAKER_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("ver" = Option<String>, Query, description = "API version (1.0, 1.1, 2.0)"),
        IncludeTalksParam
    ),
    responses(
        (status = 200, description = "Successfully retrieved speakers", body = SpeakerListDto),
        (status = 400, description = "Unsupported API version", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_speakers(
    State(state): State<AppState>,
    version: ApiVersion,
    links: LinkContext,
    Path(moniker): Path<String>,
    Query(params): Query<IncludeTalksParam>,
) -> Result<impl IntoResponse, AppError> {
    let speakers = SpeakerService::new(&state.db)
        .get_by_camp(&moniker, params.include_talks)
        .await?;

    let results: Vec<SpeakerDto> = speakers
        .into_iter()
        .map(|speaker| speaker.into_dto(&links))
        .collect();
    let count = results.len();

    let dto = match version {
        ApiVersion::V1_0 => SpeakerListDto::Bare(results),
        ApiVersion::V1_1 => SpeakerListDto::Counted(CountedSpeakersDto { count, results }),
        ApiVersion::V2_0 => SpeakerListDto::Timestamped(TimestampedSpeakersDto {
            current_time: Utc::now(),
            count,
            results,
        }),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Gets one speaker of a camp.
///
/// # Access Control
/// - Authenticated users
#[utoipa::path(
    get,
    path = "/api/camps/{moniker}/speakers/{speaker_id}",
    tag = SPEAKER_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID"),
        IncludeTalksParam
    ),
    responses(
        (status = 200, description = "Successfully retrieved speaker", body = SpeakerDto),
        (status = 400, description = "Speaker is not in the camp", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_speaker(
    State(state): State<AppState>,
    session: Session,
    _version: ApiVersion,
    links: LinkContext,
    Path((moniker, speaker_id)): Path<(String, i32)>,
    Query(params): Query<IncludeTalksParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let speaker = SpeakerService::new(&state.db)
        .get_by_id(&moniker, speaker_id, params.include_talks)
        .await?;

    Ok((StatusCode::OK, Json(speaker.into_dto(&links))))
}

/// Adds a speaker to a camp, owned by the logged-in user.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - With the speaker and its URL in `Location`
#[utoipa::path(
    post,
    path = "/api/camps/{moniker}/speakers",
    tag = SPEAKER_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker")
    ),
    request_body = SpeakerDto,
    responses(
        (status = 201, description = "Successfully created speaker", body = SpeakerDto),
        (status = 400, description = "Invalid speaker data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Camp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_speaker(
    State(state): State<AppState>,
    session: Session,
    _version: ApiVersion,
    links: LinkContext,
    Path(moniker): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SpeakerService::new(&state.db);
    let camp = service.find_camp(&moniker).await?;

    let payload: SpeakerDto = parse_body(&body)?;
    let params = CreateSpeakerParams::from_dto(camp.id, user.id, payload)?;

    let speaker = service.create(params).await?;
    let dto = speaker.into_dto(&links);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, dto.url.clone())],
        Json(dto),
    ))
}

/// Updates a speaker; fields absent from the body keep their stored values.
///
/// # Access Control
/// - The speaker's owner
#[utoipa::path(
    put,
    path = "/api/camps/{moniker}/speakers/{speaker_id}",
    tag = SPEAKER_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID")
    ),
    request_body = SpeakerDto,
    responses(
        (status = 200, description = "Successfully updated speaker", body = SpeakerDto),
        (status = 400, description = "Invalid speaker data or speaker not in camp", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the speaker", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 409, description = "Speaker was modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_speaker(
    State(state): State<AppState>,
    session: Session,
    _version: ApiVersion,
    links: LinkContext,
    Path((moniker, speaker_id)): Path<(String, i32)>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SpeakerService::new(&state.db);
    let speaker = service.get_owned(&moniker, speaker_id, &user).await?;

    let payload: SpeakerDto = parse_body(&body)?;
    let params = UpdateSpeakerParams::from_dto(payload)?;

    let speaker = service.update(speaker, params).await?;

    Ok((StatusCode::OK, Json(speaker.into_dto(&links))))
}

/// Deletes a speaker and its talks.
///
/// # Access Control
/// - The speaker's owner
#[utoipa::path(
    delete,
    path = "/api/camps/{moniker}/speakers/{speaker_id}",
    tag = SPEAKER_TAG,
    params(
        ("moniker" = String, Path, description = "Camp moniker"),
        ("speaker_id" = i32, Path, description = "Speaker ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted speaker"),
        (status = 400, description = "Speaker not in camp or could not be deleted", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the speaker", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_speaker(
    State(state): State<AppState>,
    session: Session,
    _version: ApiVersion,
    Path((moniker, speaker_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = SpeakerService::new(&state.db);
    let speaker = service.get_owned(&moniker, speaker_id, &user).await?;

    service.delete(&speaker, &state.talk_tags).await?;

    Ok(StatusCode::OK)
}
