use axum::{
    http::{HeaderName, HeaderValue},
    routing::{get, options, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, camp, operations, speaker, talk},
    middleware::version::{SUPPORTED_VERSIONS, SUPPORTED_VERSIONS_HEADER},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Code Camp API", description = "Camps, speakers and their talks"),
    paths(
        camp::get_camps,
        camp::get_camp,
        camp::create_camp,
        camp::update_camp,
        camp::patch_camp,
        camp::delete_camp,
        speaker::get_speakers,
        speaker::get_speaker,
        speaker::create_speaker,
        speaker::update_speaker,
        speaker::delete_speaker,
        talk::get_talks,
        talk::get_talk,
        talk::create_talk,
        talk::update_talk,
        talk::delete_talk,
        auth::login,
        auth::logout,
        auth::get_user,
        operations::reload_config,
    ),
    tags(
        (name = "camp", description = "Code camps"),
        (name = "speaker", description = "Speakers of a camp, versioned"),
        (name = "talk", description = "Talks of a speaker, versioned, with ETags"),
        (name = "auth", description = "Cookie session login"),
        (name = "operations", description = "Runtime maintenance"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(camp_routes())
        .merge(versioned_routes())
        .merge(auth_routes())
        .route("/api/operations/reloadConfig", options(operations::reload_config))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

fn camp_routes() -> Router<AppState> {
    Router::new()
        .route("/api/camps", get(camp::get_camps).post(camp::create_camp))
        .route(
            "/api/camps/{moniker}",
            get(camp::get_camp)
                .put(camp::update_camp)
                .patch(camp::patch_camp)
                .delete(camp::delete_camp),
        )
}

/// Speaker and talk routes, which report the API versions they support.
fn versioned_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/camps/{moniker}/speakers",
            get(speaker::get_speakers).post(speaker::create_speaker),
        )
        .route(
            "/api/camps/{moniker}/speakers/{speaker_id}",
            get(speaker::get_speaker)
                .put(speaker::update_speaker)
                .delete(speaker::delete_speaker),
        )
        .route(
            "/api/camps/{moniker}/speakers/{speaker_id}/talks",
            get(talk::get_talks).post(talk::create_talk),
        )
        .route(
            "/api/camps/{moniker}/speakers/{speaker_id}/talks/{talk_id}",
            get(talk::get_talk)
                .put(talk::update_talk)
                .delete(talk::delete_talk),
        )
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(SUPPORTED_VERSIONS_HEADER),
            HeaderValue::from_static(SUPPORTED_VERSIONS),
        ))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
}
