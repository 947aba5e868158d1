use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct IncludeSpeakersParam {
    /// Include the camp's speakers and their talks (default: false)
    #[serde(default)]
    pub include_speakers: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct IncludeTalksParam {
    /// Include each speaker's talks (default: false)
    #[serde(default)]
    pub include_talks: bool,
}
