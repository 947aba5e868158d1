use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    pub href: String,
    pub rel: String,
    pub verb: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalkDto {
    #[serde(default, skip_deserializing)]
    pub url: String,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub prerequisites: Option<String>,
    pub starting_time: Option<DateTime<Utc>>,
    pub room: Option<String>,
    #[serde(default, skip_deserializing)]
    pub links: Vec<LinkDto>,
}
