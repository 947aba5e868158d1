use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::talk::TalkDto;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerDto {
    #[serde(default, skip_deserializing)]
    pub url: String,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
    pub twitter_name: Option<String>,
    #[serde(rename = "gitHubName")]
    pub github_name: Option<String>,
    pub bio: Option<String>,
    pub head_shot_url: Option<String>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub talks: Option<Vec<TalkDto>>,
}

/// API version 1.1 speaker listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountedSpeakersDto {
    pub count: usize,
    pub results: Vec<SpeakerDto>,
}

/// API version 2.0 speaker listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimestampedSpeakersDto {
    pub current_time: DateTime<Utc>,
    pub count: usize,
    pub results: Vec<SpeakerDto>,
}

/// Speaker listing in the shape of the requested API version.
///
/// Version 1.0 is a bare array.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SpeakerListDto {
    Bare(Vec<SpeakerDto>),
    Counted(CountedSpeakersDto),
    Timestamped(TimestampedSpeakersDto),
}
