use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::speaker::SpeakerDto;

/// Camp view model.
///
/// The location is flattened into `location*` fields. `url` and `speakers` are
/// output only and ignored on input. On input every field is optional: absent
/// fields leave the stored value untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampDto {
    #[serde(default, skip_deserializing)]
    pub url: String,
    pub moniker: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<SpeakerDto>>,
}
