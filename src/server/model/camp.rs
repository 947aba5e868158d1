//! Camp domain models and parameters.
//!
//! A camp stores its start date and a length in days; the API exposes a start and
//! end date instead. Conversions between the two live here, together with the
//! null-ignoring merge used by PUT and the full replacement used by PATCH.

use chrono::{Duration, NaiveDate};

use crate::{
    model::camp::CampDto,
    server::{
        error::validation::ValidationErrors,
        model::{link::LinkContext, row_version::RowVersion, speaker::Speaker},
        util::validate::{Rules, Validate},
    },
};

const DATE_ORDER_MESSAGE: &str = "endDate must not be before startDate";

/// Postal address of a camp. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            address1: entity.address1,
            address2: entity.address2,
            address3: entity.address3,
            city_town: entity.city_town,
            state_province: entity.state_province,
            postal_code: entity.postal_code,
            country: entity.country,
        }
    }

    /// Takes every `location*` field of the DTO as is.
    fn from_dto(dto: &CampDto) -> Self {
        Self {
            address1: dto.location_address1.clone(),
            address2: dto.location_address2.clone(),
            address3: dto.location_address3.clone(),
            city_town: dto.location_city_town.clone(),
            state_province: dto.location_state_province.clone(),
            postal_code: dto.location_postal_code.clone(),
            country: dto.location_country.clone(),
        }
    }

    /// Overwrites only the fields the DTO carries.
    fn merge(&mut self, dto: &CampDto) {
        merge_field(&mut self.address1, &dto.location_address1);
        merge_field(&mut self.address2, &dto.location_address2);
        merge_field(&mut self.address3, &dto.location_address3);
        merge_field(&mut self.city_town, &dto.location_city_town);
        merge_field(&mut self.state_province, &dto.location_state_province);
        merge_field(&mut self.postal_code, &dto.location_postal_code);
        merge_field(&mut self.country, &dto.location_country);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Camp {
    pub id: i32,
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDate,
    /// Number of days the camp lasts, at least 1.
    pub length: i32,
    pub description: String,
    pub location_id: Option<i32>,
    pub location: Location,
    pub row_version: RowVersion,
    /// Present only when speakers were requested.
    pub speakers: Option<Vec<Speaker>>,
}

impl Camp {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// A camp without a location row gets an empty `Location`.
    pub fn from_entity(
        entity: entity::camp::Model,
        location: Option<entity::location::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            moniker: entity.moniker,
            name: entity.name,
            event_date: entity.event_date,
            length: entity.length,
            description: entity.description,
            location_id: entity.location_id,
            location: location.map(Location::from_entity).unwrap_or_default(),
            row_version: RowVersion::from_bytes(entity.row_version),
            speakers: None,
        }
    }

    pub fn end_date(&self) -> NaiveDate {
        end_date(self.event_date, self.length)
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Arguments
    /// - `links` - Base for the camp, speaker and talk URLs
    pub fn into_dto(self, links: &LinkContext) -> CampDto {
        let end_date = self.end_date();

        CampDto {
            url: links.camp(&self.moniker),
            start_date: Some(self.event_date),
            end_date: Some(end_date),
            location_address1: self.location.address1,
            location_address2: self.location.address2,
            location_address3: self.location.address3,
            location_city_town: self.location.city_town,
            location_state_province: self.location.state_province,
            location_postal_code: self.location.postal_code,
            location_country: self.location.country,
            speakers: self.speakers.map(|speakers| {
                speakers
                    .into_iter()
                    .map(|speaker| speaker.into_dto(links))
                    .collect()
            }),
            moniker: Some(self.moniker),
            name: Some(self.name),
            description: Some(self.description),
        }
    }
}

/// Complete set of camp fields, used for inserts and full replacements.
#[derive(Debug, Clone)]
pub struct CampParams {
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDate,
    pub length: i32,
    pub description: String,
    pub location: Location,
}

impl CampParams {
    /// Validates the DTO and converts it to parameters.
    ///
    /// The start date is required here. Without an end date the camp lasts one day.
    ///
    /// # Returns
    /// - `Ok(CampParams)` - Every constraint holds
    /// - `Err(ValidationErrors)` - Field-level failures
    pub fn from_dto(dto: CampDto) -> Result<Self, ValidationErrors> {
        camp_rules(&dto)
            .check(
                "startDate",
                dto.start_date.is_some(),
                "startDate is required",
            )
            .finish()?;

        let location = Location::from_dto(&dto);

        match (dto.moniker, dto.name, dto.description, dto.start_date) {
            (Some(moniker), Some(name), Some(description), Some(event_date)) => {
                let length = match dto.end_date {
                    Some(end) => length_between(event_date, end),
                    None => 1,
                };

                Ok(Self {
                    moniker,
                    name,
                    event_date,
                    length,
                    description,
                    location,
                })
            }
            _ => Err(ValidationErrors::malformed("Camp is incomplete")),
        }
    }

    /// Replaces every field of `camp`, clearing location fields that are absent.
    pub fn replace(self, camp: &mut Camp) {
        camp.moniker = self.moniker;
        camp.name = self.name;
        camp.event_date = self.event_date;
        camp.length = self.length;
        camp.description = self.description;
        camp.location = self.location;
    }
}

/// Null-ignoring merge of a PUT body onto an existing camp.
#[derive(Debug, Clone)]
pub struct UpdateCampParams {
    dto: CampDto,
}

impl UpdateCampParams {
    /// Validates the full DTO before any field is merged.
    pub fn from_dto(dto: CampDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;
        Ok(Self { dto })
    }

    /// Moniker of the camp after the merge.
    pub fn moniker(&self) -> Option<&str> {
        self.dto.moniker.as_deref()
    }

    /// Applies present fields to `camp`.
    ///
    /// A start date alone moves the camp and keeps its length; an end date alone
    /// changes the length relative to the current start date.
    ///
    /// # Returns
    /// - `Ok(())` - Camp updated in place
    /// - `Err(ValidationErrors)` - The resulting end date precedes the start date
    pub fn apply(self, camp: &mut Camp) -> Result<(), ValidationErrors> {
        let dto = self.dto;

        let (event_date, length) = match (dto.start_date, dto.end_date) {
            (Some(start), Some(end)) => (start, length_between(start, end)),
            (Some(start), None) => (start, camp.length),
            (None, Some(end)) => (camp.event_date, length_between(camp.event_date, end)),
            (None, None) => (camp.event_date, camp.length),
        };

        if length < 1 {
            let mut errors = ValidationErrors::new();
            errors.add("endDate", DATE_ORDER_MESSAGE);
            return Err(errors);
        }

        camp.event_date = event_date;
        camp.length = length;

        if let Some(moniker) = dto.moniker.clone() {
            camp.moniker = moniker;
        }
        if let Some(name) = dto.name.clone() {
            camp.name = name;
        }
        if let Some(description) = dto.description.clone() {
            camp.description = description;
        }
        camp.location.merge(&dto);

        Ok(())
    }
}

impl Validate for CampDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        camp_rules(self).finish()
    }
}

fn camp_rules(dto: &CampDto) -> Rules {
    let dates_ordered = match (dto.start_date, dto.end_date) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    };

    Rules::new()
        .required("moniker", dto.moniker.as_deref())
        .min_length("moniker", dto.moniker.as_deref(), 3)
        .max_length("moniker", dto.moniker.as_deref(), 20)
        .required("name", dto.name.as_deref())
        .min_length("name", dto.name.as_deref(), 5)
        .max_length("name", dto.name.as_deref(), 100)
        .required("description", dto.description.as_deref())
        .min_length("description", dto.description.as_deref(), 25)
        .max_length("description", dto.description.as_deref(), 4096)
        .check("endDate", dates_ordered, DATE_ORDER_MESSAGE)
}

fn merge_field(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}

/// Inclusive number of days from `start` to `end`.
fn length_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let days = (end - start).num_days() + 1;
    i32::try_from(days).unwrap_or(if days > 0 { i32::MAX } else { 0 })
}

fn end_date(start: NaiveDate, length: i32) -> NaiveDate {
    start
        .checked_add_signed(Duration::days(i64::from(length) - 1))
        .unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn camp() -> Camp {
        Camp {
            id: 1,
            moniker: "ncdl2024".to_string(),
            name: "NC Dev Lab".to_string(),
            event_date: date(2024, 5, 1),
            length: 3,
            description: "A weekend of talks about building software".to_string(),
            location_id: None,
            location: Location {
                city_town: Some("Raleigh".to_string()),
                country: Some("USA".to_string()),
                ..Default::default()
            },
            row_version: RowVersion::generate(),
            speakers: None,
        }
    }

    fn links() -> LinkContext {
        LinkContext::parse("http://localhost:8080").unwrap()
    }

    fn valid_dto() -> CampDto {
        CampDto {
            moniker: Some("atl2026".to_string()),
            name: Some("Atlanta Code Camp".to_string()),
            description: Some("The yearly gathering of Atlanta developers".to_string()),
            start_date: Some(date(2026, 10, 3)),
            ..Default::default()
        }
    }

    /// Expected: end date is start + (length - 1) days
    #[test]
    fn projects_length_to_end_date() {
        let dto = camp().into_dto(&links());

        assert_eq!(dto.start_date, Some(date(2024, 5, 1)));
        assert_eq!(dto.end_date, Some(date(2024, 5, 3)));
        assert_eq!(dto.url, "http://localhost:8080/api/camps/ncdl2024");
        assert_eq!(dto.location_city_town.as_deref(), Some("Raleigh"));
        assert!(dto.speakers.is_none());
    }

    /// Expected: mapping a camp to its DTO and back keeps the length
    #[test]
    fn round_trip_preserves_length() {
        let original = camp();
        let mut restored = camp();
        restored.length = 10;

        UpdateCampParams::from_dto(original.clone().into_dto(&links()))
            .unwrap()
            .apply(&mut restored)
            .unwrap();

        assert_eq!(restored.length, original.length);
        assert_eq!(restored.event_date, original.event_date);
    }

    /// Expected: absent fields keep stored values, present ones overwrite them
    #[test]
    fn merge_ignores_absent_fields() {
        let mut target = camp();
        let dto = CampDto {
            moniker: Some("ncdl2024".to_string()),
            name: Some("Renamed Dev Lab".to_string()),
            description: Some("A weekend of talks about building software".to_string()),
            location_country: None,
            location_postal_code: Some("27601".to_string()),
            ..Default::default()
        };

        UpdateCampParams::from_dto(dto)
            .unwrap()
            .apply(&mut target)
            .unwrap();

        assert_eq!(target.name, "Renamed Dev Lab");
        assert_eq!(target.location.country.as_deref(), Some("USA"));
        assert_eq!(target.location.postal_code.as_deref(), Some("27601"));
        assert_eq!(target.length, 3);
    }

    /// Expected: a lone start date moves the camp without changing its length
    #[test]
    fn start_date_alone_keeps_length() {
        let mut target = camp();
        let mut dto = camp().into_dto(&links());
        dto.start_date = Some(date(2024, 6, 10));
        dto.end_date = None;

        UpdateCampParams::from_dto(dto)
            .unwrap()
            .apply(&mut target)
            .unwrap();

        assert_eq!(target.event_date, date(2024, 6, 10));
        assert_eq!(target.end_date(), date(2024, 6, 12));
    }

    /// Expected: a lone end date is measured from the stored start date
    #[test]
    fn end_date_alone_changes_length() {
        let mut target = camp();
        let mut dto = camp().into_dto(&links());
        dto.start_date = None;
        dto.end_date = Some(date(2024, 5, 5));

        UpdateCampParams::from_dto(dto)
            .unwrap()
            .apply(&mut target)
            .unwrap();

        assert_eq!(target.length, 5);
    }

    /// Expected: an end date before the stored start date is rejected
    #[test]
    fn end_date_before_start_is_rejected() {
        let mut target = camp();
        let mut dto = camp().into_dto(&links());
        dto.start_date = None;
        dto.end_date = Some(date(2024, 4, 1));

        let errors = UpdateCampParams::from_dto(dto)
            .unwrap()
            .apply(&mut target)
            .unwrap_err();

        assert!(errors.contains("endDate"));
        assert_eq!(target.length, 3);
    }

    /// Expected: creation without an end date yields a one day camp
    #[test]
    fn create_defaults_to_single_day() {
        let params = CampParams::from_dto(valid_dto()).unwrap();

        assert_eq!(params.length, 1);
        assert_eq!(params.event_date, date(2026, 10, 3));
    }

    /// Expected: creation requires a start date and valid field lengths
    #[test]
    fn create_reports_every_failing_field() {
        let dto = CampDto {
            moniker: Some("ab".to_string()),
            name: None,
            description: Some("too short".to_string()),
            ..Default::default()
        };

        let errors = CampParams::from_dto(dto).unwrap_err();

        assert!(errors.contains("moniker"));
        assert!(errors.contains("name"));
        assert!(errors.contains("description"));
        assert!(errors.contains("startDate"));
    }

    /// Expected: full replacement clears location fields that are absent
    #[test]
    fn replace_clears_missing_location() {
        let mut target = camp();
        let params = CampParams::from_dto(valid_dto()).unwrap();

        params.replace(&mut target);

        assert!(target.location.is_empty());
        assert_eq!(target.moniker, "atl2026");
    }
}
