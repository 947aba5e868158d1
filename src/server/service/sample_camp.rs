//! Demo camp written on startup when `SEED_SAMPLE_CAMP` is enabled.

use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        camp::CampRepository, speaker::SpeakerRepository, talk::TalkRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        camp::{CampParams, Location},
        speaker::CreateSpeakerParams,
        talk::CreateTalkParams,
    },
};

pub const SAMPLE_MONIKER: &str = "ATL2016";

struct SampleTalk {
    title: &'static str,
    abstract_text: &'static str,
    category: &'static str,
    level: &'static str,
    room: &'static str,
    hour: u32,
}

struct SampleSpeaker {
    name: &'static str,
    company_name: &'static str,
    website_url: &'static str,
    twitter_name: &'static str,
    bio: &'static str,
    talks: &'static [SampleTalk],
}

const SAMPLE_SPEAKERS: &[SampleSpeaker] = &[
    SampleSpeaker {
        name: "Shawn Wildermuth",
        company_name: "Wilder Minds LLC",
        website_url: "https://wildermuth.com",
        twitter_name: "shawnwildermuth",
        bio: "Shawn has been writing software and teaching developers for over twenty years.",
        talks: &[
            SampleTalk {
                title: "How to do ASP.NET Core",
                abstract_text: "A tour of building web APIs from the ground up",
                category: "Web Development",
                level: "100",
                room: "Room 1",
                hour: 10,
            },
            SampleTalk {
                title: "How to do Bootstrap 4",
                abstract_text: "Layouts, components and utilities in practice",
                category: "Web Development",
                level: "200",
                room: "Room 2",
                hour: 13,
            },
        ],
    },
    SampleSpeaker {
        name: "Resa Wildermuth",
        company_name: "Wilder Minds LLC",
        website_url: "https://wildermuth.com",
        twitter_name: "resawildermuth",
        bio: "Resa is a designer and developer who has been building for the web since 2001.",
        talks: &[SampleTalk {
            title: "Managing a Consulting Business",
            abstract_text: "Finding clients, pricing work and keeping the books",
            category: "Soft Skills",
            level: "100",
            room: "Room 1",
            hour: 14,
        }],
    },
];

pub struct SampleCampService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SampleCampService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes the sample camp unless its moniker is taken
    ///
    /// Speakers need an owner, so they and their talks are only added when
    /// `owner_user_name` names an existing user.
    ///
    /// # Returns
    /// - `Ok(true)` - Sample camp created
    /// - `Ok(false)` - A camp with the sample moniker already exists
    pub async fn seed(&self, owner_user_name: Option<&str>) -> Result<bool, AppError> {
        let camp_repo = CampRepository::new(self.db);

        if camp_repo.moniker_exists(SAMPLE_MONIKER, None).await? {
            return Ok(false);
        }

        let camp = camp_repo
            .create(CampParams {
                moniker: SAMPLE_MONIKER.to_string(),
                name: "Your First Code Camp".to_string(),
                event_date: event_date()?,
                length: 1,
                description: "This is the first code camp, a day of talks for local developers"
                    .to_string(),
                location: Location {
                    address1: Some("123 Main Street".to_string()),
                    city_town: Some("Atlanta".to_string()),
                    state_province: Some("GA".to_string()),
                    postal_code: Some("30303".to_string()),
                    country: Some("USA".to_string()),
                    ..Default::default()
                },
            })
            .await?;

        let owner = match owner_user_name {
            Some(user_name) => UserRepository::new(self.db)
                .find_by_user_name(user_name)
                .await?,
            None => None,
        };

        let Some(owner) = owner else {
            tracing::info!("Seeded sample camp {} without speakers", camp.moniker);
            return Ok(true);
        };

        let speaker_repo = SpeakerRepository::new(self.db);
        let talk_repo = TalkRepository::new(self.db);

        for sample in SAMPLE_SPEAKERS {
            let speaker = speaker_repo
                .create(CreateSpeakerParams {
                    camp_id: camp.id,
                    user_id: owner.id,
                    name: sample.name.to_string(),
                    company_name: Some(sample.company_name.to_string()),
                    phone_number: None,
                    website_url: Some(sample.website_url.to_string()),
                    twitter_name: Some(sample.twitter_name.to_string()),
                    github_name: None,
                    bio: sample.bio.to_string(),
                    head_shot_url: None,
                })
                .await?;

            for talk in sample.talks {
                talk_repo
                    .create(
                        CreateTalkParams {
                            speaker_id: speaker.id,
                            title: talk.title.to_string(),
                            abstract_text: talk.abstract_text.to_string(),
                            category: talk.category.to_string(),
                            level: Some(talk.level.to_string()),
                            prerequisites: None,
                            starting_time: starting_time(camp.event_date, talk.hour)?,
                            room: Some(talk.room.to_string()),
                        },
                        &camp.moniker,
                    )
                    .await?;
            }
        }

        tracing::info!(
            "Seeded sample camp {} with {} speakers owned by {}",
            camp.moniker,
            SAMPLE_SPEAKERS.len(),
            owner.user_name
        );

        Ok(true)
    }
}

fn event_date() -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(2016, 10, 18)
        .ok_or_else(|| AppError::InternalError("Invalid sample camp date".to_string()))
}

fn starting_time(date: NaiveDate, hour: u32) -> Result<chrono::DateTime<Utc>, AppError> {
    date.and_hms_opt(hour, 0, 0)
        .map(|time| Utc.from_utc_datetime(&time))
        .ok_or_else(|| AppError::InternalError("Invalid sample talk time".to_string()))
}
