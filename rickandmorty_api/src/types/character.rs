//! Character records returned by the `/character` endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single character as served by the upstream API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i64,

    pub name: String,

    pub status: CharacterStatus,

    pub species: String,

    /// Subspecies or variant, frequently empty.
    #[serde(rename = "type")]
    pub kind: String,

    pub gender: CharacterGender,

    /// Where the character comes from.
    pub origin: ResourceLink,

    /// Last known location.
    pub location: ResourceLink,

    /// Avatar image, always 300x300.
    pub image: String,

    /// Episode URLs the character appears in, in airing order.
    pub episode: Vec<String>,

    /// Canonical URL of this character.
    pub url: String,

    /// When the record was created upstream.
    pub created: DateTime<Utc>,
}

/// Name plus dereferencing URL of a related location. The URL is empty when
/// the location is unknown.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "alive"),
            CharacterStatus::Dead => write!(f, "dead"),
            CharacterStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterGender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterGender::Female => write!(f, "female"),
            CharacterGender::Male => write!(f, "male"),
            CharacterGender::Genderless => write!(f, "genderless"),
            CharacterGender::Unknown => write!(f, "unknown"),
        }
    }
}
