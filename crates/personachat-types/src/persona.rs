//! Persona identifiers.
//!
//! A persona is a named conversational style: a fixed system prompt plus
//! display metadata. The catalog of prompts and greetings lives in
//! `personachat-core`; this module only defines the closed set of keys,
//! which round-trip through the SQLite `persona` column and the URL path
//! parameter.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The closed set of personas a user can chat with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaKind {
    Girlfriend,
    Therapist,
    Friend,
    Doctor,
    Scientist,
    Counselor,
    Coach,
    Parent,
    Sister,
    Boss,
}

impl PersonaKind {
    /// Every persona, in catalog display order.
    pub const ALL: [PersonaKind; 10] = [
        PersonaKind::Girlfriend,
        PersonaKind::Therapist,
        PersonaKind::Friend,
        PersonaKind::Doctor,
        PersonaKind::Scientist,
        PersonaKind::Counselor,
        PersonaKind::Coach,
        PersonaKind::Parent,
        PersonaKind::Sister,
        PersonaKind::Boss,
    ];

    /// The stable string key used in storage and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaKind::Girlfriend => "girlfriend",
            PersonaKind::Therapist => "therapist",
            PersonaKind::Friend => "friend",
            PersonaKind::Doctor => "doctor",
            PersonaKind::Scientist => "scientist",
            PersonaKind::Counselor => "counselor",
            PersonaKind::Coach => "coach",
            PersonaKind::Parent => "parent",
            PersonaKind::Sister => "sister",
            PersonaKind::Boss => "boss",
        }
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "girlfriend" => Ok(PersonaKind::Girlfriend),
            "therapist" => Ok(PersonaKind::Therapist),
            "friend" => Ok(PersonaKind::Friend),
            "doctor" => Ok(PersonaKind::Doctor),
            "scientist" => Ok(PersonaKind::Scientist),
            "counselor" => Ok(PersonaKind::Counselor),
            "coach" => Ok(PersonaKind::Coach),
            "parent" => Ok(PersonaKind::Parent),
            "sister" => Ok(PersonaKind::Sister),
            "boss" => Ok(PersonaKind::Boss),
            other => Err(format!("unknown persona: '{other}'")),
        }
    }
}

/// Display metadata for one persona, as returned by `GET /api/chat/personas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaCard {
    /// Display name (e.g., "Dr. Emily").
    pub label: String,
    /// The persona key.
    pub value: PersonaKind,
    /// One-line description (e.g., "Empathetic and supportive").
    pub description: String,
    /// Role shown under the name (e.g., "Therapist").
    pub role: String,
    /// Avatar URL.
    pub image: String,
}
