//! Topics, difficulty levels and the keys used to address stored progress.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ProgressionError;

/// A subject area with its own exercise sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Html,
    Css,
    Bootstrap,
    Tailwind,
    Javascript,
    Php,
}

impl Topic {
    pub const ALL: [Self; 6] = [
        Self::Html,
        Self::Css,
        Self::Bootstrap,
        Self::Tailwind,
        Self::Javascript,
        Self::Php,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Bootstrap => "bootstrap",
            Self::Tailwind => "tailwind",
            Self::Javascript => "javascript",
            Self::Php => "php",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProgressionError::UnknownTopic(s.to_string()))
    }
}

/// Difficulty tier within a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProgressionError::UnknownLevel(s.to_string()))
    }
}

/// Discriminator of a single progress record: the level plus the exercise
/// position, rendered as `advanced-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelKey {
    pub level: Level,
    pub index: usize,
}

impl LevelKey {
    pub const fn new(level: Level, index: usize) -> Self {
        Self { level, index }
    }
}

impl fmt::Display for LevelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.level, self.index)
    }
}

impl FromStr for LevelKey {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProgressionError::InvalidLevelKey(s.to_string());

        let (level, index) = s.rsplit_once('-').ok_or_else(invalid)?;
        let level = level.parse::<Level>().map_err(|_| invalid())?;
        let index = index.parse::<usize>().map_err(|_| invalid())?;

        Ok(Self { level, index })
    }
}

impl Serialize for LevelKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LevelKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Full address of one exercise progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    pub user_id: Uuid,
    pub topic: Topic,
    pub level_key: LevelKey,
}

impl ProgressKey {
    pub const fn new(user_id: Uuid, topic: Topic, level_key: LevelKey) -> Self {
        Self {
            user_id,
            topic,
            level_key,
        }
    }

    /// Document-store style path, used for cache keys and log fields.
    pub fn path(&self) -> String {
        format!(
            "users/{}/progress/exercises/{}/{}",
            self.user_id, self.topic, self.level_key
        )
    }
}

/// Path of the "current exercise" pointer for a (user, topic, level).
pub fn current_index_path(user_id: Uuid, topic: Topic, level: Level) -> String {
    format!("users/{user_id}/progress/current/{topic}/{level}")
}
