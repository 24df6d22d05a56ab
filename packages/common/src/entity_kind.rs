use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The entity kinds of an evaluation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// An account holder who owns events.
    User,
    /// An evaluation event (conference, fair, competition).
    Event,
    /// A person presenting work at an event.
    Participant,
    /// A piece of work entered into an event by a participant.
    Submission,
    /// A person who scores submissions.
    Evaluator,
    /// A person helping run an event.
    Coordinator,
    /// A rating dimension defined for an event.
    Criterion,
    /// A single score given against one criterion for one assignment.
    Evaluation,
    /// A submission handed to an evaluator.
    Assignment,
}

impl EntityKind {
    /// All entity kinds.
    pub const ALL: &'static [EntityKind] = &[
        Self::User,
        Self::Event,
        Self::Participant,
        Self::Submission,
        Self::Evaluator,
        Self::Coordinator,
        Self::Criterion,
        Self::Evaluation,
        Self::Assignment,
    ];

    /// Returns the string representation (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Event => "event",
            Self::Participant => "participant",
            Self::Submission => "submission",
            Self::Evaluator => "evaluator",
            Self::Coordinator => "coordinator",
            Self::Criterion => "criterion",
            Self::Evaluation => "evaluation",
            Self::Assignment => "assignment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid entity kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    invalid: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid entity kind '{}'. Valid values: {}",
            self.invalid,
            EntityKind::ALL
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for EntityKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseKindError {
                invalid: s.to_string(),
            })
    }
}
