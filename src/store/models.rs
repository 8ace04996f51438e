use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format stored in the database, ISO-8601 with microseconds
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Review status of a client project submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    /// Submission has not been reviewed yet
    Pending,
    /// Submission was accepted for freelance work
    Accepted,
    /// Submission was declined
    Declined,
}

impl ProjectStatus {
    /// Text form stored in the database and shown in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Accepted => "Accepted",
            ProjectStatus::Declined => "Declined",
        }
    }

    /// Strict parse of status text, used for admin form input
    pub fn parse(raw: &str) -> Option<ProjectStatus> {
        match raw {
            "Pending" => Some(ProjectStatus::Pending),
            "Accepted" => Some(ProjectStatus::Accepted),
            "Declined" => Some(ProjectStatus::Declined),
            _ => None,
        }
    }

    /// Lenient parse for values read back from the database. Unknown text
    /// maps to `Pending` so a hand-edited row cannot poison a listing.
    pub fn from_db(raw: &str) -> ProjectStatus {
        Self::parse(raw).unwrap_or(ProjectStatus::Pending)
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client project submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Row id assigned by the database
    pub id: i64,
    /// Client's name
    pub name: String,
    /// Client's email address
    pub email: String,
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// Current review status
    pub status: ProjectStatus,
    /// Submission timestamp, server-local time
    pub created_at: NaiveDateTime,
}

/// A freelance job posting published by the admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    /// Row id assigned by the database
    pub id: i64,
    /// Title of the opportunity
    pub title: String,
    /// Detailed description of the opportunity
    pub description: String,
    /// Publication timestamp, server-local time
    pub posted_at: NaiveDateTime,
}
