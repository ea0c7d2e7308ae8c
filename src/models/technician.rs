//! Technician model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Technician trade (string identifier)
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub enum Trade {
    /// Known trades
    Electrician,
    Plumber,
    Carpenter,
    Painter,
    /// Custom trade slug (for trades added by administrators)
    Other(String),
}

impl Trade {
    pub fn as_str(&self) -> &str {
        match self {
            Trade::Electrician => "electrician",
            Trade::Plumber => "plumber",
            Trade::Carpenter => "carpenter",
            Trade::Painter => "painter",
            Trade::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// The trade round-trips through its slug string on the wire.
impl Serialize for Trade {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Trade {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Trade::from(s))
    }
}

impl std::str::FromStr for Trade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "electrician" => Ok(Trade::Electrician),
            "plumber" => Ok(Trade::Plumber),
            "carpenter" => Ok(Trade::Carpenter),
            "painter" => Ok(Trade::Painter),
            other => Ok(Trade::Other(other.to_string())),
        }
    }
}

impl From<String> for Trade {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_else(|_| Trade::Other(s))
    }
}

impl From<&str> for Trade {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Trade::Other(s.to_string()))
    }
}

// Note: Trade conversions are handled manually in repository code
// because SQLx doesn't support custom Decode/Encode for enums with
// an Other(String) variant.

/// Technician availability status, derived from the active-job count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TechStatus {
    Free,
    Busy,
}

impl TechStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechStatus::Free => "free",
            TechStatus::Busy => "busy",
        }
    }
}

impl From<Option<String>> for TechStatus {
    fn from(s: Option<String>) -> Self {
        match s.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("free") => TechStatus::Free,
            _ => TechStatus::Busy,
        }
    }
}

impl std::fmt::Display for TechStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Internal row structure for database queries (with String fields)
#[derive(Debug, Clone, FromRow)]
pub struct TechnicianRow {
    name: String,
    role: String,
    start_time: Option<i16>,
    end_time: Option<i16>,
    current_load: Option<i32>,
    status: Option<String>,
    password: Option<String>,
}

impl From<TechnicianRow> for Technician {
    fn from(row: TechnicianRow) -> Self {
        Technician {
            name: row.name,
            role: Trade::from(row.role),
            start_time: row.start_time,
            end_time: row.end_time,
            current_load: row.current_load.unwrap_or(0),
            status: TechStatus::from(row.status),
            password: row.password,
        }
    }
}

/// Full technician record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Technician {
    pub name: String,
    pub role: Trade,
    /// Daily availability window start (hour of day)
    pub start_time: Option<i16>,
    /// Daily availability window end (hour of day)
    pub end_time: Option<i16>,
    /// Count of active assigned requests
    pub current_load: i32,
    pub status: TechStatus,
    /// Opaque credential material, never inspected beyond verification
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Technician {
    /// A record with missing hours or an inverted window cannot take part
    /// in time-based matching and is skipped by the selector.
    pub fn window(&self) -> Option<(i16, i16)> {
        match (self.start_time, self.end_time) {
            (Some(s), Some(e)) if s <= e => Some((s, e)),
            _ => None,
        }
    }
}
