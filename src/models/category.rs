//! Department categories a request can be routed to

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Department category labels. The set is fixed; the maintenance
/// department ("Hostel") is the only one that dispatches technicians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Academic,
    Hostel,
    Finance,
    Library,
    #[serde(rename = "IT")]
    It,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Hostel => "Hostel",
            Category::Finance => "Finance",
            Category::Library => "Library",
            Category::It => "IT",
        }
    }

    /// Short canned acknowledgement returned to the submitter
    pub fn canned_reply(&self) -> &'static str {
        match self {
            Category::Academic => "Your question has been forwarded to the Academic Department.",
            Category::Hostel => "Your issue has been sent to the Hostel Administration.",
            Category::Finance => "Finance department has been notified.",
            Category::Library => "Library department will handle your request.",
            Category::It => "IT Support has been informed about your issue.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "academic" => Ok(Category::Academic),
            "hostel" => Ok(Category::Hostel),
            "finance" => Ok(Category::Finance),
            "library" => Ok(Category::Library),
            "it" => Ok(Category::It),
            _ => Err(format!("Invalid category label: {}", s)),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        // Unknown labels degrade to the maintenance department
        s.parse().unwrap_or(Category::Hostel)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or(Category::Hostel)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}
