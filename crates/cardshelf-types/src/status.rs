use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing status of a catalog record.
///
/// The sheet convention is `AVAILABLE`, `HOLD`, `SOLD` or an empty cell.
/// Anything else is kept verbatim (uppercased) in `Other` rather than
/// rejected; the filter decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Available,
    Hold,
    Sold,
    #[default]
    Unspecified,
    Other(String),
}

impl Status {
    /// Normalize a raw cell: trim, uppercase, map onto the known vocabulary.
    pub fn from_raw(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        match upper.as_str() {
            "AVAILABLE" => Status::Available,
            "HOLD" => Status::Hold,
            "SOLD" => Status::Sold,
            "" => Status::Unspecified,
            _ => Status::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Available => "AVAILABLE",
            Status::Hold => "HOLD",
            Status::Sold => "SOLD",
            Status::Unspecified => "",
            Status::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Status::from_raw(&value)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
