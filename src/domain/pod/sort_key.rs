use std::fmt;
use std::str::FromStr;

use crate::domain::pod::error::PodQueryError;

/// Field used to order a pod list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Age,
    Restarts,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Age => "age",
            SortKey::Restarts => "restarts",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; an empty value selects [`SortKey::Name`].
impl FromStr for SortKey {
    type Err = PodQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "name" => Ok(SortKey::Name),
            "age" => Ok(SortKey::Age),
            "restarts" => Ok(SortKey::Restarts),
            _ => Err(PodQueryError::InvalidSortKey(s.to_string())),
        }
    }
}
