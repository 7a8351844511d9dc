// registration-client/src/domain/interest.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 興味分野（チェックボックスの固定語彙）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Coding,
    Sports,
    Reading,
}

impl Interest {
    pub fn all() -> [Self; 3] {
        [Self::Coding, Self::Sports, Self::Reading]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Sports => "sports",
            Self::Reading => "reading",
        }
    }

    /// チェックボックスの表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::Sports => "Sports",
            Self::Reading => "Reading",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coding" => Ok(Self::Coding),
            "sports" => Ok(Self::Sports),
            "reading" => Ok(Self::Reading),
            _ => Err(format!(
                "Invalid interest: '{}'. Valid interests are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
