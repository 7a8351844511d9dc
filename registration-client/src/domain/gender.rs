// registration-client/src/domain/gender.rs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// セレクトボックスの空の選択肢
pub const GENDER_PLACEHOLDER: &str = "Select Gender";

impl Gender {
    pub fn all() -> [Self; 3] {
        [Self::Male, Self::Female, Self::Other]
    }

    /// 文字列からGenderに変換（空文字や語彙外はNone）
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// セレクトボックスの選択肢（値, 表示名）。先頭は空のプレースホルダー
    pub fn select_options() -> Vec<(&'static str, &'static str)> {
        std::iter::once(("", GENDER_PLACEHOLDER))
            .chain(Self::all().iter().map(|g| (g.as_str(), g.display_name())))
            .collect()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str_is_exact() {
        assert_eq!(Gender::from_str("female"), Some(Gender::Female));
        assert_eq!(Gender::from_str(""), None);
        assert_eq!(Gender::from_str("Male"), None);
    }

    #[test]
    fn test_select_options_start_with_placeholder() {
        let options = Gender::select_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], ("", "Select Gender"));
        assert_eq!(options[3], ("other", "Other"));
    }
}
