// registration-client/src/features/record_table/columns.rs

use std::cmp::Ordering;
use std::fmt;

use crate::domain::SubmittedRecord;

/// 一覧の列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Age,
    Gender,
    Interests,
    BirthDate,
}

/// 並び替えの比較方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// 文字列の辞書順
    Text,
    Numeric,
    /// 日付の前後
    Chronological,
}

/// 列定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub name: &'static str,
    pub sortable: bool,
    pub kind: SortKind,
}

const fn column(key: ColumnKey, name: &'static str, kind: SortKind) -> Column {
    Column {
        key,
        name,
        sortable: true,
        kind,
    }
}

/// 列定義（表示順）
pub static COLUMNS: [Column; 8] = [
    column(ColumnKey::FirstName, "First Name", SortKind::Text),
    column(ColumnKey::LastName, "Last Name", SortKind::Text),
    column(ColumnKey::Email, "Email", SortKind::Text),
    column(ColumnKey::PhoneNumber, "Phone Number", SortKind::Text),
    column(ColumnKey::Age, "Age", SortKind::Numeric),
    column(ColumnKey::Gender, "Gender", SortKind::Text),
    column(ColumnKey::Interests, "Interests", SortKind::Text),
    column(ColumnKey::BirthDate, "Birth Date", SortKind::Chronological),
];

/// 値がない側を後ろに回す比較
fn compare_present<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl ColumnKey {
    pub fn all() -> [Self; 8] {
        COLUMNS.map(|c| c.key)
    }

    pub fn column(&self) -> &'static Column {
        // COLUMNS は ColumnKey の宣言順に並んでいる
        &COLUMNS[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.column().name
    }

    /// JSON上のフィールド名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Interests => "interests",
            Self::BirthDate => "birthDate",
        }
    }

    /// セルの表示文字列
    pub fn cell(&self, record: &SubmittedRecord) -> String {
        match self {
            Self::FirstName => record.first_name.clone(),
            Self::LastName => record.last_name.clone(),
            Self::Email => record.email.clone(),
            Self::PhoneNumber => record.phone_number.clone(),
            Self::Age => record.age_text(),
            Self::Gender => record.gender.clone(),
            Self::Interests => record.interests_text(),
            Self::BirthDate => record.birth_date.clone(),
        }
    }

    /// 昇順での比較
    pub fn compare(&self, a: &SubmittedRecord, b: &SubmittedRecord) -> Ordering {
        match self.column().kind {
            SortKind::Numeric => {
                compare_present(a.age, b.age, |x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal))
            }
            SortKind::Chronological => {
                compare_present(a.birth_date_value(), b.birth_date_value(), |x, y| x.cmp(y))
            }
            SortKind::Text => self.cell(a).cmp(&self.cell(b)),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ColumnKey {
    type Err = String;

    /// フィールド名（`birthDate`）・列名（`Birth Date`）・区切りなし（`birth-date`）のいずれも受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |value: &str| {
            value
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = normalize(s);

        Self::all()
            .into_iter()
            .find(|key| normalize(key.as_str()) == wanted || normalize(key.name()) == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown column: '{}'. Valid columns are: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
