//! Personal input for one emblem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest initials string kept after normalisation.
pub const MAX_INITIALS: usize = 6;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One submission. Initials are normalised on the way in; everything else
/// is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "UserInputRecord", rename_all = "camelCase")]
pub struct UserInput {
    initials: String,
    birth_date: Option<NaiveDate>,
    favorite_color: Option<String>,
    hobbies: String,
}

/// The external record as it arrives, before normalisation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserInputRecord {
    initials: Option<String>,
    birth_date: Option<String>,
    favorite_color: Option<String>,
    hobbies: Option<String>,
}

impl From<UserInputRecord> for UserInput {
    fn from(record: UserInputRecord) -> Self {
        let mut input = UserInput::new()
            .with_initials(record.initials.as_deref().unwrap_or_default())
            .with_hobbies(record.hobbies.unwrap_or_default());
        if let Some(date) = record.birth_date.as_deref() {
            input = input.with_birth_date_str(date);
        }
        if let Some(color) = record.favorite_color {
            input = input.with_favorite_color(color);
        }
        input
    }
}

impl UserInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initials(mut self, initials: &str) -> Self {
        self.initials = normalize_initials(initials);
        self
    }

    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the birth date from an ISO `YYYY-MM-DD` string. Blank or
    /// unparseable text clears it.
    pub fn with_birth_date_str(mut self, date: &str) -> Self {
        self.birth_date = parse_birth_date(date);
        self
    }

    pub fn with_favorite_color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.favorite_color = if color.trim().is_empty() {
            None
        } else {
            Some(color)
        };
        self
    }

    pub fn with_hobbies(mut self, hobbies: impl Into<String>) -> Self {
        self.hobbies = hobbies.into();
        self
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn favorite_color(&self) -> Option<&str> {
        self.favorite_color.as_deref()
    }

    pub fn hobbies(&self) -> &str {
        &self.hobbies
    }

    /// The string fed to the hasher: the ISO birth date, or empty.
    pub fn hash_key(&self) -> String {
        self.birth_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Parse the camelCase JSON record.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Strip whitespace, uppercase, keep at most [`MAX_INITIALS`] characters.
pub fn normalize_initials(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect()
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!(input = trimmed, %err, "ignoring unparseable birth date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_are_normalised() {
        assert_eq!(normalize_initials(" z s "), "ZS");
        assert_eq!(normalize_initials("abcdefgh"), "ABCDEF");
        assert_eq!(normalize_initials("   "), "");
    }

    #[test]
    fn hash_key_is_iso_date() {
        let input = UserInput::new().with_birth_date_str("1990-05-15");
        assert_eq!(input.hash_key(), "1990-05-15");
        assert_eq!(UserInput::new().hash_key(), "");
    }

    #[test]
    fn bad_dates_become_absent() {
        assert_eq!(UserInput::new().with_birth_date_str("15/05/1990").birth_date(), None);
        assert_eq!(UserInput::new().with_birth_date_str("1990-02-30").birth_date(), None);
        assert_eq!(UserInput::new().with_birth_date_str("").birth_date(), None);
    }

    #[test]
    fn record_deserialises_from_camel_case() {
        let input = UserInput::from_json(
            r#"{"initials":"z s","birthDate":"1990-05-15","favoriteColor":"Teal","hobbies":"chess"}"#,
        )
        .unwrap();
        assert_eq!(input.initials(), "ZS");
        assert_eq!(input.birth_date(), NaiveDate::from_ymd_opt(1990, 5, 15));
        assert_eq!(input.favorite_color(), Some("Teal"));
        assert_eq!(input.hobbies(), "chess");
    }

    #[test]
    fn record_fields_are_optional() {
        let input = UserInput::from_json(r#"{"birthDate":null}"#).unwrap();
        assert_eq!(input, UserInput::default());
    }

    #[test]
    fn serialises_back_to_camel_case() {
        let input = UserInput::new()
            .with_initials("ab")
            .with_birth_date_str("2000-01-01");
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["birthDate"], "2000-01-01");
        assert_eq!(json["initials"], "AB");
    }
}
