use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown timezone `{0}`")]
pub struct InvalidTimezone(pub String);

/// Parse an IANA timezone name such as `America/New_York`.
pub fn parse_timezone(name: &str) -> Result<Tz, InvalidTimezone> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| InvalidTimezone(name.to_string()))
}

/// A staff member whose working calendar drives availability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Associate {
    /// Unique identifier of the associate.
    pub id: i32,
    /// Owning business identifier.
    pub business_id: i32,
    /// Identifier of the associate's calendar at the business's calendar provider.
    pub calendar_id: String,
    /// IANA name of the timezone the associate's schedules are written in.
    pub timezone: String,
    pub created_at: NaiveDateTime,
}

impl Associate {
    /// Resolve the stored timezone name.
    pub fn tz(&self) -> Result<Tz, InvalidTimezone> {
        parse_timezone(&self.timezone)
    }
}

/// Payload required to register an associate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssociate {
    pub business_id: i32,
    pub calendar_id: String,
    pub timezone: String,
}

impl NewAssociate {
    /// Build an associate payload, rejecting unknown timezone names.
    pub fn new(
        business_id: i32,
        calendar_id: impl Into<String>,
        timezone: &str,
    ) -> Result<Self, InvalidTimezone> {
        let tz = parse_timezone(timezone)?;
        Ok(Self {
            business_id,
            calendar_id: calendar_id.into(),
            timezone: tz.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_associate_normalizes_timezone() {
        let associate =
            NewAssociate::new(1, "calendar@studio", " America/New_York ").expect("valid tz");
        assert_eq!(associate.timezone, "America/New_York");
    }

    #[test]
    fn new_associate_rejects_unknown_timezone() {
        let result = NewAssociate::new(1, "calendar@studio", "Mars/Olympus_Mons");
        assert_eq!(
            result,
            Err(InvalidTimezone("Mars/Olympus_Mons".to_string()))
        );
    }
}
