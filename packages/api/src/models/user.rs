//! # Account models
//!
//! Defines the two representations of an Orayze account:
//!
//! ## [`UserRecord`]
//!
//! The complete entry persisted in the user list. It carries the plaintext
//! password: this is a demo without any credential security.
//!
//! - `id`: creation time in epoch milliseconds, as a decimal string. Two
//!   sign-ups within the same millisecond get the same id.
//! - `first_name`, `last_name`, `email`: profile fields from the sign-up form.
//! - `password`: stored as entered.
//! - `created_at`: RFC 3339 UTC timestamp with millisecond precision.
//!
//! ## [`SessionUser`]
//!
//! Who is currently signed in. It is the record minus the password; the
//! password field does not exist on this type, so it can never leak through a
//! session query. [`UserRecord::to_session`] performs the projection.
//!
//! Both types serialize with camelCase keys (`firstName`, `createdAt`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored account entry including credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(with = "millis_rfc3339")]
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Strip the password, producing the signed-in view of this account.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// The currently signed-in account, without credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(with = "millis_rfc3339")]
    pub created_at: DateTime<Utc>,
}

impl SessionUser {
    /// "First Last", or just whichever part is present.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

mod millis_rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ada() -> UserRecord {
        UserRecord {
            id: "1714557600000".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough1".to_string(),
            created_at: Utc.timestamp_millis_opt(1_714_557_600_000).unwrap(),
        }
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["password"], "longenough1");
        assert_eq!(json["createdAt"], "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn test_session_has_no_password() {
        let session = ada().to_session();
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(session.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_session_ignores_stray_password_field() {
        // A session written by an older page that still carried the field
        let raw = r#"{"id":"1","firstName":"Ada","lastName":"L","email":"a@b.co","password":"x","createdAt":"2024-05-01T10:00:00.000Z"}"#;
        let session: SessionUser = serde_json::from_str(raw).unwrap();
        assert_eq!(session.first_name, "Ada");
    }
}
