use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Maximum subject length in bytes (64-byte local part, `@`, 255-byte domain).
pub const MAX_SUBJECT_LENGTH: usize = 320;

/// Claims carried by every issued token.
///
/// Field names on the wire are `username`, `iat`, `exp` and `admin`;
/// timestamps are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the account the token represents
    #[serde(rename = "username")]
    pub subject: String,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Whether the holder is privileged
    #[serde(rename = "admin")]
    pub privileged: bool,
}

impl Claims {
    /// Build claims valid from `now` for `ttl`.
    ///
    /// Both timestamps are truncated to whole seconds before the TTL is
    /// added, so `expires_at - issued_at` always equals the TTL.
    pub fn new(
        subject: impl Into<String>,
        privileged: bool,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let issued_at = now.timestamp();

        Self {
            subject: subject.into(),
            issued_at,
            expires_at: issued_at + ttl.num_seconds(),
            privileged,
        }
    }

    /// Check if the claims are expired at `current_timestamp`.
    ///
    /// The expiration instant itself counts as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_claims_lifetime_equals_ttl() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("root@email.com", true, now, Duration::hours(24));

        assert_eq!(claims.subject, "root@email.com");
        assert!(claims.privileged);
        assert_eq!(claims.issued_at, now.timestamp());
        assert_eq!(claims.expires_at - claims.issued_at, 24 * 60 * 60);
    }

    #[test]
    fn test_new_claims_truncates_subsecond_time() {
        let now = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        let claims = Claims::new("alice", false, now, Duration::seconds(90));

        assert_eq!(claims.issued_at, 1_700_000_000);
        assert_eq!(claims.expires_at, 1_700_000_090);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            subject: "alice".to_string(),
            issued_at: 0,
            expires_at: 1000,
            privileged: false,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims {
            subject: "root@email.com".to_string(),
            issued_at: 10,
            expires_at: 20,
            privileged: true,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "root@email.com",
                "iat": 10,
                "exp": 20,
                "admin": true
            })
        );
    }
}
