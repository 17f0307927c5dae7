use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role returned by the auth endpoints. Decides which navigation and
/// admin affordances a client renders; authorization itself is server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// The user record half of a session, persisted alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Broadcast to interested flows whenever the session store is written.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SignedIn {
        user: UserProfile,
        at: DateTime<Utc>,
    },
    SignedOut {
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trips_wire_shape() {
        let json = r#"{"_id":"665f1c2e9b1d2a0012a4e111","fullName":"Asha Verma","email":"asha@example.com","role":"ADMIN"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, Role::Admin);
        assert!(profile.is_admin());
        let back = serde_json::to_string(&profile).unwrap();
        assert!(back.contains("\"_id\""));
        assert!(back.contains("\"fullName\""));
    }
}
