//! User models.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Label shown for a session without a profile username.
pub const GUEST_NAME: &str = "Guest";

/// Profile of the signed-in user, as kept in the session and in storage.
///
/// An empty profile serializes as `{}`. Fields the client does not model
/// are kept in `extra` so they survive a round trip through storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Follower count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fans_number: Option<i64>,
    /// Any other fields sent by the server.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Create a profile with the minimal fields.
    pub fn new(id: impl Into<UserId>, username: impl Into<String>, fans_number: i64) -> Self {
        Self {
            id: Some(id.into()),
            username: Some(username.into()),
            fans_number: Some(fans_number),
            extra: serde_json::Map::new(),
        }
    }

    /// Check if the profile is unset.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.username.is_none()
            && self.fans_number.is_none()
            && self.extra.is_empty()
    }

    /// Username, or the guest label when there is none.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(GUEST_NAME)
    }
}

/// Credentials for `POST /user/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Account data for `POST /user`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

/// The `data` part of a successful login response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Issued token.
    #[serde(default)]
    pub token: Option<String>,
    /// User ID.
    #[serde(default)]
    pub id: Option<UserId>,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
    /// Follower count.
    #[serde(default)]
    pub fans_number: Option<i64>,
    /// Full profile, when the server nests one.
    #[serde(default)]
    pub user_info: Option<UserProfile>,
}

impl LoginData {
    /// Profile to keep for the session.
    ///
    /// A nested `userInfo` object wins; otherwise the top-level fields are
    /// picked.
    pub fn profile(&self) -> UserProfile {
        if let Some(info) = self.user_info.as_ref().filter(|p| !p.is_empty()) {
            return info.clone();
        }
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            fans_number: self.fans_number,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_profile_is_empty_object() {
        let profile = UserProfile::default();
        assert!(profile.is_empty());
        assert_eq!(serde_json::to_string(&profile).unwrap(), "{}");
        assert_eq!(profile.display_name(), GUEST_NAME);
    }

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let raw = r#"{"id":7,"username":"alice","fansNumber":2,"avatar":"a.png"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();

        assert_eq!(profile.id, Some(UserId(7)));
        assert_eq!(profile.display_name(), "alice");
        assert_eq!(profile.extra.get("avatar").and_then(|v| v.as_str()), Some("a.png"));

        let back: serde_json::Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["fansNumber"], 2);
        assert_eq!(back["avatar"], "a.png");
    }

    #[test]
    fn test_login_data_profile_from_flat_fields() {
        let raw = r#"{"token":"abc123","id":7,"username":"alice","fansNumber":2}"#;
        let data: LoginData = serde_json::from_str(raw).unwrap();

        assert_eq!(data.token.as_deref(), Some("abc123"));
        assert_eq!(data.profile(), UserProfile::new(7, "alice", 2));
    }

    #[test]
    fn test_login_data_prefers_nested_user_info() {
        let raw = r#"{"token":"t","userInfo":{"id":9,"username":"bob","fansNumber":0}}"#;
        let data: LoginData = serde_json::from_str(raw).unwrap();

        assert_eq!(data.profile(), UserProfile::new(9, "bob", 0));
    }

    #[test]
    fn test_blank_username_falls_back_to_guest() {
        let mut profile = UserProfile::new(1, "", 0);
        assert_eq!(profile.display_name(), GUEST_NAME);
        profile.username = Some("carol".into());
        assert_eq!(profile.display_name(), "carol");
    }
}
