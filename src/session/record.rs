//! Persisted session record

use serde::{Deserialize, Serialize};

/// The signed-in user as persisted under the session key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_initials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Session {
    /// Build a session, deriving initials from the name fields
    pub fn new(
        user_id: impl Into<String>,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            avatar_initials: initials(first_name, last_name),
            phone: None,
            company: None,
        }
    }

    /// The canned user every login resolves to
    pub fn demo_user() -> Self {
        Self {
            phone: Some("+1 (416) 555-0142".to_string()),
            company: Some("Venn Technologies".to_string()),
            ..Self::new("1", "Confidence", "Ezeorah", "confidence@venn.ca")
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Uppercased first letter of each name
fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Partial update to the profile fields of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(super) fn apply_to(self, session: &mut Session) {
        if let Some(first_name) = self.first_name {
            session.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            session.last_name = last_name;
        }
        if let Some(email) = self.email {
            session.email = email;
        }
        if self.phone.is_some() {
            session.phone = self.phone;
        }
        if self.company.is_some() {
            session.company = self.company;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user() {
        let user = Session::demo_user();
        assert_eq!(user.user_id, "1");
        assert_eq!(user.avatar_initials, "CE");
        assert_eq!(user.display_name(), "Confidence Ezeorah");
    }

    #[test]
    fn test_initials_handle_empty_names() {
        assert_eq!(initials("", "smith"), "S");
        assert_eq!(initials("", ""), "");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Session::new("7", "A", "B", "a@b.c")).unwrap();
        assert_eq!(json["userId"], "7");
        assert_eq!(json["avatarInitials"], "AB");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut user = Session::demo_user();
        ProfilePatch {
            email: Some("new@venn.ca".into()),
            ..ProfilePatch::default()
        }
        .apply_to(&mut user);

        assert_eq!(user.email, "new@venn.ca");
        assert_eq!(user.first_name, "Confidence");
        assert!(user.company.is_some());
    }
}
