//! User records and form drafts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as held by the remote directory.
///
/// Only the fields the screens display are modeled. Anything else the
/// directory returns (geo coordinates, for instance) is kept in `extra`
/// so that a PUT sends the complete record back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Company a user works for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    /// Single-line `street, city` rendering used on the detail screen.
    pub fn one_line(&self) -> String {
        format!("{}, {}", self.street, self.city)
    }
}

impl User {
    /// Build a minimal user with only the form fields set.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            username: None,
            website: None,
            company: None,
            address: None,
            extra: Map::new(),
        }
    }

    /// The draft a form would start from when editing this user.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Form input for creating or editing a user.
///
/// This is exactly the body sent on `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Presence check: all three fields must be non-empty.
    ///
    /// Whitespace counts as present; no other validation happens client-side.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }

    /// Overlay this draft on `user`, keeping its id and every other field.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            ..user.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn deserializes_directory_record() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username.as_deref(), Some("Bret"));
        assert_eq!(user.company.as_ref().unwrap().name, "Romaguera-Crona");
        assert_eq!(
            user.company.as_ref().unwrap().catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
        let address = user.address.as_ref().unwrap();
        assert_eq!(address.one_line(), "Kulas Light, Gwenborough");
        assert!(address.extra.contains_key("geo"));
    }

    #[test]
    fn unknown_fields_survive_serialization() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["address"]["geo"]["lat"], "-37.3159");
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
    }

    #[test]
    fn company_without_name_deserializes() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "name": "C", "email": "c@d", "phone": "2", "company": {"bs": "x"}}"#,
        )
        .unwrap();
        let company = user.company.unwrap();
        assert_eq!(company.name, "");
        assert_eq!(company.bs.as_deref(), Some("x"));
    }

    #[test]
    fn minimal_record_deserializes() {
        let user: User =
            serde_json::from_str(r#"{"id": 11, "name": "A", "email": "a@b", "phone": "1"}"#)
                .unwrap();
        assert_eq!(user, User::new(11, "A", "a@b", "1"));
    }

    #[test]
    fn draft_completeness() {
        assert!(UserDraft::new("Ann", "ann@example.com", "555").is_complete());
        assert!(!UserDraft::new("", "ann@example.com", "555").is_complete());
        assert!(!UserDraft::new("Ann", "", "555").is_complete());
        assert!(!UserDraft::new("Ann", "ann@example.com", "").is_complete());
        assert!(UserDraft::new(" ", " ", " ").is_complete());
    }

    #[test]
    fn draft_applies_over_existing_user() {
        let mut user = User::new(7, "Ann", "ann@example.com", "555");
        user.website = Some("ann.dev".into());

        let updated = UserDraft::new("Ann", "ann@example.com", "556").apply_to(&user);
        assert_eq!(updated.id, 7);
        assert_eq!(updated.phone, "556");
        assert_eq!(updated.website.as_deref(), Some("ann.dev"));
    }

    #[test]
    fn draft_body_has_only_form_fields() {
        let json = serde_json::to_value(UserDraft::new("Ann", "a@b", "1")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ann", "email": "a@b", "phone": "1"}));
    }
}
