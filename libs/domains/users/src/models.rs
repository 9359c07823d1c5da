use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    /// Subject id at the identity provider
    pub external_id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "external id is required"))]
    pub external_id: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 3, max = 30, message = "username must be 3 to 30 characters"))]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_image_url: String,
}

/// A validated user ready to be persisted; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub external_id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl NewUser {
    pub fn from_input(input: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            external_id: input.external_id,
            email: input.email,
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            profile_image_url: input.profile_image_url,
            created_at: now,
            updated_at: now,
            last_login: Some(now),
        }
    }
}

/// DTO for updating an existing user; absent or empty fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(email(message = "invalid email"))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 30, message = "username must be 3 to 30 characters"))]
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UpdateUser {
    /// Drop fields that carry an empty string
    pub fn without_empty(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }
        Self {
            email: keep(self.email),
            username: keep(self.username),
            first_name: keep(self.first_name),
            last_name: keep(self.last_name),
            profile_image_url: keep(self.profile_image_url),
        }
    }
}

impl User {
    /// Apply updates
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(profile_image_url) = update.profile_image_url {
            self.profile_image_url = profile_image_url;
        }
    }
}

/// Page request for listing users
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserFilter {
    pub page: i32,
    pub page_size: i32,
}

impl UserFilter {
    /// Reject a page below 1 and coerce the page size into `[1, MAX_PAGE_SIZE]`
    pub fn normalized(mut self) -> Result<Self, i32> {
        if self.page < 1 {
            return Err(self.page);
        }
        self.page_size = match self.page_size {
            size if size < 1 => DEFAULT_PAGE_SIZE,
            size => size.min(MAX_PAGE_SIZE),
        };
        Ok(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateUser {
        CreateUser {
            external_id: "user_2abc".to_string(),
            email: "trinity@example.com".to_string(),
            username: "trinity".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_user_validation() {
        assert!(valid().validate().is_ok());

        let missing_external = CreateUser {
            external_id: String::new(),
            ..valid()
        };
        assert!(missing_external.validate().is_err());

        let bad_email = CreateUser {
            email: "not-an-email".to_string(),
            ..valid()
        };
        assert!(bad_email.validate().is_err());

        for username in ["ab", &"a".repeat(31)] {
            let user = CreateUser {
                username: username.to_string(),
                ..valid()
            };
            assert!(user.validate().is_err(), "{username}");
        }
    }

    #[test]
    fn test_update_ignores_empty_fields() {
        let update = UpdateUser {
            email: Some(String::new()),
            first_name: Some("Neo".to_string()),
            ..Default::default()
        }
        .without_empty();

        assert!(update.email.is_none());
        assert!(update.validate().is_ok());
        assert_eq!(update.first_name.as_deref(), Some("Neo"));
    }

    #[test]
    fn test_filter_normalization() {
        assert_eq!(UserFilter { page: 0, page_size: 10 }.normalized(), Err(0));
        assert_eq!(
            UserFilter { page: 1, page_size: 0 }.normalized().unwrap().page_size,
            DEFAULT_PAGE_SIZE
        );
        assert_eq!(
            UserFilter { page: 1, page_size: 1000 }.normalized().unwrap().page_size,
            MAX_PAGE_SIZE
        );
    }
}
