use validator::Validate;

use super::User;
use crate::shared::{check_password_pair, validate_dto, DomainResult};

/// Partial update of a user. `None` fields are left untouched.
///
/// An empty password (with an empty confirmation) means "keep the current
/// password".
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "login must not be empty"))]
    pub login: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl UpdateUserDto {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Set a new password, confirmed with the same value.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        let password = password.into();
        self.password_confirmation = Some(password.clone());
        self.password = Some(password);
        self
    }

    pub fn ensure_valid(&self) -> DomainResult<()> {
        validate_dto(self)?;
        check_password_pair(
            self.password.as_deref().unwrap_or_default(),
            self.password_confirmation.as_deref().unwrap_or_default(),
            false,
        )?;
        Ok(())
    }

    /// The password to store, if this update changes it.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Merge the provided fields into `user`. The id is never touched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(login) = &self.login {
            user.login = login.clone();
        }
        if let Some(password) = self.new_password() {
            user.password = Some(password.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User {
            id: "1".into(),
            name: "Ana".into(),
            login: "ana1".into(),
            password: Some("x".into()),
        }
    }

    #[test]
    fn apply_only_overwrites_provided_fields() {
        let mut user = ana();
        UpdateUserDto::default().name("Ana Maria").apply_to(&mut user);
        assert_eq!(user.name, "Ana Maria");
        assert_eq!(user.login, "ana1");
        assert_eq!(user.password.as_deref(), Some("x"));
        assert_eq!(user.id, "1");
    }

    #[test]
    fn empty_password_means_no_change() {
        let dto = UpdateUserDto {
            password: Some(String::new()),
            password_confirmation: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.ensure_valid().is_ok());
        assert_eq!(dto.new_password(), None);

        let mut user = ana();
        dto.apply_to(&mut user);
        assert_eq!(user, ana());
    }

    #[test]
    fn password_without_confirmation_is_rejected() {
        let dto = UpdateUserDto {
            password: Some("new".into()),
            ..Default::default()
        };
        assert!(dto.ensure_valid().is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let dto = UpdateUserDto::default().name("");
        let err = dto.ensure_valid().unwrap_err();
        assert_eq!(err.to_string(), "Validation: name: name must not be empty");
    }
}
