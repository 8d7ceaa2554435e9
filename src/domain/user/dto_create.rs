use validator::Validate;

use crate::shared::{check_password_pair, validate_dto, DomainResult};

/// Fields of the registration form.
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "login is required"))]
    pub login: String,
    pub password: String,
    pub password_confirmation: String,
}

impl CreateUserDto {
    pub fn new(
        name: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            name: name.into(),
            login: login.into(),
            password_confirmation: password.clone(),
            password,
        }
    }

    /// Field rules plus the password/confirmation pair, which is mandatory
    /// on creation.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        validate_dto(self)?;
        check_password_pair(&self.password, &self.password_confirmation, true)?;
        Ok(())
    }
}
