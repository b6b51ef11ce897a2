use serde::Deserialize;
use validator::Validate;

/// Maximum allowed length for a user name.
const NAME_MAX_LEN: u64 = 128;

/// Password length bounds enforced at registration.
const PASSWORD_MIN_LEN: u64 = 8;
const PASSWORD_MAX_LEN: u64 = 128;

/// JSON payload accepted when registering a user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: String,
}

/// JSON payload accepted by the login check.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
