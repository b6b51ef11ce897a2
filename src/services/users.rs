use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use serde::Serialize;
use validator::Validate;

use crate::domain::object_id::ObjectId;
use crate::domain::user::{NewUser, User};
use crate::forms::users::{LoginForm, RegisterUserForm};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Public projection of a user, safe to return to clients.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserView {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

/// Registers a new user, storing an Argon2 hash of the password.
pub fn register_user<R>(repo: &R, form: RegisterUserForm) -> ServiceResult<UserView>
where
    R: UserWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(ServiceError::Form("user name cannot be empty".to_string()));
    }

    let password_hash =
        hash_password(&form.password).map_err(|err| ServiceError::Internal(err.to_string()))?;

    let new_user = NewUser::new(name, form.email, password_hash);
    let created = repo.create_user(&new_user).map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Checks the supplied credentials against the stored hash.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub fn login_user<R>(repo: &R, form: LoginForm) -> ServiceResult<UserView>
where
    R: UserReader + ?Sized,
{
    let email = form.email.trim().to_lowercase();

    let Some(user) = repo.get_user_by_email(&email).map_err(ServiceError::from)? else {
        return Err(ServiceError::Unauthorized);
    };

    let verified = verify_password(&form.password, &user.password_hash)
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    if !verified {
        return Err(ServiceError::Unauthorized);
    }

    Ok(user.into())
}

fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err),
    }
}
