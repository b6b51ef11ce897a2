use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::object_id::ObjectId;
use crate::domain::user::User as DomainUser;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub last_modified_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub created_at: NaiveDateTime,
    pub last_modified_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = RepositoryError;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        let id: ObjectId = value
            .id
            .parse()
            .map_err(|_| RepositoryError::Malformed(format!("invalid user id `{}`", value.id)))?;

        Ok(Self {
            id,
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            created_at: value.created_at,
            last_modified_at: value.last_modified_at,
        })
    }
}
