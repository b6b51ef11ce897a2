use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use crate::{
    domain::object_id::ObjectId,
    domain::user::{NewUser as DomainNewUser, User as DomainUser},
    models::user::{NewUser as DbNewUser, User as DbUser},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, UserReader, UserWriter},
};

impl UserReader for DieselRepository {
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        user.map(DomainUser::try_from).transpose()
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let id = ObjectId::generate();
        let id_hex = id.to_hex();
        let now = chrono::Local::now().naive_utc();

        let db_new = DbNewUser {
            id: &id_hex,
            name: &new_user.name,
            email: &new_user.email,
            password_hash: &new_user.password_hash,
            created_at: now,
            last_modified_at: now,
        };

        let created = diesel::insert_into(users::table)
            .values(&db_new)
            .get_result::<DbUser>(&mut conn)
            .map_err(|err| match err {
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    RepositoryError::Conflict
                }
                other => RepositoryError::Database(other),
            })?;

        created.try_into()
    }
}
