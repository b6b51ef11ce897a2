use actix_web::{HttpResponse, Responder, post, web};
use serde::Serialize;

use crate::forms::users::{LoginForm, RegisterUserForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::users::{self as users_service, UserView};

#[derive(Debug, Serialize)]
struct UserBody {
    message: &'static str,
    user: UserView,
}

#[post("/v1/users")]
/// Register a new user.
pub async fn register_user(
    form: web::Json<RegisterUserForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::register_user(repo.get_ref(), form.into_inner()) {
        Ok(user) => HttpResponse::Created().json(UserBody {
            message: "User registered successfully",
            user,
        }),
        Err(err) => error_response(err),
    }
}

#[post("/v1/users/login")]
/// Check the supplied credentials.
pub async fn login_user(
    form: web::Json<LoginForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::login_user(repo.get_ref(), form.into_inner()) {
        Ok(user) => HttpResponse::Ok().json(UserBody {
            message: "Login successful",
            user,
        }),
        Err(err) => error_response(err),
    }
}
