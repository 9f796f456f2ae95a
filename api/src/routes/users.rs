//! User listing endpoint

use actix_web::{web, HttpResponse};

use crate::dto::user::UserSummary;
use crate::handlers::error::handle_domain_error;

use vf_core::repositories::{UserRepository, VerificationCodeRepository};
use vf_core::services::auth::{EmailServiceTrait, PasswordHasherTrait};

use super::AppState;

/// Handler for GET /api/users
///
/// Lists registered users. Password hashes never leave the server; each
/// entry is projected through `UserSummary`.
pub async fn list_users<V, U, E, P>(state: web::Data<AppState<V, U, E, P>>) -> HttpResponse
where
    V: VerificationCodeRepository + 'static,
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    match state.user_repository.find_all().await {
        Ok(users) => {
            log::info!("Listing {} registered users", users.len());
            let summaries: Vec<UserSummary> =
                users.into_iter().map(UserSummary::from).collect();
            HttpResponse::Ok().json(summaries)
        }
        Err(error) => handle_domain_error(error),
    }
}
