//! Authentication service
//!
//! Login checks the bootstrap superuser first, then the user collection.
//! Secrets are argon2id hashes end to end; verification failure and
//! unknown identifier are indistinguishable to the caller.

use tracing::{info, instrument, warn};

use portal_common::{hash_password, verify_password, AppError, AppResult};
use portal_core::{generate_member_code, Role, User, UserDraft};
use portal_store::SessionUser;
use validator::Validate;

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;

/// Outcome of a successful registration; the caller shows the member code
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: SessionUser,
    pub member_code: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Authenticate and open a session
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> AppResult<SessionUser> {
        request.validate().map_err(AppError::validation)?;

        // Bootstrap superuser lives outside the user collection
        if request.email.eq_ignore_ascii_case(self.ctx.bootstrap_email())
            && verify_password(&request.password, self.ctx.bootstrap_hash())?
        {
            let session_user = SessionUser::bootstrap_admin(self.ctx.bootstrap_email());
            self.ctx.session().save(&session_user)?;
            info!("bootstrap admin signed in");
            return Ok(session_user);
        }

        let users = self.ctx.repository::<User>().get_all().await?;
        let found = users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(&request.email));

        match found {
            Some(user) if verify_password(&request.password, &user.password_hash)? => {
                let session_user = SessionUser::from(user);
                self.ctx.session().save(&session_user)?;
                info!(user_id = %user.id, "user signed in");
                Ok(session_user)
            }
            _ => {
                warn!("login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Create an account; does not open a session
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> AppResult<Registration> {
        request.validate().map_err(AppError::validation)?;

        let repo = self.ctx.repository::<User>();
        let users = repo.get_all().await?;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&request.email))
        {
            return Err(AppError::already_exists("email"));
        }

        let password_hash = hash_password(&request.password)?;
        let member_code = generate_member_code();

        let user = repo
            .create(UserDraft {
                name: request.name,
                email: request.email,
                role: Role::User,
                password_hash,
                member_code: member_code.clone(),
            })
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(Registration {
            user: SessionUser::from(&user),
            member_code,
        })
    }

    /// Close the session; also resets the per-session visit flag
    pub fn logout(&self) {
        self.ctx.session().clear();
        info!("session closed");
    }

    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.ctx.session().current()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.ctx.session().is_authenticated()
    }
}
