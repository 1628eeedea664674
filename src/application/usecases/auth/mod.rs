use std::sync::Arc;

use anyhow::{Result as AnyResult, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use rand::Rng;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::{email_verification_codes::InsertEmailVerificationCodeEntity, users::UserEntity},
    repositories::{
        DuplicateKeyViolation, email_verification_codes::VerificationCodeRepository,
        users::UserRepository,
    },
    value_objects::{
        enums::user_roles::UserRole,
        users::{
            AuthPayloadDto, InsertProfile, LoginModel, LoginOutcome, ProfileDto,
            RegisterUserModel, ResendVerificationModel, TokenClaims, UserDto,
            VerificationRequiredDto, VerifyEmailModel,
        },
    },
};
use crate::infrastructure::{email::ConsoleMailer, secondary_auth::AuthProviderClient};

pub const VERIFICATION_CODE_TTL_MINUTES: i64 = 10;
const SESSION_TOKEN_TTL_HOURS: i64 = 24;
const MIN_PASSWORD_LENGTH: usize = 8;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationMailer: Send + Sync {
    async fn deliver(&self, to: &str, subject: &str, body: &str) -> AnyResult<()>;
}

#[async_trait]
impl VerificationMailer for ConsoleMailer {
    async fn deliver(&self, to: &str, subject: &str, body: &str) -> AnyResult<()> {
        self.deliver(to, subject, body).await
    }
}

/// Advisory mirror into the external auth provider. The users table stays
/// the source of truth; a mirror failure never fails registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecondaryAuthGateway: Send + Sync {
    async fn upsert_user(&self, user_id: Uuid, email: &str) -> AnyResult<()>;
}

#[async_trait]
impl SecondaryAuthGateway for AuthProviderClient {
    async fn upsert_user(&self, user_id: Uuid, email: &str) -> AnyResult<()> {
        self.upsert_user(user_id, email).await
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0}")]
    Invalid(String),
    #[error("email is already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("account is disabled")]
    AccountDisabled,
    #[error("user not found")]
    UserNotFound,
    #[error("account is already verified")]
    AlreadyVerified,
    #[error("invalid or expired verification code")]
    InvalidCode,
    #[error("failed to deliver verification code")]
    CodeDelivery(#[source] anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthError::MissingField(_) | AuthError::Invalid(_) | AuthError::InvalidCode => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::AccountDisabled => StatusCode::FORBIDDEN,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::EmailTaken | AuthError::AlreadyVerified => StatusCode::CONFLICT,
            AuthError::CodeDelivery(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

pub struct AuthUseCase<U, C, M, G>
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    code_repo: Arc<C>,
    mailer: Arc<M>,
    secondary_auth: Arc<G>,
    token_secret: String,
}

impl<U, C, M, G> AuthUseCase<U, C, M, G>
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        code_repo: Arc<C>,
        mailer: Arc<M>,
        secondary_auth: Arc<G>,
        token_secret: String,
    ) -> Self {
        Self {
            user_repo,
            code_repo,
            mailer,
            secondary_auth,
            token_secret,
        }
    }

    pub async fn register(
        &self,
        register_user_model: RegisterUserModel,
    ) -> UseCaseResult<AuthPayloadDto> {
        let email = register_user_model.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if !email.contains('@') {
            return Err(AuthError::Invalid("email is malformed".to_string()));
        }
        if register_user_model.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::Invalid(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if register_user_model.first_name.trim().is_empty() {
            return Err(AuthError::MissingField("firstName"));
        }
        if register_user_model.last_name.trim().is_empty() {
            return Err(AuthError::MissingField("lastName"));
        }

        let role = register_user_model
            .user_type
            .parse::<UserRole>()
            .map_err(AuthError::Invalid)?;

        let profile = match role {
            UserRole::Influencer => {
                let profile_data = register_user_model
                    .profile_data
                    .clone()
                    .unwrap_or_default();
                Some(InsertProfile::Influencer(profile_data.to_influencer_entity()))
            }
            UserRole::Business => {
                let profile_data = register_user_model
                    .profile_data
                    .clone()
                    .ok_or(AuthError::MissingField("companyName"))?;
                let company_name = profile_data
                    .company_name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .ok_or(AuthError::MissingField("companyName"))?;
                Some(InsertProfile::Business(
                    profile_data.to_business_entity(company_name),
                ))
            }
            UserRole::Admin | UserRole::Manager => None,
        };

        if self
            .user_repo
            .find_by_email(&email)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to check email availability");
                AuthError::Internal(err)
            })?
            .is_some()
        {
            warn!(%email, "auth: registration rejected, email taken");
            return Err(AuthError::EmailTaken);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(register_user_model.password.as_bytes(), &salt)
            .map_err(|err| AuthError::Internal(anyhow!("failed to hash password: {err}")))?
            .to_string();

        let user_entity = register_user_model.to_entity(password_hash, role);
        let user_id = self
            .user_repo
            .register_with_profile(user_entity, profile)
            .await
            .map_err(|err| {
                if err.downcast_ref::<DuplicateKeyViolation>().is_some() {
                    warn!(%email, "auth: registration lost the race, email taken");
                    AuthError::EmailTaken
                } else {
                    error!(db_error = ?err, "auth: failed to register user");
                    AuthError::Internal(err)
                }
            })?;

        let secondary_auth = Arc::clone(&self.secondary_auth);
        let mirror_email = email.clone();
        tokio::spawn(async move {
            if let Err(err) = secondary_auth.upsert_user(user_id, &mirror_email).await {
                warn!(%user_id, provider_error = ?err, "auth: secondary auth mirror failed");
            }
        });

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to load registered user");
                AuthError::Internal(err)
            })?
            .ok_or_else(|| AuthError::Internal(anyhow!("registered user {user_id} not found")))?;

        info!(%user_id, role = %role, "auth: user registered");
        self.build_auth_payload(user, false).await
    }

    pub async fn login(&self, login_model: LoginModel) -> UseCaseResult<LoginOutcome> {
        let email = login_model.email.trim().to_lowercase();
        let user = self
            .user_repo
            .find_by_email(&email)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to load user for login");
                AuthError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%email, "auth: login with unknown email");
                AuthError::InvalidCredentials
            })?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|err| AuthError::Internal(anyhow!("stored password hash is invalid: {err}")))?;
        if Argon2::default()
            .verify_password(login_model.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            warn!(user_id = %user.id, "auth: login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            warn!(user_id = %user.id, "auth: login for disabled account");
            return Err(AuthError::AccountDisabled);
        }

        if !user.is_verified {
            self.issue_verification_code(&user).await?;
            return Ok(LoginOutcome::VerificationRequired(VerificationRequiredDto {
                requires_verification: true,
                email: user.email,
                user_id: user.id,
            }));
        }

        let payload = self.build_auth_payload(user, true).await?;
        Ok(LoginOutcome::Authenticated(payload))
    }

    pub async fn verify_email(
        &self,
        verify_email_model: VerifyEmailModel,
    ) -> UseCaseResult<AuthPayloadDto> {
        let email = verify_email_model.email.trim().to_lowercase();
        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to load user for verification");
                AuthError::Internal(err)
            })?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified {
            return Err(AuthError::AlreadyVerified);
        }

        let code = self
            .code_repo
            .find_valid(&email, verify_email_model.code.trim())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to look up verification code");
                AuthError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "auth: verification with invalid code");
                AuthError::InvalidCode
            })?;

        // User flips first; a failure after this leaves the code unused and replayable.
        self.user_repo.mark_verified(user.id).await.map_err(|err| {
            error!(db_error = ?err, "auth: failed to mark user verified");
            AuthError::Internal(err)
        })?;
        self.code_repo.mark_used(code.id).await.map_err(|err| {
            error!(db_error = ?err, "auth: failed to mark code used");
            AuthError::Internal(err)
        })?;
        user.is_verified = true;

        info!(user_id = %user.id, "auth: email verified");
        self.build_auth_payload(user, true).await
    }

    pub async fn resend_verification_code(
        &self,
        resend_verification_model: ResendVerificationModel,
    ) -> UseCaseResult<()> {
        let email = resend_verification_model.email.trim().to_lowercase();
        let user = self
            .user_repo
            .find_by_email(&email)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to load user for code resend");
                AuthError::Internal(err)
            })?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified {
            return Err(AuthError::AlreadyVerified);
        }

        self.issue_verification_code(&user).await
    }

    pub async fn get_profile(&self, user_id: Uuid) -> UseCaseResult<AuthPayloadDto> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "auth: failed to load user profile");
                AuthError::Internal(err)
            })?
            .ok_or(AuthError::UserNotFound)?;

        self.build_auth_payload(user, false).await
    }

    async fn issue_verification_code(&self, user: &UserEntity) -> UseCaseResult<()> {
        let code = rand::thread_rng().gen_range(100_000..=999_999).to_string();
        let expires_at = Utc::now() + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES);

        self.code_repo
            .create(InsertEmailVerificationCodeEntity {
                email: user.email.clone(),
                code: code.clone(),
                expires_at,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "auth: failed to persist verification code");
                AuthError::Internal(err)
            })?;

        let body = format!(
            "Your verification code is {}. It expires in {} minutes.",
            code, VERIFICATION_CODE_TTL_MINUTES
        );
        self.mailer
            .deliver(&user.email, "Verify your email", &body)
            .await
            .map_err(|err| {
                error!(user_id = %user.id, mailer_error = ?err, "auth: code delivery failed");
                AuthError::CodeDelivery(err)
            })?;

        info!(user_id = %user.id, "auth: verification code issued");
        Ok(())
    }

    async fn build_auth_payload(
        &self,
        user: UserEntity,
        with_token: bool,
    ) -> UseCaseResult<AuthPayloadDto> {
        let profile = self.load_profile(&user).await?;
        let token = if with_token {
            Some(self.issue_token(&user)?)
        } else {
            None
        };

        Ok(AuthPayloadDto {
            user: UserDto::from(user),
            profile,
            token,
        })
    }

    async fn load_profile(&self, user: &UserEntity) -> UseCaseResult<Option<ProfileDto>> {
        match user.role.parse::<UserRole>() {
            Ok(UserRole::Influencer) => {
                let profile = self
                    .user_repo
                    .find_influencer_profile(user.id)
                    .await
                    .map_err(|err| {
                        error!(user_id = %user.id, db_error = ?err, "auth: failed to load influencer profile");
                        AuthError::Internal(err)
                    })?;
                Ok(profile.map(|entity| ProfileDto::Influencer(entity.into())))
            }
            Ok(UserRole::Business) => {
                let profile = self
                    .user_repo
                    .find_business_profile(user.id)
                    .await
                    .map_err(|err| {
                        error!(user_id = %user.id, db_error = ?err, "auth: failed to load business profile");
                        AuthError::Internal(err)
                    })?;
                Ok(profile.map(|entity| ProfileDto::Business(entity.into())))
            }
            Ok(UserRole::Admin) | Ok(UserRole::Manager) => Ok(None),
            Err(_) => {
                warn!(user_id = %user.id, role = %user.role, "auth: unknown role on stored user");
                Ok(None)
            }
        }
    }

    fn issue_token(&self, user: &UserEntity) -> UseCaseResult<String> {
        let claims = TokenClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: (Utc::now() + Duration::hours(SESSION_TOKEN_TTL_HOURS)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.token_secret.as_bytes()),
        )
        .map_err(|err| AuthError::Internal(anyhow!("failed to sign session token: {err}")))
    }
}

#[cfg(test)]
mod tests;
