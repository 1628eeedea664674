use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::auth::{AuthUseCase, SecondaryAuthGateway, VerificationMailer},
    config::config_model::DotEnvyConfig,
    domain::{
        repositories::{
            email_verification_codes::VerificationCodeRepository, users::UserRepository,
        },
        value_objects::users::{
            LoginModel, LoginOutcome, RegisterUserModel, ResendVerificationModel, VerifyEmailModel,
        },
    },
    infrastructure::{
        axum_http::error_responses,
        email::ConsoleMailer,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                email_verification_codes::VerificationCodePostgres, users::UserPostgres,
            },
        },
        secondary_auth::AuthProviderClient,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>, config: Arc<DotEnvyConfig>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let code_repository = VerificationCodePostgres::new(Arc::clone(&db_pool));
    let mailer = ConsoleMailer::new();
    let auth_provider_client = AuthProviderClient::new(
        config.auth_provider.base_url.clone(),
        config.auth_provider.api_key.clone(),
    );

    let auth_usecase = AuthUseCase::new(
        Arc::new(user_repository),
        Arc::new(code_repository),
        Arc::new(mailer),
        Arc::new(auth_provider_client),
        config.auth_provider.api_key.clone(),
    );

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/verify-email", post(verify_email))
        .route("/resend-verification", post(resend_verification))
        .route("/profile/:user_id", get(get_profile))
        .with_state(Arc::new(auth_usecase))
}

pub async fn register<U, C, M, G>(
    State(auth_usecase): State<Arc<AuthUseCase<U, C, M, G>>>,
    Json(register_user_model): Json<RegisterUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    info!(email = %register_user_model.email, "auth: registration request received");
    match auth_usecase.register(register_user_model).await {
        Ok(payload) => (StatusCode::CREATED, Json(payload)).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn login<U, C, M, G>(
    State(auth_usecase): State<Arc<AuthUseCase<U, C, M, G>>>,
    Json(login_model): Json<LoginModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    info!(email = %login_model.email, "auth: login request received");
    match auth_usecase.login(login_model).await {
        Ok(LoginOutcome::Authenticated(payload)) => Json(payload).into_response(),
        Ok(LoginOutcome::VerificationRequired(pending)) => {
            (StatusCode::FORBIDDEN, Json(pending)).into_response()
        }
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn verify_email<U, C, M, G>(
    State(auth_usecase): State<Arc<AuthUseCase<U, C, M, G>>>,
    Json(verify_email_model): Json<VerifyEmailModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    info!(email = %verify_email_model.email, "auth: verification request received");
    match auth_usecase.verify_email(verify_email_model).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn resend_verification<U, C, M, G>(
    State(auth_usecase): State<Arc<AuthUseCase<U, C, M, G>>>,
    Json(resend_verification_model): Json<ResendVerificationModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    info!(email = %resend_verification_model.email, "auth: resend verification request received");
    match auth_usecase
        .resend_verification_code(resend_verification_model)
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}

pub async fn get_profile<U, C, M, G>(
    State(auth_usecase): State<Arc<AuthUseCase<U, C, M, G>>>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
    C: VerificationCodeRepository + Send + Sync + 'static,
    M: VerificationMailer + Send + Sync + 'static,
    G: SecondaryAuthGateway + Send + Sync + 'static,
{
    info!(%user_id, "auth: profile request received");
    match auth_usecase.get_profile(user_id).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => error_responses::from_error(err.status_code(), err.to_string()),
    }
}
