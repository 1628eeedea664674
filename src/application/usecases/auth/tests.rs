use axum::http::StatusCode;
use mockall::predicate::eq;

use super::*;
use crate::domain::entities::{
    business_profiles::BusinessProfileEntity, email_verification_codes::EmailVerificationCodeEntity,
    influencer_profiles::InfluencerProfileEntity,
};
use crate::domain::repositories::{
    email_verification_codes::MockVerificationCodeRepository, users::MockUserRepository,
};
use crate::domain::value_objects::users::ProfileDataModel;

type TestAuthUseCase = AuthUseCase<
    MockUserRepository,
    MockVerificationCodeRepository,
    MockVerificationMailer,
    MockSecondaryAuthGateway,
>;

fn usecase(
    user_repo: MockUserRepository,
    code_repo: MockVerificationCodeRepository,
    mailer: MockVerificationMailer,
    secondary_auth: MockSecondaryAuthGateway,
) -> TestAuthUseCase {
    AuthUseCase::new(
        Arc::new(user_repo),
        Arc::new(code_repo),
        Arc::new(mailer),
        Arc::new(secondary_auth),
        "test-secret".to_string(),
    )
}

fn hash_of(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

fn user_fixture(role: UserRole, password: &str, is_verified: bool) -> UserEntity {
    UserEntity {
        id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        password_hash: hash_of(password),
        role: role.to_string(),
        first_name: "Jamie".to_string(),
        last_name: "Rivera".to_string(),
        is_verified,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn register_model(user_type: &str, profile_data: Option<ProfileDataModel>) -> RegisterUserModel {
    RegisterUserModel {
        email: "Casey@Example.com".to_string(),
        password: "sufficiently-long".to_string(),
        user_type: user_type.to_string(),
        first_name: "Casey".to_string(),
        last_name: "Nguyen".to_string(),
        profile_data,
    }
}

fn code_fixture(email: &str, code: &str) -> EmailVerificationCodeEntity {
    EmailVerificationCodeEntity {
        id: Uuid::new_v4(),
        email: email.to_string(),
        code: code.to_string(),
        expires_at: Utc::now() + Duration::minutes(VERIFICATION_CODE_TTL_MINUTES),
        used: false,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn registers_influencer_and_normalizes_email() {
    let mut user_repo = MockUserRepository::new();
    let user_id = Uuid::new_v4();
    let mut registered = user_fixture(UserRole::Influencer, "sufficiently-long", false);
    registered.id = user_id;
    registered.email = "casey@example.com".to_string();

    user_repo
        .expect_find_by_email()
        .withf(|email| email == "casey@example.com")
        .returning(|_| Box::pin(async move { Ok(None) }));
    user_repo
        .expect_register_with_profile()
        .withf(|entity, profile| {
            entity.email == "casey@example.com"
                && matches!(
                    profile,
                    Some(InsertProfile::Influencer(p))
                        if p.follower_count == 0 && p.user_id.is_none()
                )
        })
        .returning(move |_, _| Box::pin(async move { Ok(user_id) }));
    user_repo.expect_find_by_id().with(eq(user_id)).returning(move |_| {
        let registered = registered.clone();
        Box::pin(async move { Ok(Some(registered)) })
    });
    user_repo
        .expect_find_influencer_profile()
        .with(eq(user_id))
        .returning(move |_| {
            Box::pin(async move {
                Ok(Some(InfluencerProfileEntity {
                    id: Uuid::new_v4(),
                    user_id,
                    follower_count: 0,
                    engagement_rate: None,
                    rate_per_story_minor: None,
                    rate_per_post_minor: None,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            })
        });

    let mut secondary_auth = MockSecondaryAuthGateway::new();
    secondary_auth
        .expect_upsert_user()
        .returning(|_, _| Ok(()));

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        secondary_auth,
    );

    let payload = auth
        .register(register_model("influencer", None))
        .await
        .unwrap();

    assert_eq!(payload.user.id, user_id);
    assert_eq!(payload.user.email, "casey@example.com");
    assert_eq!(payload.user.role, "influencer");
    assert!(!payload.user.is_verified);
    assert!(matches!(
        payload.profile,
        Some(ProfileDto::Influencer(ref p)) if p.user_id == user_id
    ));
    assert!(payload.token.is_none());
}

#[tokio::test]
async fn register_admin_creates_no_profile_row() {
    let mut user_repo = MockUserRepository::new();
    let user_id = Uuid::new_v4();
    let mut registered = user_fixture(UserRole::Admin, "sufficiently-long", false);
    registered.id = user_id;

    user_repo
        .expect_find_by_email()
        .returning(|_| Box::pin(async move { Ok(None) }));
    user_repo
        .expect_register_with_profile()
        .withf(|entity, profile| entity.role == "admin" && profile.is_none())
        .returning(move |_, _| Box::pin(async move { Ok(user_id) }));
    user_repo.expect_find_by_id().returning(move |_| {
        let registered = registered.clone();
        Box::pin(async move { Ok(Some(registered)) })
    });

    let mut secondary_auth = MockSecondaryAuthGateway::new();
    secondary_auth
        .expect_upsert_user()
        .returning(|_, _| Ok(()));

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        secondary_auth,
    );

    let payload = auth.register(register_model("admin", None)).await.unwrap();
    assert_eq!(payload.user.role, "admin");
    assert!(payload.profile.is_none());
}

#[tokio::test]
async fn register_returns_created_business_profile() {
    let mut user_repo = MockUserRepository::new();
    let user_id = Uuid::new_v4();
    let mut registered = user_fixture(UserRole::Business, "sufficiently-long", false);
    registered.id = user_id;

    user_repo
        .expect_find_by_email()
        .returning(|_| Box::pin(async move { Ok(None) }));
    user_repo
        .expect_register_with_profile()
        .withf(|_, profile| {
            matches!(
                profile,
                Some(InsertProfile::Business(p)) if p.company_name == "Northwind Outfitters"
            )
        })
        .returning(move |_, _| Box::pin(async move { Ok(user_id) }));
    user_repo.expect_find_by_id().returning(move |_| {
        let registered = registered.clone();
        Box::pin(async move { Ok(Some(registered)) })
    });
    user_repo
        .expect_find_business_profile()
        .with(eq(user_id))
        .returning(move |_| {
            Box::pin(async move {
                Ok(Some(BusinessProfileEntity {
                    id: Uuid::new_v4(),
                    user_id,
                    company_name: "Northwind Outfitters".to_string(),
                    website: None,
                    industry: None,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            })
        });

    let mut secondary_auth = MockSecondaryAuthGateway::new();
    secondary_auth
        .expect_upsert_user()
        .returning(|_, _| Ok(()));

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        secondary_auth,
    );

    let profile_data = ProfileDataModel {
        company_name: Some("Northwind Outfitters".to_string()),
        ..ProfileDataModel::default()
    };
    let payload = auth
        .register(register_model("business", Some(profile_data)))
        .await
        .unwrap();

    assert_eq!(payload.user.role, "business");
    assert!(matches!(
        payload.profile,
        Some(ProfileDto::Business(ref p)) if p.company_name == "Northwind Outfitters"
    ));
    assert!(payload.token.is_none());
}

#[tokio::test]
async fn register_requires_company_name_for_business() {
    let auth = usecase(
        MockUserRepository::new(),
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .register(register_model("business", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MissingField("companyName")));

    let blank_company = ProfileDataModel {
        company_name: Some("   ".to_string()),
        ..ProfileDataModel::default()
    };
    let err = auth
        .register(register_model("business", Some(blank_company)))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MissingField("companyName")));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_short_password() {
    let auth = usecase(
        MockUserRepository::new(),
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let mut model = register_model("influencer", None);
    model.password = "short".to_string();

    let err = auth.register(model).await.unwrap_err();
    assert!(matches!(err, AuthError::Invalid(_)));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_taken_email() {
    let mut user_repo = MockUserRepository::new();
    user_repo.expect_find_by_email().returning(|_| {
        Box::pin(async move { Ok(Some(user_fixture(UserRole::Business, "irrelevant", true))) })
    });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .register(register_model("influencer", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_maps_duplicate_key_race_to_conflict() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_email()
        .returning(|_| Box::pin(async move { Ok(None) }));
    user_repo.expect_register_with_profile().returning(|_, _| {
        Box::pin(async move { Err(DuplicateKeyViolation("users_email_key").into()) })
    });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .register(register_model("influencer", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn registration_survives_secondary_auth_outage() {
    let mut user_repo = MockUserRepository::new();
    let user_id = Uuid::new_v4();
    let registered = user_fixture(UserRole::Influencer, "sufficiently-long", false);

    user_repo
        .expect_find_by_email()
        .returning(|_| Box::pin(async move { Ok(None) }));
    user_repo
        .expect_register_with_profile()
        .returning(move |_, _| Box::pin(async move { Ok(user_id) }));
    user_repo.expect_find_by_id().returning(move |_| {
        let registered = registered.clone();
        Box::pin(async move { Ok(Some(registered)) })
    });
    user_repo
        .expect_find_influencer_profile()
        .returning(|_| Box::pin(async move { Ok(None) }));

    let mut secondary_auth = MockSecondaryAuthGateway::new();
    secondary_auth
        .expect_upsert_user()
        .returning(|_, _| Err(anyhow!("provider offline")));

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        secondary_auth,
    );

    let result = auth.register(register_model("influencer", None)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_email()
        .returning(|_| Box::pin(async move { Ok(None) }));

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .login(LoginModel {
            email: "nobody@example.com".to_string(),
            password: "whatever-long".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "the-real-password", true);
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .login(LoginModel {
            email: "user@example.com".to_string(),
            password: "not-the-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn login_rejects_disabled_account() {
    let mut user_repo = MockUserRepository::new();
    let mut user = user_fixture(UserRole::Influencer, "sufficiently-long", true);
    user.is_active = false;
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .login(LoginModel {
            email: "user@example.com".to_string(),
            password: "sufficiently-long".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AccountDisabled));
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unverified_login_issues_fresh_code() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "sufficiently-long", false);
    let user_id = user.id;
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });

    let mut code_repo = MockVerificationCodeRepository::new();
    code_repo
        .expect_create()
        .withf(|entity| {
            let ttl = entity.expires_at - Utc::now();
            entity.email == "user@example.com"
                && entity.code.len() == 6
                && entity.code.chars().all(|c| c.is_ascii_digit())
                && ttl > Duration::minutes(VERIFICATION_CODE_TTL_MINUTES - 1)
                && ttl <= Duration::minutes(VERIFICATION_CODE_TTL_MINUTES)
        })
        .returning(|_| Box::pin(async move { Ok(Uuid::new_v4()) }));

    let mut mailer = MockVerificationMailer::new();
    mailer
        .expect_deliver()
        .withf(|to, _, body| to == "user@example.com" && body.contains("expires in 10 minutes"))
        .returning(|_, _, _| Ok(()));

    let auth = usecase(user_repo, code_repo, mailer, MockSecondaryAuthGateway::new());

    let outcome = auth
        .login(LoginModel {
            email: "user@example.com".to_string(),
            password: "sufficiently-long".to_string(),
        })
        .await
        .unwrap();

    match outcome {
        LoginOutcome::VerificationRequired(challenge) => {
            assert!(challenge.requires_verification);
            assert_eq!(challenge.email, "user@example.com");
            assert_eq!(challenge.user_id, user_id);
        }
        other => panic!("expected verification challenge, got {:?}", other),
    }
}

#[tokio::test]
async fn verification_code_delivery_failure_is_fatal() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "sufficiently-long", false);
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });

    let mut code_repo = MockVerificationCodeRepository::new();
    code_repo
        .expect_create()
        .returning(|_| Box::pin(async move { Ok(Uuid::new_v4()) }));

    let mut mailer = MockVerificationMailer::new();
    mailer
        .expect_deliver()
        .returning(|_, _, _| Err(anyhow!("relay unreachable")));

    let auth = usecase(user_repo, code_repo, mailer, MockSecondaryAuthGateway::new());

    let err = auth
        .login(LoginModel {
            email: "user@example.com".to_string(),
            password: "sufficiently-long".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::CodeDelivery(_)));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn verified_login_returns_token_and_profile() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "sufficiently-long", true);
    let user_id = user.id;
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });
    user_repo
        .expect_find_influencer_profile()
        .with(eq(user_id))
        .returning(move |_| {
            Box::pin(async move {
                Ok(Some(InfluencerProfileEntity {
                    id: Uuid::new_v4(),
                    user_id,
                    follower_count: 52_000,
                    engagement_rate: Some(4.2),
                    rate_per_story_minor: Some(15_000),
                    rate_per_post_minor: Some(25_000),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            })
        });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let outcome = auth
        .login(LoginModel {
            email: "user@example.com".to_string(),
            password: "sufficiently-long".to_string(),
        })
        .await
        .unwrap();

    let payload = match outcome {
        LoginOutcome::Authenticated(payload) => payload,
        other => panic!("expected authenticated session, got {:?}", other),
    };
    assert!(matches!(
        payload.profile,
        Some(ProfileDto::Influencer(ref p)) if p.follower_count == 52_000
    ));

    let token = payload.token.unwrap();
    let decoded = jsonwebtoken::decode::<TokenClaims>(
        &token,
        &jsonwebtoken::DecodingKey::from_secret(b"test-secret"),
        &jsonwebtoken::Validation::default(),
    )
    .unwrap();
    assert_eq!(decoded.claims.sub, user_id.to_string());
    assert_eq!(decoded.claims.role, "influencer");
}

#[tokio::test]
async fn verify_email_rejects_unknown_code() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "sufficiently-long", false);
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });

    let mut code_repo = MockVerificationCodeRepository::new();
    code_repo
        .expect_find_valid()
        .returning(|_, _| Box::pin(async move { Ok(None) }));

    let auth = usecase(
        user_repo,
        code_repo,
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .verify_email(VerifyEmailModel {
            email: "user@example.com".to_string(),
            code: "000000".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCode));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn verify_email_marks_user_then_consumes_code() {
    let mut seq = mockall::Sequence::new();

    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "sufficiently-long", false);
    let user_id = user.id;
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });
    user_repo
        .expect_mark_verified()
        .with(eq(user_id))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Box::pin(async move { Ok(()) }));
    user_repo
        .expect_find_influencer_profile()
        .returning(|_| Box::pin(async move { Ok(None) }));

    let code = code_fixture("user@example.com", "482913");
    let code_id = code.id;
    let mut code_repo = MockVerificationCodeRepository::new();
    code_repo
        .expect_find_valid()
        .withf(|email, code| email == "user@example.com" && code == "482913")
        .returning(move |_, _| {
            let code = code.clone();
            Box::pin(async move { Ok(Some(code)) })
        });
    code_repo
        .expect_mark_used()
        .with(eq(code_id))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Box::pin(async move { Ok(()) }));

    let auth = usecase(
        user_repo,
        code_repo,
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let payload = auth
        .verify_email(VerifyEmailModel {
            email: "user@example.com".to_string(),
            code: "482913".to_string(),
        })
        .await
        .unwrap();

    assert!(payload.user.is_verified);
    assert!(payload.token.is_some());
}

#[tokio::test]
async fn verify_email_conflicts_when_already_verified() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Influencer, "sufficiently-long", true);
    user_repo.expect_find_by_email().returning(move |_| {
        let user = user.clone();
        Box::pin(async move { Ok(Some(user)) })
    });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .verify_email(VerifyEmailModel {
            email: "user@example.com".to_string(),
            code: "482913".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AlreadyVerified));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn resend_rejects_unknown_email() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_email()
        .returning(|_| Box::pin(async move { Ok(None) }));

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let err = auth
        .resend_verification_code(ResendVerificationModel {
            email: "nobody@example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UserNotFound));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_profile_omits_token() {
    let mut user_repo = MockUserRepository::new();
    let user = user_fixture(UserRole::Business, "sufficiently-long", true);
    let user_id = user.id;
    user_repo
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
    user_repo
        .expect_find_business_profile()
        .with(eq(user_id))
        .returning(move |_| {
            Box::pin(async move {
                Ok(Some(BusinessProfileEntity {
                    id: Uuid::new_v4(),
                    user_id,
                    company_name: "Northwind Outfitters".to_string(),
                    website: Some("https://northwind.example".to_string()),
                    industry: Some("apparel".to_string()),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            })
        });

    let auth = usecase(
        user_repo,
        MockVerificationCodeRepository::new(),
        MockVerificationMailer::new(),
        MockSecondaryAuthGateway::new(),
    );

    let payload = auth.get_profile(user_id).await.unwrap();

    assert!(payload.token.is_none());
    assert!(matches!(
        payload.profile,
        Some(ProfileDto::Business(ref p)) if p.company_name == "Northwind Outfitters"
    ));
}
