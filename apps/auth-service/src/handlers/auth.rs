//! Authentication handlers.

use actix_web::{HttpResponse, web};

use reel_core::domain::{Email, Password};
use reel_core::use_cases::{LoginInput, SignUpInput};
use reel_shared::dto::{LoginRequest, LoginResponse, SignUpRequest, UserResponse};
use reel_web::{AppResult, Identity};

use crate::state::AppState;

/// POST /auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignUpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let input = SignUpInput {
        email: Email::parse(&req.email)?,
        password: Password::new(req.password)?,
        role: req.role,
    };
    let user = state.sign_up.execute(input).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user.to_public())))
}

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let input = LoginInput {
        email: Email::parse(&req.email)?,
        password: Password::new(req.password)?,
    };
    let output = state.login.execute(input).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::bearer(output.access_token, output.expires_in)))
}

/// GET /auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state.current_user.execute(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user.to_public())))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use reel_core::ports::{PasswordService, TokenService, UserRepository};
    use reel_infra::{Argon2PasswordService, InMemoryUserRepository, JwtConfig, JwtTokenService};
    use reel_web::RequestIdMiddleware;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn test_state() -> AppState {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "auth-handler-tests".to_string(),
            ..JwtConfig::default()
        }));
        AppState::from_parts(users, passwords, tokens)
    }

    macro_rules! test_app {
        ($state:expr) => {{
            let state = $state;
            test::init_service(
                App::new()
                    .wrap(RequestIdMiddleware)
                    .configure(|cfg| state.configure(cfg))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    fn post(uri: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_rt::test]
    async fn test_signup_creates_user() {
        let app = test_app!(test_state());

        let resp = test::call_service(
            &app,
            post(
                "/auth/signup",
                json!({"email": "  Luke@Rebels.example ", "password": "secret123"}),
            ).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "luke@rebels.example");
        assert_eq!(body["role"], "USER");
        assert!(body["id"].as_str().is_some());
        assert!(body.get("password_hash").is_none());
    }

    #[actix_rt::test]
    async fn test_signup_with_admin_role() {
        let app = test_app!(test_state());

        let resp = test::call_service(
            &app,
            post(
                "/auth/signup",
                json!({"email": "leia@rebels.example", "password": "secret123", "role": "ADMIN"}),
            ).to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["role"], "ADMIN");
    }

    #[actix_rt::test]
    async fn test_signup_rejects_invalid_input() {
        let app = test_app!(test_state());

        for body in [
            json!({"email": "not-an-email", "password": "secret123"}),
            json!({"email": "han@rebels.example", "password": "short"}),
            json!({"email": "han@rebels.example", "password": "secret123", "role": "ROOT"}),
            json!({"email": "han@rebels.example", "password": "secret123", "nickname": "solo"}),
            json!({"password": "secret123"}),
        ] {
            let resp = test::call_service(&app, post("/auth/signup", body.clone()).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");

            let problem: Value = test::read_body_json(resp).await;
            assert_eq!(problem["status"], 400);
        }
    }

    #[actix_rt::test]
    async fn test_signup_duplicate_email_conflicts() {
        let app = test_app!(test_state());
        let body = json!({"email": "chewie@rebels.example", "password": "secret123"});

        let first = test::call_service(&app, post("/auth/signup", body.clone()).to_request()).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = test::call_service(
            &app,
            post(
                "/auth/signup",
                json!({"email": "CHEWIE@rebels.example", "password": "other-secret"}),
            ).to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[actix_rt::test]
    async fn test_login_and_me() {
        let app = test_app!(test_state());
        let credentials = json!({"email": "lando@cloud.example", "password": "secret123"});
        test::call_service(&app, post("/auth/signup", credentials.clone()).to_request()).await;

        let resp = test::call_service(&app, post("/auth/login", credentials).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["expires_in"], 24 * 3600);
        let token = body["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/auth/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(me["email"], "lando@cloud.example");
        assert_eq!(me["role"], "USER");
    }

    #[actix_rt::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let app = test_app!(test_state());
        test::call_service(
            &app,
            post(
                "/auth/signup",
                json!({"email": "wedge@rebels.example", "password": "secret123"}),
            ).to_request(),
        )
        .await;

        let wrong = test::call_service(
            &app,
            post(
                "/auth/login",
                json!({"email": "wedge@rebels.example", "password": "not-it-123"}),
            ).to_request(),
        )
        .await;
        let unknown = test::call_service(
            &app,
            post(
                "/auth/login",
                json!({"email": "nobody@rebels.example", "password": "secret123"}),
            ).to_request(),
        )
        .await;

        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_me_requires_token() {
        let app = test_app!(test_state());

        let req = test::TestRequest::get()
            .uri("/auth/me")
            .insert_header(("X-Request-ID", "trace-me"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let problem: Value = test::read_body_json(resp).await;
        assert_eq!(problem["request_id"], "trace-me");
    }

    #[actix_rt::test]
    async fn test_health() {
        let app = test_app!(test_state());

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "auth-service");
    }
}
