//! Authentication HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트를 처리합니다.
//!
//! - **회원가입**: `POST /api/register`
//! - **로그인**: `POST /api/login`
//!
//! 로그인은 토큰을 발급하지만 응답 본문에는 포함하지 않습니다.
//! `JWT_EXPOSE_ON_LOGIN`이 켜진 경우에만 `Authorization` 응답 헤더로 전달합니다.
use actix_web::{http::header, post, web, HttpResponse};
use serde_json::json;
use crate::{
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest},
            response::{LoginResponse, MessageResponse},
        },
        entities::users::user::User,
    },
    errors::AppError,
    handlers::read_json,
    services::{auth::TokenService, users::UserService},
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/register`
///
/// 본문 해석 실패, 검증 실패, 저장 실패 모두 400으로 응답합니다.
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: Result<web::Json<RegisterRequest>, actix_web::Error>,
) -> HttpResponse {
    let result = match read_json(payload) {
        Ok(request) => user_service.register(request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(user) => {
            log::info!("사용자 등록 완료 - ID: {}", user.id_string().unwrap_or_default());
            HttpResponse::Created().json(MessageResponse::new("User registered successfully"))
        }
        Err(e) => {
            log::warn!("사용자 등록 실패: {}", e);
            HttpResponse::BadRequest().json(json!({ "error": "Error registering user" }))
        }
    }
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/login`
///
/// # Responses
/// - 200: `{ "user": { "_id", "name", "email", "addresses" } }`
/// - 404: 사용자 없음
/// - 400: 비밀번호 불일치, 해석할 수 없는 요청 본문
/// - 500: 그 외 오류
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: Result<web::Json<LoginRequest>, actix_web::Error>,
) -> HttpResponse {
    let result = match read_json(payload) {
        Ok(request) => authenticate_and_issue(&user_service, &token_service, &request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok((user, token)) => {
            log::info!("로그인 성공 - 사용자: {}", user.email);

            let mut response = HttpResponse::Ok();
            if token_service.exposes_token_on_login() {
                response.insert_header((header::AUTHORIZATION, format!("Bearer {}", token)));
            }
            response.json(LoginResponse::new(user))
        }
        Err(AppError::NotFound(_)) => {
            log::info!("로그인 실패 - 존재하지 않는 이메일");
            HttpResponse::NotFound().json(json!({ "error": "User not found" }))
        }
        Err(e @ (AppError::InvalidCredentials | AppError::ValidationError(_))) => {
            log::info!("로그인 실패: {}", e);
            HttpResponse::BadRequest().json(json!({ "error": "Invalid credentials" }))
        }
        Err(e) => {
            log::error!("로그인 처리 중 오류: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Login failed" }))
        }
    }
}

async fn authenticate_and_issue(
    user_service: &UserService,
    token_service: &TokenService,
    payload: &LoginRequest,
) -> Result<(User, String), AppError> {
    let user = user_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let user_id = user.id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
    let token = token_service.issue(&user_id)?;

    Ok((user, token))
}
