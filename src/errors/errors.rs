//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 핸들러는 각 라우트의 경계에서 에러를 라우트별 고정 메시지로 변환하며,
//! 상세 에러 메시지는 로그로만 남깁니다. `ResponseError` 구현은
//! 핸들러를 빠져나간 에러를 위한 기본 응답입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn append(id: &str, address: &str) -> Result<User, AppError> {
//!     let user_id = parse_user_id(id)?;
//!     user_repo.push_address(&user_id, address).await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 정보 누락 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰 서명 불일치, 만료, 형식 오류 (400 Bad Request)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 비밀번호 불일치 (400 Bad Request)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 해당하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidToken(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 500 계열(예상하지 못한 에러)인지 여부
    pub fn is_unexpected(&self) -> bool {
        self.status().is_server_error()
    }

    /// 클라이언트에 전달하는 일반 메시지
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "Invalid request",
            AppError::NotFound(_) => "Not found",
            AppError::AuthenticationError(_) => "Access Denied",
            AppError::InvalidToken(_) => "Invalid Token",
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "Server error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 상세 내용은 로그로만 남기고 응답에는 [`AppError::public_message`]를 사용합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_unexpected() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        actix_web::HttpResponse::build(self.status())
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지와 함께 `AppError::InternalError`로 변환합니다.
    fn context(self, msg: &str) -> Result<T, AppError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_error_response_hides_detail() {
        let error = AppError::ValidationError("Json deserialize error: invalid type".to_string());
        let body = actix_web::body::to_bytes(error.error_response().into_body())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value, serde_json::json!({ "error": "Invalid request" }));
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Access Denied".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_and_credential_errors_are_bad_requests() {
        assert_eq!(
            AppError::InvalidToken("expired".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unexpected_errors() {
        let database = AppError::DatabaseError("connection reset".to_string());
        let internal = AppError::InternalError("Something went wrong".to_string());

        assert!(database.is_unexpected());
        assert!(internal.is_unexpected());
        assert!(!AppError::InvalidCredentials.is_unexpected());
        assert_eq!(
            internal.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
