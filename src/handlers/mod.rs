//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 각 핸들러는 서비스 에러를 라우트 경계에서 고정된 응답으로 변환합니다.
//! 상세 에러는 로그로만 남기고 클라이언트에는 일반 메시지만 전달합니다.
//!
//! - [`auth`] - 회원가입, 로그인
//! - [`addresses`] - 인증된 주소 등록
//! - [`users`] - 사용자 조회, 주소 추가

pub mod auth;
pub mod addresses;
pub mod users;

use actix_web::web;
use crate::errors::AppError;

/// 요청 본문 추출 결과를 서비스 계층의 에러로 변환합니다.
///
/// 본문을 읽지 못한 경우에도 각 핸들러의 고정 응답으로 이어지도록
/// 상세 원인은 로그에만 남깁니다.
pub(crate) fn read_json<T>(payload: Result<web::Json<T>, actix_web::Error>) -> Result<T, AppError> {
    payload.map(web::Json::into_inner).map_err(|e| {
        log::debug!("요청 본문 추출 실패: {}", e);
        AppError::ValidationError("Invalid request body".to_string())
    })
}
