//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! 보호가 필요한 라우트에만 개별 적용합니다.
//!
//! ```rust,ignore
//! #[post("/address", wrap = "AuthMiddleware::required()")]
//! pub async fn submit_address(user: AuthenticatedUser, /* ... */) -> HttpResponse { /* ... */ }
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
