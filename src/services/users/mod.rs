//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 인증, 조회, 주소 추가 기능을 구현합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 응답 DTO에서 비밀번호 해시 제외
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = user_service.authenticate("user@example.com", "password").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
