//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 JWT 토큰 발급/검증을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordHasher, TokenService};
//!
//! let hasher = PasswordHasher::new(&config.password);
//! let hashed = hasher.hash("plaintext").await?;
//!
//! let token_service = TokenService::new(&config.jwt);
//! let token = token_service.issue(&user_id)?;
//! let claims = token_service.verify(&token)?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::*;
pub use token_service::*;
