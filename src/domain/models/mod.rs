//! # Domain Models
//!
//! 영속되지 않는 인증 관련 모델입니다.
//!
//! - [`token`] - JWT 클레임
//! - [`auth`] - 인증 미들웨어가 요청에 첨부하는 사용자 정보

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
