//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 저장소와 함께 생성되어 `web::Data`로 핸들러에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! async fn handler(users: web::Data<UserService>, tokens: web::Data<TokenService>) { /* ... */ }
//! ```

pub mod users;
pub mod addresses;
pub mod auth;
