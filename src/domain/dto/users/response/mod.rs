//! 사용자 응답 DTO

pub mod user_response;

pub use user_response::*;
