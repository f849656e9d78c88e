//! 사용자 요청 DTO

pub mod create_user;
pub mod auth_request;

pub use create_user::RegisterRequest;
pub use auth_request::LoginRequest;
