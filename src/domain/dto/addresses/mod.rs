//! 주소 DTO 모듈

pub mod request;
pub mod response;

pub use request::AddressRequest;
pub use response::AddressResponse;
