//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문의 구조를 정의합니다.
//! 엔티티를 그대로 노출하지 않고, 비밀번호 해시 같은 민감 정보를 제외한
//! 응답 전용 타입으로 변환합니다.
//!
//! | 엔드포인트 | 요청 DTO | 응답 DTO |
//! |------------|----------|----------|
//! | `POST /api/register` | [`RegisterRequest`] | [`MessageResponse`] |
//! | `POST /api/login` | [`LoginRequest`] | [`LoginResponse`] |
//! | `POST /api/address` | [`AddressRequest`] | [`MessageResponse`] |
//! | `GET /api/{id}` | - | [`UserDocument`] |
//! | `PUT /api/{id}/address` | [`AddressRequest`] | [`MessageResponse`] |

pub mod users;
pub mod addresses;

pub use users::*;
pub use addresses::*;
