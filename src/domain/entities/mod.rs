//! # Domain Entities
//!
//! MongoDB에 저장되는 영속 엔티티들입니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`User`](users::User) | `users` | 이름, 이메일, 해시된 비밀번호, 주소 문자열 목록 |
//! | [`Address`](addresses::Address) | `addresses` | 주소 텍스트와 소유 사용자 참조 |
//!
//! 두 주소 표현(사용자에 내장된 문자열 목록과 독립 컬렉션)은 서로 동기화되지 않습니다.
//! 사용자의 주소 목록은 내장 문자열 목록이 기준입니다.

pub mod users;
pub mod addresses;

pub use users::*;
pub use addresses::*;
