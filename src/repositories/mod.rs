//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 엔티티마다 저장소 trait과 MongoDB 구현체를 제공합니다.
//! 구현체는 시작 시 생성된 [`Database`](crate::db::Database)를 주입받습니다.
//!
//! | Trait | MongoDB 구현 | 컬렉션 |
//! |-------|--------------|--------|
//! | [`UserRepository`](users::UserRepository) | [`MongoUserRepository`](users::MongoUserRepository) | `users` |
//! | [`AddressRepository`](addresses::AddressRepository) | [`MongoAddressRepository`](addresses::MongoAddressRepository) | `addresses` |

pub mod users;
pub mod addresses;
