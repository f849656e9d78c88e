//! 주소 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::addresses::{AddressRepository, MongoAddressRepository};
//!
//! let address_repo = MongoAddressRepository::new(database.clone());
//! let records = address_repo.find_by_user(&user_id).await?;
//! ```

pub mod address_repo;

pub use address_repo::{AddressRepository, MongoAddressRepository};
