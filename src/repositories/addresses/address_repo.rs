//! # 주소 리포지토리 구현
//!
//! `addresses` 컬렉션의 데이터 액세스 계층입니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};
use crate::{
    db::Database,
    domain::entities::addresses::address::Address,
    errors::AppError,
};

/// 주소 저장소 trait
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// 새 주소 문서를 저장하고 할당된 ID가 채워진 주소를 반환합니다.
    async fn create(&self, address: Address) -> Result<Address, AppError>;

    /// 특정 사용자를 참조하는 주소 문서를 삽입 순서대로 조회합니다.
    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Vec<Address>, AppError>;
}

/// MongoDB 기반 주소 리포지토리
#[derive(Clone)]
pub struct MongoAddressRepository {
    db: Arc<Database>,
}

impl MongoAddressRepository {
    pub const COLLECTION: &'static str = "addresses";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Address> {
        self.db.collection::<Address>(Self::COLLECTION)
    }
}

#[async_trait]
impl AddressRepository for MongoAddressRepository {
    async fn create(&self, mut address: Address) -> Result<Address, AppError> {
        let result = self.collection()
            .insert_one(&address)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        address.id = Some(id);

        Ok(address)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Vec<Address>, AppError> {
        // ObjectId는 생성 시각 순으로 증가하므로 _id 정렬이 삽입 순서가 됩니다
        let cursor = self.collection()
            .find(doc! { "userId": user_id })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
