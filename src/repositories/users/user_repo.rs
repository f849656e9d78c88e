//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! [`UserRepository`] trait이 저장소 계약을 정의하고,
//! [`MongoUserRepository`]가 `users` 컬렉션 위에서 이를 구현합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::AppError,
};

/// 사용자 저장소 trait
///
/// 서비스 계층은 이 trait에만 의존하므로 테스트에서는 메모리 구현으로 대체할 수 있습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 할당된 ID가 채워진 사용자를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 이메일 주소로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 사용자의 주소 목록 끝에 주소 문자열을 추가하고 갱신된 사용자를 반환합니다.
    ///
    /// 사용자가 없으면 `Ok(None)`을 반환합니다.
    async fn push_address(&self, id: &ObjectId, address: &str) -> Result<Option<User>, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **이메일 유니크 인덱스 없음**: 중복 이메일 가입을 막지 않습니다.
#[derive(Clone)]
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(Self::COLLECTION)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn push_address(&self, id: &ObjectId, address: &str) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$push": { "addresses": address } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
