//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인 인증, 사용자 조회, 주소 추가를 담당합니다.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │  register · authenticate · find_by_id ·       │
//! │  append_address                               │
//! └───────────────────────────────────────────────┘
//!          │                 │              │
//!          ▼                 ▼              ▼
//!   PasswordHasher    UserRepository   AddressRepository
//! ```
//!
//! ## 비밀번호 보안
//!
//! - **저장 전 해싱**: `register`만이 사용자를 생성하며, 항상 해싱 후 저장합니다.
//! - **환경별 Cost**: 개발(4) vs 운영(12) 환경별 보안 강도

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::{
    domain::{
        dto::{
            addresses::{AddressRequest, AddressResponse},
            users::{request::RegisterRequest, response::UserDocument},
        },
        entities::users::user::User,
    },
    errors::AppError,
    repositories::{addresses::AddressRepository, users::UserRepository},
    services::auth::PasswordHasher,
};

/// 경로로 받은 사용자 ID를 ObjectId로 변환합니다.
///
/// 변환 실패는 조회 실패와 구분하여 `InternalError`(500)로 보고합니다.
pub(crate) fn parse_user_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::InternalError(format!("ObjectId 변환 실패 ({}): {}", id, e)))
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 해셔는 생성 시 명시적으로 주입됩니다.
///
/// ```rust,ignore
/// let user_service = UserService::new(user_repo, address_repo, PasswordHasher::new(&config.password));
/// let user = user_service.register(request).await?;
/// ```
pub struct UserService {
    users: Arc<dyn UserRepository>,
    addresses: Arc<dyn AddressRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        addresses: Arc<dyn AddressRepository>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            addresses,
            hasher,
        }
    }

    /// 새 사용자 등록
    ///
    /// 필수 필드를 검증하고 비밀번호를 해싱한 뒤 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 필수 필드 누락
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let password_hash = self.hasher.hash(&request.password).await?;
        let user = User::new(request.name, request.email, password_hash);

        self.users.create(user).await
    }

    /// 이메일/비밀번호 인증
    ///
    /// * `Err(AppError::NotFound)` - 해당 이메일의 사용자가 없음
    /// * `Err(AppError::InvalidCredentials)` - 비밀번호 불일치
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !self.hasher.compare(password, &user.password).await? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// `resolve_addresses`가 참이면 `addresses` 컬렉션에서 이 사용자를 참조하는
    /// 주소 문서를 함께 조회하여 `address_records`에 담습니다.
    ///
    /// ObjectId 형식이 아닌 ID는 `InternalError`를 반환합니다.
    pub async fn find_by_id(&self, id: &str, resolve_addresses: bool) -> Result<UserDocument, AppError> {
        let user_id = parse_user_id(id)?;

        let user = self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let address_records = if resolve_addresses {
            let records = self.addresses.find_by_user(&user_id).await?;
            Some(records.into_iter().map(AddressResponse::from).collect())
        } else {
            None
        };

        Ok(UserDocument::new(user, address_records))
    }

    /// 사용자의 주소 목록 끝에 주소를 추가합니다.
    ///
    /// 기존 주소는 그대로 유지됩니다.
    ///
    /// * `Err(AppError::ValidationError)` - 주소 누락
    /// * `Err(AppError::InternalError)` - ObjectId 형식이 아닌 ID
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn append_address(&self, id: &str, request: &AddressRequest) -> Result<User, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user_id = parse_user_id(id)?;

        self.users
            .push_address(&user_id, &request.address)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
