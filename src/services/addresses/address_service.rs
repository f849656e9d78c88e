//! # 주소 서비스 구현
//!
//! 인증된 사용자의 독립 주소 문서 생성을 담당합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::{
    domain::{dto::addresses::AddressRequest, entities::addresses::address::Address},
    errors::AppError,
    repositories::addresses::AddressRepository,
};

/// 주소 관리 비즈니스 로직 서비스
pub struct AddressService {
    addresses: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(addresses: Arc<dyn AddressRepository>) -> Self {
        Self { addresses }
    }

    /// 주소 문서 생성
    ///
    /// `user_id`는 토큰에서 얻은 사용자 ID입니다. 사용자 존재 여부는 확인하지 않습니다.
    ///
    /// * `Err(AppError::ValidationError)` - 주소 누락 또는 ObjectId가 아닌 사용자 ID
    pub async fn create(&self, request: &AddressRequest, user_id: &str) -> Result<Address, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string()))?;

        self.addresses
            .create(Address::new(request.address.clone(), user_id))
            .await
    }
}
