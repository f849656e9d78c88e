//! 주소 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /api/address`, `PUT /api/{id}/address` 공통 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AddressRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
}
