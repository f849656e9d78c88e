//! 주소 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::addresses::address::Address;

/// 독립 주소 문서 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub address: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.map(|id| id.to_hex()).unwrap_or_default(),
            address: address.address,
            user_id: address.user_id.to_hex(),
        }
    }
}
