//! Address Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// `addresses` 컬렉션에 저장되는 독립 주소 엔티티
///
/// `user_id`는 사용자 문서를 참조만 하며 존재 여부는 검증하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 주소 텍스트
    pub address: String,
    /// 소유 사용자 ID
    #[serde(rename = "userId")]
    pub user_id: ObjectId,
}

impl Address {
    pub fn new(address: String, user_id: ObjectId) -> Self {
        Self {
            id: None,
            address,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_user_id_is_stored_as_camel_case_reference() {
        let user_id = ObjectId::new();
        let address = Address::new("1 Main St".to_string(), user_id);

        let document = bson::to_document(&address).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_object_id("userId").unwrap(), user_id);
        assert_eq!(document.get_str("address").unwrap(), "1 Main St");
    }
}
