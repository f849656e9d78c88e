//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `addresses`는 주소 문자열을 추가된 순서대로 보관합니다.
/// 별도의 `addresses` 컬렉션과는 동기화되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (유니크 제약 없음)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    /// 주소 문자열 목록
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `password_hash`는 반드시 해시된 값이어야 합니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
            addresses: Vec::new(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_user_starts_without_addresses() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.addresses.is_empty());
        assert_eq!(user.id_string(), None);
    }

    #[test]
    fn test_missing_addresses_field_defaults_to_empty() {
        let id = ObjectId::new();
        let document = bson::doc! {
            "_id": id,
            "name": "Alice",
            "email": "alice@example.com",
            "password": "$2b$04$hash",
        };

        let user: User = bson::from_document(document).unwrap();

        assert_eq!(user.id, Some(id));
        assert!(user.addresses.is_empty());
    }
}
