use serde::{Deserialize, Serialize};
use crate::domain::dto::addresses::AddressResponse;
use crate::domain::entities::users::user::User;

/// 단순 메시지 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 로그인 응답에 포함되는 사용자 요약 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub addresses: Vec<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            addresses,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            addresses,
        }
    }
}

/// 로그인 응답 DTO
///
/// 발급된 토큰은 본문에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserSummary,
}

impl LoginResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserSummary::from(user),
        }
    }
}

/// `GET /api/{id}` 응답 DTO
///
/// `address_records`는 주소 참조 해석을 요청한 경우에만 채워지며,
/// `addresses` 컬렉션에서 이 사용자를 참조하는 문서들입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub addresses: Vec<String>,
    #[serde(rename = "addressRecords", skip_serializing_if = "Option::is_none")]
    pub address_records: Option<Vec<AddressResponse>>,
}

impl UserDocument {
    pub fn new(user: User, address_records: Option<Vec<AddressResponse>>) -> Self {
        let UserSummary {
            id,
            name,
            email,
            addresses,
        } = UserSummary::from(user);

        Self {
            id,
            name,
            email,
            addresses,
            address_records,
        }
    }
}
