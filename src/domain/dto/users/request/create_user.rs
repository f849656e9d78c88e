//! # 회원가입 요청 DTO
//!
//! `POST /api/register` 요청 본문을 표현합니다.
//! 누락된 필드는 빈 문자열로 역직렬화된 뒤 검증 단계에서 거부됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
///
/// 세 필드 모두 필수입니다. 형식 검증(이메일 형식, 비밀번호 강도)은 하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이름
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// 사용자 이메일
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    /// 평문 비밀번호 (저장 전에 해싱됨)
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
