//! 인증 요청관련 DTO
//!
//! 로그인을 요청하는 사용자의 요청 정보를 매핑합니다.
use serde::Deserialize;

/// 로컬 로그인 요청 구조체
///
/// 누락된 이메일은 어떤 사용자와도 일치하지 않으므로 별도 검증 없이
/// "사용자 없음"으로 처리됩니다.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
