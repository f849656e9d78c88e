//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 키, 토큰 만료 시간, 로그인 응답의 토큰 노출 여부를 관리합니다.

use std::env;

/// JWT 토큰 설정
///
/// ## 환경 변수
///
/// ```bash
/// export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
/// export JWT_EXPIRATION_HOURS="1"
/// export JWT_EXPOSE_ON_LOGIN="false"
/// ```
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 유효 시간 (시간 단위)
    pub expiration_hours: i64,
    /// 로그인 시 발급한 토큰을 `Authorization` 응답 헤더로 내려줄지 여부
    ///
    /// 기본값은 `false`이며, 이 경우 로그인은 토큰을 발급만 하고
    /// 클라이언트에게 전달하지 않습니다.
    pub expose_on_login: bool,
}

impl JwtConfig {
    pub const DEFAULT_EXPIRATION_HOURS: i64 = 1;

    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// `JWT_SECRET`이 없으면 경고 로그를 남기고 개발용 기본 키를 사용합니다.
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        let expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|hours| hours.parse().ok())
            .unwrap_or(Self::DEFAULT_EXPIRATION_HOURS);

        let expose_on_login = env::var("JWT_EXPOSE_ON_LOGIN")
            .map(|flag| parse_flag(&flag))
            .unwrap_or(false);

        Self {
            secret,
            expiration_hours,
            expose_on_login,
        }
    }

    /// 주어진 비밀키와 기본 만료 시간으로 설정을 생성합니다.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: Self::DEFAULT_EXPIRATION_HOURS,
            expose_on_login: false,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
