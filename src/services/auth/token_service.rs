//! JWT 토큰 관리 서비스 구현
//!
//! 사용자 ID를 담은 단기 액세스 토큰의 발급과 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::token::TokenClaims;
use crate::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 서명 키는 시작 시 한 번 읽어 보관합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// 토큰 유효 기간
    ttl: Duration,
    /// 로그인 시 토큰을 응답 헤더로 노출할지 여부
    expose_on_login: bool,
}

impl TokenService {
    /// 설정으로부터 토큰 서비스를 생성합니다.
    pub fn new(config: &JwtConfig) -> Self {
        Self::with_ttl(config, Duration::hours(config.expiration_hours))
    }

    /// 유효 기간을 직접 지정하여 토큰 서비스를 생성합니다.
    pub fn with_ttl(config: &JwtConfig, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl,
            expose_on_login: config.expose_on_login,
        }
    }

    /// 사용자 ID를 담은 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue(&user_id)?;
    /// ```
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명 불일치, 만료, 형식 오류 모두 `AppError::InvalidToken`으로 반환합니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::InvalidToken("토큰이 만료되었습니다".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::InvalidToken("토큰 서명이 일치하지 않습니다".to_string())
                    }
                    _ => AppError::InvalidToken("유효하지 않은 토큰입니다".to_string()),
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.verify(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::InvalidToken("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }

    /// 로그인 응답에 토큰을 노출할지 여부
    pub fn exposes_token_on_login(&self) -> bool {
        self.expose_on_login
    }
}
