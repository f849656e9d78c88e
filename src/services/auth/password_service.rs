//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반의 단방향 해싱과 비교를 제공합니다.
//! 해싱은 CPU를 오래 점유하므로 actix 블로킹 스레드 풀에서 실행합니다.

use actix_web::web;
use crate::config::PasswordConfig;
use crate::errors::{AppError, ErrorContext};

/// bcrypt 비밀번호 해셔
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self::with_cost(config.bcrypt_cost)
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 실패 또는 블로킹 풀 실행 실패
    pub async fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let start = std::time::Instant::now();
        let hashed = web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .context("비밀번호 해싱 작업 실행 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start.elapsed());

        Ok(hashed)
    }

    /// 평문 비밀번호가 해시와 일치하는지 확인합니다.
    ///
    /// 저장된 값이 bcrypt 해시 형식이 아니면 `AppError::InternalError`를 반환합니다.
    pub async fn compare(&self, plaintext: &str, hashed: &str) -> Result<bool, AppError> {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();

        web::block(move || bcrypt::verify(plaintext, &hashed))
            .await
            .context("비밀번호 검증 작업 실행 실패")?
            .context("비밀번호 검증 실패")
    }
}
