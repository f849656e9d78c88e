//! # Application State
//!
//! 시작 시 한 번 생성된 서비스들을 `web::Data`로 묶어 각 워커의 `App`에 등록합니다.
//! 전역 레지스트리 없이 저장소 구현체를 생성자에서 주입받으므로,
//! 테스트는 메모리 저장소로 같은 상태를 조립할 수 있습니다.
//!
//! ```rust,ignore
//! let state = AppState::new(user_repo, address_repo, hasher, tokens);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| state.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use crate::{
    errors::AppError,
    repositories::{addresses::AddressRepository, users::UserRepository},
    services::{
        addresses::AddressService,
        auth::{PasswordHasher, TokenService},
        users::UserService,
    },
};

/// 워커 간에 공유되는 서비스 핸들 모음
#[derive(Clone)]
pub struct AppState {
    pub users: web::Data<UserService>,
    pub addresses: web::Data<AddressService>,
    pub tokens: web::Data<TokenService>,
}

impl AppState {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        address_repo: Arc<dyn AddressRepository>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            users: web::Data::new(UserService::new(user_repo, address_repo.clone(), hasher)),
            addresses: web::Data::new(AddressService::new(address_repo)),
            tokens: web::Data::new(tokens),
        }
    }

    /// 서비스와 JSON 추출 설정을 등록합니다.
    ///
    /// 파싱할 수 없는 요청 본문은 상세 원인 없이 [`AppError::ValidationError`]로 변환됩니다.
    /// 핸들러는 이 에러를 받아 라우트별 고정 응답으로 바꿉니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.addresses.clone())
            .app_data(self.tokens.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("요청 본문 파싱 실패 ({}): {}", req.path(), err);
    AppError::ValidationError("Invalid request body".to_string()).into()
}
