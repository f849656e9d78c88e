//! Address HTTP Handlers
//!
//! 인증된 사용자의 주소 문서를 생성합니다.

use actix_web::{post, web, HttpResponse};
use serde_json::json;
use crate::{
    domain::{
        dto::{addresses::AddressRequest, users::response::MessageResponse},
        models::auth::AuthenticatedUser,
    },
    handlers::read_json,
    middlewares::AuthMiddleware,
    services::addresses::AddressService,
};

/// 주소 등록 핸들러
///
/// # Endpoint
/// `POST /api/address` (Bearer 토큰 필요)
///
/// 토큰 검사는 라우트에 적용된 [`AuthMiddleware`]가 수행하며,
/// 본문 해석 실패, 검증 실패, 저장 실패는 모두 400으로 응답합니다.
#[post("/address", wrap = "AuthMiddleware::required()")]
pub async fn submit_address(
    address_service: web::Data<AddressService>,
    user: AuthenticatedUser,
    payload: Result<web::Json<AddressRequest>, actix_web::Error>,
) -> HttpResponse {
    let result = match read_json(payload) {
        Ok(request) => address_service.create(&request, &user.user_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(address) => {
            log::info!(
                "주소 등록 완료 - 사용자 ID: {}, 주소 ID: {}",
                user.user_id,
                address.id.map(|id| id.to_hex()).unwrap_or_default()
            );
            HttpResponse::Created().json(MessageResponse::new("Address added successfully"))
        }
        Err(e) => {
            log::warn!("주소 등록 실패: {}", e);
            HttpResponse::BadRequest().json(json!({ "error": "Error adding address" }))
        }
    }
}
