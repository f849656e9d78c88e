//! # User HTTP Handlers
//!
//! 사용자 조회와 주소 추가 엔드포인트입니다. 두 엔드포인트 모두 인증이 필요하지 않습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/{id}` | 사용자 조회 (주소 문서 포함) | 200 / 404 / 500 |
//! | `PUT` | `/api/{id}/address` | 주소 목록에 주소 추가 | 200 / 400 / 404 / 500 |
//!
//! 실패 응답 본문은 `{"message": ...}` 형식입니다.
//! ObjectId 형식이 아닌 ID는 저장소 조회 전에 실패하며 500으로 응답합니다.

use actix_web::{get, put, web, HttpResponse};
use serde_json::json;
use crate::{
    domain::dto::{addresses::AddressRequest, users::response::MessageResponse},
    errors::AppError,
    handlers::read_json,
    services::users::UserService,
};

/// 사용자 조회 핸들러
///
/// `addresses` 컬렉션에서 이 사용자를 참조하는 주소 문서를 `addressRecords`로 함께 반환합니다.
#[get("/{id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    id: web::Path<String>,
) -> HttpResponse {
    match user_service.find_by_id(&id, true).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => message_error(e),
    }
}

/// 주소 추가 핸들러
///
/// 주소 문자열을 사용자의 주소 목록 끝에 추가합니다.
#[put("/{id}/address")]
pub async fn update_address(
    user_service: web::Data<UserService>,
    id: web::Path<String>,
    payload: Result<web::Json<AddressRequest>, actix_web::Error>,
) -> HttpResponse {
    let result = match read_json(payload) {
        Ok(request) => user_service.append_address(&id, &request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Address added successfully")),
        Err(e) => message_error(e),
    }
}

fn message_error(err: AppError) -> HttpResponse {
    match err {
        AppError::NotFound(_) => {
            HttpResponse::NotFound().json(json!({ "message": "User not found" }))
        }
        AppError::ValidationError(_) => {
            HttpResponse::BadRequest().json(json!({ "message": "Address is required" }))
        }
        e => {
            log::error!("사용자 요청 처리 중 오류: {}", e);
            HttpResponse::InternalServerError().json(json!({ "message": "Server error" }))
        }
    }
}
