//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! 보호가 필요한 라우트마다 개별적으로 적용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// | 상황 | 응답 |
/// |------|------|
/// | `Authorization` 헤더 없음 | 401 `Access Denied` |
/// | 형식 오류, 서명 불일치, 만료 | 400 `Invalid Token` |
/// | 검증 성공 | 다음 서비스 호출, `AuthenticatedUser` 첨부 |
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::config::JwtConfig;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    fn token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new(&JwtConfig::with_secret("middleware-secret")))
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_user() {
        let tokens = token_service();
        let token = tokens.issue("user-123").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .route("/me", web::get().to(whoami).wrap(AuthMiddleware::required())),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "user-123");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(token_service())
                .route("/me", web::get().to(whoami).wrap(AuthMiddleware::required())),
        )
        .await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(test::read_body(resp).await, "Access Denied");
    }

    #[actix_web::test]
    async fn test_header_without_bearer_scheme_is_invalid() {
        let tokens = token_service();
        let token = tokens.issue("user-123").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .route("/me", web::get().to(whoami).wrap(AuthMiddleware::required())),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(test::read_body(resp).await, "Invalid Token");
    }
}
