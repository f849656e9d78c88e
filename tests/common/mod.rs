//! 통합 테스트 공용 픽스처
//!
//! MongoDB 대신 메모리 저장소를 사용하여 [`AppState`]를 조립합니다.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use address_service_backend::{
    config::JwtConfig,
    domain::entities::{addresses::address::Address, users::user::User},
    errors::AppError,
    repositories::{addresses::AddressRepository, users::UserRepository},
    services::auth::{PasswordHasher, TokenService},
    state::AppState,
};
use async_trait::async_trait;
use chrono::Duration;
use mongodb::bson::oid::ObjectId;

pub const TEST_SECRET: &str = "integration-test-secret";

/// 테스트용 bcrypt cost (최솟값)
pub const TEST_COST: u32 = 4;

// --- 사용자 저장소 스텁 ---

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// 저장된 사용자를 이메일로 조회
    pub fn stored(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        user.id = Some(ObjectId::new());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.stored(email))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id.as_ref() == Some(id))
            .cloned())
    }

    async fn push_address(&self, id: &ObjectId, address: &str) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();
        Ok(users
            .iter_mut()
            .find(|user| user.id.as_ref() == Some(id))
            .map(|user| {
                user.addresses.push(address.to_string());
                user.clone()
            }))
    }
}

/// 모든 호출이 데이터베이스 에러로 실패하는 사용자 저장소
pub struct FailingUserRepository;

impl FailingUserRepository {
    fn unavailable<T>() -> Result<T, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: User) -> Result<User, AppError> {
        Self::unavailable()
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Self::unavailable()
    }

    async fn find_by_id(&self, _id: &ObjectId) -> Result<Option<User>, AppError> {
        Self::unavailable()
    }

    async fn push_address(&self, _id: &ObjectId, _address: &str) -> Result<Option<User>, AppError> {
        Self::unavailable()
    }
}

// --- 주소 저장소 스텁 ---

#[derive(Default)]
pub struct InMemoryAddressRepository {
    addresses: Mutex<Vec<Address>>,
}

impl InMemoryAddressRepository {
    pub fn all(&self) -> Vec<Address> {
        self.addresses.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn create(&self, mut address: Address) -> Result<Address, AppError> {
        address.id = Some(ObjectId::new());
        self.addresses.lock().unwrap().push(address.clone());
        Ok(address)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> Result<Vec<Address>, AppError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .filter(|address| &address.user_id == user_id)
            .cloned()
            .collect())
    }
}

// --- 애플리케이션 조립 ---

pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub addresses: Arc<InMemoryAddressRepository>,
    pub jwt: JwtConfig,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_jwt(JwtConfig::with_secret(TEST_SECRET))
    }

    pub fn with_jwt(jwt: JwtConfig) -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let addresses = Arc::new(InMemoryAddressRepository::default());

        let state = AppState::new(
            users.clone(),
            addresses.clone(),
            PasswordHasher::with_cost(TEST_COST),
            TokenService::new(&jwt),
        );

        Self {
            state,
            users,
            addresses,
            jwt,
        }
    }

    /// 사용자 저장소가 항상 실패하는 앱 상태
    pub fn with_failing_users() -> Self {
        let jwt = JwtConfig::with_secret(TEST_SECRET);
        let addresses = Arc::new(InMemoryAddressRepository::default());

        let state = AppState::new(
            Arc::new(FailingUserRepository),
            addresses.clone(),
            PasswordHasher::with_cost(TEST_COST),
            TokenService::new(&jwt),
        );

        Self {
            state,
            users: Arc::new(InMemoryUserRepository::default()),
            addresses,
            jwt,
        }
    }

    /// 같은 비밀키로 서명된 토큰 발급
    pub fn token_for(&self, user_id: &str) -> String {
        TokenService::new(&self.jwt).issue(user_id).unwrap()
    }

    /// 이미 만료된 토큰 발급
    pub fn expired_token_for(&self, user_id: &str) -> String {
        TokenService::with_ttl(&self.jwt, Duration::hours(-2))
            .issue(user_id)
            .unwrap()
    }
}

/// 테스트 앱 서비스 생성
///
/// ```rust,ignore
/// let ctx = TestContext::new();
/// let app = test_app!(ctx);
/// ```
macro_rules! test_app {
    ($ctx:expr) => {{
        let state = $ctx.state.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| state.configure(cfg))
                .configure(address_service_backend::routes::configure_all_routes),
        )
        .await
    }};
}

/// `POST /api/register`로 사용자를 등록하고 201을 확인합니다.
macro_rules! register_user {
    ($app:expr, $name:expr, $email:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/register")
            .set_json(serde_json::json!({
                "name": $name,
                "email": $email,
                "password": $password
            }))
            .to_request();
        let resp = actix_web::test::call_service($app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    }};
}
