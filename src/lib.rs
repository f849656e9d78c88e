//! 주소록 서비스 백엔드
//!
//! 사용자 계정과 주소 목록을 MongoDB에 저장하는 REST API 서비스입니다.
//! bcrypt 비밀번호 해싱과 HS256 JWT 기반 인증을 제공합니다.
//!
//! # Features
//!
//! - **사용자 등록/로그인**: bcrypt 해시 저장, 로그인 시 JWT 발급
//! - **주소 등록**: Bearer 토큰으로 보호되는 주소 문서 생성
//! - **사용자 조회**: 비밀번호를 제외한 사용자 문서와 주소 문서 반환
//! - **주소 추가**: 사용자 문서의 주소 목록에 주소 추가
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait + MongoDB 구현)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use address_service_backend::{
//!     config::AppConfig,
//!     db::Database,
//!     repositories::{addresses::MongoAddressRepository, users::MongoUserRepository},
//!     services::auth::{PasswordHasher, TokenService},
//!     state::AppState,
//! };
//!
//! let config = AppConfig::from_env();
//! let database = Arc::new(Database::connect(&config.database).await?);
//!
//! let state = AppState::new(
//!     Arc::new(MongoUserRepository::new(database.clone())),
//!     Arc::new(MongoAddressRepository::new(database)),
//!     PasswordHasher::new(&config.password),
//!     TokenService::new(&config.jwt),
//! );
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod state;
