//! 주소록 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤, 저장소와 서비스를 조립하여
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use address_service_backend::config::AppConfig;
use address_service_backend::db::Database;
use address_service_backend::repositories::{
    addresses::MongoAddressRepository,
    users::MongoUserRepository,
};
use address_service_backend::routes::configure_all_routes;
use address_service_backend::services::auth::{PasswordHasher, TokenService};
use address_service_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 주소록 서비스 시작중...");

    let config = AppConfig::from_env();
    info!("실행 환경: {:?}", config.environment);

    let database = initialize_database(&config).await?;

    let state = AppState::new(
        Arc::new(MongoUserRepository::new(database.clone())),
        Arc::new(MongoAddressRepository::new(database)),
        PasswordHasher::new(&config.password),
        TokenService::new(&config.jwt),
    );

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config.server.bind_address(), state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(bind_address: String, state: AppState) -> std::io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let state = state.clone();

        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| state.configure(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if dotenv::from_filename(".env.dev").is_err() {
                dotenv().ok();
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 연결을 초기화합니다
///
/// 연결 문자열을 해석할 수 없으면 시작을 중단합니다.
/// 핑 실패는 기록만 하며, 드라이버가 이후 요청에서 재연결을 시도합니다.
async fn initialize_database(config: &AppConfig) -> std::io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database).await.map_err(|e| {
        error!("MongoDB 클라이언트 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    match database.ping().await {
        Ok(()) => info!("✅ MongoDB 연결 성공 (데이터베이스: {})", database.database_name()),
        Err(e) => warn!("MongoDB 핑 실패, 연결 없이 계속 진행합니다: {}", e),
    }

    Ok(Arc::new(database))
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin, 메서드, 헤더를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec![actix_web::http::header::AUTHORIZATION])
        .max_age(3600)
}
