//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 프로세스 시작 시 한 번 생성된 [`Database`]를 리포지토리에 주입하여
//! 모든 요청이 동일한 연결 풀을 재사용합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! if let Err(e) = database.ping().await {
//!     log::error!("MongoDB 연결 실패: {}", e);
//! }
//! let user_repo = MongoUserRepository::new(database.clone());
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에서 컬렉션에 접근하기 위한 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정으로부터 MongoDB 클라이언트를 생성합니다.
    ///
    /// 클라이언트는 지연 연결되므로 이 함수는 URI 파싱 실패 시에만 에러를
    /// 반환합니다. 실제 연결 확인은 [`Database::ping`]으로 수행합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("address_service".to_string());

        let client = Client::with_options(client_options)?;

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 서버에 `ping` 명령을 보내 연결 상태를 확인합니다.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(())
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users = database.collection::<User>("users");
    /// ```
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
