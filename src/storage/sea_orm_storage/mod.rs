//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod submissions;

use crate::config::DatabaseConfig;
use crate::errors::{CoStudyError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;
use url::Url;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(config)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!(
            "SeaORM 存储初始化完成，数据库: {}",
            Self::redact_credentials(&db_url)
        );

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CoStudyError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| CoStudyError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CoStudyError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    ///
    /// 网络数据库 URL 未带凭据时，拼入 `database.user` / `database.password`。
    fn build_database_url(config: &DatabaseConfig) -> Result<String> {
        let url = config.url.trim();
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Self::with_credentials(url, &config.user, &config.password)
        } else {
            Err(CoStudyError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    fn with_credentials(url: &str, user: &str, password: &str) -> Result<String> {
        let mut parsed = Url::parse(url)
            .map_err(|e| CoStudyError::database_config(format!("数据库 URL 解析失败: {e}")))?;
        if user.is_empty() || !parsed.username().is_empty() {
            return Ok(url.to_string());
        }

        // set_username / set_password 会自动做百分号编码
        let spliced = parsed.set_username(user).is_ok()
            && (password.is_empty() || parsed.set_password(Some(password)).is_ok());
        if !spliced {
            return Err(CoStudyError::database_config(format!(
                "数据库 URL 不能携带凭据: {url}"
            )));
        }
        Ok(parsed.into())
    }

    // 日志中隐藏密码
    fn redact_credentials(url: &str) -> String {
        match Url::parse(url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                match parsed.set_password(Some("***")) {
                    Ok(()) => parsed.into(),
                    Err(()) => url.to_string(),
                }
            }
            _ => url.to_string(),
        }
    }
}

// Storage trait 实现
use crate::models::{
    DeleteResult, InsertOneResult, PageWindow, UpdateResult,
    assignments::{
        entities::{Assignment, AssignmentFields},
        requests::UpdateAssignmentRequest,
    },
    submissions::{
        entities::{Submission, SubmissionFields, SubmissionStatus},
        requests::GradeSubmissionRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作业模块
    async fn list_assignments(&self, window: PageWindow) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(window).await
    }

    async fn list_assignments_by_difficulty(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_by_difficulty_impl(difficulty).await
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn create_assignment(
        &self,
        id: Option<String>,
        fields: AssignmentFields,
    ) -> Result<InsertOneResult> {
        self.create_assignment_impl(id, fields).await
    }

    async fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<UpdateResult> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: &str) -> Result<DeleteResult> {
        self.delete_assignment_impl(id).await
    }

    async fn count_assignments(&self) -> Result<u64> {
        self.count_assignments_impl().await
    }

    // 提交模块
    async fn create_submission(
        &self,
        id: Option<String>,
        fields: SubmissionFields,
    ) -> Result<InsertOneResult> {
        self.create_submission_impl(id, fields).await
    }

    async fn list_submissions_by_status(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_by_status_impl(status).await
    }

    async fn list_submissions_by_user(&self, user: &str) -> Result<Vec<Submission>> {
        self.list_submissions_by_user_impl(user).await
    }

    async fn grade_submission(
        &self,
        id: &str,
        grade: GradeSubmissionRequest,
    ) -> Result<UpdateResult> {
        self.grade_submission_impl(id, grade).await
    }
}
