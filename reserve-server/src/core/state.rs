use std::sync::Arc;

use crate::core::Config;
use crate::core::error::Result;
use crate::db::{ReservationStorage, TableCatalog};
use crate::services::{AvailabilityService, BookingService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | storage | ReservationStorage | 预订存储 (嵌入式 redb) |
/// | catalog | Arc<TableCatalog> | 桌台目录 (只读) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 预订存储
    pub storage: ReservationStorage,
    /// 桌台目录
    pub catalog: Arc<TableCatalog>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 创建工作目录、打开数据库并加载桌台目录。`TABLES_FILE` 存在但无法
    /// 解析时直接失败；默认路径缺失时回退到内置布局。
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let storage = ReservationStorage::open(config.storage_path())?;

        let tables_path = config.tables_path();
        let catalog = if tables_path.exists() {
            let catalog = TableCatalog::load(&tables_path)?;
            tracing::info!(path = %tables_path.display(), tables = catalog.len(), "Table catalog loaded");
            catalog
        } else if config.tables_file.is_some() {
            // An explicitly configured file that is missing is a hard error
            return Err(anyhow::anyhow!(
                "TABLES_FILE points at a missing file: {}",
                tables_path.display()
            )
            .into());
        } else {
            let catalog = TableCatalog::seed_default();
            tracing::info!(tables = catalog.len(), "Using built-in table catalog");
            catalog
        };

        Ok(Self {
            config: config.clone(),
            storage,
            catalog: Arc::new(catalog),
        })
    }

    /// 预订生命周期服务
    pub fn booking(&self) -> BookingService {
        BookingService::new(self.storage.clone(), self.catalog.clone())
    }

    /// 空桌解析服务
    pub fn availability(&self) -> AvailabilityService {
        AvailabilityService::new(self.storage.clone(), self.catalog.clone())
    }
}
