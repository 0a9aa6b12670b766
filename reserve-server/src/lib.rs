//! Reserve Server - 餐厅桌台预订引擎
//!
//! # 架构概述
//!
//! 预订调度与空桌解析引擎，通过 HTTP API 对外提供服务：
//!
//! - **存储** (`db`): 嵌入式 redb 预订存储 + 只读桌台目录
//! - **服务** (`services`): 空桌解析、预订生命周期、列表过滤
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! reserve-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 存储层 (redb + 桌台目录)
//! ├── services/      # 引擎服务
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、验证
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::{ReservationStorage, TableCatalog};
pub use services::{AvailabilityService, BookingService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   _____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / _ \
 / _, _/  __(__  )  __/ /   | |/ /  __/
/_/ |_|\___/____/\___/_/    |___/\___/
    "#
    );
}
