//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`logger`] - 日志初始化
//! - [`validation`] - 输入验证

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
