//! 全局错误类型定义
//! 转换本身没有错误通道，这里的错误只来自规则编译与参数解析；
//! 文件操作失败以 RenameResult 上报

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    // ===================== 规则相关错误 =====================
    /// 规则表中某条规则无法被任何正则引擎编译（构建期缺陷）
    #[error("Rule #{index} failed to compile ({pattern:?}): {reason}")]
    RuleCompileError {
        index: usize,
        pattern: String,
        reason: String,
    },

    // ===================== 基础错误 =====================
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 全局Result类型
pub type ConvResult<T> = Result<T, ConverterError>;
