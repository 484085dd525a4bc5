//! 全局配置管理，存储文件重命名相关的可配置项

use serde::{Deserialize, Serialize};

use crate::rule::Direction;

/// 重命名配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConfig {
    // 文件名转换方向（默认 Zawgyi -> Unicode）
    pub direction: Direction,
    // 只报告将要执行的重命名，不改动文件系统
    pub dry_run: bool,
    // 目录重命名时是否递归处理子目录
    pub recursive: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> RenameConfig {
        RenameConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: RenameConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RenameConfig::default(),
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> RenameConfig {
        self.config
    }
}
