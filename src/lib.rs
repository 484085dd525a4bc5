//! zawgyi-converter - 基于有序正则规则的 Zawgyi / Unicode 缅甸文互转库

// 导出全局错误类型
pub use self::error::{ConvResult, ConverterError};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, RenameConfig};

// 导出规则模块核心接口
pub use self::rule::{rules_for, Direction, Rule, UNICODE_TO_ZAWGYI, ZAWGYI_TO_UNICODE};

// 导出编译模块核心接口
pub use self::compiler::{CompiledRule, CompiledRuleTable, Matcher, RuleCompiler};

// 导出转换模块核心接口
pub use self::converter::{convert, engine_for, to_unicode, to_zawgyi, RuleEngine};

// 导出重命名模块核心接口
pub use self::renamer::{could_not_find_folder_message, FolderRenameResult, RenameResult, Renamer};

// 声明所有子模块
pub mod compiler;
pub mod config;
pub mod converter;
pub mod error;
pub mod renamer;
pub mod rule;
