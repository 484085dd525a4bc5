//! 编译模块：将规则表编译为可执行的正则匹配器
pub mod compiler;
pub mod pattern;

pub use self::compiler::RuleCompiler;
pub use self::pattern::{CompiledRule, CompiledRuleTable, Matcher};
