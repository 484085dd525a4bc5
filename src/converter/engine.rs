//! 规则引擎：按规则表顺序，对同一缓冲区逐条执行全局替换

use std::borrow::Cow;
use std::sync::Arc;

use tracing::trace;

use crate::compiler::{CompiledRuleTable, RuleCompiler};
use crate::error::ConvResult;
use crate::rule::Rule;

/// 规则引擎
/// 规则表编译后不可变，克隆只增加引用计数，可在线程间共享
#[derive(Debug, Clone)]
pub struct RuleEngine {
    table: Arc<CompiledRuleTable>,
}

impl RuleEngine {
    pub fn new(table: CompiledRuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// 由自定义规则列表构建引擎
    pub fn from_rules(rules: &[Rule]) -> ConvResult<Self> {
        Ok(Self::new(RuleCompiler::compile(rules)?))
    }

    pub fn table(&self) -> &CompiledRuleTable {
        &self.table
    }

    pub fn rule_count(&self) -> usize {
        self.table.len()
    }

    /// 依次执行所有规则，第 N 条规则的输入是第 N-1 条规则的输出
    ///
    /// 不跳过、不重排、不因内容提前结束；某条规则无匹配即为空操作。
    /// 每条规则至多产生一个新缓冲区
    pub fn apply(&self, text: &str) -> String {
        let mut state = text.to_owned();
        let mut passes_changed = 0usize;

        for rule in self.table.iter() {
            let next = match rule.apply(&state) {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(replaced),
            };
            if let Some(replaced) = next {
                state = replaced;
                passes_changed += 1;
            }
        }

        trace!(
            "Converted {} chars, {}/{} rule passes changed the text",
            text.chars().count(),
            passes_changed,
            self.table.len()
        );
        state
    }
}
