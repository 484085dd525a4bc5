//! 规则编译器核心
//! 仅负责将规则表编译为可执行的匹配器，不改变规则顺序

use std::time::Instant;

use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledRule, CompiledRuleTable, Matcher};
use crate::error::{ConvResult, ConverterError};
use crate::rule::{rules_for, Direction, Rule};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译内置规则表
    pub fn compile_direction(direction: Direction) -> ConvResult<CompiledRuleTable> {
        let mut table = Self::compile(rules_for(direction))?;
        table.direction = Some(direction);
        debug!("Rule table {} ready, {} rules", direction, table.len());
        Ok(table)
    }

    /// 按原顺序编译规则列表
    pub fn compile(rules: &[Rule]) -> ConvResult<CompiledRuleTable> {
        let start = Instant::now();
        let mut compiled = Vec::with_capacity(rules.len());
        let mut stats = CompileStats::default();

        for (index, rule) in rules.iter().enumerate() {
            let matcher = Self::compile_single_pattern(index, rule.pattern)?;
            if matcher.is_fancy() {
                stats.fancy_count += 1;
            } else {
                stats.plain_count += 1;
            }
            compiled.push(CompiledRule {
                index,
                matcher,
                replacement: rule.replacement,
            });
        }

        debug!(
            "Compiled {} rules in {:?} (linear: {}, backtracking: {})",
            compiled.len(),
            start.elapsed(),
            stats.plain_count,
            stats.fancy_count
        );

        Ok(CompiledRuleTable {
            direction: None,
            rules: compiled,
        })
    }

    /// 编译单个模式：优先使用线性时间引擎，遇到前瞻或反向引用再退回回溯引擎
    fn compile_single_pattern(index: usize, pattern: &str) -> ConvResult<Matcher> {
        let plain_err = match Regex::new(pattern) {
            Ok(regex) => return Ok(Matcher::Plain(regex)),
            Err(e) => e,
        };

        match fancy_regex::Regex::new(pattern) {
            Ok(regex) => Ok(Matcher::Fancy(regex)),
            Err(fancy_err) => Err(ConverterError::RuleCompileError {
                index,
                pattern: pattern.to_string(),
                reason: format!("{}; {}", plain_err, fancy_err),
            }),
        }
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    plain_count: usize,
    fancy_count: usize,
}
