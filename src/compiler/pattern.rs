//! 编译后模式模型
//! 正则编译后的结构

use std::borrow::Cow;

use tracing::warn;

use crate::rule::Direction;

#[derive(Debug, Clone)]
pub enum Matcher {
    Plain(regex::Regex), // 线性时间正则（无前瞻、无反向引用）
    Fancy(fancy_regex::Regex), // 回溯正则（前瞻断言、反向引用）
}

impl Matcher {
    /// 全局替换：从左到右、互不重叠地替换所有匹配，替换结果不在本轮内重新扫描
    ///
    /// 无匹配时返回 `Cow::Borrowed`，调用方据此避免重新分配缓冲区
    pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        match self {
            Matcher::Plain(regex) => regex.replace_all(text, replacement),
            Matcher::Fancy(regex) => match regex.try_replacen(text, 0, replacement) {
                Ok(replaced) => replaced,
                Err(e) => {
                    // 超出回溯上限时按无匹配处理，保证转换是全函数
                    warn!("Rule pass skipped, pattern {:?} failed at runtime: {}", regex.as_str(), e);
                    Cow::Borrowed(text)
                }
            },
        }
    }

    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::Plain(regex) => regex.is_match(input),
            Matcher::Fancy(regex) => regex.is_match(input).unwrap_or(false),
        }
    }

    /// 是否使用回溯引擎
    pub fn is_fancy(&self) -> bool {
        matches!(self, Matcher::Fancy(_))
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Matcher::Plain(r) => r.as_str(),
            Matcher::Fancy(r) => r.as_str(),
        }
    }
}

/// 编译后的单条规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// 在规则表中的位置
    pub index: usize,
    pub matcher: Matcher,
    pub replacement: &'static str,
}

impl CompiledRule {
    /// 对当前缓冲区执行一轮替换
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.matcher.replace_all(text, self.replacement)
    }
}

/// 编译后的规则表（保持原规则顺序）
#[derive(Debug, Clone)]
pub struct CompiledRuleTable {
    /// 内置规则表对应的方向；自定义规则表为 None
    pub direction: Option<Direction>,
    pub rules: Vec<CompiledRule>,
}

impl CompiledRuleTable {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }
}
