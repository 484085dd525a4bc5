//! 全局规则引擎单例管理
//! 两个方向的规则表在首次使用时编译一次，之后只读共享，无需加锁

use once_cell::sync::Lazy;

use super::engine::RuleEngine;
use crate::compiler::RuleCompiler;
use crate::rule::Direction;

/// 内置规则表是编译期常量数据，编译失败属于构建缺陷
fn build_engine(direction: Direction) -> RuleEngine {
    let table = RuleCompiler::compile_direction(direction).unwrap_or_else(|e| {
        panic!("built-in {} rule table is malformed: {}", direction, e);
    });
    RuleEngine::new(table)
}

static ZAWGYI_TO_UNICODE_ENGINE: Lazy<RuleEngine> =
    Lazy::new(|| build_engine(Direction::ZawgyiToUnicode));

static UNICODE_TO_ZAWGYI_ENGINE: Lazy<RuleEngine> =
    Lazy::new(|| build_engine(Direction::UnicodeToZawgyi));

/// 获取指定方向的全局引擎
pub fn engine_for(direction: Direction) -> &'static RuleEngine {
    match direction {
        Direction::ZawgyiToUnicode => &*ZAWGYI_TO_UNICODE_ENGINE,
        Direction::UnicodeToZawgyi => &*UNICODE_TO_ZAWGYI_ENGINE,
    }
}

/// 按指定方向转换文本
pub fn convert(text: &str, direction: Direction) -> String {
    engine_for(direction).apply(text)
}

/// Zawgyi 文本转为 Unicode 文本
pub fn to_unicode(zawgyi_text: &str) -> String {
    convert(zawgyi_text, Direction::ZawgyiToUnicode)
}

/// Unicode 文本转为 Zawgyi 文本
pub fn to_zawgyi(unicode_text: &str) -> String {
    convert(unicode_text, Direction::UnicodeToZawgyi)
}
