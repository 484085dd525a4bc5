//! 规则模块：规则数据模型与两个方向的有序规则表
pub mod model;
pub mod unicode_to_zawgyi;
pub mod zawgyi_to_unicode;

pub use self::model::{Direction, Rule};
pub use self::unicode_to_zawgyi::UNICODE_TO_ZAWGYI;
pub use self::zawgyi_to_unicode::ZAWGYI_TO_UNICODE;

/// 获取指定方向的规则表（进程生命周期内内容不变）
pub fn rules_for(direction: Direction) -> &'static [Rule] {
    match direction {
        Direction::ZawgyiToUnicode => ZAWGYI_TO_UNICODE,
        Direction::UnicodeToZawgyi => UNICODE_TO_ZAWGYI,
    }
}
