//! 规则数据模型
//! 规则是 (正则模式, 替换模板) 的有序对，规则表是按优先级排列的切片

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConvResult, ConverterError};

/// 单条替换规则
/// - pattern: 作用于缅甸文码位块的正则，可含字符类、零宽前瞻、捕获组、反向引用
/// - replacement: 替换模板，`${n}` 引用捕获组，未参与匹配的组展开为空串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Rule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self { pattern, replacement }
    }
}

/// 转换方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Zawgyi -> Unicode（目标编码）
    #[default]
    ZawgyiToUnicode,
    /// Unicode -> Zawgyi（源编码）
    UnicodeToZawgyi,
}

impl Direction {
    /// 反方向
    pub fn reverse(self) -> Self {
        match self {
            Direction::ZawgyiToUnicode => Direction::UnicodeToZawgyi,
            Direction::UnicodeToZawgyi => Direction::ZawgyiToUnicode,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ZawgyiToUnicode => "zawgyi_to_unicode",
            Direction::UnicodeToZawgyi => "unicode_to_zawgyi",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ConverterError;

    /// 支持按目标编码命名（unicode / zawgyi）或按方向命名（z2u / u2z）
    fn from_str(s: &str) -> ConvResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" | "uni" | "z2u" | "zawgyi_to_unicode" | "zawgyi-to-unicode" => {
                Ok(Direction::ZawgyiToUnicode)
            }
            "zawgyi" | "zg" | "u2z" | "unicode_to_zawgyi" | "unicode-to-zawgyi" => {
                Ok(Direction::UnicodeToZawgyi)
            }
            other => Err(ConverterError::InvalidInput(format!(
                "unknown conversion direction: {}",
                other
            ))),
        }
    }
}
