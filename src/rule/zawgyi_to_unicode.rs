//! Zawgyi -> Unicode 转换规则
//! 先收敛同一字形的多种 Zawgyi 编码，再做码位映射，最后把视觉顺序重排为逻辑顺序

use super::model::Rule;

/// Zawgyi -> Unicode 规则表（118 条，顺序即优先级）
pub static ZAWGYI_TO_UNICODE: &[Rule] = &[
    // 规范化：折叠重复符号、去除零宽空格
    Rule::new("([\u{102d}\u{102e}\u{103d}\u{102f}\u{1037}\u{1095}])\\1+", "${1}"),
    Rule::new("\u{200b}", ""),

    // 映射：中间符号与 asat 码位
    Rule::new("\u{103d}\u{103c}", "\u{108a}"),
    Rule::new("(\u{103d}|\u{1087})", "\u{103e}"),
    Rule::new("\u{103c}", "\u{103d}"),
    Rule::new("(\u{103b}|\u{107e}|\u{107f}|\u{1080}|\u{1081}|\u{1082}|\u{1083}|\u{1084})", "\u{103c}"),
    Rule::new("(\u{103a}|\u{107d})", "\u{103b}"),
    Rule::new("\u{1039}", "\u{103a}"),

    // 映射：叠字字形拆分为 virama + 辅音
    Rule::new("(\u{1066}|\u{1067})", "\u{1039}\u{1006}"),
    Rule::new("\u{106a}", "\u{1009}"),
    Rule::new("\u{106b}", "\u{100a}"),
    Rule::new("\u{106c}", "\u{1039}\u{100b}"),
    Rule::new("\u{106d}", "\u{1039}\u{100c}"),
    Rule::new("\u{106e}", "\u{100d}\u{1039}\u{100d}"),
    Rule::new("\u{106f}", "\u{100d}\u{1039}\u{100e}"),
    Rule::new("\u{1070}", "\u{1039}\u{100f}"),
    Rule::new("(\u{1071}|\u{1072})", "\u{1039}\u{1010}"),
    Rule::new("\u{1060}", "\u{1039}\u{1000}"),
    Rule::new("\u{1061}", "\u{1039}\u{1001}"),
    Rule::new("\u{1062}", "\u{1039}\u{1002}"),
    Rule::new("\u{1063}", "\u{1039}\u{1003}"),
    Rule::new("\u{1065}", "\u{1039}\u{1005}"),
    Rule::new("\u{1068}", "\u{1039}\u{1007}"),
    Rule::new("\u{1069}", "\u{1039}\u{1008}"),
    Rule::new("(\u{1073}|\u{1074})", "\u{1039}\u{1011}"),
    Rule::new("\u{1075}", "\u{1039}\u{1012}"),
    Rule::new("\u{1076}", "\u{1039}\u{1013}"),
    Rule::new("\u{1077}", "\u{1039}\u{1014}"),
    Rule::new("\u{1078}", "\u{1039}\u{1015}"),
    Rule::new("\u{1079}", "\u{1039}\u{1016}"),
    Rule::new("\u{107a}", "\u{1039}\u{1017}"),
    Rule::new("\u{107c}", "\u{1039}\u{1019}"),
    Rule::new("\u{1085}", "\u{1039}\u{101c}"),

    // 映射：元音符号及其变体字形
    Rule::new("\u{1033}", "\u{102f}"),
    Rule::new("\u{1034}", "\u{1030}"),
    Rule::new("\u{103f}", "\u{1030}"),
    Rule::new("\u{1086}", "\u{103f}"),
    Rule::new("\u{1036}\u{1088}", "\u{1088}\u{1036}"),
    Rule::new("\u{1088}", "\u{103e}\u{102f}"),
    Rule::new("\u{1089}", "\u{103e}\u{1030}"),
    Rule::new("\u{108a}", "\u{103d}\u{103e}"),

    // 重排：kinzi 移到所修饰辅音之前
    Rule::new("\u{103b}\u{1064}", "\u{1064}\u{103b}"),
    Rule::new("\u{103c}([\u{1000}-\u{1021}])(\u{1064}|\u{108b})", "${1}\u{103c}${2}"),
    Rule::new("(\u{1031})?([\u{1000}-\u{1021}\u{1040}-\u{1049}])(\u{103c})?\u{1064}", "\u{1004}\u{103a}\u{1039}${1}${2}${3}"),
    Rule::new("(\u{1031})?([\u{1000}-\u{1021}])(\u{103b}|\u{103c})?\u{108b}", "\u{1004}\u{103a}\u{1039}${1}${2}${3}\u{102d}"),
    Rule::new("(\u{1031})?([\u{1000}-\u{1021}])(\u{103b})?\u{108c}", "\u{1004}\u{103a}\u{1039}${1}${2}${3}\u{102e}"),
    Rule::new("(\u{1031})?([\u{1000}-\u{1021}])(\u{103b})?\u{108d}", "\u{1004}\u{103a}\u{1039}${1}${2}${3}\u{1036}"),

    // 映射：剩余扩展字形
    Rule::new("\u{108e}", "\u{102d}\u{1036}"),
    Rule::new("\u{108f}", "\u{1014}"),
    Rule::new("\u{1090}", "\u{101b}"),
    Rule::new("\u{1091}", "\u{100f}\u{1039}\u{100d}"),
    Rule::new("\u{1092}", "\u{100b}\u{1039}\u{100c}"),
    Rule::new("\u{1019}\u{102c}(\u{107b}|\u{1093})", "\u{1019}\u{1039}\u{1018}\u{102c}"),
    Rule::new("(\u{107b}|\u{1093})", "\u{1039}\u{1018}"),
    Rule::new("(\u{1094}|\u{1095})", "\u{1037}"),
    Rule::new("([\u{1000}-\u{1021}])\u{1037}\u{1032}", "${1}\u{1032}\u{1037}"),
    Rule::new("\u{1096}", "\u{1039}\u{1010}\u{103d}"),
    Rule::new("\u{1097}", "\u{100b}\u{1039}\u{100b}"),

    // 重排：中间符号 ြ 移到辅音之后
    Rule::new("\u{103c}([\u{1000}-\u{1021}])([\u{1000}-\u{1021}])?", "${1}\u{103c}${2}"),
    Rule::new("([\u{1000}-\u{1021}])\u{103c}\u{103a}", "\u{103c}${1}\u{103a}"),

    // 消歧：数字 ၇/၀ 与字母 ရ/ဝ 的混用
    Rule::new("\u{1047}(?=[\u{102c}-\u{1030}\u{1032}\u{1036}-\u{1038}\u{103d}\u{1038}])", "\u{101b}"),
    Rule::new("\u{1031}\u{1047}", "\u{1031}\u{101b}"),
    Rule::new("\u{1040}(\u{102e}|\u{102f}|\u{102d}\u{102f}|\u{1030}|\u{1036}|\u{103d}|\u{103e})", "\u{101d}${1}"),
    Rule::new("([^\u{1040}\u{1041}\u{1042}\u{1043}\u{1044}\u{1045}\u{1046}\u{1047}\u{1048}\u{1049}])\u{1040}\u{102b}", "${1}\u{101d}\u{102b}"),
    Rule::new("([\u{1040}\u{1041}\u{1042}\u{1043}\u{1044}\u{1045}\u{1046}\u{1047}\u{1048}\u{1049}])\u{1040}\u{102b}(?!\u{1038})", "${1}\u{101d}\u{102b}"),
    Rule::new("^\u{1040}(?=\u{102b})", "\u{101d}"),
    Rule::new("\u{1040}\u{102d}(?! ?/)", "\u{101d}\u{102d}"),
    Rule::new("([^\u{1040}-\u{1049}])\u{1040}([^\u{1040}-\u{1049} ]|[\u{104a}\u{104b}])", "${1}\u{101d}${2}"),
    Rule::new("([^\u{1040}-\u{1049}])\u{1040}(?=[\u{c}\n\r])", "${1}\u{101d}"),
    Rule::new("([^\u{1040}-\u{1049}])\u{1040}$", "${1}\u{101d}"),

    // 重排：视觉顺序 -> 逻辑顺序（ေ、中间符号、元音）
    Rule::new("\u{1031}([\u{1000}-\u{1021}\u{103f}])(\u{103e})?(\u{103b})?", "${1}${2}${3}\u{1031}"),
    Rule::new("([\u{1000}-\u{1021}])\u{1031}([\u{103b}\u{103c}\u{103d}\u{103e}]+)", "${1}${2}\u{1031}"),
    Rule::new("\u{1032}\u{103d}", "\u{103d}\u{1032}"),
    Rule::new("([\u{102d}\u{102e}])\u{103b}", "\u{103b}${1}"),
    Rule::new("\u{103d}\u{103b}", "\u{103b}\u{103d}"),
    Rule::new("\u{103a}\u{1037}", "\u{1037}\u{103a}"),
    Rule::new("\u{102f}(\u{102d}|\u{102e}|\u{1036}|\u{1037})\u{102f}", "\u{102f}${1}"),
    Rule::new("(\u{102f}|\u{1030})(\u{102d}|\u{102e})", "${2}${1}"),
    Rule::new("(\u{103e})(\u{103b}|\u{103c})", "${2}${1}"),

    // 映射：独立元音与特殊字母
    Rule::new("\u{1025}(?=[\u{1037}]?[\u{103a}\u{102c}])", "\u{1009}"),
    Rule::new("\u{1025}\u{102e}", "\u{1026}"),
    Rule::new("\u{1005}\u{103b}", "\u{1008}"),
    Rule::new("\u{1036}(\u{102f}|\u{1030})", "${1}\u{1036}"),
    Rule::new("\u{1031}\u{1037}\u{103e}", "\u{103e}\u{1031}\u{1037}"),
    Rule::new("\u{1031}\u{103e}\u{102c}", "\u{103e}\u{1031}\u{102c}"),
    Rule::new("\u{105a}", "\u{102b}\u{103a}"),
    Rule::new("\u{1031}\u{103b}\u{103e}", "\u{103b}\u{103e}\u{1031}"),
    Rule::new("(\u{102d}|\u{102e})(\u{103d}|\u{103e})", "${2}${1}"),

    // 重排：叠字与符号顺序修正
    Rule::new("\u{102c}\u{1039}([\u{1000}-\u{1021}])", "\u{1039}${1}\u{102c}"),
    Rule::new("\u{1039}\u{103c}\u{103a}\u{1039}([\u{1000}-\u{1021}])", "\u{103a}\u{1039}${1}\u{103c}"),
    Rule::new("\u{103c}\u{1039}([\u{1000}-\u{1021}])", "\u{1039}${1}\u{103c}"),
    Rule::new("\u{1036}\u{1039}([\u{1000}-\u{1021}])", "\u{1039}${1}\u{1036}"),
    Rule::new("\u{104e}", "\u{104e}\u{1004}\u{103a}\u{1038}"),
    Rule::new("\u{1040}(\u{102b}|\u{102c}|\u{1036})", "\u{101d}${1}"),
    Rule::new("\u{1025}\u{1039}", "\u{1009}\u{1039}"),
    Rule::new("([\u{1000}-\u{1021}])\u{103c}\u{1031}\u{103d}", "${1}\u{103c}\u{103d}\u{1031}"),
    Rule::new("([\u{1000}-\u{1021}])\u{103b}\u{1031}\u{103d}(\u{103e})?", "${1}\u{103b}\u{103d}${2}\u{1031}"),
    Rule::new("([\u{1000}-\u{1021}])\u{103d}\u{1031}\u{103b}", "${1}\u{103b}\u{103d}\u{1031}"),
    Rule::new("([\u{1000}-\u{1021}])\u{1031}(\u{1039}[\u{1000}-\u{1021}])", "${1}${2}\u{1031}"),

    // 清理：冗余 asat 与错位符号
    Rule::new("\u{1038}\u{103a}", "\u{103a}\u{1038}"),
    Rule::new("\u{102d}\u{103a}|\u{103a}\u{102d}", "\u{102d}"),
    Rule::new("\u{102d}\u{102f}\u{103a}", "\u{102d}\u{102f}"),
    Rule::new(" \u{1037}", "\u{1037}"),
    Rule::new("\u{1037}\u{1036}", "\u{1036}\u{1037}"),

    // 规范化：折叠重复符号
    Rule::new("[\u{102d}]+", "\u{102d}"),
    Rule::new("[\u{103a}]+", "\u{103a}"),
    Rule::new("[\u{103d}]+", "\u{103d}"),
    Rule::new("[\u{1037}]+", "\u{1037}"),
    Rule::new("[\u{102e}]+", "\u{102e}"),
    Rule::new("\u{102d}\u{102e}|\u{102e}\u{102d}", "\u{102e}"),
    Rule::new("\u{102f}\u{102d}", "\u{102d}\u{102f}"),
    Rule::new("\u{1037}\u{1037}", "\u{1037}"),
    Rule::new("\u{1032}\u{1032}", "\u{1032}"),

    // 收尾修正
    Rule::new("\u{1044}\u{1004}\u{103a}\u{1038}", "\u{104e}\u{1004}\u{103a}\u{1038}"),
    Rule::new("([\u{102d}\u{102e}])\u{1039}([\u{1000}-\u{1021}])", "\u{1039}${2}${1}"),
    Rule::new("(\u{103c}\u{1031})\u{1039}([\u{1000}-\u{1021}])", "\u{1039}${2}${1}"),
    Rule::new("\u{1036}\u{103d}", "\u{103d}\u{1036}"),
    Rule::new("\u{1047}((?=[\u{1000}-\u{1021}]\u{103a})|(?=[\u{102c}-\u{1030}\u{1032}\u{1036}-\u{1038}\u{103d}\u{103e}]))", "\u{101b}"),
];
