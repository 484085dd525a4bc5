//! Unicode -> Zawgyi 转换规则
//! 规则数少于反方向，不对称部分保持原样，不补逆规则

use super::model::Rule;

/// Unicode -> Zawgyi 规则表（79 条，顺序即优先级）
pub static UNICODE_TO_ZAWGYI: &[Rule] = &[
    // 映射：kinzi、合字与特殊字母
    Rule::new("\u{1004}\u{103a}\u{1039}", "\u{1064}"),
    Rule::new("\u{1039}\u{1010}\u{103d}", "\u{1096}"),
    Rule::new("\u{102b}\u{103a}", "\u{105a}"),
    Rule::new("\u{102d}\u{1036}", "\u{108e}"),
    Rule::new("\u{104e}\u{1004}\u{103a}\u{1038}", "\u{104e}"),

    // 变体字形：ဉ/ဥ、ည、န
    Rule::new("[\u{1025}\u{1009}](?=\u{1039})", "\u{106a}"),
    Rule::new("\u{1009}(?=[\u{102f}\u{1030}])", "\u{1025}"),
    Rule::new("[\u{1025}\u{1009}](?=[\u{1037}]?[\u{103a}])", "\u{1025}"),
    Rule::new("\u{100a}(?=[\u{1039}\u{103d}])", "\u{106b}"),
    // 量词缺少 "{"：只匹配字面量 "0,1}"，对正常文本不生效
    Rule::new("(\u{1039}[\u{1000}-\u{1021}])(\u{102d})0,1\\}\u{102f}", "${1}${2}\u{1033}"),
    Rule::new("(\u{1039}[\u{1000}-\u{1021}])\u{1030}", "${1}\u{1034}"),
    Rule::new("\u{1014}(?=[\u{102d}\u{102e}\u{102f}\u{103a}]?[\u{1030}\u{103d}\u{103e}\u{102f}\u{1039}])", "\u{108f}"),
    Rule::new("\u{1014}(?=\u{103a}\u{102f} )", "\u{108f}"),
    Rule::new("\u{1014}\u{103c}", "\u{108f}\u{103c}"),

    // 映射：叠字字形
    Rule::new("\u{1039}\u{1000}", "\u{1060}"),
    Rule::new("\u{1039}\u{1001}", "\u{1061}"),
    Rule::new("\u{1039}\u{1002}", "\u{1062}"),
    Rule::new("\u{1039}\u{1003}", "\u{1063}"),
    Rule::new("\u{1039}\u{1005}", "\u{1065}"),
    Rule::new("\u{1039}\u{1006}", "\u{1066}"),
    Rule::new("\u{1039}\u{1007}", "\u{1068}"),
    Rule::new("\u{1039}\u{1008}", "\u{1069}"),
    Rule::new("\u{1039}\u{100b}", "\u{106c}"),
    Rule::new("\u{100b}\u{1039}\u{100c}", "\u{1092}"),
    Rule::new("\u{1039}\u{100c}", "\u{106d}"),
    Rule::new("\u{100d}\u{1039}\u{100d}", "\u{106e}"),
    Rule::new("\u{100d}\u{1039}\u{100e}", "\u{106f}"),
    Rule::new("\u{1039}\u{100f}", "\u{1070}"),
    Rule::new("\u{1039}\u{1010}", "\u{1071}"),
    Rule::new("\u{1039}\u{1011}", "\u{1073}"),
    Rule::new("\u{1039}\u{1012}", "\u{1075}"),
    Rule::new("\u{1039}\u{1013}", "\u{1076}"),
    Rule::new("\u{1039}[\u{1014}\u{108f}]", "\u{1077}"),
    Rule::new("\u{1039}\u{1015}", "\u{1078}"),
    Rule::new("\u{1039}\u{1016}", "\u{1079}"),
    Rule::new("\u{1039}\u{1017}", "\u{107a}"),
    Rule::new("\u{1039}\u{1018}", "\u{107b}"),
    Rule::new("\u{1039}\u{1019}", "\u{107c}"),
    Rule::new("\u{1039}\u{101c}", "\u{1085}"),

    // 映射：ဿ 与中间符号组合
    Rule::new("\u{103f}", "\u{1086}"),
    Rule::new("\u{103d}\u{103e}", "\u{108a}"),

    // 重排：kinzi 与上标元音合并
    Rule::new("(\u{1064})([\u{1000}-\u{1021}])([\u{103b}\u{103c}]?)\u{102d}", "${2}${3}\u{108b}"),
    Rule::new("(\u{1064})([\u{1000}-\u{1021}])([\u{103b}\u{103c}]?)\u{102e}", "${2}${3}\u{108c}"),
    Rule::new("(\u{1064})([\u{1000}-\u{1021}])([\u{103b}\u{103c}]?)\u{1036}", "${2}${3}\u{108d}"),
    Rule::new("(\u{1064})([\u{1000}-\u{1021}\u{1040}-\u{1049}])([\u{103b}\u{103c}]?)([\u{1031}]?)", "${2}${3}${4}${1}"),

    // 变体字形：ရ
    Rule::new("\u{101b}(?=([\u{102d}\u{102e}]?)[\u{102f}\u{1030}\u{103d}\u{108a}])", "\u{1090}"),
    Rule::new("\u{100f}\u{1039}\u{100d}", "\u{1091}"),
    Rule::new("\u{100b}\u{1039}\u{100b}", "\u{1097}"),

    // 重排：ေ 与 ြ 移到辅音之前（逻辑顺序 -> 视觉顺序）
    Rule::new("([\u{1000}-\u{1021}\u{108f}\u{1029}\u{106e}\u{106f}\u{1086}\u{1090}\u{1091}\u{1092}\u{1097}])([\u{1060}-\u{1069}\u{106c}\u{106d}\u{1070}-\u{107c}\u{1085}\u{108a}])?([\u{103b}-\u{103e}]*)?\u{1031}", "\u{1031}${1}${2}${3}"),
    Rule::new("\u{103c}\u{103e}", "\u{103c}\u{1087}"),
    Rule::new("([\u{1000}-\u{1021}\u{108f}\u{1029}])([\u{1060}-\u{1069}\u{106c}\u{106d}\u{1070}-\u{107c}\u{1085}])?(\u{103c})", "${3}${1}${2}"),

    // 映射：asat 与中间符号码位
    Rule::new("\u{103a}", "\u{1039}"),
    Rule::new("\u{103b}", "\u{103a}"),
    Rule::new("\u{103c}", "\u{103b}"),
    Rule::new("\u{103d}", "\u{103c}"),
    Rule::new("\u{103e}", "\u{103d}"),

    // 变体字形：ု ူ ့ 的高低位形式
    Rule::new("([^\u{103a}\u{100a}])\u{103d}([\u{102d}\u{102e}]?)\u{102f}", "${1}\u{1088}${2}"),
    Rule::new("([\u{101b}\u{103a}\u{103c}\u{108a}\u{1088}\u{1090}])([\u{1030}\u{103d}])?([\u{1032}\u{1036}\u{1039}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}]?)(\u{102f})?\u{1037}", "${1}${2}${3}${4}\u{1095}"),
    Rule::new("([\u{102f}\u{1014}\u{1030}\u{103d}])([\u{1032}\u{1036}\u{1039}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}]?)\u{1037}", "${1}${2}\u{1094}"),
    Rule::new("([\u{103b}])([\u{1000}-\u{1021}])([\u{1087}]?)([\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}]?)\u{102f}", "${1}${2}${3}${4}\u{1033}"),
    Rule::new("([\u{103b}])([\u{1000}-\u{1021}])([\u{1087}]?)([\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}]?)\u{1030}", "${1}${2}${3}${4}\u{1034}"),
    Rule::new("([\u{103a}\u{103c}\u{100a}\u{1008}\u{100b}\u{100c}\u{100d}\u{1020}\u{1025}])([\u{103d}]?)([\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}]?)\u{102f}", "${1}${2}${3}\u{1033}"),
    Rule::new("([\u{103a}\u{103c}\u{100a}\u{1008}\u{100b}\u{100c}\u{100d}\u{1020}\u{1025}])(\u{103d}?)([\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}]?)\u{1030}", "${1}${2}${3}\u{1034}"),
    Rule::new("([\u{100a}\u{1020}\u{1009}])\u{103d}", "${1}\u{1087}"),
    Rule::new("\u{103d}\u{1030}", "\u{1089}"),

    // 变体字形：ြ 的宽窄形式
    Rule::new("\u{103b}([\u{1000}\u{1003}\u{1006}\u{100f}\u{1010}\u{1011}\u{1018}\u{101a}\u{101c}\u{101a}\u{101e}\u{101f}])", "\u{107e}${1}"),
    Rule::new("\u{107e}([\u{1000}\u{1003}\u{1006}\u{100f}\u{1010}\u{1011}\u{1018}\u{101a}\u{101c}\u{101a}\u{101e}\u{101f}])([\u{103c}\u{108a}])([\u{1032}\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}])", "\u{1084}${1}${2}${3}"),
    Rule::new("\u{107e}([\u{1000}\u{1003}\u{1006}\u{100f}\u{1010}\u{1011}\u{1018}\u{101a}\u{101c}\u{101a}\u{101e}\u{101f}])([\u{103c}\u{108a}])", "\u{1082}${1}${2}"),
    Rule::new("\u{107e}([\u{1000}\u{1003}\u{1006}\u{100f}\u{1010}\u{1011}\u{1018}\u{101a}\u{101c}\u{101a}\u{101e}\u{101f}])([\u{1033}\u{1034}]?)([\u{1032}\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}])", "\u{1080}${1}${2}${3}"),
    Rule::new("\u{103b}([\u{1000}-\u{1021}])([\u{103c}\u{108a}])([\u{1032}\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}])", "\u{1083}${1}${2}${3}"),
    Rule::new("\u{103b}([\u{1000}-\u{1021}])([\u{103c}\u{108a}])", "\u{1081}${1}${2}"),
    Rule::new("\u{103b}([\u{1000}-\u{1021}])([\u{1033}\u{1034}]?)([\u{1032}\u{1036}\u{102d}\u{102e}\u{108b}\u{108c}\u{108d}\u{108e}])", "\u{107f}${1}${2}${3}"),

    // 重排与收尾修正
    Rule::new("\u{103a}\u{103d}", "\u{103d}\u{103a}"),
    Rule::new("\u{103a}([\u{103c}\u{108a}])", "${1}\u{107d}"),
    Rule::new("([\u{1033}\u{1034}])(\u{1036}?)\u{1094}", "${1}${2}\u{1095}"),
    Rule::new("\u{108f}\u{1071}", "\u{108f}\u{1072}"),
    Rule::new("([\u{1000}-\u{1021}])([\u{107b}\u{1066}])\u{102c}", "${1}\u{102c}${2}"),
    Rule::new("\u{102c}([\u{107b}\u{1066}])\u{1037}", "\u{102c}${1}\u{1094}"),
    Rule::new("\u{1047}((?=[\u{1000}-\u{1021}]\u{1039})|(?=[\u{102c}-\u{1030}\u{1032}\u{1036}-\u{1038}\u{103c}\u{103d}]))", "\u{101b}"),
];
