//! 转换模块：规则引擎与全局转换接口
//! 转换是纯函数：输出只取决于输入文本、方向和规则表，不会失败
pub mod engine;
pub mod global;

pub use self::engine::RuleEngine;
pub use self::global::{convert, engine_for, to_unicode, to_zawgyi};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Direction, Rule, ZAWGYI_TO_UNICODE};

    const ZAWGYI_TO_UNICODE_CASES: &[(&str, &str)] = &[
        (
            "ကနဦး သိန္း၂၅၀ ျဖင့္ ဟိုတယ္ပိုင္ရွင္ျဖစ္နိုင္ပါၿပီ",
            "ကနဦး သိန်း၂၅၀ ဖြင့် ဟိုတယ်ပိုင်ရှင်ဖြစ်နိုင်ပါပြီ",
        ),
        (
            "ခိုင္မာတဲ့ ရင္းႏွီးျမဳပ္ႏွံမွုေကာင္း တစ္ခုကို ပိုင္ဆိုင္ နိုင္မယ္",
            "ခိုင်မာတဲ့ ရင်းနှီးမြုပ်နှံမှုကောင်း တစ်ခုကို ပိုင်ဆိုင် နိုင်မယ်",
        ),
        (
            "Bank ႏွင့္ အရစ္က် ၁၀ ႏွစ္မွ ၁၅ ႏွစ္အထိ ယူလို့ရတယ္",
            "Bank နှင့် အရစ်ကျ ၁၀ နှစ်မှ ၁၅ နှစ်အထိ ယူလို့ရတယ်",
        ),
        (
            "သီဟိုဠ္မွ ဉာဏ္ႀကီးရွင္သည္ အာယုဝၯနေဆးၫႊန္းစာကို ဇလြန္ေဈးေဘး ဗာဒံပင္ထက္ အဓိ႒ာန္လ်က္ ဂဃနဏဖတ္ခဲ့သည္။",
            "သီဟိုဠ်မှ ဉာဏ်ကြီးရှင်သည် အာယုဝဍ္ဎနဆေးညွှန်းစာကို ဇလွန်ဈေးဘေး ဗာဒံပင်ထက် အဓိဋ္ဌာန်လျက် ဂဃနဏဖတ်ခဲ့သည်။",
        ),
        (
            "တပ္မက္မႈ ‘တဏွာ’ ခ်ဳပ္ရ၏၊ တပ္မက္မႈ ‘တဏွာ’ ခ်ဳပ္ျခင္းေၾကာင့္ ျပင္း စြာ စြဲလမ္းမႈ ‘ဥပါဒါန္’ ခ်ဳပ္ရ၏၊ ျပင္းစြာ စြဲလမ္းမႈ ‘ဥပါဒါန္’ ခ်ဳပ္ျခင္းေၾကာင့္ ဘဝ ခ်ဳပ္ရ၏၊ ဘဝ ခ်ဳပ္ျခင္း ေၾကာင့္ ပဋိသေႏၶေနမႈ ‘ဇာတိ’ ခ်ဳပ္ရ၏၊ ဇာတိ ခ်ဳပ္ျခင္းေၾကာင့္ အိုမႈ ‘ဇရာ’၊ ေသမႈ ‘မရဏ’၊ စိုးရိမ္မႈ",
            "တပ်မက်မှု ‘တဏှာ’ ချုပ်ရ၏၊ တပ်မက်မှု ‘တဏှာ’ ချုပ်ခြင်းကြောင့် ပြင်း စွာ စွဲလမ်းမှု ‘ဥပါဒါန်’ ချုပ်ရ၏၊ ပြင်းစွာ စွဲလမ်းမှု ‘ဥပါဒါန်’ ချုပ်ခြင်းကြောင့် ဘဝ ချုပ်ရ၏၊ ဘဝ ချုပ်ခြင်း ကြောင့် ပဋိသန္ဓေနေမှု ‘ဇာတိ’ ချုပ်ရ၏၊ ဇာတိ ချုပ်ခြင်းကြောင့် အိုမှု ‘ဇရာ’၊ သေမှု ‘မရဏ’၊ စိုးရိမ်မှု",
        ),
        (
            "ရဟန္းတို႔ ဤတရားကို ပဋိစၥသမုပၸါဒ္ဟု ဆိုအပ္၏။",
            "ရဟန်းတို့ ဤတရားကို ပဋိစ္စသမုပ္ပါဒ်ဟု ဆိုအပ်၏။",
        ),
    ];

    const UNICODE_TO_ZAWGYI_CASES: &[(&str, &str)] = &[
        (
            "ကနဦး သိန်း၂၅၀ ဖြင့် ဟိုတယ်ပိုင်ရှင်ဖြစ်နိုင်ပါပြီ",
            "ကနဦး သိန္း၂၅၀ ျဖင့္ ဟိုတယ္ပိုင္ရွင္ျဖစ္ႏိုင္ပါၿပီ",
        ),
        (
            "ခိုင်မာတဲ့ ရင်းနှီးမြုပ်နှံမှုကောင်း တစ်ခုကို ပိုင်ဆိုင် နိုင်မယ်",
            "ခိုင္မာတဲ့ ရင္းႏွီးျမဳပ္ႏွံမႈေကာင္း တစ္ခုကို ပိုင္ဆိုင္ ႏိုင္မယ္",
        ),
        (
            "Bank နှင့် အရစ်ကျ ၁၀ နှစ်မှ ၁၅ နှစ်အထိ ယူလို့ရတယ်",
            "Bank ႏွင့္ အရစ္က် ၁၀ ႏွစ္မွ ၁၅ ႏွစ္အထိ ယူလို႔ရတယ္",
        ),
        (
            "သီဟိုဠ်မှ ဉာဏ်ကြီးရှင်သည် အာယုဝဍ္ဎနဆေးညွှန်းစာကို ဇလွန်ဈေးဘေး ဗာဒံပင်ထက် အဓိဋ္ဌာန်လျက် ဂဃနဏဖတ်ခဲ့သည်။",
            "သီဟိုဠ္မွ ဉာဏ္ႀကီးရွင္သည္ အာယုဝၯနေဆးၫႊန္းစာကို ဇလြန္ေဈးေဘး ဗာဒံပင္ထက္ အဓိ႒ာန္လ်က္ ဂဃနဏဖတ္ခဲ့သည္။",
        ),
        (
            "တပ်မက်မှု ‘တဏှာ’ ချုပ်ရ၏၊ တပ်မက်မှု ‘တဏှာ’ ချုပ်ခြင်းကြောင့် ပြင်း စွာ စွဲလမ်းမှု ‘ဥပါဒါန်’ ချုပ်ရ၏၊ ပြင်းစွာ စွဲလမ်းမှု ‘ဥပါဒါန်’ ချုပ်ခြင်းကြောင့် ဘဝ ချုပ်ရ၏၊ ဘဝ ချုပ်ခြင်း ကြောင့် ပဋိသန္ဓေနေမှု ‘ဇာတိ’ ချုပ်ရ၏၊ ဇာတိ ချုပ်ခြင်းကြောင့် အိုမှု ‘ဇရာ’၊ သေမှု ‘မရဏ’၊ စိုးရိမ်မှု",
            "တပ္မက္မႈ ‘တဏွာ’ ခ်ဳပ္ရ၏၊ တပ္မက္မႈ ‘တဏွာ’ ခ်ဳပ္ျခင္းေၾကာင့္ ျပင္း စြာ စြဲလမ္းမႈ ‘ဥပါဒါန္’ ခ်ဳပ္ရ၏၊ ျပင္းစြာ စြဲလမ္းမႈ ‘ဥပါဒါန္’ ခ်ဳပ္ျခင္းေၾကာင့္ ဘဝ ခ်ဳပ္ရ၏၊ ဘဝ ခ်ဳပ္ျခင္း ေၾကာင့္ ပဋိသေႏၶေနမႈ ‘ဇာတိ’ ခ်ဳပ္ရ၏၊ ဇာတိ ခ်ဳပ္ျခင္းေၾကာင့္ အိုမႈ ‘ဇရာ’၊ ေသမႈ ‘မရဏ’၊ စိုးရိမ္မႈ",
        ),
        (
            "ရဟန်းတို့ ဤတရားကို ပဋိစ္စသမုပ္ပါဒ်ဟု ဆိုအပ်၏။",
            "ရဟန္းတို႔ ဤတရားကို ပဋိစၥသမုပၸါဒ္ဟု ဆိုအပ္၏။",
        ),
    ];

    #[test]
    fn test_zawgyi_to_unicode_fixtures() {
        for (zawgyi, unicode) in ZAWGYI_TO_UNICODE_CASES {
            assert_eq!(to_unicode(zawgyi), *unicode, "input: {}", zawgyi);
        }
    }

    #[test]
    fn test_unicode_to_zawgyi_fixtures() {
        for (unicode, zawgyi) in UNICODE_TO_ZAWGYI_CASES {
            assert_eq!(to_zawgyi(unicode), *zawgyi, "input: {}", unicode);
        }
    }

    #[test]
    fn test_stacked_consonant_keeps_plain_u_sign() {
        // ္ + 辅音 + ု 中的 ု 保持 U+102F，不替换为长形 U+1033
        assert_eq!(to_zawgyi("\u{1015}\u{1039}\u{1015}\u{102f}"), "\u{1015}\u{1078}\u{102f}");
        assert_eq!(to_zawgyi("\u{101e}\u{1039}\u{1010}\u{102f}"), "\u{101e}\u{1071}\u{102f}");
        assert_eq!(
            to_zawgyi("\u{1015}\u{1039}\u{1015}\u{102d}\u{102f}"),
            "\u{1015}\u{1078}\u{102d}\u{102f}"
        );
    }

    #[test]
    fn test_round_trip_is_not_assumed() {
        // 两处 Zawgyi 写法 (နိုင္ / ႏိုင္) 转为同一个 Unicode 形式，反向只能还原其中一种
        let zawgyi = "ကနဦး သိန္း၂၅၀ ျဖင့္ ဟိုတယ္ပိုင္ရွင္ျဖစ္နိုင္ပါၿပီ";
        let back = to_zawgyi(&to_unicode(zawgyi));
        assert_ne!(back, zawgyi);
        assert_eq!(back, "ကနဦး သိန္း၂၅၀ ျဖင့္ ဟိုတယ္ပိုင္ရွင္ျဖစ္ႏိုင္ပါၿပီ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_unicode(""), "");
        assert_eq!(to_zawgyi(""), "");
    }

    #[test]
    fn test_text_without_myanmar_is_untouched() {
        for text in ["Somefile.extension", "hello, world / 42", "naïve café"] {
            assert_eq!(to_unicode(text), text);
            assert_eq!(to_zawgyi(text), text);
        }
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let (zawgyi, _) = ZAWGYI_TO_UNICODE_CASES[0];
        let first = convert(zawgyi, Direction::ZawgyiToUnicode);
        let second = convert(zawgyi, Direction::ZawgyiToUnicode);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_repeated_mark_rule_is_idempotent() {
        let collapse = RuleEngine::from_rules(&ZAWGYI_TO_UNICODE[..1]).unwrap();
        assert_eq!(collapse.apply("\u{1000}\u{102d}\u{102d}\u{102d}"), "\u{1000}\u{102d}");

        let normalized = to_unicode(ZAWGYI_TO_UNICODE_CASES[0].0);
        assert_eq!(collapse.apply(&normalized), normalized);
        assert_eq!(collapse.apply(&collapse.apply(&normalized)), normalized);
    }

    #[test]
    fn test_swapping_medial_mapping_and_reordering_changes_output() {
        // ေျပာ：ေ 与 ျ 都以视觉顺序存放在辅音之前
        let zawgyi = "\u{1031}\u{103b}\u{1015}\u{102c}";
        assert_eq!(to_unicode(zawgyi), "\u{1015}\u{103c}\u{1031}\u{102c}");

        let mapping = ZAWGYI_TO_UNICODE
            .iter()
            .position(|r| r.pattern.starts_with("(\u{103b}|\u{107e}"))
            .unwrap();
        let reorder = ZAWGYI_TO_UNICODE
            .iter()
            .position(|r| r.pattern == "\u{1031}([\u{1000}-\u{1021}\u{103f}])(\u{103e})?(\u{103b})?")
            .unwrap();
        assert!(mapping < reorder);

        let mut swapped: Vec<Rule> = ZAWGYI_TO_UNICODE.to_vec();
        swapped.swap(mapping, reorder);
        let engine = RuleEngine::from_rules(&swapped).unwrap();
        assert_eq!(engine.apply(zawgyi), "\u{1031}\u{103c}\u{1015}\u{102c}");
    }

    #[test]
    fn test_engines_are_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let (zawgyi, unicode) = ZAWGYI_TO_UNICODE_CASES[i % ZAWGYI_TO_UNICODE_CASES.len()];
                    assert_eq!(to_unicode(zawgyi), unicode);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(engine_for(Direction::UnicodeToZawgyi).rule_count(), 79);
    }
}
