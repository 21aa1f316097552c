use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::duct::DuctCondition;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_DUCTULATOR: &str = "main_menu.ductulator";
    pub const MAIN_MENU_CONTACT: &str = "main_menu.contact";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";

    pub const DUCT_HEADING: &str = "ductulator.heading";
    pub const DUCT_RANGE: &str = "ductulator.range";
    pub const DUCT_CURRENT: &str = "ductulator.current";
    pub const DUCT_NO_VALUE: &str = "ductulator.no_value";
    pub const DUCT_COMMANDS: &str = "ductulator.commands";
    pub const DUCT_PROMPT: &str = "ductulator.prompt";
    pub const DUCT_RECOMMENDATIONS: &str = "ductulator.recommendations";
    pub const DUCT_AT_LIMIT: &str = "ductulator.at_limit";

    pub const COND_SOUND_LABEL: &str = "condition.sound_sensitive.label";
    pub const COND_SOUND_DETAIL: &str = "condition.sound_sensitive.detail";
    pub const COND_FITTINGS_LABEL: &str = "condition.fittings_nearby.label";
    pub const COND_FITTINGS_DETAIL: &str = "condition.fittings_nearby.detail";
    pub const COND_STRAIGHT_LABEL: &str = "condition.straight_duct.label";
    pub const COND_STRAIGHT_DETAIL: &str = "condition.straight_duct.detail";

    pub const CONTACT_HEADING: &str = "contact.heading";
    pub const CONTACT_PROMPT_DETAIL: &str = "contact.prompt_detail";
    pub const CONTACT_UNAVAILABLE: &str = "contact.unavailable";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩이 우선이고, 한국어 번역이 없으면 영어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |s, (name, value)| {
                s.replace(&format!("{{{name}}}"), value)
            })
    }

    /// 추천 조건 이름.
    pub fn condition_label(&self, condition: DuctCondition) -> &str {
        self.t(match condition {
            DuctCondition::SoundSensitive => keys::COND_SOUND_LABEL,
            DuctCondition::FittingsNearby => keys::COND_FITTINGS_LABEL,
            DuctCondition::StraightDuct => keys::COND_STRAIGHT_LABEL,
        })
    }

    /// 추천 조건 설명.
    pub fn condition_detail(&self, condition: DuctCondition) -> &str {
        self.t(match condition {
            DuctCondition::SoundSensitive => keys::COND_SOUND_DETAIL,
            DuctCondition::FittingsNearby => keys::COND_FITTINGS_DETAIL,
            DuctCondition::StraightDuct => keys::COND_STRAIGHT_DETAIL,
        })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    lang.split_once(['-', '_'])
        .and_then(|(base, _)| try_load(base))
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = src.parse().ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        MAIN_MENU_TITLE => "\n=== Prihoda Ductulator ===",
        MAIN_MENU_DUCTULATOR => "1) 덕트 계산기",
        MAIN_MENU_CONTACT => "2) 견적 문의",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        DUCT_HEADING => "\n-- 풍량 --",
        DUCT_RANGE => "최소 {min} / 최대 {max} {unit} / ± {step}",
        DUCT_CURRENT => "풍량: {value} {unit}",
        DUCT_COMMANDS => "+/- 증감, ++/-- [횟수] 길게 누르기, 숫자 입력, t 단위 전환, q 나가기",
        DUCT_PROMPT => "> ",
        DUCT_RECOMMENDATIONS => "추천",
        DUCT_AT_LIMIT => "이미 한계값입니다.",
        COND_SOUND_LABEL => "소음 민감",
        COND_SOUND_DETAIL => "녹음실, 도서관 등은 낮은 풍속이 필요합니다. 소음 감쇠를 고려하세요.",
        COND_FITTINGS_LABEL => "가까운 피팅/방향 전환",
        COND_FITTINGS_DETAIL => "직경의 3배 이내에 엘보나 오프셋이 있으면 난류 소음을 피하기 위해 낮은 풍속이 필요합니다.",
        COND_STRAIGHT_LABEL => "직관",
        COND_STRAIGHT_DETAIL => "패브릭 입구 상류 직경 3배 이내에 피팅이 없습니다.",
        CONTACT_HEADING => "\n-- 견적 문의 --",
        CONTACT_PROMPT_DETAIL => "{detail} (건너뛰려면 엔터): ",
        CONTACT_UNAVAILABLE => "메일 클라이언트를 열 수 없습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "시작 단위: {unit}, 직경 표시: {diameter}",
        SETTINGS_OPTIONS => "1) CFM  2) 톤  3) 인치  4) mm",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        MAIN_MENU_TITLE => "\n=== Prihoda Ductulator ===",
        MAIN_MENU_DUCTULATOR => "1) Ductulator",
        MAIN_MENU_CONTACT => "2) Get Quote Selection",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        DUCT_HEADING => "\n-- Airflow --",
        DUCT_RANGE => "Min {min} / Max {max} {unit} / ± {step}",
        DUCT_CURRENT => "Airflow: {value} {unit}",
        DUCT_NO_VALUE => "--",
        DUCT_COMMANDS => "+/- step, ++/-- [ticks] hold, type a number, t toggle unit, q back",
        DUCT_PROMPT => "> ",
        DUCT_RECOMMENDATIONS => "Recommendations",
        DUCT_AT_LIMIT => "Already at the limit.",
        COND_SOUND_LABEL => DuctCondition::SoundSensitive.label(),
        COND_SOUND_DETAIL => DuctCondition::SoundSensitive.detail().unwrap_or_default(),
        COND_FITTINGS_LABEL => DuctCondition::FittingsNearby.label(),
        COND_FITTINGS_DETAIL => DuctCondition::FittingsNearby.detail().unwrap_or_default(),
        COND_STRAIGHT_LABEL => DuctCondition::StraightDuct.label(),
        COND_STRAIGHT_DETAIL => DuctCondition::StraightDuct.detail().unwrap_or_default(),
        CONTACT_HEADING => "\n-- Get Quote --",
        CONTACT_PROMPT_DETAIL => "{detail} (Enter to skip): ",
        CONTACT_UNAVAILABLE => "Unable to open email client.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Start unit: {unit}, diameter display: {diameter}",
        SETTINGS_OPTIONS => "1) CFM  2) Tonnage  3) Inch  4) mm",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::DUCT_NO_VALUE), "--");
        assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
    }

    #[test]
    fn placeholders_are_filled() {
        let tr = Translator::new("en");
        let s = tr.tf(
            keys::DUCT_RANGE,
            &[("min", "50"), ("max", "80,000"), ("unit", "cfm"), ("step", "50")],
        );
        assert_eq!(s, "Min 50 / Max 80,000 cfm / ± 50");
    }

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("xx"), Some("en")), "en-us");
    }

    #[test]
    fn language_pack_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.toml"),
            "[ductulator]\nrecommendations = \"Suggested sizes\"\n",
        )
        .unwrap();
        let tr = Translator::new_with_pack("en-us", Some(dir.path()));
        assert_eq!(tr.t(keys::DUCT_RECOMMENDATIONS), "Suggested sizes");
        assert_eq!(tr.t(keys::DUCT_NO_VALUE), "--");
    }
}
