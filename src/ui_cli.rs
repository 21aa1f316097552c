use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::contact::{self, ComposeError, JobDetail, JobDetails, MailComposer};
use crate::duct::{CalculatorSession, Recommendation, StepDirection, StepRule};
use crate::i18n::{keys, Translator};
use crate::preferences::PreferenceStore;
use crate::units::{convert_length, AirflowUnit, LengthUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Ductulator,
    Contact,
    Settings,
    Exit,
}

/// 계산기 화면에서 한 줄 입력이 뜻하는 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuctCommand {
    Press(StepDirection),
    /// 길게 누르기. 첫 스텝 뒤 반복 횟수.
    Hold(StepDirection, usize),
    /// 자유 입력 후 확정
    Enter(String),
    Toggle,
    Quit,
}

/// 길게 누르기에서 횟수를 생략했을 때의 반복 횟수.
const DEFAULT_HOLD_TICKS: usize = 5;

/// 계산기 입력 한 줄을 해석한다.
pub fn parse_duct_command(line: &str) -> DuctCommand {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let ticks = parts
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(DEFAULT_HOLD_TICKS);
    match head {
        "+" => DuctCommand::Press(StepDirection::More),
        "-" => DuctCommand::Press(StepDirection::Less),
        "++" => DuctCommand::Hold(StepDirection::More, ticks),
        "--" => DuctCommand::Hold(StepDirection::Less, ticks),
        "t" | "T" => DuctCommand::Toggle,
        "q" | "Q" => DuctCommand::Quit,
        _ => DuctCommand::Enter(line.to_string()),
    }
}

/// 천 단위 구분 기호를 넣어 정수로 표기한다.
pub fn format_number(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}

/// 덕트 직경을 표시 단위로 표기한다.
pub fn format_diameter(diameter_in: u32, unit: LengthUnit) -> String {
    let value = convert_length(diameter_in as f64, LengthUnit::Inch, unit);
    format!("{}{}", value.round(), unit.symbol())
}

/// "Min 50 / Max 80,000 cfm / ± 50" 형태의 범위 안내.
pub fn render_range(tr: &Translator, unit: AirflowUnit) -> String {
    let rule = StepRule::for_unit(unit);
    let min = format_number(rule.min);
    let max = format_number(rule.max);
    let step = format_number(rule.step);
    tr.tf(
        keys::DUCT_RANGE,
        &[
            ("min", min.as_str()),
            ("max", max.as_str()),
            ("unit", unit.symbol()),
            ("step", step.as_str()),
        ],
    )
}

/// 추천 3건을 번호를 붙여 여러 줄로 표기한다.
pub fn render_recommendations(
    tr: &Translator,
    recs: &[Recommendation],
    diameter_unit: LengthUnit,
) -> Vec<String> {
    recs.iter()
        .enumerate()
        .flat_map(|(idx, rec)| {
            [
                format!(
                    "{}) {} FPM  {}  {}",
                    idx + 1,
                    format_number(rec.velocity_fpm as f64),
                    format_diameter(rec.duct_diameter_in, diameter_unit),
                    tr.condition_label(rec.condition)
                ),
                format!("   {}", tr.condition_detail(rec.condition)),
            ]
        })
        .collect()
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}  {}", contact::COPYRIGHT, contact::COMPANY_URL);
    println!("{}", tr.t(keys::MAIN_MENU_DUCTULATOR));
    println!("{}", tr.t(keys::MAIN_MENU_CONTACT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Ductulator),
            "2" => return Ok(MenuChoice::Contact),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn print_session<S: PreferenceStore>(
    tr: &Translator,
    cfg: &Config,
    session: &CalculatorSession<S>,
) {
    let unit = session.unit();
    let value = session
        .entry()
        .map(format_number)
        .unwrap_or_else(|| tr.t(keys::DUCT_NO_VALUE).to_string());
    println!(
        "{}",
        tr.tf(keys::DUCT_CURRENT, &[("value", value.as_str()), ("unit", unit.symbol())])
    );
    println!("{}", render_range(tr, unit));
    println!("\n{}", tr.t(keys::DUCT_RECOMMENDATIONS));
    for line in render_recommendations(tr, &session.recommendations(), cfg.diameter_unit) {
        println!("{line}");
    }
}

/// 덕트 계산기 화면을 처리한다. `q`를 입력하면 메인 메뉴로 돌아간다.
pub fn handle_ductulator<S: PreferenceStore>(
    tr: &Translator,
    cfg: &Config,
    session: &mut CalculatorSession<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DUCT_HEADING));
    println!("{}", tr.t(keys::DUCT_COMMANDS));
    loop {
        print_session(tr, cfg, session);
        let line = read_line(tr.t(keys::DUCT_PROMPT))?;
        match parse_duct_command(&line) {
            DuctCommand::Press(dir) | DuctCommand::Hold(dir, _) if at_limit(session, dir) => {
                println!("{}", tr.t(keys::DUCT_AT_LIMIT));
            }
            DuctCommand::Press(dir) => session.press(dir),
            DuctCommand::Hold(dir, ticks) => session.long_press(dir, ticks),
            DuctCommand::Enter(text) => {
                session.edit_text(&text);
                session.commit();
            }
            DuctCommand::Toggle => session.toggle_unit(),
            DuctCommand::Quit => return Ok(()),
        }
    }
}

fn at_limit<S: PreferenceStore>(session: &CalculatorSession<S>, dir: StepDirection) -> bool {
    match dir {
        StepDirection::More => !session.can_increase(),
        StepDirection::Less => !session.can_decrease(),
    }
}

/// 견적 문의 메뉴를 처리한다. CFM 항목은 계산기 값으로 미리 채운다.
pub fn handle_contact<C: MailComposer>(
    tr: &Translator,
    cfg: &Config,
    composer: &mut C,
    cfm: Option<f64>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONTACT_HEADING));
    let mut details = JobDetails::new();
    if let Some(cfm) = cfm {
        details.set(JobDetail::Cfm, format_number(cfm));
    }
    for detail in JobDetail::ALL {
        if details.get(detail).is_some() {
            continue;
        }
        let value = read_line(&tr.tf(keys::CONTACT_PROMPT_DETAIL, &[("detail", detail.title())]))?;
        details.set(detail, value);
    }
    let draft = contact::build_quote_draft(&cfg.contact, &details);
    match contact::open_email(composer, &draft) {
        Ok(()) => Ok(()),
        Err(ComposeError::Unavailable) => {
            println!("{}", tr.t(keys::CONTACT_UNAVAILABLE));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    let diameter = match cfg.diameter_unit {
        LengthUnit::Inch => "in",
        LengthUnit::Millimeter => "mm",
    };
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[("unit", cfg.default_unit.symbol()), ("diameter", diameter)]
        )
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(false),
        "1" => cfg.default_unit = AirflowUnit::Cfm,
        "2" => cfg.default_unit = AirflowUnit::Tonnage,
        "3" => cfg.diameter_unit = LengthUnit::Inch,
        "4" => cfg.diameter_unit = LengthUnit::Millimeter,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(true)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_parsed() {
        assert_eq!(parse_duct_command("+\n"), DuctCommand::Press(StepDirection::More));
        assert_eq!(
            parse_duct_command("-- 3"),
            DuctCommand::Hold(StepDirection::Less, 3)
        );
        assert_eq!(
            parse_duct_command("++"),
            DuctCommand::Hold(StepDirection::More, DEFAULT_HOLD_TICKS)
        );
        assert_eq!(parse_duct_command(" 1200 "), DuctCommand::Enter("1200".into()));
        assert_eq!(parse_duct_command(""), DuctCommand::Enter(String::new()));
    }

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(80_000.0), "80,000");
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
    }

    #[test]
    fn diameter_in_millimetres() {
        assert_eq!(format_diameter(12, LengthUnit::Inch), "12\"");
        assert_eq!(format_diameter(4, LengthUnit::Millimeter), "102 mm");
    }
}
