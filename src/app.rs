use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::contact::{self, ComposeError, JobDetail, JobDetails, WriterComposer};
use crate::duct::{recommended_duct_sizes, CalculatorSession};
use crate::i18n::{self, Translator};
use crate::preferences::{FilePreferenceStore, PreferenceStore};
use crate::quantity::AirflowAmount;
use crate::ui_cli::{self, MenuChoice};
use crate::units::AirflowUnit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 메일 초안 작성 오류
    #[error("메일 작성 오류: {0}")]
    Compose(#[from] ComposeError),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let store = FilePreferenceStore::new(&config.preferences_path);
    let mut session = CalculatorSession::open(store, config.default_unit);
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(err) => return Err(err),
        };
        match choice {
            MenuChoice::Ductulator => match ui_cli::handle_ductulator(tr, config, &mut session) {
                Ok(()) | Err(AppError::InputClosed) => {}
                Err(err) => return Err(err),
            },
            MenuChoice::Contact => {
                let cfm = session.amount().map(|a| a.as_cfm());
                let mut composer = WriterComposer::new(io::stdout());
                ui_cli::handle_contact(tr, config, &mut composer, cfm)?;
            }
            MenuChoice::Settings => {
                let previous_unit = config.default_unit;
                if ui_cli::handle_settings(tr, config)? {
                    config.save(config_path)?;
                    follow_default_unit(&mut session, previous_unit, config.default_unit);
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 시작 단위 설정이 실제로 바뀐 경우에만 세션 단위를 따라 바꾼다.
/// 다른 설정만 바뀌었으면 세션 중 전환한 단위를 유지한다.
pub fn follow_default_unit<S: PreferenceStore>(
    session: &mut CalculatorSession<S>,
    previous: AirflowUnit,
    current: AirflowUnit,
) {
    if previous != current {
        session.set_unit(current);
    }
}

/// 풍량 하나에 대한 추천을 출력한다. 범위를 벗어난 값은 경계로 자른다.
pub fn print_sizes(config: &Config, tr: &Translator, amount: f64, unit: AirflowUnit) {
    let amount = AirflowAmount::new(amount, unit);
    info!(value = amount.value(), unit = unit.symbol(), "sizing request");
    println!(
        "{} {} ({} cfm)",
        ui_cli::format_number(amount.value()),
        unit.symbol(),
        ui_cli::format_number(amount.as_cfm())
    );
    println!("{}", ui_cli::render_range(tr, unit));
    let recs = recommended_duct_sizes(amount.value(), unit);
    for line in ui_cli::render_recommendations(tr, &recs, config.diameter_unit) {
        println!("{line}");
    }
}

/// `to` 단위로의 환산 결과 한 줄. 입력값은 원래 단위 범위로 잘라 표기한다.
pub fn conversion_line(amount: f64, to: AirflowUnit) -> String {
    let from = to.toggled();
    let source = AirflowAmount::new(amount, from);
    let converted = source.convert_to(to);
    format!(
        "{} {} = {} {}",
        ui_cli::format_number(source.value()),
        from.symbol(),
        ui_cli::format_number(converted.value()),
        to.symbol()
    )
}

/// CFM/톤 환산 결과를 출력한다.
pub fn print_conversion(amount: f64, to: AirflowUnit) {
    println!("{}", conversion_line(amount, to));
}

/// 견적 문의 초안을 stdout에 출력한다.
pub fn print_quote(config: &Config, cfm: Option<f64>) -> Result<(), AppError> {
    let mut details = JobDetails::new();
    if let Some(cfm) = cfm {
        let cfm = AirflowAmount::new(cfm, AirflowUnit::Cfm).value();
        details.set(JobDetail::Cfm, ui_cli::format_number(cfm));
    }
    let draft = contact::build_quote_draft(&config.contact, &details);
    let mut composer = WriterComposer::new(io::stdout());
    contact::open_email(&mut composer, &draft)?;
    Ok(())
}
