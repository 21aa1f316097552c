use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::contact::ContactConfig;
use crate::units::{AirflowUnit, LengthUnit};

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어(ko/en). 비어 있으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    /// 계산기 시작 단위
    pub default_unit: AirflowUnit,
    /// 덕트 직경 표시 단위
    pub diameter_unit: LengthUnit,
    /// 마지막 CFM 값을 보관하는 파일
    pub preferences_path: PathBuf,
    /// 로그 레벨(error/warn/info/debug/trace)
    pub log_level: String,
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_unit: AirflowUnit::Cfm,
            diameter_unit: LengthUnit::Inch,
            preferences_path: PathBuf::from("preferences.toml"),
            log_level: "warn".to_string(),
            contact: ContactConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장하고 돌려준다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
