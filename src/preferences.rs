//! 단일 숫자 값을 키로 저장/복원하는 선호값 저장소.
//!
//! 저장소는 최선 노력(best-effort) 방식이다. 읽기/쓰기 실패는 로그만 남기고
//! 삼키며, 호출자는 값이 없을 때 기본값으로 진행한다.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

/// 마지막 CFM 값을 저장하는 키.
pub const CFM_KEY: &str = "cfm";

/// 저장소 내부 오류. 트레이트 경계 밖으로는 나가지 않는다.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("선호값 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("선호값 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 키-숫자 값 저장소.
pub trait PreferenceStore {
    /// 값을 읽는다. 없거나 읽기에 실패하면 None.
    fn get(&self, key: &str) -> Option<f64>;
    /// 값을 쓴다. 실패는 무시된다.
    fn set(&mut self, key: &str, value: f64);
}

/// TOML 파일에 값을 보관하는 저장소.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_table(&self) -> Result<toml::Table, PreferenceError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content.parse::<toml::Table>()?)
    }

    /// 오류를 그대로 돌려주는 읽기.
    pub fn try_get(&self, key: &str) -> Result<Option<f64>, PreferenceError> {
        let table = self.read_table()?;
        Ok(table.get(key).and_then(|v| match v {
            toml::Value::Float(f) => Some(*f),
            toml::Value::Integer(i) => Some(*i as f64),
            _ => None,
        }))
    }

    /// 오류를 그대로 돌려주는 쓰기. 다른 키는 보존한다.
    pub fn try_set(&self, key: &str, value: f64) -> Result<(), PreferenceError> {
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), toml::Value::Float(value));
        let content = toml::to_string(&table)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<f64> {
        match self.try_get(key) {
            Ok(value) => {
                debug!(key, ?value, path = %self.path.display(), "preference read");
                value
            }
            Err(err) => {
                warn!(key, %err, "preference read failed; using default");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: f64) {
        if let Err(err) = self.try_set(key, value) {
            warn!(key, value, %err, "preference write failed; ignored");
        }
    }
}

/// 메모리 저장소. 테스트나 저장을 끈 실행에서 쓴다.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, f64>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }
}
