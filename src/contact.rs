//! 견적 문의 메일 초안 작성.
//!
//! 실제 전송은 하지 않는다. 초안은 [`MailComposer`] 구현체에 넘겨지고,
//! 구현체가 메일 클라이언트를 열거나 화면에 출력한다.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_RECIPIENT: &str = "andrew@prihodafabricduct.com";
pub const DEFAULT_SUBJECT: &str = "Ductulator Inquiry App";
pub const COMPANY_URL: &str = "https://prihodafabricduct.com";
pub const COPYRIGHT: &str = "\u{a9} Prihoda, NA | All Rights Reserved";

/// 문의 메일 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub subject: String,
    /// true면 HTML 본문(`<br />` 줄바꿈)
    pub html: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            html: true,
        }
    }
}

/// 메일 작성 실패.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("메일 클라이언트를 열 수 없습니다")]
    Unavailable,
    #[error("메일 초안 출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// 견적에 필요한 작업 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobDetail {
    SuspensionMethod,
    MaterialType,
    DispersionType,
    CustomArt,
    Cfm,
}

impl JobDetail {
    pub const ALL: [JobDetail; 5] = [
        JobDetail::SuspensionMethod,
        JobDetail::MaterialType,
        JobDetail::DispersionType,
        JobDetail::CustomArt,
        JobDetail::Cfm,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            JobDetail::SuspensionMethod => "Suspension Method",
            JobDetail::MaterialType => "Material Type",
            JobDetail::DispersionType => "Dispersion Type",
            JobDetail::CustomArt => "Custom Art",
            JobDetail::Cfm => "CFM",
        }
    }
}

/// 채워진 작업 항목들. 비어 있는 항목은 본문에 넣지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDetails {
    entries: Vec<(JobDetail, String)>,
}

impl JobDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// 항목 값을 설정한다. 공백뿐인 값은 항목을 지운다.
    pub fn set(&mut self, detail: JobDetail, value: impl Into<String>) {
        let value = value.into();
        self.entries.retain(|(d, _)| *d != detail);
        if !value.trim().is_empty() {
            self.entries.push((detail, value.trim().to_string()));
        }
    }

    pub fn get(&self, detail: JobDetail) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == detail)
            .map(|(_, v)| v.as_str())
    }

    /// 고정 순서로 채워진 항목을 돌려준다.
    pub fn filled(&self) -> impl Iterator<Item = (JobDetail, &str)> + '_ {
        JobDetail::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|v| (d, v)))
    }
}

/// 메일 초안.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    pub subject: String,
    pub recipients: Vec<String>,
    pub body: String,
    pub is_html: bool,
}

/// 연락처 칸과 채워진 작업 항목으로 본문을 만든다.
pub fn construct_body(details: &JobDetails, is_html: bool) -> String {
    let new_line = if is_html { "<br />" } else { "\r\n" };
    let mut parts: Vec<String> = ["Name: ", "Location: ", "Phone: ", "Email: "]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for (detail, value) in details.filled() {
        parts.push(format!("{}: {value}", detail.title()));
    }
    parts.join(new_line)
}

/// 설정과 작업 항목으로 견적 문의 초안을 만든다.
pub fn build_quote_draft(cfg: &ContactConfig, details: &JobDetails) -> QuoteDraft {
    QuoteDraft {
        subject: cfg.subject.clone(),
        recipients: vec![cfg.recipient.clone()],
        body: construct_body(details, cfg.html),
        is_html: cfg.html,
    }
}

/// 메일 작성 기능.
pub trait MailComposer {
    fn is_available(&self) -> bool;
    fn compose(&mut self, draft: &QuoteDraft) -> Result<(), ComposeError>;
}

/// 사용 가능 여부를 확인한 뒤 초안을 연다.
pub fn open_email<C: MailComposer + ?Sized>(
    composer: &mut C,
    draft: &QuoteDraft,
) -> Result<(), ComposeError> {
    if !composer.is_available() {
        return Err(ComposeError::Unavailable);
    }
    composer.compose(draft)?;
    info!(subject = %draft.subject, recipients = draft.recipients.len(), "quote draft composed");
    Ok(())
}

/// 초안을 텍스트로 출력하는 작성기. 터미널에서는 stdout을 넘긴다.
pub struct WriterComposer<W: Write> {
    out: W,
}

impl<W: Write> WriterComposer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MailComposer for WriterComposer<W> {
    fn is_available(&self) -> bool {
        true
    }

    fn compose(&mut self, draft: &QuoteDraft) -> Result<(), ComposeError> {
        writeln!(self.out, "To: {}", draft.recipients.join(", "))?;
        writeln!(self.out, "Subject: {}", draft.subject)?;
        let body = if draft.is_html {
            draft.body.replace("<br />", "\n")
        } else {
            draft.body.replace("\r\n", "\n")
        };
        writeln!(self.out)?;
        writeln!(self.out, "{body}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_uses_html_breaks() {
        let body = construct_body(&JobDetails::new(), true);
        assert_eq!(body, "Name: <br />Location: <br />Phone: <br />Email: ");
    }

    #[test]
    fn filled_details_follow_fixed_order() {
        let mut details = JobDetails::new();
        details.set(JobDetail::Cfm, "1200");
        details.set(JobDetail::MaterialType, "Polyester");
        details.set(JobDetail::CustomArt, "  ");
        let body = construct_body(&details, false);
        assert!(body.ends_with("Email: \r\nMaterial Type: Polyester\r\nCFM: 1200"));
    }
}
