//! 덕트 사이징(ductulator) 관련 모듈 모음.

pub mod session;
pub mod sizing;
pub mod stepping;

pub use session::CalculatorSession;
pub use sizing::*;
pub use stepping::*;
