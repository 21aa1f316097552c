//! 단위 정의 및 변환 모듈 모음.

pub mod airflow;
pub mod length;

pub use airflow::{
    cfm_to_tonnage, convert_airflow, tonnage_to_cfm, AirflowUnit, CFM_PER_TON, MAX_CFM, MIN_CFM,
};
pub use length::{convert_length, LengthUnit};
