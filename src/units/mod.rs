//! 단위 정의 및 변환 모듈 모음.

pub mod airflow;

pub use airflow::{convert_airflow, convert_airflow_between, AirflowReading, AirflowUnit};

/// 1 inH2O 당 Pa.
pub const PA_PER_IN_H2O: f64 = 249.089;

/// Pa 를 inH2O(수주 인치)로 환산한다.
pub fn pa_to_in_h2o(value_pa: f64) -> f64 {
    value_pa / PA_PER_IN_H2O
}
