//! Leading-digit forensic auditing

pub mod auditor;
pub mod benford;

pub use auditor::{
    AuditThresholds, DigitFrequency, DigitFrequencyAuditor, DigitFrequencyReport, DigitSeries,
    Verdict,
};
pub use benford::{expected_frequency, leading_digit, BENFORD_EXPECTED};
