//! Leading-digit frequency audit
//!
//! Compares the first-digit distribution of a numeric series against the
//! reference table in [`super::benford`] and summarises the distance as the
//! mean absolute deviation across digits 1-9, in percentage points.
//!
//! The verdict bands are policy, not statistics: a low deviation reads as
//! consistent with a natural distribution, a high one as anomalous, and
//! anything between is left inconclusive.

use super::benford::{leading_digit, BENFORD_EXPECTED};
use crate::config::AuditConfig;
use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

pub const DEFAULT_CONSISTENT_BELOW: f64 = 1.0;
pub const DEFAULT_ANOMALOUS_ABOVE: f64 = 3.0;
pub const DEFAULT_MIN_RELIABLE_OBSERVATIONS: usize = 100;

/// A validated, non-empty series of positive finite observations
#[derive(Debug, Clone, PartialEq)]
pub struct DigitSeries {
    values: Vec<f64>,
}

impl DigitSeries {
    /// Validate `values`, rejecting the first zero, negative or non-finite entry.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptySeries);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| leading_digit(**v).is_none())
        {
            return Err(Error::InvalidObservation { index, value });
        }
        Ok(Self { values })
    }

    /// Keep only observations with a defined leading digit.
    ///
    /// Returns the series and the number of excluded values; fails with
    /// [`Error::EmptySeries`] when nothing valid remains.
    pub fn filtered(values: impl IntoIterator<Item = f64>) -> Result<(Self, usize)> {
        let mut excluded = 0usize;
        let kept: Vec<f64> = values
            .into_iter()
            .filter(|&v| {
                let keep = leading_digit(v).is_some();
                if !keep {
                    excluded += 1;
                }
                keep
            })
            .collect();

        if kept.is_empty() {
            return Err(Error::EmptySeries);
        }
        Ok((Self { values: kept }, excluded))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Deviation bands, in percentage points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuditThresholds {
    pub consistent_below: f64,
    pub anomalous_above: f64,
}

impl Default for AuditThresholds {
    fn default() -> Self {
        Self {
            consistent_below: DEFAULT_CONSISTENT_BELOW,
            anomalous_above: DEFAULT_ANOMALOUS_ABOVE,
        }
    }
}

impl AuditThresholds {
    pub fn validate(&self) -> Result<()> {
        let finite = self.consistent_below.is_finite() && self.anomalous_above.is_finite();
        if !finite || self.consistent_below < 0.0 {
            return Err(Error::invalid_parameter(format!(
                "thresholds must be finite and non-negative, got {} / {}",
                self.consistent_below, self.anomalous_above
            )));
        }
        if self.consistent_below > self.anomalous_above {
            return Err(Error::invalid_parameter(format!(
                "consistent_below ({}) exceeds anomalous_above ({})",
                self.consistent_below, self.anomalous_above
            )));
        }
        Ok(())
    }

    pub fn classify(&self, deviation_pct: f64) -> Verdict {
        if deviation_pct < self.consistent_below {
            Verdict::Consistent
        } else if deviation_pct > self.anomalous_above {
            Verdict::Anomalous
        } else {
            Verdict::Inconclusive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Consistent with a natural distribution
    Consistent,
    Inconclusive,
    Anomalous,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Consistent => "consistent with natural distribution",
            Verdict::Inconclusive => "inconclusive",
            Verdict::Anomalous => "anomalous",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitFrequency {
    pub digit: u8,
    pub count: usize,
    /// Fraction of observations with this leading digit
    pub observed: f64,
    /// Reference fraction
    pub expected: f64,
}

impl DigitFrequency {
    /// Absolute difference in percentage points
    pub fn deviation_pct(&self) -> f64 {
        (self.observed - self.expected).abs() * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitFrequencyReport {
    pub observations: usize,
    /// Digits 1 through 9, in order
    pub digits: Vec<DigitFrequency>,
    /// Mean absolute deviation across the nine digits, in percentage points
    pub deviation_pct: f64,
    pub verdict: Verdict,
}

impl DigitFrequencyReport {
    /// Observed frequency of `digit`
    pub fn frequency(&self, digit: u8) -> Option<f64> {
        self.digits
            .iter()
            .find(|d| d.digit == digit)
            .map(|d| d.observed)
    }
}

#[derive(Debug, Clone)]
pub struct DigitFrequencyAuditor {
    thresholds: AuditThresholds,
    min_reliable_observations: usize,
}

impl Default for DigitFrequencyAuditor {
    fn default() -> Self {
        Self::new(AuditThresholds::default())
    }
}

impl DigitFrequencyAuditor {
    pub fn new(thresholds: AuditThresholds) -> Self {
        Self {
            thresholds,
            min_reliable_observations: DEFAULT_MIN_RELIABLE_OBSERVATIONS,
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.thresholds())
            .with_min_reliable_observations(config.min_reliable_observations)
    }

    pub fn with_min_reliable_observations(mut self, min: usize) -> Self {
        self.min_reliable_observations = min;
        self
    }

    pub fn thresholds(&self) -> &AuditThresholds {
        &self.thresholds
    }

    /// Validate `values` and audit them.
    pub fn audit(&self, values: &[f64]) -> Result<DigitFrequencyReport> {
        self.thresholds.validate()?;
        let series = DigitSeries::new(values.to_vec())?;
        Ok(self.audit_series(&series))
    }

    pub fn audit_series(&self, series: &DigitSeries) -> DigitFrequencyReport {
        let observations = series.len();
        if observations < self.min_reliable_observations {
            warn!(
                observations,
                minimum = self.min_reliable_observations,
                "Small sample; leading-digit deviation is unreliable"
            );
        }

        let mut counts = [0usize; 9];
        for digit in series.values().iter().filter_map(|&v| leading_digit(v)) {
            counts[usize::from(digit) - 1] += 1;
        }

        let total = observations as f64;
        let digits: Vec<DigitFrequency> = counts
            .iter()
            .zip(BENFORD_EXPECTED.iter())
            .enumerate()
            .map(|(i, (&count, &expected))| DigitFrequency {
                digit: (i + 1) as u8,
                count,
                observed: count as f64 / total,
                expected,
            })
            .collect();

        let deviation_pct =
            digits.iter().map(DigitFrequency::deviation_pct).sum::<f64>() / digits.len() as f64;
        let verdict = self.thresholds.classify(deviation_pct);

        debug!(observations, deviation_pct, %verdict, "Leading-digit audit complete");

        DigitFrequencyReport {
            observations,
            digits,
            deviation_pct,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hundreds() -> Vec<f64> {
        (1..=9).map(|d| f64::from(d) * 100.0).collect()
    }

    #[test]
    fn test_one_observation_per_digit() {
        let report = DigitFrequencyAuditor::default().audit(&hundreds()).unwrap();

        assert_eq!(report.observations, 9);
        for digit in 1..=9 {
            let freq = report.frequency(digit).unwrap();
            assert!((freq - 1.0 / 9.0).abs() < 1e-12);
        }
        assert!(report.deviation_pct > 0.0);
    }

    #[test]
    fn test_uniform_digits_deviation_value() {
        // mean |1/9 - log10(1 + 1/d)| over d = 1..9, in percent
        let expected: f64 = (1..=9)
            .map(|d| (1.0 / 9.0 - (1.0 + 1.0 / f64::from(d)).log10()).abs())
            .sum::<f64>()
            / 9.0
            * 100.0;
        let report = DigitFrequencyAuditor::default().audit(&hundreds()).unwrap();
        assert!((report.deviation_pct - expected).abs() < 1e-9);
        assert_eq!(report.verdict, Verdict::Anomalous);
    }

    #[test]
    fn test_observed_frequencies_sum_to_one() {
        let values = [1.0, 12.0, 130.0, 2.5, 0.03, 77.0, 19.0];
        let report = DigitFrequencyAuditor::default().audit(&values).unwrap();
        let total: f64 = report.digits.iter().map(|d| d.observed).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(report.digits.iter().map(|d| d.count).sum::<usize>(), 7);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let result = DigitFrequencyAuditor::default().audit(&[]);
        assert!(matches!(result, Err(Error::EmptySeries)));
    }

    #[test]
    fn test_invalid_observations_are_rejected() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = DigitFrequencyAuditor::default().audit(&[10.0, bad, 30.0]);
            match result {
                Err(Error::InvalidObservation { index, .. }) => assert_eq!(index, 1),
                other => panic!("expected InvalidObservation for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_filtered_excludes_invalid_values() {
        let (series, excluded) = DigitSeries::filtered(vec![0.0, 5.0, -1.0, 7.0]).unwrap();
        assert_eq!(series.values(), &[5.0, 7.0]);
        assert_eq!(excluded, 2);
    }

    #[test]
    fn test_filtered_with_nothing_valid_is_empty_series() {
        let result = DigitSeries::filtered(vec![0.0, -3.0]);
        assert!(matches!(result, Err(Error::EmptySeries)));
    }

    #[test]
    fn test_classify_bands() {
        let thresholds = AuditThresholds::default();
        assert_eq!(thresholds.classify(0.5), Verdict::Consistent);
        assert_eq!(thresholds.classify(2.0), Verdict::Inconclusive);
        assert_eq!(thresholds.classify(3.0), Verdict::Inconclusive);
        assert_eq!(thresholds.classify(6.0), Verdict::Anomalous);
    }

    #[test]
    fn test_inverted_thresholds_fail_validation() {
        let auditor = DigitFrequencyAuditor::new(AuditThresholds {
            consistent_below: 5.0,
            anomalous_above: 2.0,
        });
        assert!(matches!(
            auditor.audit(&hundreds()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_custom_thresholds_change_verdict() {
        let auditor = DigitFrequencyAuditor::new(AuditThresholds {
            consistent_below: 10.0,
            anomalous_above: 20.0,
        });
        let report = auditor.audit(&hundreds()).unwrap();
        assert_eq!(report.verdict, Verdict::Consistent);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            Verdict::Consistent.to_string(),
            "consistent with natural distribution"
        );
        assert_eq!(Verdict::Anomalous.to_string(), "anomalous");
    }
}
