//! Per-panel aggregates and threshold colouring.
//!
//! All functions are pure and recomputed whenever a panel's records change.
//! Rounding is half-up, done in integer arithmetic.

use crate::data::{ConsensusRecord, Oracle, OracleStatus, TriggerEvent, TriggerStatus};
use crate::style::Tone;

/// Number of oracles currently active.
pub fn active_count(oracles: &[Oracle]) -> usize {
    oracles
        .iter()
        .filter(|o| o.status == OracleStatus::Active)
        .count()
}

/// Mean reputation rounded to the nearest integer, `None` for no oracles.
pub fn avg_reputation(oracles: &[Oracle]) -> Option<u32> {
    if oracles.is_empty() {
        return None;
    }
    let sum: u64 = oracles.iter().map(|o| u64::from(o.reputation)).sum();
    let len = oracles.len() as u64;
    Some(((2 * sum + len) / (2 * len)) as u32)
}

/// Number of triggers already executed.
pub fn executed_count(triggers: &[TriggerEvent]) -> usize {
    triggers
        .iter()
        .filter(|t| t.status == TriggerStatus::Executed)
        .count()
}

/// Consensus progress in percent, capped at 100.
///
/// `required` must be non-zero; dataset validation guarantees it.
pub fn consensus_progress(agreed: u32, required: u32) -> u32 {
    debug_assert!(required > 0);
    let agreed = u64::from(agreed);
    let required = u64::from(required).max(1);
    let rounded = (200 * agreed + required) / (2 * required);
    rounded.min(100) as u32
}

/// Fill style of a consensus progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressFill {
    /// At or past the quorum
    Reached,
    /// At least three quarters of the quorum
    Near,
    Flat,
}

impl ProgressFill {
    /// Selects the fill from the unclamped agreed/required ratio.
    pub fn for_counts(agreed: u32, required: u32) -> Self {
        let agreed = u64::from(agreed);
        let required = u64::from(required);
        if agreed >= required {
            ProgressFill::Reached
        } else if 4 * agreed >= 3 * required {
            ProgressFill::Near
        } else {
            ProgressFill::Flat
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressFill::Reached => "fill-reached",
            ProgressFill::Near => "fill-near",
            ProgressFill::Flat => "fill-flat",
        }
    }
}

impl ConsensusRecord {
    pub fn progress(&self) -> u32 {
        consensus_progress(self.oracles_agreed, self.oracles_required)
    }

    pub fn fill(&self) -> ProgressFill {
        ProgressFill::for_counts(self.oracles_agreed, self.oracles_required)
    }

    pub fn quorum_met(&self) -> bool {
        self.oracles_agreed >= self.oracles_required
    }
}

/// Reputation colour: 90 and up is healthy, 80 and up is a warning.
pub fn reputation_tone(reputation: u32) -> Tone {
    if reputation >= 90 {
        Tone::Success
    } else if reputation >= 80 {
        Tone::Warning
    } else {
        Tone::Destructive
    }
}

/// Confidence colour: 80 and up is strong, 60 and up is a warning.
pub fn confidence_tone(confidence: u32) -> Tone {
    if confidence >= 80 {
        Tone::Success
    } else if confidence >= 60 {
        Tone::Warning
    } else {
        Tone::Muted
    }
}

/// Severity score colour on the 0-10 scale.
pub fn severity_tone(severity: f64) -> Tone {
    if severity >= 7.0 {
        Tone::Destructive
    } else if severity >= 5.0 {
        Tone::Warning
    } else {
        Tone::Info
    }
}

/// Formats a count with comma thousands separators (1247 -> "1,247").
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, OracleKind, OracleTrend, TriggerKind};
    use proptest::prelude::*;

    fn oracle_with(status: OracleStatus, reputation: u32) -> Oracle {
        Oracle {
            id: "x".to_string(),
            name: "Test".to_string(),
            kind: OracleKind::Weather,
            status,
            reputation,
            last_update: "now".to_string(),
            submissions: 0,
            trend: OracleTrend::Stable,
        }
    }

    fn trigger_with(status: TriggerStatus) -> TriggerEvent {
        TriggerEvent {
            id: "t".to_string(),
            kind: TriggerKind::NgoAccess,
            title: "Title".to_string(),
            description: "Description".to_string(),
            disaster_ref: "Ref".to_string(),
            timestamp: "now".to_string(),
            status,
            tx_hash: None,
        }
    }

    fn oracle_status() -> impl Strategy<Value = OracleStatus> {
        prop_oneof![
            Just(OracleStatus::Active),
            Just(OracleStatus::Pending),
            Just(OracleStatus::Offline),
        ]
    }

    fn trigger_status() -> impl Strategy<Value = TriggerStatus> {
        prop_oneof![
            Just(TriggerStatus::Executed),
            Just(TriggerStatus::Pending),
            Just(TriggerStatus::Queued),
        ]
    }

    #[test]
    fn test_builtin_oracle_aggregates() {
        let data = Dataset::builtin();
        assert_eq!(active_count(&data.oracles), 5);
        assert_eq!(avg_reputation(&data.oracles), Some(94));
    }

    #[test]
    fn test_builtin_executed_count() {
        assert_eq!(executed_count(&Dataset::builtin().triggers), 3);
    }

    #[test]
    fn test_progress_examples() {
        assert_eq!(consensus_progress(5, 4), 100);
        assert_eq!(consensus_progress(3, 4), 75);
        assert_eq!(consensus_progress(2, 4), 50);
        assert_eq!(consensus_progress(0, 4), 0);
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67
        assert_eq!(consensus_progress(1, 3), 33);
        assert_eq!(consensus_progress(2, 3), 67);
        // 1/8 = 12.5 rounds half up
        assert_eq!(consensus_progress(1, 8), 13);
    }

    #[test]
    fn test_avg_reputation_empty() {
        assert_eq!(avg_reputation(&[]), None);
    }

    #[test]
    fn test_avg_reputation_rounds_half_up() {
        let oracles = vec![
            oracle_with(OracleStatus::Active, 90),
            oracle_with(OracleStatus::Active, 91),
        ];
        assert_eq!(avg_reputation(&oracles), Some(91));
    }

    #[test]
    fn test_progress_fill_thresholds() {
        assert_eq!(ProgressFill::for_counts(5, 4), ProgressFill::Reached);
        assert_eq!(ProgressFill::for_counts(4, 4), ProgressFill::Reached);
        assert_eq!(ProgressFill::for_counts(3, 4), ProgressFill::Near);
        assert_eq!(ProgressFill::for_counts(74, 100), ProgressFill::Flat);
        assert_eq!(ProgressFill::for_counts(99, 100), ProgressFill::Near);
        assert_eq!(ProgressFill::for_counts(2, 4), ProgressFill::Flat);
    }

    #[test]
    fn test_builtin_consensus_fills() {
        let fills: Vec<ProgressFill> = Dataset::builtin()
            .consensus
            .iter()
            .map(ConsensusRecord::fill)
            .collect();
        assert_eq!(
            fills,
            vec![ProgressFill::Reached, ProgressFill::Near, ProgressFill::Flat]
        );
    }

    #[test]
    fn test_threshold_tones() {
        assert_eq!(reputation_tone(90), Tone::Success);
        assert_eq!(reputation_tone(82), Tone::Warning);
        assert_eq!(reputation_tone(79), Tone::Destructive);

        assert_eq!(confidence_tone(94), Tone::Success);
        assert_eq!(confidence_tone(72), Tone::Warning);
        assert_eq!(confidence_tone(45), Tone::Muted);

        assert_eq!(severity_tone(8.5), Tone::Destructive);
        assert_eq!(severity_tone(7.0), Tone::Destructive);
        assert_eq!(severity_tone(5.0), Tone::Warning);
        assert_eq!(severity_tone(4.1), Tone::Info);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1247), "1,247");
        assert_eq!(format_thousands(1_247_893), "1,247,893");
    }

    proptest! {
        #[test]
        fn test_active_count_matches_filter(
            entries in prop::collection::vec((oracle_status(), 0u32..=100), 0..40)
        ) {
            let oracles: Vec<Oracle> = entries
                .iter()
                .map(|(status, rep)| oracle_with(*status, *rep))
                .collect();
            let expected = entries.iter().filter(|(s, _)| *s == OracleStatus::Active).count();
            let count = active_count(&oracles);
            prop_assert_eq!(count, expected);
            prop_assert!(count <= oracles.len());
        }

        #[test]
        fn test_avg_reputation_matches_float_mean(
            reputations in prop::collection::vec(0u32..=100, 1..40)
        ) {
            let oracles: Vec<Oracle> = reputations
                .iter()
                .map(|r| oracle_with(OracleStatus::Active, *r))
                .collect();
            let mean = reputations.iter().map(|r| f64::from(*r)).sum::<f64>()
                / reputations.len() as f64;
            let avg = avg_reputation(&oracles).unwrap();
            prop_assert_eq!(avg, (mean + 0.5).floor() as u32);
            prop_assert!(avg <= 100);
        }

        #[test]
        fn test_progress_is_clamped_rounded_ratio(agreed in 0u32..50, required in 1u32..50) {
            let expected = ((100.0 * f64::from(agreed) / f64::from(required)) + 0.5)
                .floor()
                .min(100.0) as u32;
            let progress = consensus_progress(agreed, required);
            prop_assert_eq!(progress, expected);
            prop_assert!(progress <= 100);
        }

        #[test]
        fn test_executed_count_matches_filter(
            statuses in prop::collection::vec(trigger_status(), 0..40)
        ) {
            let triggers: Vec<TriggerEvent> = statuses.iter().map(|s| trigger_with(*s)).collect();
            let expected = statuses.iter().filter(|s| **s == TriggerStatus::Executed).count();
            prop_assert_eq!(executed_count(&triggers), expected);
        }
    }
}
