//! Range and identity checks applied to every loaded dataset.

use std::collections::HashSet;

use crate::error::{DataError, Result};

use super::types::*;

const MAX_SCORE: u32 = 100;
const MAX_SEVERITY: f64 = 10.0;
const MAX_MAP_OFFSET: f64 = 100.0;

impl Dataset {
    /// Checks every record against its range invariants.
    ///
    /// Categories need no checking here: deserialization already rejects
    /// values outside each enum.
    pub fn validate(&self) -> Result<()> {
        // Stat tiles are keyed by label.
        unique_ids("stat", self.stats.iter().map(|s| s.label.as_str()))?;
        unique_ids("disaster", self.disasters.iter().map(|d| d.id.as_str()))?;
        unique_ids("oracle", self.oracles.iter().map(|o| o.id.as_str()))?;
        unique_ids("consensus", self.consensus.iter().map(|c| c.id.as_str()))?;
        unique_ids("trigger", self.triggers.iter().map(|t| t.id.as_str()))?;
        unique_ids(
            "accountability",
            self.accountability.iter().map(|a| a.id.as_str()),
        )?;

        if self.network.quorum_required > self.network.quorum_total {
            return Err(DataError::invalid(
                "network",
                "quorum",
                format!(
                    "quorum {} exceeds oracle total {}",
                    self.network.quorum_required, self.network.quorum_total
                ),
            ));
        }

        for disaster in &self.disasters {
            check_offset(&disaster.id, "lat", disaster.lat)?;
            check_offset(&disaster.id, "lng", disaster.lng)?;
        }

        for oracle in &self.oracles {
            if oracle.reputation > MAX_SCORE {
                return Err(DataError::invalid(
                    "oracle",
                    &oracle.id,
                    format!("reputation {} exceeds {}", oracle.reputation, MAX_SCORE),
                ));
            }
        }

        for record in &self.consensus {
            if record.oracles_required == 0 {
                return Err(DataError::invalid(
                    "consensus",
                    &record.id,
                    "oracles_required must be at least 1",
                ));
            }
            if record.confidence > MAX_SCORE {
                return Err(DataError::invalid(
                    "consensus",
                    &record.id,
                    format!("confidence {} exceeds {}", record.confidence, MAX_SCORE),
                ));
            }
            if !record.severity.is_finite() || !(0.0..=MAX_SEVERITY).contains(&record.severity) {
                return Err(DataError::invalid(
                    "consensus",
                    &record.id,
                    format!("severity {} outside 0-{}", record.severity, MAX_SEVERITY),
                ));
            }
        }

        Ok(())
    }
}

fn unique_ids<'a>(entity: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::invalid(entity, id, "duplicate id"));
        }
    }
    Ok(())
}

fn check_offset(id: &str, axis: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=MAX_MAP_OFFSET).contains(&value) {
        Ok(())
    } else {
        Err(DataError::invalid(
            "disaster",
            id,
            format!("{} offset {} outside 0-{}", axis, value, MAX_MAP_OFFSET),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(err: DataError) -> String {
        match err {
            DataError::Invalid { reason, .. } => reason,
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        Dataset::builtin().validate().unwrap();
    }

    #[test]
    fn test_zero_quorum_rejected() {
        let mut data = Dataset::builtin();
        data.consensus[1].oracles_required = 0;
        let reason = reason_of(data.validate().unwrap_err());
        assert!(reason.contains("oracles_required"));
    }

    #[test]
    fn test_reputation_over_100_rejected() {
        let mut data = Dataset::builtin();
        data.oracles[0].reputation = 101;
        match data.validate().unwrap_err() {
            DataError::Invalid { entity, id, .. } => {
                assert_eq!(entity, "oracle");
                assert_eq!(id, "1");
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_confidence_over_100_rejected() {
        let mut data = Dataset::builtin();
        data.consensus[0].confidence = 140;
        assert!(reason_of(data.validate().unwrap_err()).contains("confidence"));
    }

    #[test]
    fn test_severity_out_of_range_rejected() {
        let mut data = Dataset::builtin();
        data.consensus[2].severity = 10.5;
        assert!(reason_of(data.validate().unwrap_err()).contains("severity"));

        data.consensus[2].severity = f64::NAN;
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_map_offset_out_of_range_rejected() {
        let mut data = Dataset::builtin();
        data.disasters[3].lng = -1.0;
        assert!(reason_of(data.validate().unwrap_err()).contains("lng"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut data = Dataset::builtin();
        data.triggers[4].id = data.triggers[0].id.clone();
        assert_eq!(reason_of(data.validate().unwrap_err()), "duplicate id");
    }

    #[test]
    fn test_duplicate_stat_label_rejected() {
        let mut data = Dataset::builtin();
        data.stats[3].label = data.stats[1].label.clone();
        match data.validate().unwrap_err() {
            DataError::Invalid { entity, id, .. } => {
                assert_eq!(entity, "stat");
                assert_eq!(id, "Oracle Uptime");
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_quorum_above_total_rejected() {
        let mut data = Dataset::builtin();
        data.network.quorum_required = 7;
        assert!(reason_of(data.validate().unwrap_err()).contains("quorum"));
    }

    #[test]
    fn test_empty_lists_are_valid() {
        let mut data = Dataset::builtin();
        data.oracles.clear();
        data.consensus.clear();
        data.validate().unwrap();
    }
}
