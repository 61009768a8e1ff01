//! Built-in demonstration dataset.

use crate::style::{Icon, Tone};

use super::types::*;

impl Dataset {
    /// The dataset shown when no `--data` file is given.
    pub fn builtin() -> Self {
        Self {
            network: NetworkInfo {
                block_height: 1_247_893,
                quorum_required: 4,
                quorum_total: 6,
                operator_initials: "OP".to_string(),
            },
            stats: builtin_stats(),
            disasters: builtin_disasters(),
            oracles: builtin_oracles(),
            consensus: builtin_consensus(),
            triggers: builtin_triggers(),
            accountability: builtin_accountability(),
        }
    }
}

fn stat(label: &str, value: &str, change: &str, trend: StatTrend, icon: Icon, tone: Tone) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
        change: Some(change.to_string()),
        trend,
        icon,
        tone,
    }
}

fn builtin_stats() -> Vec<Stat> {
    vec![
        stat("Active Disasters", "4", "+2 today", StatTrend::Up, Icon::AlertTriangle, Tone::Destructive),
        stat("Oracle Uptime", "99.7%", "+0.2%", StatTrend::Up, Icon::Shield, Tone::Success),
        stat("Triggers Today", "12", "5 pending", StatTrend::Neutral, Icon::Zap, Tone::Accent),
        stat("NGOs Active", "47", "+8 this week", StatTrend::Up, Icon::Users, Tone::Info),
        stat("Consensus Rate", "94%", "+3%", StatTrend::Up, Icon::TrendingUp, Tone::Primary),
    ]
}

fn disaster(
    id: &str,
    name: &str,
    lat: f64,
    lng: f64,
    severity: DisasterSeverity,
    status: DisasterStatus,
    kind: &str,
) -> DisasterLocation {
    DisasterLocation {
        id: id.to_string(),
        name: name.to_string(),
        lat,
        lng,
        severity,
        status,
        kind: kind.to_string(),
    }
}

fn builtin_disasters() -> Vec<DisasterLocation> {
    use DisasterSeverity::*;
    use DisasterStatus::*;

    vec![
        disaster("1", "Chennai Floods", 40.0, 25.0, Critical, Verified, "Flood"),
        disaster("2", "Odisha Cyclone", 55.0, 65.0, Severe, Pending, "Cyclone"),
        disaster("3", "Gujarat Earthquake", 30.0, 15.0, Moderate, Monitoring, "Earthquake"),
        disaster("4", "Kerala Landslide", 70.0, 20.0, Severe, Verified, "Landslide"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn oracle(
    id: &str,
    name: &str,
    kind: OracleKind,
    status: OracleStatus,
    reputation: u32,
    last_update: &str,
    submissions: u64,
    trend: OracleTrend,
) -> Oracle {
    Oracle {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        status,
        reputation,
        last_update: last_update.to_string(),
        submissions,
        trend,
    }
}

fn builtin_oracles() -> Vec<Oracle> {
    use OracleKind::*;

    vec![
        oracle("1", "IMD Weather API", Weather, OracleStatus::Active, 98, "2s ago", 1247, OracleTrend::Up),
        oracle("2", "ISRO Bhuvan", Satellite, OracleStatus::Active, 95, "5m ago", 892, OracleTrend::Stable),
        oracle("3", "USGS Seismic", Seismic, OracleStatus::Active, 97, "1m ago", 456, OracleTrend::Up),
        oracle("4", "BSNL Network", Telecom, OracleStatus::Pending, 82, "15m ago", 234, OracleTrend::Down),
        oracle("5", "Goonj NGO", Ngo, OracleStatus::Active, 91, "3m ago", 567, OracleTrend::Up),
        oracle("6", "NDMA Official", Government, OracleStatus::Active, 99, "10m ago", 123, OracleTrend::Stable),
    ]
}

fn builtin_consensus() -> Vec<ConsensusRecord> {
    vec![
        ConsensusRecord {
            id: "1".to_string(),
            disaster_name: "Chennai Urban Flooding".to_string(),
            region: "Tamil Nadu".to_string(),
            oracles_agreed: 5,
            oracles_required: 4,
            confidence: 94,
            status: ConsensusStatus::ConsensusReached,
            severity: 8.5,
            timestamp: "2 minutes ago".to_string(),
        },
        ConsensusRecord {
            id: "2".to_string(),
            disaster_name: "Cyclone Michaung".to_string(),
            region: "Odisha Coast".to_string(),
            oracles_agreed: 3,
            oracles_required: 4,
            confidence: 72,
            status: ConsensusStatus::Pending,
            severity: 7.2,
            timestamp: "15 minutes ago".to_string(),
        },
        ConsensusRecord {
            id: "3".to_string(),
            disaster_name: "Kutch Tremor".to_string(),
            region: "Gujarat".to_string(),
            oracles_agreed: 2,
            oracles_required: 4,
            confidence: 45,
            status: ConsensusStatus::Insufficient,
            severity: 4.1,
            timestamp: "1 hour ago".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn trigger(
    id: &str,
    kind: TriggerKind,
    title: &str,
    description: &str,
    disaster_ref: &str,
    timestamp: &str,
    status: TriggerStatus,
    tx_hash: Option<&str>,
) -> TriggerEvent {
    TriggerEvent {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        disaster_ref: disaster_ref.to_string(),
        timestamp: timestamp.to_string(),
        status,
        tx_hash: tx_hash.map(str::to_string),
    }
}

fn builtin_triggers() -> Vec<TriggerEvent> {
    vec![
        trigger(
            "1",
            TriggerKind::DbtSignal,
            "DBT Release Signal Emitted",
            "Trigger sent for ₹50 Cr relief fund release",
            "Chennai Floods",
            "2 minutes ago",
            TriggerStatus::Executed,
            Some("0x8f4e...3a2b"),
        ),
        trigger(
            "2",
            TriggerKind::NdrfActivation,
            "NDRF Workflow Activated",
            "Emergency response team deployment authorized",
            "Chennai Floods",
            "5 minutes ago",
            TriggerStatus::Executed,
            Some("0x2c7d...9f1e"),
        ),
        trigger(
            "3",
            TriggerKind::NgoAccess,
            "NGO Access Granted",
            "5 verified NGOs authorized for relief operations",
            "Chennai Floods",
            "8 minutes ago",
            TriggerStatus::Executed,
            Some("0x5a1b...7c4d"),
        ),
        trigger(
            "4",
            TriggerKind::SupplyChain,
            "Supply Chain Alert",
            "Mobilization signal sent to logistics network",
            "Odisha Cyclone",
            "15 minutes ago",
            TriggerStatus::Pending,
            None,
        ),
        trigger(
            "5",
            TriggerKind::CsrNotification,
            "CSR Fund Notification",
            "Corporate donors notified of verified disaster",
            "Odisha Cyclone",
            "20 minutes ago",
            TriggerStatus::Queued,
            None,
        ),
    ]
}

fn builtin_accountability() -> Vec<AccountabilityEvent> {
    vec![
        AccountabilityEvent {
            id: "1".to_string(),
            kind: AccountabilityKind::ProofSubmitted,
            actor: "Red Cross India".to_string(),
            actor_kind: ActorKind::Ngo,
            action: "Submitted relief delivery proof (1,240 families)".to_string(),
            disaster_ref: "Chennai Floods".to_string(),
            timestamp: "5 minutes ago".to_string(),
            verified: true,
            hash: Some("Qm8f4e...3a2b".to_string()),
        },
        AccountabilityEvent {
            id: "2".to_string(),
            kind: AccountabilityKind::VerificationComplete,
            actor: "Tamil Nadu SDMA".to_string(),
            actor_kind: ActorKind::Government,
            action: "Verified ground-level impact assessment".to_string(),
            disaster_ref: "Chennai Floods".to_string(),
            timestamp: "12 minutes ago".to_string(),
            verified: true,
            hash: Some("Qm2c7d...9f1e".to_string()),
        },
        AccountabilityEvent {
            id: "3".to_string(),
            kind: AccountabilityKind::Discrepancy,
            actor: "Audit System".to_string(),
            actor_kind: ActorKind::Government,
            action: "Detected 15% variance in reported vs satellite data".to_string(),
            disaster_ref: "Kerala Landslide".to_string(),
            timestamp: "1 hour ago".to_string(),
            verified: false,
            hash: None,
        },
        AccountabilityEvent {
            id: "4".to_string(),
            kind: AccountabilityKind::AuditRequest,
            actor: "Tata Trusts".to_string(),
            actor_kind: ActorKind::Donor,
            action: "Requested detailed audit trail for CSR allocation".to_string(),
            disaster_ref: "Gujarat Earthquake".to_string(),
            timestamp: "2 hours ago".to_string(),
            verified: true,
            hash: Some("Qm5a1b...7c4d".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let data = Dataset::builtin();
        assert_eq!(data.stats.len(), 5);
        assert_eq!(data.disasters.len(), 4);
        assert_eq!(data.oracles.len(), 6);
        assert_eq!(data.consensus.len(), 3);
        assert_eq!(data.triggers.len(), 5);
        assert_eq!(data.accountability.len(), 4);
    }

    #[test]
    fn test_builtin_oracle_reputations() {
        let reputations: Vec<u32> = Dataset::builtin()
            .oracles
            .iter()
            .map(|o| o.reputation)
            .collect();
        assert_eq!(reputations, vec![98, 95, 97, 82, 91, 99]);
    }

    #[test]
    fn test_builtin_trigger_statuses_in_order() {
        let statuses: Vec<TriggerStatus> = Dataset::builtin()
            .triggers
            .iter()
            .map(|t| t.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                TriggerStatus::Executed,
                TriggerStatus::Executed,
                TriggerStatus::Executed,
                TriggerStatus::Pending,
                TriggerStatus::Queued,
            ]
        );
    }
}
