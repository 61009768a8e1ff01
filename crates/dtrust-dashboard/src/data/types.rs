//! Record types displayed by the dashboard panels.
//!
//! Every categorical field is a closed enum. Deserializing a category that
//! is not listed here fails, so no record can reach a panel with a category
//! that has no icon or colour.

use serde::{Deserialize, Serialize};

use crate::style::{Icon, Tone};

/// Network-wide values shown in the header and consensus panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub block_height: u64,
    pub quorum_required: u32,
    pub quorum_total: u32,
    pub operator_initials: String,
}

/// Direction of a summary statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTrend {
    Up,
    Down,
    Neutral,
}

/// A summary tile in the stats bar. All values are pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: Option<String>,
    pub trend: StatTrend,
    pub icon: Icon,
    pub tone: Tone,
}

/// Severity of a disaster zone on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterSeverity {
    Critical,
    Severe,
    Moderate,
}

impl DisasterSeverity {
    pub const ALL: [DisasterSeverity; 3] = [
        DisasterSeverity::Critical,
        DisasterSeverity::Severe,
        DisasterSeverity::Moderate,
    ];
}

/// Verification state of a disaster zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterStatus {
    Verified,
    Pending,
    Monitoring,
}

impl DisasterStatus {
    pub const ALL: [DisasterStatus; 3] = [
        DisasterStatus::Verified,
        DisasterStatus::Pending,
        DisasterStatus::Monitoring,
    ];
}

/// A disaster zone marker.
///
/// `lat` and `lng` are percentages of the map container (0-100), not
/// geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub severity: DisasterSeverity,
    pub status: DisasterStatus,
    /// Free-text hazard label ("Flood", "Cyclone", ...)
    pub kind: String,
}

/// Category of data source behind an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    Weather,
    Satellite,
    Seismic,
    Telecom,
    Ngo,
    Government,
}

impl OracleKind {
    pub const ALL: [OracleKind; 6] = [
        OracleKind::Weather,
        OracleKind::Satellite,
        OracleKind::Seismic,
        OracleKind::Telecom,
        OracleKind::Ngo,
        OracleKind::Government,
    ];
}

/// Liveness of an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleStatus {
    Active,
    Pending,
    Offline,
}

impl OracleStatus {
    pub const ALL: [OracleStatus; 3] = [
        OracleStatus::Active,
        OracleStatus::Pending,
        OracleStatus::Offline,
    ];
}

/// Reputation movement of an oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleTrend {
    Up,
    Down,
    Stable,
}

/// An external data source with a tracked reputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oracle {
    pub id: String,
    pub name: String,
    pub kind: OracleKind,
    pub status: OracleStatus,
    /// Reputation score, 0-100
    pub reputation: u32,
    pub last_update: String,
    pub submissions: u64,
    pub trend: OracleTrend,
}

/// Outcome of a consensus round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusStatus {
    ConsensusReached,
    Pending,
    Insufficient,
}

impl ConsensusStatus {
    pub const ALL: [ConsensusStatus; 3] = [
        ConsensusStatus::ConsensusReached,
        ConsensusStatus::Pending,
        ConsensusStatus::Insufficient,
    ];
}

/// A disaster event awaiting or holding oracle consensus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusRecord {
    pub id: String,
    pub disaster_name: String,
    pub region: String,
    pub oracles_agreed: u32,
    pub oracles_required: u32,
    /// Confidence score, 0-100
    pub confidence: u32,
    pub status: ConsensusStatus,
    /// Severity score, 0.0-10.0
    pub severity: f64,
    pub timestamp: String,
}

/// Downstream action fired after consensus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    DbtSignal,
    NdrfActivation,
    NgoAccess,
    SupplyChain,
    CsrNotification,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 5] = [
        TriggerKind::DbtSignal,
        TriggerKind::NdrfActivation,
        TriggerKind::NgoAccess,
        TriggerKind::SupplyChain,
        TriggerKind::CsrNotification,
    ];
}

/// Execution state of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerStatus {
    Executed,
    Pending,
    Queued,
}

impl TriggerStatus {
    pub const ALL: [TriggerStatus; 3] = [
        TriggerStatus::Executed,
        TriggerStatus::Pending,
        TriggerStatus::Queued,
    ];
}

/// An entry in the trigger timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub id: String,
    pub kind: TriggerKind,
    pub title: String,
    pub description: String,
    pub disaster_ref: String,
    pub timestamp: String,
    pub status: TriggerStatus,
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// Kind of audit-trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountabilityKind {
    ProofSubmitted,
    VerificationComplete,
    Discrepancy,
    AuditRequest,
}

impl AccountabilityKind {
    pub const ALL: [AccountabilityKind; 4] = [
        AccountabilityKind::ProofSubmitted,
        AccountabilityKind::VerificationComplete,
        AccountabilityKind::Discrepancy,
        AccountabilityKind::AuditRequest,
    ];
}

/// Party that produced an audit-trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Ngo,
    Government,
    Donor,
}

impl ActorKind {
    pub const ALL: [ActorKind; 3] = [ActorKind::Ngo, ActorKind::Government, ActorKind::Donor];
}

/// An entry in the accountability ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountabilityEvent {
    pub id: String,
    pub kind: AccountabilityKind,
    pub actor: String,
    pub actor_kind: ActorKind,
    pub action: String,
    pub disaster_ref: String,
    pub timestamp: String,
    pub verified: bool,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Everything the dashboard renders, injected as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub network: NetworkInfo,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub disasters: Vec<DisasterLocation>,
    #[serde(default)]
    pub oracles: Vec<Oracle>,
    #[serde(default)]
    pub consensus: Vec<ConsensusRecord>,
    #[serde(default)]
    pub triggers: Vec<TriggerEvent>,
    #[serde(default)]
    pub accountability: Vec<AccountabilityEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oracle() {
        let json = r#"{"id":"7","name":"IMD Weather API","kind":"weather","status":"active","reputation":98,"last_update":"2s ago","submissions":1247,"trend":"up"}"#;
        let oracle: Oracle = serde_json::from_str(json).unwrap();
        assert_eq!(oracle.kind, OracleKind::Weather);
        assert_eq!(oracle.status, OracleStatus::Active);
        assert_eq!(oracle.reputation, 98);
        assert_eq!(oracle.trend, OracleTrend::Up);
    }

    #[test]
    fn test_parse_trigger_without_hash() {
        let json = r#"{"id":"4","kind":"supply_chain","title":"Supply Chain Alert","description":"Mobilization signal sent","disaster_ref":"Odisha Cyclone","timestamp":"15 minutes ago","status":"pending"}"#;
        let trigger: TriggerEvent = serde_json::from_str(json).unwrap();
        assert_eq!(trigger.kind, TriggerKind::SupplyChain);
        assert_eq!(trigger.status, TriggerStatus::Pending);
        assert!(trigger.tx_hash.is_none());
    }

    #[test]
    fn test_parse_consensus_status() {
        let status: ConsensusStatus = serde_json::from_str(r#""consensus_reached""#).unwrap();
        assert_eq!(status, ConsensusStatus::ConsensusReached);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id":"1","name":"X","kind":"astrology","status":"active","reputation":50,"last_update":"now","submissions":1,"trend":"up"}"#;
        assert!(serde_json::from_str::<Oracle>(json).is_err());

        assert!(serde_json::from_str::<TriggerStatus>(r#""cancelled""#).is_err());
        assert!(serde_json::from_str::<DisasterSeverity>(r#""minor""#).is_err());
    }

    #[test]
    fn test_dataset_lists_default_to_empty() {
        let json = r#"{"network":{"block_height":1,"quorum_required":4,"quorum_total":6,"operator_initials":"OP"}}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert!(dataset.oracles.is_empty());
        assert!(dataset.triggers.is_empty());
        assert_eq!(dataset.network.quorum_total, 6);
    }
}
