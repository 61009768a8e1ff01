//! Category to icon/colour lookups.
//!
//! Each categorical enum maps to a [`StyleSpec`] through an exhaustive
//! `match`. Adding a variant without a style is a compile error.

use serde::{Deserialize, Serialize};

use crate::data::{
    AccountabilityKind, ActorKind, ConsensusStatus, DisasterSeverity, DisasterStatus, OracleKind,
    OracleStatus, OracleTrend, StatTrend, TriggerKind, TriggerStatus,
};

/// Symbolic icon names understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Activity,
    AlertCircle,
    AlertOctagon,
    AlertTriangle,
    Bell,
    Building,
    CheckCircle,
    Circle,
    Clock,
    Cloud,
    Eye,
    FileCheck,
    Fingerprint,
    Loader,
    MapPin,
    Radio,
    Satellite,
    Settings,
    Shield,
    TrendingDown,
    TrendingUp,
    Truck,
    Users,
    Wallet,
    XCircle,
    Zap,
}

impl Icon {
    /// Symbolic name, also used as the `data-icon` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Activity => "activity",
            Icon::AlertCircle => "alert-circle",
            Icon::AlertOctagon => "alert-octagon",
            Icon::AlertTriangle => "alert-triangle",
            Icon::Bell => "bell",
            Icon::Building => "building",
            Icon::CheckCircle => "check-circle",
            Icon::Circle => "circle",
            Icon::Clock => "clock",
            Icon::Cloud => "cloud",
            Icon::Eye => "eye",
            Icon::FileCheck => "file-check",
            Icon::Fingerprint => "fingerprint",
            Icon::Loader => "loader",
            Icon::MapPin => "map-pin",
            Icon::Radio => "radio",
            Icon::Satellite => "satellite",
            Icon::Settings => "settings",
            Icon::Shield => "shield",
            Icon::TrendingDown => "trending-down",
            Icon::TrendingUp => "trending-up",
            Icon::Truck => "truck",
            Icon::Users => "users",
            Icon::Wallet => "wallet",
            Icon::XCircle => "x-circle",
            Icon::Zap => "zap",
        }
    }

    /// Glyph drawn for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Activity => "∿",
            Icon::AlertCircle => "ⓘ",
            Icon::AlertOctagon => "⛔",
            Icon::AlertTriangle => "⚠",
            Icon::Bell => "🔔",
            Icon::Building => "🏛",
            Icon::CheckCircle => "✓",
            Icon::Circle => "○",
            Icon::Clock => "◷",
            Icon::Cloud => "☁",
            Icon::Eye => "👁",
            Icon::FileCheck => "🗎",
            Icon::Fingerprint => "◉",
            Icon::Loader => "↻",
            Icon::MapPin => "●",
            Icon::Radio => "📡",
            Icon::Satellite => "🛰",
            Icon::Settings => "⚙",
            Icon::Shield => "🛡",
            Icon::TrendingDown => "↘",
            Icon::TrendingUp => "↗",
            Icon::Truck => "🚚",
            Icon::Users => "👥",
            Icon::Wallet => "👛",
            Icon::XCircle => "✕",
            Icon::Zap => "⚡",
        }
    }
}

/// Colour token from the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Primary,
    Accent,
    Success,
    Warning,
    Destructive,
    Info,
    Muted,
}

impl Tone {
    /// Name used in CSS class and variable names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Accent => "accent",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Destructive => "destructive",
            Tone::Info => "info",
            Tone::Muted => "muted",
        }
    }

    /// Foreground colour class.
    pub fn text_class(&self) -> String {
        format!("text-{}", self.as_str())
    }

    /// Solid background class.
    pub fn bg_class(&self) -> String {
        format!("bg-{}", self.as_str())
    }

    /// Tinted background class.
    pub fn soft_class(&self) -> String {
        format!("bg-{}-soft", self.as_str())
    }

    /// CSS custom property holding the colour.
    pub fn css_var(&self) -> String {
        format!("var(--{})", self.as_str())
    }
}

/// Icon, colour and label selected for a category value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub icon: Icon,
    pub tone: Tone,
    pub label: &'static str,
}

impl StyleSpec {
    const fn new(icon: Icon, tone: Tone, label: &'static str) -> Self {
        Self { icon, tone, label }
    }
}

/// A category value with a fixed visual style.
pub trait Styled {
    fn style(&self) -> StyleSpec;
}

impl Styled for DisasterSeverity {
    fn style(&self) -> StyleSpec {
        match self {
            DisasterSeverity::Critical => StyleSpec::new(Icon::MapPin, Tone::Destructive, "Critical"),
            DisasterSeverity::Severe => StyleSpec::new(Icon::MapPin, Tone::Warning, "Severe"),
            DisasterSeverity::Moderate => StyleSpec::new(Icon::MapPin, Tone::Info, "Moderate"),
        }
    }
}

impl Styled for DisasterStatus {
    fn style(&self) -> StyleSpec {
        match self {
            DisasterStatus::Verified => StyleSpec::new(Icon::CheckCircle, Tone::Success, "Verified"),
            DisasterStatus::Pending => StyleSpec::new(Icon::AlertTriangle, Tone::Warning, "Pending"),
            DisasterStatus::Monitoring => StyleSpec::new(Icon::Circle, Tone::Info, "Monitoring"),
        }
    }
}

impl Styled for OracleKind {
    fn style(&self) -> StyleSpec {
        match self {
            OracleKind::Weather => StyleSpec::new(Icon::Cloud, Tone::Primary, "Weather"),
            OracleKind::Satellite => StyleSpec::new(Icon::Satellite, Tone::Primary, "Satellite"),
            OracleKind::Seismic => StyleSpec::new(Icon::Activity, Tone::Primary, "Seismic"),
            OracleKind::Telecom => StyleSpec::new(Icon::Radio, Tone::Primary, "Telecom"),
            OracleKind::Ngo => StyleSpec::new(Icon::Users, Tone::Primary, "NGO"),
            OracleKind::Government => StyleSpec::new(Icon::Building, Tone::Primary, "Government"),
        }
    }
}

impl Styled for OracleStatus {
    fn style(&self) -> StyleSpec {
        match self {
            OracleStatus::Active => StyleSpec::new(Icon::Circle, Tone::Success, "Active"),
            OracleStatus::Pending => StyleSpec::new(Icon::Circle, Tone::Warning, "Pending"),
            OracleStatus::Offline => StyleSpec::new(Icon::Circle, Tone::Destructive, "Offline"),
        }
    }
}

impl Styled for OracleTrend {
    fn style(&self) -> StyleSpec {
        match self {
            OracleTrend::Up => StyleSpec::new(Icon::TrendingUp, Tone::Success, "Up"),
            OracleTrend::Down => StyleSpec::new(Icon::TrendingDown, Tone::Destructive, "Down"),
            OracleTrend::Stable => StyleSpec::new(Icon::Activity, Tone::Muted, "Stable"),
        }
    }
}

impl Styled for StatTrend {
    fn style(&self) -> StyleSpec {
        match self {
            StatTrend::Up => StyleSpec::new(Icon::TrendingUp, Tone::Success, "Up"),
            StatTrend::Down => StyleSpec::new(Icon::TrendingDown, Tone::Destructive, "Down"),
            StatTrend::Neutral => StyleSpec::new(Icon::Activity, Tone::Muted, "Neutral"),
        }
    }
}

impl Styled for ConsensusStatus {
    fn style(&self) -> StyleSpec {
        match self {
            ConsensusStatus::ConsensusReached => {
                StyleSpec::new(Icon::CheckCircle, Tone::Success, "Consensus Reached")
            }
            ConsensusStatus::Pending => {
                StyleSpec::new(Icon::Loader, Tone::Warning, "Awaiting Consensus")
            }
            ConsensusStatus::Insufficient => {
                StyleSpec::new(Icon::AlertCircle, Tone::Muted, "Insufficient Data")
            }
        }
    }
}

impl Styled for TriggerKind {
    fn style(&self) -> StyleSpec {
        match self {
            TriggerKind::DbtSignal => StyleSpec::new(Icon::Wallet, Tone::Success, "DBT"),
            TriggerKind::NdrfActivation => StyleSpec::new(Icon::Building, Tone::Primary, "NDRF"),
            TriggerKind::NgoAccess => StyleSpec::new(Icon::Users, Tone::Info, "NGO"),
            TriggerKind::SupplyChain => StyleSpec::new(Icon::Truck, Tone::Warning, "Logistics"),
            TriggerKind::CsrNotification => {
                StyleSpec::new(Icon::AlertTriangle, Tone::Accent, "CSR")
            }
        }
    }
}

impl Styled for TriggerStatus {
    fn style(&self) -> StyleSpec {
        match self {
            TriggerStatus::Executed => StyleSpec::new(Icon::CheckCircle, Tone::Success, "Executed"),
            TriggerStatus::Pending => StyleSpec::new(Icon::Clock, Tone::Warning, "Pending"),
            TriggerStatus::Queued => StyleSpec::new(Icon::Clock, Tone::Muted, "Queued"),
        }
    }
}

impl Styled for AccountabilityKind {
    fn style(&self) -> StyleSpec {
        match self {
            AccountabilityKind::ProofSubmitted => {
                StyleSpec::new(Icon::FileCheck, Tone::Success, "Proof Submitted")
            }
            AccountabilityKind::VerificationComplete => {
                StyleSpec::new(Icon::CheckCircle, Tone::Primary, "Verification Complete")
            }
            AccountabilityKind::Discrepancy => {
                StyleSpec::new(Icon::AlertOctagon, Tone::Destructive, "Discrepancy")
            }
            AccountabilityKind::AuditRequest => {
                StyleSpec::new(Icon::Eye, Tone::Info, "Audit Request")
            }
        }
    }
}

impl Styled for ActorKind {
    fn style(&self) -> StyleSpec {
        match self {
            ActorKind::Ngo => StyleSpec::new(Icon::Users, Tone::Info, "NGO"),
            ActorKind::Government => StyleSpec::new(Icon::Building, Tone::Warning, "Government"),
            ActorKind::Donor => StyleSpec::new(Icon::Wallet, Tone::Success, "Donor"),
        }
    }
}
