use super::super::domain::PropertyAsset;
use serde::{Deserialize, Serialize};

/// Constants of the property-management service levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Vacancy rate (percent) from which an asset raises an alert.
    pub vacancy_alert_pct: f64,
    pub avg_response_days: f64,
    pub sla_target_days: f64,
    pub satisfaction: f64,
    pub compliance_base: u32,
    pub backlog_base: u32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            vacancy_alert_pct: 1.0,
            avg_response_days: 3.1,
            sla_target_days: 2.0,
            satisfaction: 4.4,
            compliance_base: 92,
            backlog_base: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagementPulse {
    pub avg_response_days: f64,
    pub sla_target_days: f64,
    pub escalations: u32,
    pub compliance: u32,
    pub satisfaction: f64,
    pub backlog: u32,
}

impl ManagementPulse {
    pub fn sla_breached(&self) -> bool {
        self.avg_response_days > self.sla_target_days
    }
}

pub fn management_pulse(assets: &[PropertyAsset], config: &PulseConfig) -> ManagementPulse {
    let alerts = assets
        .iter()
        .filter(|asset| asset.vacancy_rate >= config.vacancy_alert_pct)
        .count() as u32;

    ManagementPulse {
        avg_response_days: config.avg_response_days,
        sla_target_days: config.sla_target_days,
        escalations: alerts,
        compliance: config.compliance_base.saturating_sub(alerts),
        satisfaction: config.satisfaction,
        backlog: config.backlog_base + alerts,
    }
}
