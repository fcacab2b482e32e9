mod pulse;
mod summary;
pub mod views;

pub use pulse::{management_pulse, ManagementPulse, PulseConfig};
pub use summary::{strategy_metrics, twin_view, PortfolioDashboard};
