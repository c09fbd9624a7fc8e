//! Plan state and the trial quota gate

use serde::{Deserialize, Serialize};

use crate::builder::Screen;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    #[default]
    Trial,
    Pro,
}

impl Plan {
    pub fn is_paid(self) -> bool {
        self == Plan::Pro
    }

    pub fn label(self) -> &'static str {
        match self {
            Plan::Trial => "TRIAL",
            Plan::Pro => "PRO",
        }
    }
}

/// Proof of an approved subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub plan: Plan,
    pub price: u32,
}

/// Block-count ceiling for unpaid plans. Only HOME is limited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotaGate {
    pub home_limit: usize,
}

impl QuotaGate {
    pub fn new(home_limit: usize) -> Self {
        Self { home_limit }
    }

    /// True when one more block on `screen` must be refused.
    pub fn blocks(&self, plan: Plan, screen: Screen, current_len: usize) -> bool {
        screen == Screen::Home && !plan.is_paid() && current_len >= self.home_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_limits_home_on_trial() {
        let gate = QuotaGate::new(10);
        assert!(!gate.blocks(Plan::Trial, Screen::Home, 9));
        assert!(gate.blocks(Plan::Trial, Screen::Home, 10));
        assert!(gate.blocks(Plan::Trial, Screen::Home, 12));
    }

    #[test]
    fn test_gate_ignores_other_screens_and_pro() {
        let gate = QuotaGate::new(10);
        assert!(!gate.blocks(Plan::Trial, Screen::Collection, 50));
        assert!(!gate.blocks(Plan::Pro, Screen::Home, 50));
    }
}
