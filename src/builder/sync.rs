//! Pushing the configuration tree to the mobile app
//!
//! Only a simulated transport exists. The UI starts a sync, waits the
//! configured delay, then finishes it; the tree itself is never touched.

use serde::{Deserialize, Serialize};

use crate::builder::tree::AppConfig;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub blocks: usize,
    pub bytes: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Synced(SyncReport),
    Failed,
}

impl SyncStatus {
    pub fn is_busy(self) -> bool {
        self == SyncStatus::Syncing
    }
}

/// Destination for a serialized configuration tree.
#[cfg_attr(test, mockall::automock)]
pub trait SyncTransport {
    fn push(&mut self, payload: &str) -> Result<()>;
}

/// Accepts every payload and remembers the size of the last one.
#[derive(Debug, Default)]
pub struct SimulatedTransport {
    pub pushes: usize,
    pub last_len: usize,
}

impl SyncTransport for SimulatedTransport {
    fn push(&mut self, payload: &str) -> Result<()> {
        self.pushes += 1;
        self.last_len = payload.len();
        tracing::debug!(bytes = payload.len(), "simulated sync accepted payload");
        Ok(())
    }
}

/// Serialize `config` and hand it to `transport`.
pub fn push_config(config: &AppConfig, transport: &mut dyn SyncTransport) -> Result<SyncReport> {
    let payload = serde_json::to_string(config)?;
    transport.push(&payload)?;
    Ok(SyncReport {
        blocks: config.block_count(),
        bytes: payload.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::tree::ThemeSettings;
    use crate::error::BuilderError;

    #[test]
    fn test_push_config_reports_payload() {
        let config = AppConfig::new(ThemeSettings::default());
        let mut transport = MockSyncTransport::new();
        transport
            .expect_push()
            .withf(|payload: &str| payload.contains("\"HOME\""))
            .times(1)
            .returning(|_| Ok(()));

        let report = push_config(&config, &mut transport).unwrap();

        assert_eq!(report.blocks, 0);
        assert_eq!(report.bytes, serde_json::to_string(&config).unwrap().len());
    }

    #[test]
    fn test_push_config_propagates_rejection() {
        let config = AppConfig::new(ThemeSettings::default());
        let mut transport = MockSyncTransport::new();
        transport.expect_push().returning(|_| {
            Err(BuilderError::SyncRejected {
                message: "offline".into(),
            })
        });

        let err = push_config(&config, &mut transport).unwrap_err();
        assert!(matches!(err, BuilderError::SyncRejected { .. }));
    }

    #[test]
    fn test_simulated_transport_counts_pushes() {
        let config = AppConfig::new(ThemeSettings::default());
        let mut transport = SimulatedTransport::default();
        push_config(&config, &mut transport).unwrap();
        push_config(&config, &mut transport).unwrap();
        assert_eq!(transport.pushes, 2);
        assert!(transport.last_len > 0);
    }
}
