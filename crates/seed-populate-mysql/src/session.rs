//! Server and session settings that speed up the bulk load.
//!
//! The tuner relaxes durability and consistency checks before the workers
//! start and puts them back after the workers have joined. Every statement is
//! best-effort: a failure is logged and the run continues with whatever the
//! server had configured.

use crate::sink::SinkConnection;
use tracing::{info, warn};

/// Global variable that controls redo log flushing on commit.
pub const FLUSH_LOG_VARIABLE: &str = "innodb_flush_log_at_trx_commit";

/// A single `SET` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub name: &'static str,
    pub value: String,
    /// Server-wide (`SET GLOBAL`) rather than session scoped.
    pub global: bool,
}

impl Setting {
    pub fn session(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            global: false,
        }
    }

    pub fn global(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            global: true,
        }
    }

    pub fn statement(&self) -> String {
        if self.global {
            format!("SET GLOBAL {} = {}", self.name, self.value)
        } else {
            format!("SET {}={}", self.name, self.value)
        }
    }
}

/// Settings applied before the load.
pub fn tuning_settings() -> Vec<Setting> {
    vec![
        Setting::global(FLUSH_LOG_VARIABLE, "2"),
        Setting::session("autocommit", "0"),
        Setting::session("unique_checks", "0"),
        Setting::session("foreign_key_checks", "0"),
    ]
}

/// Session settings each worker applies to its own connection.
pub fn worker_session_settings() -> Vec<Setting> {
    vec![
        Setting::session("unique_checks", "0"),
        Setting::session("foreign_key_checks", "0"),
    ]
}

/// Settings applied after the load.
///
/// The flush policy is only restored when its original value was captured.
pub fn restore_settings(original_flush_log: Option<&str>) -> Vec<Setting> {
    let mut settings = vec![
        Setting::session("autocommit", "1"),
        Setting::session("unique_checks", "1"),
        Setting::session("foreign_key_checks", "1"),
    ];
    if let Some(value) = original_flush_log {
        settings.push(Setting::global(FLUSH_LOG_VARIABLE, value));
    }
    settings
}

/// Apply settings one by one, logging failures. Returns how many succeeded.
pub async fn apply_best_effort<C: SinkConnection>(conn: &mut C, settings: &[Setting]) -> usize {
    let mut applied = 0;
    for setting in settings {
        let statement = setting.statement();
        match conn.apply_setting(&statement).await {
            Ok(()) => applied += 1,
            Err(e) => warn!("Could not apply '{}': {}", statement, e),
        }
    }
    applied
}

/// Tuned state of the sink, remembered so it can be restored.
#[derive(Debug)]
pub struct SessionTuner {
    original_flush_log: Option<String>,
}

impl SessionTuner {
    /// Capture the current flush policy, then apply [`tuning_settings`].
    pub async fn apply<C: SinkConnection>(conn: &mut C) -> Self {
        let original_flush_log = match conn.read_global(FLUSH_LOG_VARIABLE).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read {}: {}", FLUSH_LOG_VARIABLE, e);
                None
            }
        };

        info!("Optimizing MySQL settings for bulk insert...");
        let settings = tuning_settings();
        let applied = apply_best_effort(conn, &settings).await;
        info!("Applied {} of {} bulk insert settings", applied, settings.len());

        Self { original_flush_log }
    }

    pub fn original_flush_log(&self) -> Option<&str> {
        self.original_flush_log.as_deref()
    }

    /// Put the settings back. Returns how many statements succeeded.
    pub async fn restore<C: SinkConnection>(self, conn: &mut C) -> usize {
        if self.original_flush_log.is_none() {
            warn!(
                "Original {} unknown, leaving it unchanged",
                FLUSH_LOG_VARIABLE
            );
        }
        let settings = restore_settings(self.original_flush_log.as_deref());
        let restored = apply_best_effort(conn, &settings).await;
        info!("Restored {} of {} settings", restored, settings.len());
        restored
    }
}
