// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Process-wide export host
//!
//! [`ExportHost::startup`] initializes console logging once per process and
//! marks the host running for as long as any returned handle is alive.

use crate::error::{ExportError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log target of this crate; raised to info while everything else stays at warn
pub const APP_LOG_TARGET: &str = "snapshot_export";

static LOGGING: Once = Once::new();
static ACTIVE_HANDLES: AtomicUsize = AtomicUsize::new(0);

/// Keeps the host running; shuts it down when the last handle drops
#[derive(Debug)]
#[must_use = "the host shuts down when the handle is dropped"]
pub struct ExportHost {
    _private: (),
}

impl ExportHost {
    pub fn startup() -> Self {
        init_console_logging();

        if ACTIVE_HANDLES.fetch_add(1, Ordering::SeqCst) == 0 {
            debug!(sqlite = rusqlite::version(), "export host started");
        }
        Self { _private: () }
    }

    /// Release this handle now instead of at end of scope
    pub fn shutdown(self) {
        drop(self);
    }

    pub fn is_running() -> bool {
        ACTIVE_HANDLES.load(Ordering::SeqCst) > 0
    }

    pub fn ensure_running() -> Result<()> {
        if Self::is_running() {
            Ok(())
        } else {
            Err(ExportError::HostNotRunning)
        }
    }
}

impl Drop for ExportHost {
    fn drop(&mut self) {
        if ACTIVE_HANDLES.fetch_sub(1, Ordering::SeqCst) == 1 {
            debug!("export host stopped");
        }
    }
}

/// Console logger: warn by default, info for this crate. A subscriber
/// installed earlier (by a test harness, say) is left in place.
fn init_console_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::new(format!("warn,{}=info", APP_LOG_TARGET));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
