use crate::registry::UnitEntry;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;

/// Drives one unit entry against an output sink.
pub struct Runner {
    monitor: SystemMonitor,
}

impl Runner {
    pub fn new(monitor_enabled: bool) -> Self {
        Self {
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self, entry: &UnitEntry, out: &mut dyn Write) -> Result<()> {
        tracing::info!("Running unit {}", entry.label);
        if self.monitor.is_enabled() {
            tracing::debug!("Process monitoring enabled for this run");
        }

        (entry.print)(out)?;
        out.flush()?;

        self.monitor.log_run_stats(entry.label);
        tracing::info!("Unit {} finished", entry.label);
        Ok(())
    }
}
