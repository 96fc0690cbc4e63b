#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct RunStats {
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// Samples the current process while a run is in flight. Disabled monitors
/// never touch sysinfo after construction.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: System,
    pid: Pid,
    start_time: Instant,
    peak_memory_mb: u64,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new();
        system.refresh_all();
        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        Self {
            system,
            pid,
            start_time: Instant::now(),
            peak_memory_mb: 0,
            enabled,
        }
    }

    pub fn sample(&mut self) -> Option<RunStats> {
        if !self.enabled {
            return None;
        }

        self.system.refresh_all();
        let process = self.system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        if memory_mb > self.peak_memory_mb {
            self.peak_memory_mb = memory_mb;
        }

        Some(RunStats {
            memory_usage_mb: memory_mb,
            peak_memory_mb: self.peak_memory_mb,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_run_stats(&mut self, phase: &str) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - Memory: {}MB, Peak: {}MB, Time: {:?}",
                phase,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// Empty implementation for builds without the CLI feature.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_run_stats(&mut self, _phase: &str) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
