//! Scanner module - finds listeners by connecting to every port in a range.
//!
//! One task is spawned per port and the caller waits on all of them before
//! anything is returned. The number of sockets open at once is capped by a
//! semaphore sized from the process's file descriptor limit.

pub mod tcp;
pub mod traits;

use crate::services::get_service_name;
use crate::types::{Port, PortRange};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub use tcp::{dial, TcpConnectScanner};
pub use traits::{PortResult, PortStatus, Scanner};

/// Descriptors kept back for stdio, the runtime and the resolver.
const FD_HEADROOM: usize = 64;
/// Lower bound on in-flight connects when the descriptor limit is tiny.
const MIN_IN_FLIGHT: usize = 16;
/// Upper bound on in-flight connects regardless of the descriptor limit.
const MAX_IN_FLIGHT: usize = 4096;
/// Assumed descriptor limit when it cannot be queried.
const FALLBACK_FD_LIMIT: usize = 1024;

/// Options for a listener scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum number of connects in flight at once.
    pub max_in_flight: usize,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

impl ScanOptions {
    /// Options with the in-flight cap derived from the descriptor limit.
    pub fn new() -> Self {
        Self {
            max_in_flight: default_max_in_flight(),
            progress: false,
        }
    }

    /// Override the in-flight cap.
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Enable the progress bar.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a listener scan.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Address that was scanned.
    pub target: IpAddr,
    /// Number of ports scanned.
    pub ports_scanned: usize,
    /// Ports that accepted a connection, ascending.
    pub open_ports: Vec<Port>,
    /// Scan tasks that ended, successfully or not. Equals `ports_scanned`.
    pub ports_completed: usize,
    /// Scan tasks that panicked or were cancelled.
    pub tasks_failed: usize,
    /// Wall-clock time for the whole scan.
    pub duration: Duration,
}

/// Scan every port in `range` and return the ones that accepted a connection.
///
/// Returns only after every port has been scanned. Ports that refuse, time out
/// or fail in any other way are dropped from the result.
pub async fn scan_listeners<S>(scanner: Arc<S>, range: PortRange, options: &ScanOptions) -> ScanSummary
where
    S: Scanner + 'static,
{
    let start_time = Instant::now();
    let target = scanner.target();
    let total_ports = range.len();

    info!(
        %target,
        ports = %range,
        max_in_flight = options.max_in_flight,
        "starting listener scan"
    );

    let progress = if options.progress {
        let pb = ProgressBar::new(total_ports as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
        ) {
            pb.set_style(style.progress_chars("=>-"));
        }
        Some(pb)
    } else {
        None
    };

    let semaphore = Arc::new(Semaphore::new(options.max_in_flight));
    let mut tasks = JoinSet::new();

    for port in range.iter() {
        let scanner = Arc::clone(&scanner);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return PortResult::new(port, PortStatus::Filtered);
            };
            scanner.scan_port(port).await
        });
    }

    let mut open_ports = Vec::new();
    let mut ports_completed = 0;
    let mut tasks_failed = 0;
    while let Some(joined) = tasks.join_next().await {
        ports_completed += 1;
        if let Some(ref pb) = progress {
            pb.inc(1);
        }

        let result = match joined {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "scan task failed");
                tasks_failed += 1;
                continue;
            }
        };

        if result.is_open() {
            debug!(
                port = %result.port,
                service = get_service_name(result.port).unwrap_or("unknown"),
                response_time_ms = result.response_time_ms,
                "port is listening"
            );
            if let Some(ref pb) = progress {
                pb.set_message(format!("Found open port: {}", result.port));
            }
            open_ports.push(result.port);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Scan complete");
    }

    open_ports.sort_unstable();
    let duration = start_time.elapsed();

    info!(
        %target,
        open = open_ports.len(),
        elapsed_ms = duration.as_millis() as u64,
        "listener scan finished"
    );

    ScanSummary {
        target,
        ports_scanned: total_ports,
        open_ports,
        ports_completed,
        tasks_failed,
        duration,
    }
}

/// In-flight connect cap derived from the open file soft limit.
pub fn default_max_in_flight() -> usize {
    let limit = match open_file_limit() {
        Some(limit) => limit,
        None => {
            debug!(
                fallback = FALLBACK_FD_LIMIT,
                "could not read file descriptor limit"
            );
            FALLBACK_FD_LIMIT
        }
    };

    let cap = in_flight_for_limit(limit);
    if cap == MIN_IN_FLIGHT {
        warn!(limit, cap, "low file descriptor limit, scan will be slow");
    }
    cap
}

fn in_flight_for_limit(limit: usize) -> usize {
    limit
        .saturating_sub(FD_HEADROOM)
        .clamp(MIN_IN_FLIGHT, MAX_IN_FLIGHT)
}

#[cfg(unix)]
fn open_file_limit() -> Option<usize> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };

    // SAFETY: getrlimit only writes into the struct we hand it.
    let rc = unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut limit) };
    if rc != 0 {
        return None;
    }

    if limit.rlim_cur == libc::RLIM_INFINITY {
        return Some(usize::MAX);
    }
    usize::try_from(limit.rlim_cur).ok()
}

#[cfg(not(unix))]
fn open_file_limit() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::net::Ipv4Addr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Reports a fixed set of ports as open and tracks peak concurrency.
    struct FakeScanner {
        open: HashSet<u16>,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        scanned: AtomicUsize,
    }

    impl FakeScanner {
        fn new(open: &[u16]) -> Self {
            Self {
                open: open.iter().copied().collect(),
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
                scanned: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Scanner for FakeScanner {
        async fn scan_port(&self, port: Port) -> PortResult {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.scanned.fetch_add(1, Ordering::SeqCst);

            let status = if self.open.contains(&port.as_u16()) {
                PortStatus::Open
            } else {
                PortStatus::Closed
            };
            PortResult::new(port, status)
        }

        fn target(&self) -> IpAddr {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }

    fn range(start: u16, end: u16) -> PortRange {
        PortRange::new(Port::new(start).unwrap(), Port::new(end).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_collects_only_open_ports_sorted() {
        let scanner = Arc::new(FakeScanner::new(&[900, 22, 443]));
        let options = ScanOptions::new().with_max_in_flight(8);

        let summary = scan_listeners(Arc::clone(&scanner), range(1, 1000), &options).await;

        assert_eq!(summary.ports_scanned, 1000);
        assert_eq!(summary.target, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(scanner.scanned.load(Ordering::SeqCst), 1000);
        let open: Vec<u16> = summary.open_ports.iter().map(|p| p.as_u16()).collect();
        assert_eq!(open, vec![22, 443, 900]);
    }

    #[tokio::test]
    async fn test_in_flight_cap_is_respected() {
        let scanner = Arc::new(FakeScanner::new(&[]));
        let options = ScanOptions::new().with_max_in_flight(4);

        let summary = scan_listeners(Arc::clone(&scanner), range(1, 500), &options).await;

        assert!(summary.open_ports.is_empty());
        assert!(scanner.peak.load(Ordering::SeqCst) <= 4);
    }

    #[tokio::test]
    async fn test_full_range_completes() {
        let scanner = Arc::new(FakeScanner::new(&[1, 65535]));
        let options = ScanOptions::new().with_max_in_flight(256);

        let summary = scan_listeners(Arc::clone(&scanner), PortRange::full(), &options).await;

        assert_eq!(summary.ports_scanned, 65535);
        assert_eq!(summary.ports_completed, 65535);
        assert_eq!(summary.tasks_failed, 0);
        assert_eq!(scanner.scanned.load(Ordering::SeqCst), 65535);
        assert_eq!(summary.open_ports.len(), 2);
    }

    /// Panics on one port, reports another as open.
    struct PanickyScanner {
        bad: u16,
        open: u16,
    }

    #[async_trait]
    impl Scanner for PanickyScanner {
        async fn scan_port(&self, port: Port) -> PortResult {
            if port.as_u16() == self.bad {
                panic!("scanner blew up on port {}", self.bad);
            }
            let status = if port.as_u16() == self.open {
                PortStatus::Open
            } else {
                PortStatus::Closed
            };
            PortResult::new(port, status)
        }

        fn target(&self) -> IpAddr {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }

    #[tokio::test]
    async fn test_failed_task_still_counts_toward_completion() {
        let scanner = Arc::new(PanickyScanner { bad: 10, open: 20 });
        let options = ScanOptions::new().with_max_in_flight(8).with_progress(true);

        let summary = scan_listeners(scanner, range(1, 50), &options).await;

        assert_eq!(summary.ports_completed, 50);
        assert_eq!(summary.tasks_failed, 1);
        assert_eq!(summary.open_ports, vec![Port::new(20).unwrap()]);
    }

    #[test]
    fn test_in_flight_for_limit() {
        assert_eq!(in_flight_for_limit(1024), 960);
        assert_eq!(in_flight_for_limit(10), MIN_IN_FLIGHT);
        assert_eq!(in_flight_for_limit(usize::MAX), MAX_IN_FLIGHT);
    }

    #[test]
    fn test_with_max_in_flight_never_zero() {
        assert_eq!(ScanOptions::new().with_max_in_flight(0).max_in_flight, 1);
    }
}
