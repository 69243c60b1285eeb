//! Listener scan against real loopback sockets.

use netdiag::scanner::{scan_listeners, ScanOptions, TcpConnectScanner};
use netdiag::types::{Port, PortRange};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tokio::net::TcpListener;

fn localhost_scanner() -> Arc<TcpConnectScanner> {
    Arc::new(TcpConnectScanner::new(IpAddr::V4(Ipv4Addr::LOCALHOST), None))
}

/// Tests in this file run in parallel, so each scan keeps a modest share
/// of the descriptor limit.
fn options() -> ScanOptions {
    ScanOptions::new().with_max_in_flight(128)
}

fn window_around(port: u16) -> PortRange {
    let start = Port::new(port.saturating_sub(20).max(1)).unwrap();
    let end = Port::new(port.saturating_add(20)).unwrap();
    PortRange::new(start, end).unwrap()
}

async fn bind_loopback() -> (TcpListener, Port) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = Port::new(listener.local_addr().unwrap().port()).unwrap();
    (listener, port)
}

#[tokio::test]
async fn reports_bound_listener_exactly_once() {
    let (_listener, port) = bind_loopback().await;

    let range = window_around(port.as_u16());
    let summary = scan_listeners(localhost_scanner(), range, &options()).await;

    assert_eq!(summary.open_ports.iter().filter(|&&p| p == port).count(), 1);
}

#[tokio::test]
async fn closed_port_is_not_reported() {
    let (listener, port) = bind_loopback().await;
    drop(listener);

    let range = PortRange::single(port);
    let summary = scan_listeners(localhost_scanner(), range, &options()).await;

    assert_eq!(summary.ports_scanned, 1);
    assert!(summary.open_ports.is_empty());
}

#[tokio::test]
async fn several_listeners_come_back_sorted() {
    let (_a, a) = bind_loopback().await;
    let (_b, b) = bind_loopback().await;
    let (_c, c) = bind_loopback().await;

    let mut expected = vec![a, b, c];
    expected.sort_unstable();
    let range = PortRange::new(expected[0], expected[2]).unwrap();

    let summary = scan_listeners(localhost_scanner(), range, &options()).await;

    let found: Vec<Port> = summary
        .open_ports
        .iter()
        .copied()
        .filter(|p| expected.contains(p))
        .collect();
    assert_eq!(found, expected);
    assert!(summary.open_ports.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn full_range_scan_terminates() {
    let (_listener, port) = bind_loopback().await;

    let range = PortRange::full();
    let summary = scan_listeners(localhost_scanner(), range, &options()).await;

    assert_eq!(summary.ports_scanned, 65535);
    assert_eq!(summary.open_ports.iter().filter(|&&p| p == port).count(), 1);
}
