//! # Dispatch Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Passive kind routing | < 1µs |
//! | StaConnected with static re-announce | < 5µs |

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use netif_lifecycle::adapters::mock::{CallLog, MockNetworkAdapter, MockPublisher, MockWifiDriver};
use netif_lifecycle::{DispatchRegistry, EventDispatchApi, HandlerContext, LifecycleService};
use netif_types::{DhcpStatus, Event, EventKind, IpInfo, Role};
use std::net::Ipv4Addr;
use std::sync::Arc;

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch-routing");
    group.throughput(Throughput::Elements(1));

    let log = CallLog::new();
    let driver = MockWifiDriver::new(log.clone());
    let adapter = MockNetworkAdapter::new(log.clone());
    let registry = DispatchRegistry::new();
    let ctx = HandlerContext::new(&driver, &adapter);

    let passive = Event::scan_done(0, 8);
    group.bench_function("passive_kind", |b| {
        b.iter(|| black_box(registry.route(Some(black_box(&passive)), &ctx).is_ok()))
    });

    let stop = Event::new(EventKind::StaStop);
    group.bench_function("sta_stop", |b| {
        b.iter(|| {
            log.clear();
            black_box(registry.route(Some(black_box(&stop)), &ctx).is_ok())
        })
    });

    group.finish();
}

fn bench_static_reconnect(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch-static-reconnect");

    let log = CallLog::new();
    let ip_info = IpInfo::new(
        Ipv4Addr::new(192, 168, 1, 50),
        Ipv4Addr::new(255, 255, 255, 0),
        Ipv4Addr::new(192, 168, 1, 1),
    );
    let adapter = MockNetworkAdapter::new(log.clone())
        .with_ip_info(Role::Station, ip_info)
        .with_dhcp_status(Role::Station, DhcpStatus::Stopped);
    let service = LifecycleService::new(
        Arc::new(MockWifiDriver::new(log.clone())),
        Arc::new(adapter),
        Arc::new(MockPublisher::new()),
    );

    let connected = Event::new(EventKind::StaConnected);
    group.bench_function("route_sta_connected", |b| {
        b.iter(|| {
            log.clear();
            black_box(service.route(Some(black_box(&connected))).ok())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_routing, bench_static_reconnect);
criterion_main!(benches);
