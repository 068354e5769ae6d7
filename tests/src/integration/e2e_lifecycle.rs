//! # End-to-End Lifecycle
//!
//! Drives a full device session through the `EventLoop`: the test plays the
//! WiFi driver (sending raw events on the bus) and the application (the user
//! handler), while the mocks play the radio and the IP stack.

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    use netif_bus::{EventPublisher, InMemoryEventBus};
    use netif_lifecycle::adapters::mock::{Call, CallLog, MockNetworkAdapter, MockWifiDriver};
    use netif_lifecycle::{EventLoop, EventLoopConfig, LifecycleService, Operation, UserHandler};
    use netif_telemetry::{init_telemetry, TelemetryConfig};
    use netif_types::{DhcpStatus, Event, EventKind, IpInfo, MacAddress, Role};

    type BusService = LifecycleService<MockWifiDriver, MockNetworkAdapter, InMemoryEventBus>;

    struct Harness {
        log: CallLog,
        event_loop: Arc<EventLoop<BusService>>,
        delivered: mpsc::UnboundedReceiver<Event>,
        task: JoinHandle<()>,
    }

    impl Harness {
        fn start() -> Self {
            let _ = init_telemetry(TelemetryConfig::default());

            let log = CallLog::new();
            let bus = EventLoopConfig::default().build_bus();
            let driver = Arc::new(MockWifiDriver::new(log.clone()));
            let adapter = Arc::new(MockNetworkAdapter::new(log.clone()));
            let service = Arc::new(LifecycleService::new(driver, adapter, Arc::clone(&bus)));
            let event_loop = Arc::new(EventLoop::new(bus, service));

            let (tx, delivered) = mpsc::unbounded_channel();
            let handler: UserHandler = Arc::new(move |event: &Event| -> anyhow::Result<()> {
                tx.send(*event)?;
                Ok(())
            });
            event_loop.set_user_handler(handler);

            let subscription = event_loop.subscribe();
            let runner = Arc::clone(&event_loop);
            let task = tokio::spawn(async move { runner.run(subscription).await });

            Self {
                log,
                event_loop,
                delivered,
                task,
            }
        }

        fn driver(&self) -> &MockWifiDriver {
            self.event_loop.service().driver()
        }

        fn adapter(&self) -> &MockNetworkAdapter {
            self.event_loop.service().adapter()
        }

        fn send(&self, event: Event) {
            self.event_loop.bus().send(event).expect("loop subscribed");
        }

        async fn next(&mut self) -> Event {
            timeout(Duration::from_secs(1), self.delivered.recv())
                .await
                .expect("event delivered in time")
                .expect("handler alive")
        }

        /// Send one event and wait until the application has seen it.
        async fn step(&mut self, event: Event) {
            self.send(event);
            assert_eq!(self.next().await, event);
        }

        async fn assert_quiet(&mut self) {
            assert!(timeout(Duration::from_millis(50), self.delivered.recv())
                .await
                .is_err());
        }

        async fn stop(self) {
            self.event_loop.shutdown();
            timeout(Duration::from_secs(1), self.task)
                .await
                .expect("loop stopped")
                .expect("loop task");
        }
    }

    fn lease() -> IpInfo {
        IpInfo::new(
            Ipv4Addr::new(10, 0, 0, 23),
            Ipv4Addr::new(255, 255, 255, 0),
            Ipv4Addr::new(10, 0, 0, 1),
        )
    }

    #[tokio::test]
    async fn test_station_session_with_dhcp_then_static_reconnect() {
        let mut h = Harness::start();

        h.step(Event::new(EventKind::StaStart)).await;
        assert!(h.adapter().is_started(Role::Station));

        h.step(Event::new(EventKind::StaConnected)).await;
        assert!(h.adapter().is_up(Role::Station));
        assert_eq!(h.log.count_operation(Operation::DhcpStart), 1);

        // The adapter's DHCP client got a lease and announced it.
        h.adapter().set_ip_info(Role::Station, lease());
        h.step(Event::sta_got_ip(lease())).await;
        assert_eq!(h.driver().station_ip(), Some(lease()));

        assert!(h.driver().deliver(Role::Station, b"arp"));
        h.step(Event::new(EventKind::StaDisconnected)).await;
        assert!(!h.driver().deliver(Role::Station, b"late"));
        assert!(!h.adapter().is_up(Role::Station));

        // The lease is retained as a static address; DHCP is idle.
        h.adapter().set_dhcp_status(Role::Station, DhcpStatus::Stopped);
        h.log.clear();
        h.step(Event::new(EventKind::StaConnected)).await;
        assert_eq!(h.next().await, Event::sta_got_ip(lease()));
        h.assert_quiet().await;

        assert_eq!(
            h.log.calls(),
            vec![
                Call::RegisterReceiveCallback {
                    role: Role::Station,
                    installed: true,
                },
                Call::Up(Role::Station),
                Call::DhcpStatus(Role::Station),
                Call::GetIpInfo(Role::Station),
                Call::NotifyStationIp(lease()),
            ]
        );
        assert_eq!(
            h.adapter().received_frames(),
            vec![(Role::Station, b"arp".to_vec())]
        );

        h.stop().await;
    }

    #[tokio::test]
    async fn test_access_point_session() {
        let mut h = Harness::start();
        let client = MacAddress::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x09]);

        h.step(Event::new(EventKind::ApStart)).await;
        assert!(h.adapter().is_started(Role::AccessPoint));

        h.step(Event::ap_sta_connected(client, 1)).await;
        assert!(h.driver().deliver(Role::AccessPoint, b"dhcp-discover"));
        h.step(Event::ap_probe_request(-48, client)).await;
        h.step(Event::ap_sta_disconnected(client, 1)).await;

        h.step(Event::new(EventKind::ApStop)).await;
        assert!(!h.adapter().is_started(Role::AccessPoint));
        assert!(!h.driver().has_receive_callback(Role::AccessPoint));

        assert!(h.log.calls().iter().all(|c| c.role() == Some(Role::AccessPoint)));
        assert_eq!(
            h.adapter().received_frames(),
            vec![(Role::AccessPoint, b"dhcp-discover".to_vec())]
        );

        h.stop().await;
    }

    #[tokio::test]
    async fn test_both_roles_run_side_by_side() {
        let mut h = Harness::start();

        h.step(Event::new(EventKind::ApStart)).await;
        h.step(Event::new(EventKind::StaStart)).await;
        h.step(Event::new(EventKind::StaConnected)).await;

        assert!(h.driver().deliver(Role::AccessPoint, b"to-ap"));
        assert!(h.driver().deliver(Role::Station, b"to-sta"));

        h.step(Event::new(EventKind::StaStop)).await;
        assert!(h.adapter().is_started(Role::AccessPoint));
        assert!(!h.adapter().is_started(Role::Station));

        let start_macs: Vec<MacAddress> = h
            .log
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Start { mac, .. } => Some(mac),
                _ => None,
            })
            .collect();
        assert_eq!(
            start_macs,
            vec![MockWifiDriver::ACCESS_POINT_MAC, MockWifiDriver::STATION_MAC]
        );

        h.stop().await;
    }

    #[tokio::test]
    async fn test_application_sees_events_whose_handler_failed() {
        let mut h = Harness::start();
        h.adapter().fail_on(Operation::Up, -1);

        h.step(Event::new(EventKind::StaConnected)).await;

        // Receive path stays registered; the link never came up.
        assert!(h.driver().has_receive_callback(Role::Station));
        assert!(!h.adapter().is_up(Role::Station));
        assert!(!h.log.contains_operation(Operation::DhcpStatus));

        // The loop keeps delivering after a failure.
        h.step(Event::new(EventKind::WifiReady)).await;

        h.stop().await;
    }

    #[tokio::test]
    async fn test_loop_drains_until_shutdown() {
        let mut h = Harness::start();

        for _ in 0..10 {
            h.send(Event::new(EventKind::ScanDone));
        }
        for _ in 0..10 {
            assert_eq!(h.next().await.kind, EventKind::ScanDone);
        }
        assert!(h.log.is_empty());

        h.stop().await;
    }
}
