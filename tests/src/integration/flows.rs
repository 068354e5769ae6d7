//! # Integration Test Flows
//!
//! The lifecycle service wired to a real `InMemoryEventBus`, with the bus
//! subscriptions standing in for the delivery layer.
//!
//! ## Flows Tested:
//!
//! 1. **Static IP reconnect**: StaConnected derives StaGotIp onto the bus
//! 2. **DHCP connect**: StaConnected starts the client and derives nothing
//! 3. **Filtered delivery**: station subscribers never see AP events

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    use netif_bus::{EventFilter, EventPublisher, EventTopic, InMemoryEventBus};
    use netif_lifecycle::adapters::mock::{Call, CallLog, MockNetworkAdapter, MockWifiDriver};
    use netif_lifecycle::{
        DispatchError, EventDispatchApi, InvalidEvent, LifecycleService, NetworkAdapter,
        Operation,
    };
    use netif_types::{DhcpStatus, Event, EventKind, IpInfo, Role};

    type BusService = LifecycleService<MockWifiDriver, MockNetworkAdapter, InMemoryEventBus>;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn static_ip() -> IpInfo {
        IpInfo::new(
            Ipv4Addr::new(192, 168, 1, 50),
            Ipv4Addr::new(255, 255, 255, 0),
            Ipv4Addr::new(192, 168, 1, 1),
        )
    }

    fn create_service(
        bus: &Arc<InMemoryEventBus>,
        ip_info: IpInfo,
        status: DhcpStatus,
    ) -> (CallLog, BusService) {
        let log = CallLog::new();
        let driver = Arc::new(MockWifiDriver::new(log.clone()));
        let adapter = Arc::new(
            MockNetworkAdapter::new(log.clone())
                .with_ip_info(Role::Station, ip_info)
                .with_dhcp_status(Role::Station, status),
        );
        (log, LifecycleService::new(driver, adapter, Arc::clone(bus)))
    }

    // =============================================================================
    // STATION FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_static_ip_reconnect_reaches_bus_once() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let (log, service) = create_service(&bus, static_ip(), DhcpStatus::Stopped);

        service
            .process(Some(&Event::new(EventKind::StaConnected)))
            .unwrap();

        let derived = timeout(Duration::from_secs(1), sub.recv())
            .await
            .expect("derived event")
            .expect("bus open");
        assert_eq!(derived, Event::sta_got_ip(static_ip()));

        // Deliver it as the loop would; nothing further is derived.
        service.process(Some(&derived)).unwrap();
        assert!(sub.try_recv().unwrap().is_none());

        assert_eq!(
            log.calls(),
            vec![
                Call::RegisterReceiveCallback {
                    role: Role::Station,
                    installed: true,
                },
                Call::Up(Role::Station),
                Call::DhcpStatus(Role::Station),
                Call::GetIpInfo(Role::Station),
                Call::NotifyStationIp(static_ip()),
            ]
        );
        assert_eq!(bus.events_published(), 1);
    }

    #[tokio::test]
    async fn test_dhcp_connect_derives_nothing() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let (log, service) = create_service(&bus, IpInfo::UNSPECIFIED, DhcpStatus::Init);

        service
            .process(Some(&Event::new(EventKind::StaConnected)))
            .unwrap();

        assert!(sub.try_recv().unwrap().is_none());
        assert_eq!(log.count_operation(Operation::DhcpStart), 1);
        assert_eq!(service.adapter().dhcp_status(Role::Station).unwrap(), DhcpStatus::Started);
    }

    #[tokio::test]
    async fn test_invalid_static_ip_publishes_nothing() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut sub = bus.subscribe(EventFilter::all());
        let ip_info = IpInfo {
            gateway: Ipv4Addr::UNSPECIFIED,
            ..static_ip()
        };
        let (_log, service) = create_service(&bus, ip_info, DhcpStatus::Stopped);

        service
            .process(Some(&Event::new(EventKind::StaConnected)))
            .unwrap();

        assert!(sub.try_recv().unwrap().is_none());
        assert_eq!(bus.events_published(), 0);
    }

    #[tokio::test]
    async fn test_derived_event_without_subscribers_is_dropped() {
        let bus = Arc::new(InMemoryEventBus::new());
        let (log, service) = create_service(&bus, static_ip(), DhcpStatus::Stopped);

        let result = service.process(Some(&Event::new(EventKind::StaConnected)));

        assert!(result.is_ok());
        assert_eq!(bus.events_published(), 1);
        assert!(service.driver().has_receive_callback(Role::Station));
        assert_eq!(log.len(), 4);
    }

    /// Decode a raw driver ordinal and hand the event to the service.
    fn process_raw(service: &BusService, raw: u32) -> Result<(), DispatchError> {
        let event = EventKind::try_from(raw).map(Event::new)?;
        service.process(Some(&event))
    }

    #[tokio::test]
    async fn test_unknown_ordinal_rejected_before_dispatch() {
        let bus = Arc::new(InMemoryEventBus::new());
        let _sub = bus.subscribe(EventFilter::all());
        let (log, service) = create_service(&bus, static_ip(), DhcpStatus::Stopped);

        let err = process_raw(&service, 99).unwrap_err();

        assert_eq!(err, DispatchError::InvalidEvent(InvalidEvent::UnknownKind(99)));
        assert!(log.is_empty());
        assert_eq!(bus.events_published(), 0);

        // A known ordinal takes the same path and reaches the handler.
        process_raw(&service, EventKind::StaConnected.ordinal() as u32).unwrap();
        assert_eq!(log.len(), 4);
        assert_eq!(bus.events_published(), 1);
    }

    // =============================================================================
    // TOPIC FILTERING
    // =============================================================================

    #[tokio::test]
    async fn test_station_stream_skips_access_point_events() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut stream = bus.event_stream(EventFilter::topics(vec![EventTopic::Station]));

        bus.send(Event::new(EventKind::ApStart)).unwrap();
        bus.send(Event::new(EventKind::StaStart)).unwrap();

        let first = timeout(Duration::from_secs(1), stream.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.kind, EventKind::StaStart);
    }
}
