//! Mock collaborators.
//!
//! The driver and adapter mocks share one [`CallLog`], so tests can assert
//! the exact interleaving of calls a handler makes across both.

use crate::error::{CollaboratorError, Operation};
use crate::ports::outbound::{NetworkAdapter, ReceiveCallback, WifiDriver};
use netif_bus::{BusError, EventPublisher};
use netif_types::{DhcpStatus, Event, IpInfo, MacAddress, Role};
use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetMac(Role),
    RegisterReceiveCallback { role: Role, installed: bool },
    NotifyStationIp(IpInfo),
    GetIpInfo(Role),
    Start { role: Role, mac: MacAddress, ip_info: IpInfo },
    Stop(Role),
    Up(Role),
    Down(Role),
    DhcpStatus(Role),
    DhcpStart(Role),
}

impl Call {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Call::GetMac(_) => Operation::GetMac,
            Call::RegisterReceiveCallback { .. } => Operation::RegisterReceiveCallback,
            Call::NotifyStationIp(_) => Operation::NotifyStationIp,
            Call::GetIpInfo(_) => Operation::GetIpInfo,
            Call::Start { .. } => Operation::Start,
            Call::Stop(_) => Operation::Stop,
            Call::Up(_) => Operation::Up,
            Call::Down(_) => Operation::Down,
            Call::DhcpStatus(_) => Operation::DhcpStatus,
            Call::DhcpStart(_) => Operation::DhcpStart,
        }
    }

    /// Interface the call acted on; `None` for the station-IP notification,
    /// which is driver-global.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Call::GetMac(role)
            | Call::GetIpInfo(role)
            | Call::Stop(role)
            | Call::Up(role)
            | Call::Down(role)
            | Call::DhcpStatus(role)
            | Call::DhcpStart(role) => Some(*role),
            Call::RegisterReceiveCallback { role, .. } | Call::Start { role, .. } => Some(*role),
            Call::NotifyStationIp(_) => None,
        }
    }
}

/// Ordered, shared record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    /// Snapshot of all calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// Index of the first call equal to `call`.
    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.lock().iter().position(|c| c == call)
    }

    pub fn contains_operation(&self, operation: Operation) -> bool {
        self.calls.lock().iter().any(|c| c.operation() == operation)
    }

    pub fn count_operation(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }
}

/// Recording [`WifiDriver`].
///
/// Every call is logged before any configured failure is returned.
pub struct MockWifiDriver {
    log: CallLog,
    macs: RwLock<HashMap<Role, MacAddress>>,
    failures: RwLock<HashMap<Operation, i32>>,
    callbacks: RwLock<HashMap<Role, ReceiveCallback>>,
    station_ip: RwLock<Option<IpInfo>>,
}

impl MockWifiDriver {
    /// Station MAC used unless overridden.
    pub const STATION_MAC: MacAddress = MacAddress::new([0x24, 0x0a, 0xc4, 0x00, 0x00, 0x01]);
    /// Access point MAC used unless overridden.
    pub const ACCESS_POINT_MAC: MacAddress =
        MacAddress::new([0x24, 0x0a, 0xc4, 0x00, 0x00, 0x02]);

    pub fn new(log: CallLog) -> Self {
        let macs = HashMap::from([
            (Role::Station, Self::STATION_MAC),
            (Role::AccessPoint, Self::ACCESS_POINT_MAC),
        ]);
        Self {
            log,
            macs: RwLock::new(macs),
            failures: RwLock::new(HashMap::new()),
            callbacks: RwLock::new(HashMap::new()),
            station_ip: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn with_mac(self, role: Role, mac: MacAddress) -> Self {
        self.set_mac(role, mac);
        self
    }

    pub fn set_mac(&self, role: Role, mac: MacAddress) {
        self.macs.write().insert(role, mac);
    }

    /// Make every later call of `operation` fail with `code`.
    pub fn fail_on(&self, operation: Operation, code: i32) {
        self.failures.write().insert(operation, code);
    }

    pub fn clear_failures(&self) {
        self.failures.write().clear();
    }

    pub fn has_receive_callback(&self, role: Role) -> bool {
        self.callbacks.read().contains_key(&role)
    }

    /// Last address passed to `notify_station_ip`.
    pub fn station_ip(&self) -> Option<IpInfo> {
        *self.station_ip.read()
    }

    /// Hand a frame to the installed receive callback, as the radio would.
    ///
    /// Returns false when no callback is installed for `role`.
    pub fn deliver(&self, role: Role, frame: &[u8]) -> bool {
        let callback = self.callbacks.read().get(&role).cloned();
        match callback {
            Some(callback) => {
                callback(frame);
                true
            }
            None => false,
        }
    }

    fn checked(&self, call: Call) -> Result<(), CollaboratorError> {
        let operation = call.operation();
        self.log.record(call);
        match self.failures.read().get(&operation) {
            Some(code) => Err(CollaboratorError::Driver { code: *code }),
            None => Ok(()),
        }
    }
}

impl WifiDriver for MockWifiDriver {
    fn get_mac(&self, role: Role) -> Result<MacAddress, CollaboratorError> {
        self.checked(Call::GetMac(role))?;
        Ok(self.macs.read().get(&role).copied().unwrap_or_default())
    }

    fn register_receive_callback(
        &self,
        role: Role,
        callback: Option<ReceiveCallback>,
    ) -> Result<(), CollaboratorError> {
        self.checked(Call::RegisterReceiveCallback {
            role,
            installed: callback.is_some(),
        })?;
        let mut callbacks = self.callbacks.write();
        match callback {
            Some(callback) => {
                callbacks.insert(role, callback);
            }
            None => {
                callbacks.remove(&role);
            }
        }
        Ok(())
    }

    fn notify_station_ip(&self, ip_info: &IpInfo) -> Result<(), CollaboratorError> {
        self.checked(Call::NotifyStationIp(*ip_info))?;
        *self.station_ip.write() = Some(*ip_info);
        Ok(())
    }
}

/// Recording [`NetworkAdapter`].
///
/// Starts with unspecified IP configuration and a fresh (`Init`) DHCP client
/// on both interfaces. `dhcp_start` moves the client to `Started`.
pub struct MockNetworkAdapter {
    log: CallLog,
    ip_info: RwLock<HashMap<Role, IpInfo>>,
    dhcp: RwLock<HashMap<Role, DhcpStatus>>,
    failures: RwLock<HashMap<Operation, i32>>,
    started: RwLock<HashSet<Role>>,
    link_up: RwLock<HashSet<Role>>,
    frames: Arc<Mutex<Vec<(Role, Vec<u8>)>>>,
}

impl MockNetworkAdapter {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ip_info: RwLock::new(HashMap::new()),
            dhcp: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashMap::new()),
            started: RwLock::new(HashSet::new()),
            link_up: RwLock::new(HashSet::new()),
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_ip_info(self, role: Role, ip_info: IpInfo) -> Self {
        self.set_ip_info(role, ip_info);
        self
    }

    #[must_use]
    pub fn with_dhcp_status(self, role: Role, status: DhcpStatus) -> Self {
        self.set_dhcp_status(role, status);
        self
    }

    pub fn set_ip_info(&self, role: Role, ip_info: IpInfo) {
        self.ip_info.write().insert(role, ip_info);
    }

    pub fn set_dhcp_status(&self, role: Role, status: DhcpStatus) {
        self.dhcp.write().insert(role, status);
    }

    /// Make every later call of `operation` fail with `code`.
    pub fn fail_on(&self, operation: Operation, code: i32) {
        self.failures.write().insert(operation, code);
    }

    pub fn clear_failures(&self) {
        self.failures.write().clear();
    }

    pub fn is_started(&self, role: Role) -> bool {
        self.started.read().contains(&role)
    }

    pub fn is_up(&self, role: Role) -> bool {
        self.link_up.read().contains(&role)
    }

    /// Frames that reached the input callbacks, in arrival order.
    pub fn received_frames(&self) -> Vec<(Role, Vec<u8>)> {
        self.frames.lock().clone()
    }

    fn checked(&self, call: Call) -> Result<(), CollaboratorError> {
        let operation = call.operation();
        self.log.record(call);
        match self.failures.read().get(&operation) {
            Some(code) => Err(CollaboratorError::Adapter { code: *code }),
            None => Ok(()),
        }
    }
}

impl NetworkAdapter for MockNetworkAdapter {
    fn get_ip_info(&self, role: Role) -> Result<IpInfo, CollaboratorError> {
        self.checked(Call::GetIpInfo(role))?;
        Ok(self.ip_info.read().get(&role).copied().unwrap_or_default())
    }

    fn start(
        &self,
        role: Role,
        mac: MacAddress,
        ip_info: &IpInfo,
    ) -> Result<(), CollaboratorError> {
        self.checked(Call::Start {
            role,
            mac,
            ip_info: *ip_info,
        })?;
        self.started.write().insert(role);
        Ok(())
    }

    fn stop(&self, role: Role) -> Result<(), CollaboratorError> {
        self.checked(Call::Stop(role))?;
        self.started.write().remove(&role);
        self.link_up.write().remove(&role);
        Ok(())
    }

    fn up(&self, role: Role) -> Result<(), CollaboratorError> {
        self.checked(Call::Up(role))?;
        self.link_up.write().insert(role);
        Ok(())
    }

    fn down(&self, role: Role) -> Result<(), CollaboratorError> {
        self.checked(Call::Down(role))?;
        self.link_up.write().remove(&role);
        Ok(())
    }

    fn dhcp_status(&self, role: Role) -> Result<DhcpStatus, CollaboratorError> {
        self.checked(Call::DhcpStatus(role))?;
        Ok(self
            .dhcp
            .read()
            .get(&role)
            .copied()
            .unwrap_or(DhcpStatus::Init))
    }

    fn dhcp_start(&self, role: Role) -> Result<(), CollaboratorError> {
        self.checked(Call::DhcpStart(role))?;
        self.dhcp.write().insert(role, DhcpStatus::Started);
        Ok(())
    }

    fn input_callback(&self, role: Role) -> ReceiveCallback {
        let frames = Arc::clone(&self.frames);
        Arc::new(move |frame: &[u8]| frames.lock().push((role, frame.to_vec())))
    }
}

/// Recording [`EventPublisher`].
#[derive(Default)]
pub struct MockPublisher {
    sent: Mutex<Vec<Event>>,
    failure: Mutex<Option<BusError>>,
    attempts: Mutex<u64>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later send fail with `error`.
    pub fn fail_with(&self, error: BusError) {
        *self.failure.lock() = Some(error);
    }

    /// Events accepted so far.
    pub fn sent(&self) -> Vec<Event> {
        self.sent.lock().clone()
    }
}

impl EventPublisher for MockPublisher {
    fn send(&self, event: Event) -> Result<(), BusError> {
        *self.attempts.lock() += 1;
        if let Some(error) = *self.failure.lock() {
            return Err(error);
        }
        self.sent.lock().push(event);
        Ok(())
    }

    fn events_published(&self) -> u64 {
        *self.attempts.lock()
    }
}
