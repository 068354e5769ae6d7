//! # Event Topics and Filters
//!
//! Groups lifecycle events by the interface they concern so subscribers can
//! listen to one side of the dual-role subsystem only.

use netif_types::{Event, EventKind, Role};

/// Coarse grouping of events for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTopic {
    /// Driver-wide events (ready, scan results).
    System,
    /// Station interface events.
    Station,
    /// Access point interface events.
    AccessPoint,
    /// Wildcard: every topic.
    All,
}

impl EventTopic {
    /// Topic an event kind belongs to.
    #[must_use]
    pub fn of(kind: EventKind) -> Self {
        match kind.role() {
            Some(Role::Station) => EventTopic::Station,
            Some(Role::AccessPoint) => EventTopic::AccessPoint,
            None => EventTopic::System,
        }
    }
}

/// Subscription filter.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Individual kinds to include. Empty means all kinds.
    pub kinds: Vec<EventKind>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            kinds: Vec::new(),
        }
    }

    /// Create a filter for specific event kinds.
    #[must_use]
    pub fn kinds(kinds: Vec<EventKind>) -> Self {
        Self {
            topics: Vec::new(),
            kinds,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&EventTopic::of(event.kind));

        let kind_match = self.kinds.is_empty() || self.kinds.contains(&event.kind);

        topic_match && kind_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netif_types::IpInfo;

    #[test]
    fn test_event_topic_mapping() {
        assert_eq!(EventTopic::of(EventKind::ScanDone), EventTopic::System);
        assert_eq!(EventTopic::of(EventKind::StaGotIp), EventTopic::Station);
        assert_eq!(EventTopic::of(EventKind::ApStop), EventTopic::AccessPoint);
    }

    #[test]
    fn test_filter_all() {
        let filter = EventFilter::all();
        assert!(filter.matches(&Event::new(EventKind::WifiReady)));
        assert!(filter.matches(&Event::new(EventKind::ApStart)));
    }

    #[test]
    fn test_filter_by_topic() {
        let filter = EventFilter::topics(vec![EventTopic::Station]);
        assert!(filter.matches(&Event::sta_got_ip(IpInfo::UNSPECIFIED)));
        assert!(!filter.matches(&Event::new(EventKind::ApStart)));
    }

    #[test]
    fn test_filter_by_kind() {
        let filter = EventFilter::kinds(vec![EventKind::StaGotIp]);
        assert!(filter.matches(&Event::sta_got_ip(IpInfo::UNSPECIFIED)));
        assert!(!filter.matches(&Event::new(EventKind::StaConnected)));
    }

    #[test]
    fn test_wildcard_topic() {
        let filter = EventFilter::topics(vec![EventTopic::All]);
        assert!(filter.matches(&Event::new(EventKind::ScanDone)));
    }
}
