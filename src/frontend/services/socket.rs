//! Realtime connection scope.
//!
//! The link is up while someone is signed in. Everything published on it is
//! fanned out to subscribers, one of which feeds the [`EventFeed`].

use crate::frontend::services::context::{SessionOracle, SessionState};
use crate::frontend::services::events::{DomainEvent, EventFeed};
use dioxus::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Disconnected,
    Connected,
}

impl LinkStatus {
    /// The link is up exactly while someone is signed in.
    pub fn for_session(session: &impl SessionOracle) -> Self {
        if session.is_authenticated() {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

/// Broadcast channel that only carries messages while connected.
#[derive(Debug, Clone)]
pub struct Channel {
    sender: broadcast::Sender<DomainEvent>,
    connected: Arc<AtomicBool>,
}

impl Channel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            connected: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }

    /// Connects or disconnects to match `session`.
    pub fn follow_session(&self, session: &impl SessionOracle) -> LinkStatus {
        let status = LinkStatus::for_session(session);
        self.set_connected(status == LinkStatus::Connected);
        status
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Sends `event` to every subscriber. Returns false when it was dropped.
    pub fn publish(&self, event: DomainEvent) -> bool {
        if !self.is_connected() {
            log::debug!("Link down, dropping event from {}", event.source);
            return false;
        }
        // No subscribers is fine
        let _ = self.sender.send(event);
        true
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    pub fn subscribers(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Realtime-connection scope.
#[derive(Clone)]
pub struct RealtimeLink {
    pub status: Signal<LinkStatus>,
    channel: Channel,
}

impl RealtimeLink {
    pub fn new(capacity: usize) -> Self {
        Self {
            status: Signal::new(LinkStatus::Disconnected),
            channel: Channel::new(capacity),
        }
    }

    pub fn status(&self) -> LinkStatus {
        *self.status.read()
    }

    /// Connects while `session` is signed in, disconnects otherwise.
    pub fn follow_session(&mut self, session: &impl SessionOracle) {
        let status = self.channel.follow_session(session);
        if *self.status.peek() != status {
            log::info!("Realtime link {status:?}");
            self.status.set(status);
        }
    }

    pub fn publish(&self, event: DomainEvent) -> bool {
        self.channel.publish(event)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.channel.subscribe()
    }

    pub fn subscribers(&self) -> usize {
        self.channel.subscribers()
    }
}

/// Hands every received event to `sink` until the channel closes.
pub async fn forward_events(
    mut receiver: broadcast::Receiver<DomainEvent>,
    mut sink: impl FnMut(DomainEvent),
) {
    loop {
        match receiver.recv().await {
            Ok(event) => sink(event),
            Err(RecvError::Lagged(skipped)) => {
                log::warn!("Event feed lagged, skipped {skipped} events");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Provides [`RealtimeLink`] and keeps it in step with the session.
#[component]
pub fn SocketScope(children: Element) -> Element {
    let session = use_context::<SessionState>();
    let feed = use_context::<EventFeed>();
    let link = use_context_provider(|| RealtimeLink::new(CHANNEL_CAPACITY));

    use_hook({
        let link = link.clone();
        move || {
            let receiver = link.subscribe();
            let mut feed = feed;
            spawn(forward_events(receiver, move |event| {
                feed.record(event);
            }));
        }
    });

    let mut link = link;
    use_effect(move || link.follow_session(&session));

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::events::{EventLevel, EventLog};

    struct Session(bool);

    impl SessionOracle for Session {
        fn is_authenticated(&self) -> bool {
            self.0
        }
    }

    #[tokio::test]
    async fn signed_in_events_reach_the_feed() {
        let channel = Channel::new(8);
        let receiver = channel.subscribe();

        assert_eq!(channel.follow_session(&Session(true)), LinkStatus::Connected);
        assert!(channel.publish(DomainEvent::new(EventLevel::Warning, "billing", "slow")));

        assert_eq!(channel.follow_session(&Session(false)), LinkStatus::Disconnected);
        assert!(!channel.publish(DomainEvent::new(EventLevel::Info, "billing", "dropped")));

        drop(channel);
        let mut log = EventLog::default();
        forward_events(receiver, |event| {
            log.push(event);
        })
        .await;

        let messages: Vec<&str> = log.newest().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["slow"]);
        assert_eq!(log.count(EventLevel::Warning), 1);
    }

    #[tokio::test]
    async fn signing_back_in_reconnects() {
        let channel = Channel::new(8);
        let receiver = channel.subscribe();

        for signed_in in [true, false, true] {
            channel.follow_session(&Session(signed_in));
            channel.publish(DomainEvent::new(EventLevel::Info, "auth", format!("{signed_in}")));
        }

        drop(channel);
        let mut received = Vec::new();
        forward_events(receiver, |event| received.push(event.message)).await;
        assert_eq!(received, vec!["true", "true"]);
    }

    #[test]
    fn status_follows_session() {
        assert_eq!(LinkStatus::for_session(&Session(true)), LinkStatus::Connected);
        assert_eq!(LinkStatus::for_session(&Session(false)), LinkStatus::Disconnected);
    }

    #[test]
    fn publish_is_dropped_while_disconnected() {
        let channel = Channel::new(8);
        let mut receiver = channel.subscribe();

        assert!(!channel.publish(DomainEvent::new(EventLevel::Info, "test", "ignored")));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn subscribers_receive_while_connected() {
        let channel = Channel::new(8);
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();
        channel.set_connected(true);

        assert!(channel.publish(DomainEvent::new(EventLevel::Warning, "test", "hello")));
        assert_eq!(first.try_recv().unwrap().message, "hello");
        assert_eq!(second.try_recv().unwrap().source, "test");
        assert_eq!(channel.subscribers(), 2);
    }

    #[test]
    fn clones_share_connection_state() {
        let channel = Channel::new(8);
        let clone = channel.clone();
        clone.set_connected(true);
        assert!(channel.is_connected());
    }
}
