//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use gauntlet_core::BattleEvent;

use super::types::{CampaignEvent, SessionEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Per-action encounter changes (hp, log lines, phase)
    Battle,
    /// Campaign offers, results and summaries
    Campaign,
    /// Selection changes and rejections
    Session,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Battle(BattleEvent),
    Campaign(CampaignEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Battle(_) => Topic::Battle,
            Event::Campaign(_) => Topic::Campaign,
            Event::Session(_) => Topic::Session,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Cloning shares the underlying channels.
#[derive(Clone)]
pub struct EventBus {
    battle: broadcast::Sender<Event>,
    campaign: broadcast::Sender<Event>,
    session: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            battle: broadcast::channel(capacity).0,
            campaign: broadcast::channel(capacity).0,
            session: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Battle => &self.battle,
            Topic::Campaign => &self.campaign,
            Topic::Session => &self.session,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauntlet_core::BattlePhase;

    #[test]
    fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut battle = bus.subscribe(Topic::Battle);
        let mut session = bus.subscribe(Topic::Session);

        bus.publish(Event::Battle(BattleEvent::PhaseChanged {
            from: BattlePhase::PlayerTurn,
            to: BattlePhase::EnemyTurn,
        }));

        assert!(matches!(battle.try_recv(), Ok(Event::Battle(_))));
        assert!(session.try_recv().is_err());
    }

    #[test]
    fn multiple_subscriptions_keep_topics_apart() {
        let bus = EventBus::new();
        let mut receivers = bus.subscribe_multiple(&[Topic::Campaign, Topic::Session]);

        bus.publish(Event::Session(SessionEvent::JobsSkipped { jobs: vec![] }));

        let (topic, campaign) = &mut receivers[0];
        assert_eq!(*topic, Topic::Campaign);
        assert!(campaign.try_recv().is_err());
        let (_, session) = &mut receivers[1];
        assert!(matches!(session.try_recv(), Ok(Event::Session(_))));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Session(SessionEvent::SelectionChanged { jobs: vec![] }));
    }
}
