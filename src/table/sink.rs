//! Fire-and-forget output.

use tokio::sync::mpsc;
use tracing::debug;

use crate::cards::Card;
use crate::core::ParticipantId;
use crate::game::GameEvent;

/// Something the table wants shown.
#[derive(Clone, Debug, PartialEq)]
pub enum Outbound {
    /// A public announcement, with the event it describes.
    Event { text: String, event: GameEvent },
    /// A private view of one participant's hand.
    Hand { to: ParticipantId, cards: Vec<Card> },
    /// A private rejection of something the participant tried.
    Rejected { to: ParticipantId, reason: String },
    /// Current participants in turn order.
    Roster { names: Vec<String> },
}

/// Where table output goes. Sending never fails from the table's side.
pub trait OutputSink: Send {
    fn send(&self, out: Outbound);
}

/// Sink backed by an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl ChannelSink {
    /// A sink and the receiver that drains it.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl OutputSink for ChannelSink {
    fn send(&self, out: Outbound) {
        if self.tx.send(out).is_err() {
            debug!("output receiver dropped");
        }
    }
}
