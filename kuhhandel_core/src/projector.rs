//! Applies inbound frames to client side derived state.
//!
//! Every frame is rendered as-is before anything else happens, so even text
//! the client cannot decode shows up in the feed. Only a successfully decoded
//! `bid` event moves the current bid.

use crate::{
    error::Result,
    events::{Amount, BidUpdate, ServerEvent},
    render::RenderSink,
};
use log::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum CurrentBid {
    #[default]
    Unset,
    Set(Amount),
}

impl CurrentBid {
    pub fn apply(&mut self, amount: Amount) {
        *self = CurrentBid::Set(amount);
    }

    pub fn amount(&self) -> Option<Amount> {
        match self {
            CurrentBid::Unset => None,
            CurrentBid::Set(amount) => Some(*amount),
        }
    }
}

#[derive(Debug, Default)]
pub struct Projector {
    current_bid: CurrentBid,
    bid_holder: Option<String>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_bid(&self) -> CurrentBid {
        self.current_bid
    }

    /// Player holding the current bid, if the server named one.
    pub fn bid_holder(&self) -> Option<&str> {
        self.bid_holder.as_deref()
    }

    pub fn on_message<S: RenderSink>(&mut self, raw: &str, sink: &mut S) -> Result<ServerEvent> {
        sink.append_log_entry(raw);

        let event = ServerEvent::decode(raw)?;
        if let ServerEvent::Bid(update) = &event {
            self.apply_bid(update, sink);
        }
        Ok(event)
    }

    fn apply_bid<S: RenderSink>(&mut self, update: &BidUpdate, sink: &mut S) {
        debug!("current bid {:?} -> {}", self.current_bid, update.bid);
        self.current_bid.apply(update.bid);
        self.bid_holder = update.player.clone();
        sink.set_current_bid_display(update.bid);
    }
}
