//! Builders turning user intents into [`ClientEvent`]s.
//!
//! Inputs arrive already coerced by the UI. Nothing is validated here:
//! empty names, negative bids and unaffordable payments all go out as given.

use crate::{
    events::{Amount, BidPayload, ChallengePayload, ClientEvent, TurnResponse, UsernamePayload},
    payment::DenominationCounts,
};

pub fn username(name: impl Into<String>) -> ClientEvent {
    ClientEvent::Username(UsernamePayload {
        username: name.into(),
    })
}

pub fn turn_response(choice: TurnResponse) -> ClientEvent {
    ClientEvent::Response(choice)
}

pub fn bid(amount: Amount) -> ClientEvent {
    ClientEvent::Bid(BidPayload { amount })
}

/// The auctioneer buying the card at the winning price.
pub fn auctioneer_bid(amount: Amount) -> ClientEvent {
    ClientEvent::AuctioneerBid(BidPayload { amount })
}

pub fn challenge(player: impl Into<String>, card: impl Into<String>) -> ClientEvent {
    ClientEvent::Challenge(ChallengePayload {
        player: player.into(),
        card: card.into(),
    })
}

pub fn payment(counts: DenominationCounts) -> ClientEvent {
    ClientEvent::Payment(counts)
}
