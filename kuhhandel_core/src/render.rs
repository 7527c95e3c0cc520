use crate::{events::Amount, payment::DenominationCounts};

/// Where the session shows what happened.
pub trait RenderSink {
    /// Append one entry to the event feed. Entries are never removed.
    fn append_log_entry(&mut self, text: &str);

    fn set_current_bid_display(&mut self, amount: Amount);
}

/// Read access to the UI's input fields.
///
/// Values are already coerced: numeric fields that hold garbage read as `0`.
pub trait Controls {
    fn username(&self) -> String;
    fn bid_amount(&self) -> Amount;
    fn buyout_amount(&self) -> Amount;
    fn challenge_player(&self) -> String;
    fn challenge_card(&self) -> String;
    fn payment_counts(&self) -> DenominationCounts;
}

/// UI triggers the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SubmitUsername,
    AuctionButton,
    ChallengeButton,
    SubmitBid,
    BuyOut,
    SubmitChallenge,
    SubmitPayment,
}
