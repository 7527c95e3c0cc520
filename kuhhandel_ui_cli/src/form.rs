use kuhhandel_core::{
    payment::{Denomination, DenominationCounts},
    Amount, Control, Controls,
};
use strum::IntoEnumIterator;

use crate::cli_command::CliCommand;

/// Input fields of the terminal UI.
///
/// Fields keep their raw text between commands, the way page inputs keep
/// their value between clicks. Numbers are coerced only when read.
#[derive(Debug, Default)]
pub struct Form {
    username: String,
    bid: String,
    buyout: String,
    challenge_player: String,
    challenge_card: String,
    payment: [String; 7],
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the values a command carries and return the trigger it fires.
    pub fn apply(&mut self, command: CliCommand) -> Option<Control> {
        match command {
            CliCommand::Quit | CliCommand::Help | CliCommand::Animals => None,
            CliCommand::Name(name) => {
                if let Some(name) = name {
                    self.username = name;
                }
                Some(Control::SubmitUsername)
            }
            CliCommand::Auction => Some(Control::AuctionButton),
            CliCommand::Challenge => Some(Control::ChallengeButton),
            CliCommand::Bid(amount) => {
                if let Some(amount) = amount {
                    self.bid = amount;
                }
                Some(Control::SubmitBid)
            }
            CliCommand::Buy(amount) => {
                if let Some(amount) = amount {
                    self.buyout = amount;
                }
                Some(Control::BuyOut)
            }
            CliCommand::Target(target) => {
                if let Some((player, card)) = target {
                    self.challenge_player = player;
                    self.challenge_card = card;
                }
                Some(Control::SubmitChallenge)
            }
            CliCommand::Pay(counts) => {
                if let Some(counts) = counts {
                    for (slot, count) in self.payment.iter_mut().zip(counts) {
                        *slot = count;
                    }
                }
                Some(Control::SubmitPayment)
            }
        }
    }
}

/// Numeric reading of an input field. Anything that is not a finite number
/// reads as zero.
pub fn coerce_amount(text: &str) -> Amount {
    match text.trim().parse::<Amount>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}

fn coerce_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

impl Controls for Form {
    fn username(&self) -> String {
        self.username.clone()
    }

    fn bid_amount(&self) -> Amount {
        coerce_amount(&self.bid)
    }

    fn buyout_amount(&self) -> Amount {
        coerce_amount(&self.buyout)
    }

    fn challenge_player(&self) -> String {
        self.challenge_player.clone()
    }

    fn challenge_card(&self) -> String {
        self.challenge_card.clone()
    }

    fn payment_counts(&self) -> DenominationCounts {
        Denomination::iter()
            .zip(self.payment.iter())
            .fold(DenominationCounts::new(), |counts, (denomination, text)| {
                counts.with(denomination, coerce_count(text))
            })
    }
}
