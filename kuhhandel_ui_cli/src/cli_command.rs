use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

pub static HELP: &str = "
*** Kuh Handel ***
Commands (fields you leave out keep their last value):
- [name <username>]                  send your username
- [auction] / [challenge]            answer the turn prompt
- [bid <amount>]                     bid in the running auction
- [buy <amount>]                     buy the card as auctioneer at the winning price
- [target <player> <card>]           challenge a player for an animal
- [pay <0> <10> <20> <50> <100> <200> <500>]
                                     pay with this many cards of each value
- [animals]                          list the animal cards
- [help]                             show this text
- [quit]                             leave the game";

#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Quit,
    Help,
    Animals,
    Name(Option<String>),
    Auction,
    Challenge,
    Bid(Option<String>),
    Buy(Option<String>),
    Target(Option<(String, String)>),
    Pay(Option<Vec<String>>),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("no command given")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` takes {1}")]
    Arguments(&'static str, &'static str),
}

impl FromStr for CliCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(cmd) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let args = words.map(str::to_string).collect_vec();

        match cmd.to_lowercase().as_str() {
            "q" | "quit" => Ok(CliCommand::Quit),
            "h" | "help" => Ok(CliCommand::Help),
            "animals" => Ok(CliCommand::Animals),
            "auction" => Ok(CliCommand::Auction),
            "challenge" => Ok(CliCommand::Challenge),
            "name" => Ok(CliCommand::Name(if args.is_empty() {
                None
            } else {
                Some(args.join(" "))
            })),
            "bid" => single("bid", args).map(CliCommand::Bid),
            "buy" => single("buy", args).map(CliCommand::Buy),
            "target" => match <[String; 2]>::try_from(args) {
                Ok([player, card]) => Ok(CliCommand::Target(Some((player, card)))),
                Err(args) if args.is_empty() => Ok(CliCommand::Target(None)),
                Err(_) => Err(ParseCommandError::Arguments("target", "a player and a card")),
            },
            "pay" => match args.len() {
                0 => Ok(CliCommand::Pay(None)),
                7 => Ok(CliCommand::Pay(Some(args))),
                _ => Err(ParseCommandError::Arguments("pay", "seven counts")),
            },
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

fn single(cmd: &'static str, args: Vec<String>) -> Result<Option<String>, ParseCommandError> {
    match args.len() {
        0 | 1 => Ok(args.into_iter().next()),
        _ => Err(ParseCommandError::Arguments(cmd, "one amount")),
    }
}
