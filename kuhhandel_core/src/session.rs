use crate::{
    encoder,
    error::Result,
    events::{Amount, ClientEvent, TurnResponse},
    payment::DenominationCounts,
    projector::{CurrentBid, Projector},
    render::{Control, Controls, RenderSink},
    transport::Transport,
};
use log::{debug, warn};

/// One player's connection to a game.
///
/// Owns the derived state for that connection and talks to the outside world
/// only through the injected transport and render sink.
pub struct ClientSession<T, S>
where
    T: Transport,
    S: RenderSink,
{
    transport: T,
    sink: S,
    projector: Projector,
}

impl<T, S> ClientSession<T, S>
where
    T: Transport,
    S: RenderSink,
{
    pub fn new(transport: T, sink: S) -> Self {
        ClientSession {
            transport,
            sink,
            projector: Projector::new(),
        }
    }

    pub fn current_bid(&self) -> CurrentBid {
        self.projector.current_bid()
    }

    pub fn bid_holder(&self) -> Option<&str> {
        self.projector.bid_holder()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Serialize and send right away. Failed sends are not retried.
    pub fn send(&mut self, event: ClientEvent) -> Result<()> {
        let frame = event.to_frame()?;
        debug!("sending {} frame", event.kind());
        self.transport.send(frame).inspect_err(|e| {
            warn!("dropped {} frame: {}", event.kind(), e);
        })
    }

    pub fn send_username(&mut self, name: &str) -> Result<()> {
        self.send(encoder::username(name))
    }

    pub fn respond(&mut self, choice: TurnResponse) -> Result<()> {
        self.send(encoder::turn_response(choice))
    }

    pub fn bid(&mut self, amount: Amount) -> Result<()> {
        self.send(encoder::bid(amount))
    }

    pub fn auctioneer_bid(&mut self, amount: Amount) -> Result<()> {
        self.send(encoder::auctioneer_bid(amount))
    }

    pub fn challenge(&mut self, player: &str, card: &str) -> Result<()> {
        self.send(encoder::challenge(player, card))
    }

    pub fn pay(&mut self, counts: DenominationCounts) -> Result<()> {
        self.send(encoder::payment(counts))
    }

    /// React to a UI trigger by reading the inputs it depends on.
    pub fn on_control<C: Controls + ?Sized>(&mut self, control: Control, controls: &C) -> Result<()> {
        let event = match control {
            Control::SubmitUsername => encoder::username(controls.username()),
            Control::AuctionButton => encoder::turn_response(TurnResponse::Auction),
            Control::ChallengeButton => encoder::turn_response(TurnResponse::Challenge),
            Control::SubmitBid => encoder::bid(controls.bid_amount()),
            Control::BuyOut => encoder::auctioneer_bid(controls.buyout_amount()),
            Control::SubmitChallenge => {
                encoder::challenge(controls.challenge_player(), controls.challenge_card())
            }
            Control::SubmitPayment => encoder::payment(controls.payment_counts()),
        };
        self.send(event)
    }

    /// Handle one inbound frame. Never fails: bad frames are still shown in
    /// the feed and otherwise ignored.
    pub fn on_message(&mut self, raw: &str) {
        match self.projector.on_message(raw, &mut self.sink) {
            Ok(event) => debug!("received {} frame", event.kind()),
            Err(e) => warn!("ignoring inbound frame: {}", e),
        }
    }
}
