use crate::{
    error::{ClientError, Result},
    payment::DenominationCounts,
};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Money on the wire is any JSON number, so bids can be fractional.
pub type Amount = f64;

/// Whole amounts go out as JSON integers, the way a browser prints them.
fn serialize_amount<S>(amount: &Amount, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const EXACT: Amount = 9_007_199_254_740_992.0;
    if amount.fract() == 0.0 && amount.abs() < EXACT {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnResponse {
    Auction,
    Challenge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamePayload {
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BidPayload {
    #[serde(serialize_with = "serialize_amount")]
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengePayload {
    pub player: String,
    pub card: String,
}

/// Intents sent from client to server.
///
/// On the wire every intent is `{"type": ..., "payload": ...}`. The
/// `response` payload is a bare string, all others are objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum ClientEvent {
    Username(UsernamePayload),
    Response(TurnResponse),
    Bid(BidPayload),
    AuctioneerBid(BidPayload),
    Challenge(ChallengePayload),
    Payment(DenominationCounts),
}

impl ClientEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientEvent::Username(_) => "username",
            ClientEvent::Response(_) => "response",
            ClientEvent::Bid(_) => "bid",
            ClientEvent::AuctioneerBid(_) => "auctioneer-bid",
            ClientEvent::Challenge(_) => "challenge",
            ClientEvent::Payment(_) => "payment",
        }
    }

    pub fn to_frame(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ClientError::Encode)
    }

    pub fn from_frame(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ClientError::MalformedMessage)
    }
}

/// Any `{type, payload}` frame, whatever its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidUpdate {
    #[serde(serialize_with = "serialize_amount")]
    pub bid: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

/// Events received from the server.
///
/// Only `bid` has client side semantics. Every other type is kept as its
/// raw [`Frame`] so new server messages never break decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Bid(BidUpdate),
    Other(Frame),
}

impl ServerEvent {
    pub const BID: &'static str = "bid";

    pub fn decode(text: &str) -> Result<Self> {
        let frame: Frame = serde_json::from_str(text).map_err(ClientError::MalformedMessage)?;
        if frame.kind == Self::BID {
            serde_json::from_value(frame.payload)
                .map(ServerEvent::Bid)
                .map_err(ClientError::MalformedMessage)
        } else {
            Ok(ServerEvent::Other(frame))
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            ServerEvent::Bid(_) => Self::BID,
            ServerEvent::Other(frame) => &frame.kind,
        }
    }

    pub fn to_frame(&self) -> Result<String> {
        let frame = match self {
            ServerEvent::Bid(update) => Frame {
                kind: Self::BID.to_string(),
                payload: serde_json::to_value(update).map_err(ClientError::Encode)?,
            },
            ServerEvent::Other(frame) => frame.clone(),
        };
        serde_json::to_string(&frame).map_err(ClientError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ClientError,
        events::{BidPayload, BidUpdate, ClientEvent, Frame, ServerEvent, TurnResponse},
    };
    use serde_json::json;

    #[test]
    fn response_payload_should_be_a_bare_string() {
        let frame = ClientEvent::Response(TurnResponse::Auction).to_frame().unwrap();
        assert_eq!(frame, r#"{"type":"response","payload":"auction"}"#);
    }

    #[test]
    fn auctioneer_bid_should_use_kebab_case_type() {
        let frame = ClientEvent::AuctioneerBid(BidPayload { amount: 300.0 })
            .to_frame()
            .unwrap();
        assert_eq!(frame, r#"{"type":"auctioneer-bid","payload":{"amount":300}}"#);
    }

    #[test]
    fn kind_should_match_serialized_type() {
        let event = ClientEvent::AuctioneerBid(BidPayload { amount: 1.0 });
        let value: serde_json::Value = serde_json::from_str(&event.to_frame().unwrap()).unwrap();
        assert_eq!(value["type"], event.kind());
    }

    #[test]
    fn frames_should_never_contain_newlines() {
        let frame = ClientEvent::Bid(BidPayload { amount: 10.0 }).to_frame().unwrap();
        assert!(!frame.contains('\n'));
    }

    #[test]
    fn decode_should_recognize_bid_updates() {
        let event = ServerEvent::decode(r#"{"type":"bid","payload":{"bid":100,"player":"ann"}}"#)
            .unwrap();
        assert_eq!(
            event,
            ServerEvent::Bid(BidUpdate {
                bid: 100.0,
                player: Some("ann".to_string()),
            })
        );
    }

    #[test]
    fn decode_should_keep_unknown_types_as_frames() {
        let event = ServerEvent::decode(r#"{"type":"chat","payload":"hi"}"#).unwrap();
        assert_eq!(
            event,
            ServerEvent::Other(Frame {
                kind: "chat".to_string(),
                payload: json!("hi"),
            })
        );
        assert_eq!(event.kind(), "chat");
    }

    #[test]
    fn decode_should_default_missing_payload_to_null() {
        let event = ServerEvent::decode(r#"{"type":"tick"}"#).unwrap();
        assert_eq!(
            event,
            ServerEvent::Other(Frame {
                kind: "tick".to_string(),
                payload: serde_json::Value::Null,
            })
        );
    }

    #[test]
    fn decode_should_reject_text_outside_the_schema() {
        for text in ["hello", "", "42", r#"{"payload":{}}"#, r#"{"type":7}"#] {
            assert!(matches!(
                ServerEvent::decode(text),
                Err(ClientError::MalformedMessage(_))
            ));
        }
    }

    #[test]
    fn decode_should_reject_bid_without_numeric_amount() {
        for text in [
            r#"{"type":"bid","payload":{}}"#,
            r#"{"type":"bid","payload":"100"}"#,
            r#"{"type":"bid","payload":{"bid":"100"}}"#,
            r#"{"type":"bid","payload":{"bid":null}}"#,
        ] {
            assert!(matches!(
                ServerEvent::decode(text),
                Err(ClientError::MalformedMessage(_))
            ));
        }
    }

    #[test]
    fn decode_should_accept_any_json_number_as_bid() {
        for (text, bid) in [
            (r#"{"type":"bid","payload":{"bid":112.5,"player":"bo"}}"#, 112.5),
            (r#"{"type":"bid","payload":{"bid":150.0,"player":"bo"}}"#, 150.0),
            (r#"{"type":"bid","payload":{"bid":-3}}"#, -3.0),
            (r#"{"type":"bid","payload":{"bid":1e3}}"#, 1000.0),
        ] {
            match ServerEvent::decode(text) {
                Ok(ServerEvent::Bid(update)) => assert_eq!(update.bid, bid),
                other => panic!("{} decoded to {:?}", text, other),
            }
        }
    }

    #[test]
    fn whole_amounts_should_be_sent_as_integers() {
        let whole = ClientEvent::Bid(BidPayload { amount: 150.0 }).to_frame().unwrap();
        assert_eq!(whole, r#"{"type":"bid","payload":{"amount":150}}"#);

        let fractional = ClientEvent::Bid(BidPayload { amount: 12.5 }).to_frame().unwrap();
        assert_eq!(fractional, r#"{"type":"bid","payload":{"amount":12.5}}"#);
    }

    #[test]
    fn server_event_frame_should_decode_to_itself() {
        let event = ServerEvent::Bid(BidUpdate {
            bid: 150.0,
            player: None,
        });
        let frame = event.to_frame().unwrap();
        assert_eq!(frame, r#"{"type":"bid","payload":{"bid":150}}"#);
        assert_eq!(ServerEvent::decode(&frame).unwrap(), event);
    }
}
