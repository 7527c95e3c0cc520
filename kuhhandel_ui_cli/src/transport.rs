//! JSON text frames over a WebSocket.
//!
//! Outbound frames go through an unbounded channel to a writer task that owns
//! the sink half of the socket; once that task is gone every send reports the
//! connection as unavailable.

use std::fmt::Display;

use futures::{
    stream::{SplitStream, StreamExt},
    Sink, SinkExt,
};
use kuhhandel_core::{ClientError, Transport};
use log::warn;
use tokio::{
    net::TcpStream,
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
    MaybeTlsStream, WebSocketStream,
};

pub type Frames = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

pub struct WsTransport {
    sender: UnboundedSender<String>,
}

impl Transport for WsTransport {
    fn send(&mut self, frame: String) -> kuhhandel_core::Result<()> {
        self.sender
            .send(frame)
            .map_err(|_| ClientError::TransportUnavailable("connection closed".to_string()))
    }
}

pub struct Connection {
    pub transport: WsTransport,
    pub frames: Frames,
    pub writer: JoinHandle<()>,
}

pub async fn connect(url: &str) -> Result<Connection, tungstenite::Error> {
    let (socket, _) = connect_async(url).await?;
    let (sink, frames) = socket.split();
    let (sender, receiver) = unbounded_channel();
    let writer = tokio::spawn(write_frames(sink, receiver));

    Ok(Connection {
        transport: WsTransport { sender },
        frames,
        writer,
    })
}

/// Text carried by an inbound message. Binary payloads are shown lossily,
/// control messages carry no feed text.
pub fn frame_text(message: Message) -> Option<String> {
    match message {
        Message::Text(text) => Some(text),
        Message::Binary(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) | Message::Frame(_) => None,
    }
}

async fn write_frames<W>(mut out: W, mut frames: UnboundedReceiver<String>)
where
    W: Sink<Message> + Unpin,
    W::Error: Display,
{
    while let Some(frame) = frames.recv().await {
        if let Err(e) = out.send(Message::Text(frame)).await {
            warn!("connection lost while sending: {}", e);
            break;
        }
    }
}
