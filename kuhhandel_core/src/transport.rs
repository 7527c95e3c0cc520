use crate::error::{ClientError, Result};
use std::sync::mpsc::Sender;

/// Outbound half of the connection.
///
/// Sends are fire-and-forget. A transport that cannot deliver right now
/// drops the frame and reports [`ClientError::TransportUnavailable`].
pub trait Transport {
    fn send(&mut self, frame: String) -> Result<()>;
}

impl Transport for Sender<String> {
    fn send(&mut self, frame: String) -> Result<()> {
        Sender::send(self, frame).map_err(|e| ClientError::TransportUnavailable(e.to_string()))
    }
}
