pub use error::{ClientError, Result};
pub use events::{Amount, ClientEvent, ServerEvent, TurnResponse};
pub use render::{Control, Controls, RenderSink};
pub use session::ClientSession;
pub use transport::Transport;

pub mod card;
pub mod encoder;
pub mod error;
pub mod events;
pub mod payment;
pub mod projector;
pub mod render;
pub mod session;
pub mod transport;
