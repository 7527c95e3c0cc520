use std::io::{self, Stdout, Write};

use kuhhandel_core::{Amount, RenderSink};
use log::warn;

/// Prints the event feed to a terminal (or any writer).
pub struct CliSink<W: Write = Stdout> {
    out: W,
}

impl CliSink {
    pub fn stdout() -> Self {
        CliSink::new(io::stdout())
    }
}

impl<W: Write> CliSink<W> {
    pub fn new(out: W) -> Self {
        CliSink { out }
    }

    pub fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("could not write to terminal: {}", e);
        }
    }
}

impl<W: Write> RenderSink for CliSink<W> {
    fn append_log_entry(&mut self, text: &str) {
        self.print(&format!("~ {}", text));
    }

    fn set_current_bid_display(&mut self, amount: Amount) {
        self.print(&format!("Current bid: {}", amount));
    }
}
