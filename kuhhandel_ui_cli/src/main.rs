use std::{error::Error, process, str::FromStr};

use clap::Parser;
use cli_command::{CliCommand, ParseCommandError, HELP};
use cli_sink::CliSink;
use config::Config;
use form::Form;
use futures::StreamExt;
use kuhhandel_core::{card::Animal, ClientSession, RenderSink, Transport};
use log::{debug, info};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio_tungstenite::tungstenite::Message;
use transport::Connection;

mod cli_command;
mod cli_sink;
mod config;
mod form;
mod transport;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::parse();

    if let Err(e) = run(config).await {
        eprintln!("kuhhandel: {}", e);
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let Connection {
        transport,
        mut frames,
        writer,
    } = transport::connect(&config.server).await?;
    info!("connected to {}", config.server);
    println!("Connected to {}. Type `help` for commands.", config.server);

    let mut session = ClientSession::new(transport, CliSink::stdout());
    let mut form = Form::new();
    if let Some(name) = config.name {
        submit(&mut session, &mut form, CliCommand::Name(Some(name)));
    }

    let mut input = BufReader::new(io::stdin()).lines();
    loop {
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line? else { break };
                match CliCommand::from_str(&line) {
                    Ok(CliCommand::Quit) => break,
                    Ok(CliCommand::Help) => println!("{}", HELP),
                    Ok(CliCommand::Animals) => println!("{}", Animal::list()),
                    Ok(command) => submit(&mut session, &mut form, command),
                    Err(ParseCommandError::Empty) => {}
                    Err(e) => println!("! {}", e),
                }
            }
            frame = frames.next() => match frame {
                None | Some(Ok(Message::Close(_))) => {
                    println!("Server closed the connection.");
                    break;
                }
                Some(Ok(message)) => match transport::frame_text(message) {
                    Some(text) => session.on_message(&text),
                    None => debug!("control message"),
                },
                Some(Err(e)) => return Err(e.into()),
            },
        }
    }

    writer.abort();
    Ok(())
}

fn submit<T: Transport, S: RenderSink>(
    session: &mut ClientSession<T, S>,
    form: &mut Form,
    command: CliCommand,
) {
    if let Some(control) = form.apply(command) {
        if let Err(e) = session.on_control(control, &*form) {
            println!("! {}", e);
        }
    }
}
