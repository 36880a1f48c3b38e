//! Terminal Uno table: you against a few NPCs.
//!
//! Type card names to play (`red 5`, `wild draw four blue`, `draw`, `uno`).
//! Lobby commands start with a slash: `/start`, `/list`, `/abort`.

use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_uno::{
    ChannelSink, GameConfig, Inbound, LobbyCommand, NpcProfile, OldestLegal, Outbound,
    Outcome, ParticipantId, Seat, StaticDirectory, Table, TableConfig, TurnTimeout,
};

#[derive(Parser)]
#[command(name = "uno-table")]
#[command(about = "Play Uno against NPCs in the terminal")]
struct Args {
    /// Number of NPC opponents (1 to 9)
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u64).range(1..=9))]
    npcs: u64,

    /// Your display name
    #[arg(long, default_value = "you")]
    name: String,

    /// Game seed (for reproducible deals)
    #[arg(long)]
    seed: Option<u64>,

    /// NPC thinking time in milliseconds
    #[arg(long, default_value = "1500")]
    think_ms: u64,

    /// Probability that an NPC calls (for itself or to catch you)
    #[arg(long, default_value = "0.75")]
    call_probability: f64,

    /// Draw and pass for you after this many seconds of silence
    #[arg(long)]
    turn_timeout_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const HUMAN: ParticipantId = ParticipantId::new(1);

fn lobby_command(line: &str) -> Option<LobbyCommand> {
    match line.trim_start_matches('/').trim() {
        "start" => Some(LobbyCommand::Start),
        "list" => Some(LobbyCommand::List),
        "abort" | "quit" => Some(LobbyCommand::Abort),
        _ => None,
    }
}

fn print_outbound(out: Outbound) {
    match out {
        Outbound::Event { text, .. } => println!("{text}"),
        Outbound::Hand { to, cards } if to == HUMAN => {
            let cards: Vec<String> = cards.iter().map(ToString::to_string).collect();
            println!("  your hand: {}", cards.join(", "));
        }
        Outbound::Rejected { to, reason } if to == HUMAN => println!("  ! {reason}"),
        Outbound::Roster { names } => println!("  players: {}", names.join(", ")),
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut game_config = GameConfig::default();
    if let Some(seed) = args.seed {
        game_config = game_config.with_seed(seed);
    }
    let mut table_config = TableConfig::default().with_think_delay(Duration::from_millis(args.think_ms));
    if let Some(secs) = args.turn_timeout_secs {
        table_config = table_config.with_turn_timeout(TurnTimeout::DrawAndSkip(Duration::from_secs(secs)));
    }
    let profile = NpcProfile::default().with_call_probability(args.call_probability);

    let mut directory = StaticDirectory::new().with(HUMAN, args.name.clone());
    let npc_ids: Vec<ParticipantId> = (0..args.npcs).map(|i| ParticipantId::new(i + 2)).collect();
    for (i, id) in npc_ids.iter().enumerate() {
        directory.insert(*id, format!("Bot {}", i + 1));
    }

    let (sink, mut outbound) = ChannelSink::new();
    let printer = tokio::spawn(async move {
        while let Some(out) = outbound.recv().await {
            print_outbound(out);
        }
    });

    let table = Table::new(
        game_config,
        table_config,
        HUMAN,
        Seat::Human,
        Box::new(OldestLegal),
        sink,
        directory,
    );

    let (tx, rx) = mpsc::channel(64);
    for id in npc_ids {
        tx.send(Inbound::Lobby(LobbyCommand::Join {
            id,
            seat: Seat::Npc(profile.clone()),
        }))
        .await?;
    }
    println!("Type /start to deal, /list to see players, /quit to stop.");

    let reader_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let inbound = if line.starts_with('/') {
                match lobby_command(&line) {
                    Some(command) => Inbound::Lobby(command),
                    None => {
                        println!("  ! unknown command {line}");
                        continue;
                    }
                }
            } else {
                Inbound::Message { author: HUMAN, text: line }
            };
            if reader_tx.send(inbound).await.is_err() {
                break;
            }
        }
    });
    drop(tx);

    let game = table.run(rx).await;
    // Let the printer drain what the table sent before it closed.
    let _ = printer.await;

    match game.outcome() {
        Some(Outcome::Won(id)) if id == HUMAN => println!("Well played!"),
        Some(outcome) => info!(?outcome, "game over"),
        None => info!("table closed before the game ended"),
    }
    Ok(())
}
