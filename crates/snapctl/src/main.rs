use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;

const SOCKET_PATH: &str = "/tmp/snapdeck.sock";

#[derive(Parser, Debug)]
#[command(name = "snapctl", version, about = "Control a running snapdeck", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which end of the carousel, or which index, a collection command uses.
#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
struct Placement {
    /// Index to insert at or remove from
    #[arg(long)]
    at: Option<usize>,
    /// Use the front of the carousel instead of the back
    #[arg(long)]
    front: bool,
}

impl Placement {
    fn as_arg(&self) -> String {
        match (self.at, self.front) {
            (Some(index), _) => index.to_string(),
            (None, true) => "front".to_string(),
            (None, false) => "back".to_string(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Snap to the next panel
    Next,
    /// Snap to the previous panel
    Prev,
    /// Snap to the panel at INDEX
    Goto { index: usize },
    /// Add a panel
    Add {
        title: String,
        #[command(flatten)]
        placement: Placement,
    },
    /// Remove a panel (the last one by default)
    Remove {
        #[command(flatten)]
        placement: Placement,
    },
    /// Push the carousel with a velocity in pixels per second
    Nudge {
        #[arg(allow_negative_numbers = true)]
        vx: f64,
        #[arg(allow_negative_numbers = true)]
        vy: f64,
    },
}

impl Commands {
    fn to_line(&self) -> String {
        match self {
            Self::Next => "next".to_string(),
            Self::Prev => "prev".to_string(),
            Self::Goto { index } => format!("goto {index}"),
            Self::Add { title, placement } => format!("add {} {}", placement.as_arg(), title),
            Self::Remove { placement } => format!("remove {}", placement.as_arg()),
            Self::Nudge { vx, vy } => format!("nudge {vx} {vy}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    send_command(&cli.command.to_line())
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to snapdeck at {}: {}. Is snapdeck running?",
            SOCKET_PATH,
            e
        )
    })?;

    log::debug!("Sending '{}'", cmd);
    writeln!(stream, "{}", cmd)?;
    Ok(())
}
