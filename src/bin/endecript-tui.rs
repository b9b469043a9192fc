// EnDeCript Terminal UI
// Input box, result display and clipboard buttons in the terminal

use std::path::PathBuf;

use clap::Parser;

use endecript::tui::{self, app::App};
use endecript_core::CipherConfig;

#[derive(Parser, Debug)]
#[command(name = "endecript-tui")]
#[command(version)]
#[command(about = "Interactive encrypt/decrypt with clipboard support", long_about = None)]
struct Args {
    /// TOML key set (default: ~/.config/endecript/config.toml, else built-in)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Log lines would draw over the UI, so only log when asked to
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let config = CipherConfig::load(args.config.as_deref())?;
    let app = App::new(&config)?;
    tui::run(app)?;
    Ok(())
}
