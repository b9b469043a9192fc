// EnDeCript CLI
// One-shot encrypt/decrypt of arguments or stdin lines

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use endecript_core::{default_config_content, Cipher, CipherConfig, Mode};

/// Fixed-table substitution cipher
#[derive(Parser, Debug)]
#[command(name = "endecript")]
#[command(author = "endecript contributors")]
#[command(version)]
#[command(about = "Encrypt or decrypt text with a fixed substitution key set", long_about = None)]
struct Args {
    /// TOML key set (default: ~/.config/endecript/config.toml, else built-in)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Encrypt the text (default)
    #[arg(short, long, conflicts_with = "decrypt")]
    encrypt: bool,

    /// Decrypt the text
    #[arg(short, long)]
    decrypt: bool,

    /// Do not lower-case input before transforming
    #[arg(long)]
    keep_case: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate the key set and exit
    #[arg(long)]
    check_config: bool,

    /// Print the built-in key set as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Text to transform; reads stdin line by line when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.decrypt {
            Mode::Decrypt
        } else {
            Mode::Encrypt
        }
    }
}

/// Main application state
struct Application {
    config: CipherConfig,
    args: Args,
}

impl Application {
    fn new(args: Args) -> Result<Self, Box<dyn std::error::Error>> {
        let config = CipherConfig::load(args.config.as_deref())?;
        Ok(Self { config, args })
    }

    /// Validate configuration, always with reversibility checks
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut strict = self.config.clone();
        strict.strict = true;
        strict.build_tables()?;

        match &self.config.source_path {
            Some(path) => println!("Configuration is valid: {}", path.display()),
            None => println!("Configuration is valid: built-in key set"),
        }
        Ok(())
    }

    fn lowercase(&self) -> bool {
        self.config.lowercase_input && !self.args.keep_case
    }

    fn transform(&self, cipher: &Cipher, text: &str) -> String {
        if self.lowercase() {
            cipher.apply(self.args.mode(), &text.to_lowercase())
        } else {
            cipher.apply(self.args.mode(), text)
        }
    }

    fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let cipher = self.config.cipher()?;
        log::debug!("mode={} lowercase={}", self.args.mode(), self.lowercase());

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if !self.args.text.is_empty() {
            let text = self.args.text.join(" ");
            writeln!(out, "{}", self.transform(&cipher, &text))?;
            return Ok(());
        }

        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(out, "{}", self.transform(&cipher, &line))?;
        }
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Doesn't require a config
    if args.print_default_config {
        print!("{}", default_config_content());
        return Ok(());
    }

    let app = Application::new(args)?;

    if app.args.check_config {
        return app.validate();
    }

    app.run()
}
