//! Obscura CLI
//!
//! Command-line front end for the Obscura cipher engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use obscura_cipher::solver::caesar_bruteforce;
use obscura_cipher::{ChainSpec, CipherEngine, FrequencyAnalysis, Presets};
use obscura_config::LoggingConfig;

#[derive(Parser)]
#[command(name = "obscura")]
#[command(about = "Obscura - classical ciphers, layered chains and cryptanalysis")]
#[command(version)]
struct Cli {
    /// Config file (default: ./obscura.yaml, then ~/.config/obscura/)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available ciphers
    List,

    /// Encrypt with a single cipher
    Encrypt(CipherArgs),

    /// Decrypt with a single cipher
    Decrypt(CipherArgs),

    /// Run a cipher chain
    Chain {
        #[command(subcommand)]
        command: ChainCommands,
    },

    /// Check a chain description without running it
    Validate {
        /// Chain as a JSON array of {"type", "config"} objects
        chain: String,
    },

    /// Frequency analysis and cipher-type guesses
    Analyze {
        /// Ciphertext
        text: String,

        /// Show a frequency histogram
        #[arg(long)]
        chart: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recover keys from ciphertext
    Solve {
        #[command(subcommand)]
        command: SolveCommands,
    },

    /// Show the built-in presets
    Presets,
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher: caesar, vigenere, atbash, base64, baconian, polybius, railfence, morse
    #[arg(short, long)]
    cipher: String,

    /// Cipher config as a JSON object, e.g. '{"shift": 3}'
    #[arg(long)]
    params: Option<String>,

    /// Caesar shift
    #[arg(long)]
    shift: Option<i64>,

    /// Vigenère key
    #[arg(short, long)]
    key: Option<String>,

    /// Rail Fence rails
    #[arg(long)]
    rails: Option<usize>,

    /// Text to transform
    text: String,
}

#[derive(Args)]
struct ChainArgs {
    /// Chain as a JSON array of {"type", "config"} objects
    #[arg(long, conflicts_with = "preset", required_unless_present = "preset")]
    chain: Option<String>,

    /// Name of a built-in preset (see `obscura presets`)
    #[arg(long)]
    preset: Option<String>,

    /// Text to transform
    text: String,
}

#[derive(Subcommand)]
enum ChainCommands {
    /// Apply layers first to last
    Encrypt(ChainArgs),
    /// Undo layers last to first
    Decrypt(ChainArgs),
}

#[derive(Subcommand)]
enum SolveCommands {
    /// Estimate a Vigenère key
    Vigenere {
        /// Ciphertext
        text: String,
    },

    /// Find the most likely Caesar shift
    Caesar {
        /// Ciphertext
        text: String,

        /// Print all 26 shifts
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let report = match cli.config.as_deref() {
        Some(path) => obscura_config::load_explicit(path)?,
        None => obscura_config::discover_and_load(),
    };
    init_tracing(&report.config.logging);
    report.log_diagnostics();

    let config = report.config;
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");

    let engine = CipherEngine::with_settings(config.engine.clone(), config.solver.clone());

    match cli.command {
        Commands::List => cmd_list(&engine),
        Commands::Encrypt(args) => cmd_transform(&engine, args, true),
        Commands::Decrypt(args) => cmd_transform(&engine, args, false),
        Commands::Chain { command } => cmd_chain(&engine, command),
        Commands::Validate { chain } => cmd_validate(&engine, &chain),
        Commands::Analyze { text, chart, json } => cmd_analyze(&engine, &text, chart, json),
        Commands::Solve { command } => cmd_solve(&engine, command),
        Commands::Presets => cmd_presets(&engine.presets()),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries results; logs go to stderr
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn parse_json(raw: &str, what: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("Invalid {} JSON: {}", what, e))
}

/// Merge `--params` with the convenience flags, flags winning
fn cipher_params(args: &CipherArgs) -> Result<Value> {
    let mut params = match &args.params {
        Some(raw) => match parse_json(raw, "params")? {
            Value::Object(map) => map,
            _ => anyhow::bail!("--params must be a JSON object"),
        },
        None => Map::new(),
    };

    if let Some(shift) = args.shift {
        params.insert("shift".into(), shift.into());
    }
    if let Some(key) = &args.key {
        params.insert("key".into(), key.clone().into());
    }
    if let Some(rails) = args.rails {
        params.insert("rails".into(), rails.into());
    }

    Ok(Value::Object(params))
}

fn cmd_list(engine: &CipherEngine) -> Result<()> {
    println!("\n  AVAILABLE CIPHERS");
    println!("  =================\n");
    for info in engine.available_ciphers() {
        println!("  {:<10} {:<20} {}", info.kind, info.name, info.description);
    }
    Ok(())
}

fn cmd_transform(engine: &CipherEngine, args: CipherArgs, encrypt: bool) -> Result<()> {
    let params = cipher_params(&args)?;
    let result = if encrypt {
        engine.encrypt(&args.text, &args.cipher, &params)?
    } else {
        engine.decrypt(&args.text, &args.cipher, &params)?
    };

    let label = if encrypt { "ENCRYPT" } else { "DECRYPT" };
    println!("\n  {} ({})", label, args.cipher.to_uppercase());
    if params.as_object().map_or(false, |m| !m.is_empty()) {
        println!("  Config: {}", params);
    }
    println!("  Input:  {}", args.text);
    println!("  Output: {}", result);
    Ok(())
}

fn resolve_chain(engine: &CipherEngine, args: &ChainArgs) -> Result<ChainSpec> {
    if let Some(name) = &args.preset {
        let presets = engine.presets();
        return match presets.get(name) {
            Some(preset) => Ok(preset.as_chain()),
            None => anyhow::bail!(
                "Unknown preset: {}. Use: {}",
                name,
                Presets::NAMES.join(", ")
            ),
        };
    }

    match &args.chain {
        Some(raw) => Ok(ChainSpec::parse(&parse_json(raw, "chain")?)?),
        None => anyhow::bail!("Provide --chain or --preset"),
    }
}

fn cmd_chain(engine: &CipherEngine, command: ChainCommands) -> Result<()> {
    match command {
        ChainCommands::Encrypt(args) => {
            let chain = resolve_chain(engine, &args)?;
            let result = engine.encrypt_chain(&args.text, &chain)?;

            println!("\n  CHAIN ENCRYPT ({} layers)", result.layers);
            for report in &result.chain {
                println!("  [{}] {}", report.layer, report.metadata.name);
            }
            println!("  Input:  {}", args.text);
            println!("  Output: {}", result.ciphertext);
            Ok(())
        }

        ChainCommands::Decrypt(args) => {
            let chain = resolve_chain(engine, &args)?;
            let result = engine.decrypt_chain(&args.text, &chain)?;

            println!("\n  CHAIN DECRYPT ({} layers)", result.layers);
            for report in &result.chain {
                println!("  [{}] {}", report.layer, report.metadata.name);
            }
            println!("  Input:  {}", args.text);
            println!("  Output: {}", result.plaintext);
            Ok(())
        }
    }
}

fn cmd_validate(engine: &CipherEngine, raw: &str) -> Result<()> {
    let report = engine.validate_chain(&parse_json(raw, "chain")?);

    println!("\n  CHAIN VALIDATION");
    println!("  ================\n");
    println!("  Layers: {}", report.layer_count);
    println!("  Valid:  {}", if report.valid { "yes" } else { "no" });

    for error in &report.errors {
        println!("  [ERROR] {}", error);
    }
    for warning in &report.warnings {
        println!("  [WARN]  {}", warning);
    }

    if !report.valid {
        anyhow::bail!("Chain is invalid ({} errors)", report.errors.len());
    }
    Ok(())
}

fn cmd_analyze(engine: &CipherEngine, text: &str, chart: bool, json: bool) -> Result<()> {
    let result = engine.analyze(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if chart {
        println!("{}", FrequencyAnalysis::analyze(text).render_ascii());
        println!();
    }

    println!("\n  CIPHER ANALYSIS");
    println!("  ===============\n");
    println!("  Length: {} characters", result.length);
    println!("  Letters: {}", result.frequency.values().sum::<usize>());
    println!("  Index of Coincidence: {:.4}", result.index_of_coincidence);

    if result.suggestions.is_empty() {
        println!("\n  No structural match.");
    } else {
        println!("\n  SUGGESTIONS:");
        for suggestion in &result.suggestions {
            println!("    - {}", suggestion);
        }
    }
    Ok(())
}

fn cmd_solve(engine: &CipherEngine, command: SolveCommands) -> Result<()> {
    match command {
        SolveCommands::Vigenere { text } => {
            println!("\n  VIGENERE KEY ESTIMATE");
            println!("  =====================\n");

            match engine.solve_vigenere(&text) {
                Some(estimate) => {
                    let key = estimate.period();
                    let plaintext =
                        engine.decrypt(&text, "vigenere", &serde_json::json!({ "key": key }))?;
                    println!("  Key:        {}", key);
                    if key.len() != estimate.key_length {
                        println!("  Searched:   {} ({} columns)", estimate.key, estimate.key_length);
                    }
                    println!("  Key length: {}", key.len());
                    println!("  Avg IoC:    {:.4}", estimate.confidence);
                    println!("  Plaintext:  {}", plaintext);
                }
                None => println!("  Not enough letters to estimate a key."),
            }
            Ok(())
        }

        SolveCommands::Caesar { text, all } => {
            if all {
                println!("\n  CAESAR BRUTEFORCE");
                println!("  ==================\n");
                println!("  Ciphertext: {}\n", text);
                for (shift, decrypted) in caesar_bruteforce(&text) {
                    println!("  [{:2}] {}", shift, decrypted);
                }
                return Ok(());
            }

            println!("\n  CAESAR SHIFT ESTIMATE");
            println!("  =====================\n");
            match engine.solve_caesar(&text) {
                Some(estimate) => {
                    println!("  Shift:       {}", estimate.shift);
                    println!("  Chi-squared: {:.4}", estimate.chi_squared);
                    println!("  Plaintext:   {}", estimate.plaintext);
                }
                None => println!("  No letters to analyze."),
            }
            Ok(())
        }
    }
}

fn cmd_presets(presets: &Presets) -> Result<()> {
    println!("\n  PRESETS");
    println!("  =======\n");
    for (name, preset) in presets.iter() {
        println!("  {:<14} {}", name, serde_json::to_string(preset)?);
    }
    Ok(())
}
