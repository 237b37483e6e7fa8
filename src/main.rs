use anyhow::{Context, Result};
use casecycle::cli::output::{self, OutputFormat};
use casecycle::config::LOCAL_CONFIG_FILE;
use casecycle::{Config, Cycler, Rotation};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "casecycle")]
#[command(version, about = "Cycle identifiers through snake_case, PascalCase, UPPER_SNAKE and camelCase", long_about = None)]
struct Cli {
    /// Files to transform (reads stdin when omitted)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing
    #[arg(short, long)]
    in_place: bool,

    /// Word delimiter (defaults to '_')
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Dispatch variant (full, simple)
    #[arg(short, long)]
    rotation: Option<Rotation>,

    /// Output format (text, json), ignored with --in-place
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Print the rule applied to each line on stderr
    #[arg(long)]
    explain: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file locations
    Path,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casecycle", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.delimiter, cli.rotation)?;

    if let Some(command) = cli.command.take() {
        return handle_command(command, &config);
    }

    let cycler = Cycler::new(&config)?;
    let colored = !cli.no_color;

    if cli.files.is_empty() {
        if cli.in_place {
            anyhow::bail!("--in-place needs at least one file");
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return emit(&cycler, None, &text, &cli);
    }

    let mut failed = 0;
    let mut rewritten = 0;

    for file_path in &cli.files {
        if !file_path.exists() {
            warn!(path = %file_path.display(), "skipping missing file");
            eprintln!("Error: File not found: {}", file_path.display());
            failed += 1;
            continue;
        }

        let text = match fs::read_to_string(file_path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %file_path.display(), error = %e, "skipping unreadable file");
                eprintln!("Error: Failed to read file {}: {}", file_path.display(), e);
                failed += 1;
                continue;
            }
        };

        if cli.in_place {
            let transformed = cycler.transform(&text);
            if cli.explain {
                output::print_explain(Some(file_path.as_path()), &cycler.outcomes(&text), colored);
            }
            if transformed != text {
                if let Err(e) = fs::write(file_path, transformed) {
                    warn!(path = %file_path.display(), error = %e, "failed to rewrite file");
                    eprintln!("Error: Failed to write file {}: {}", file_path.display(), e);
                    failed += 1;
                    continue;
                }
                info!(path = %file_path.display(), "rewrote file");
                rewritten += 1;
            }
        } else {
            emit(&cycler, Some(file_path.as_path()), &text, &cli)?;
        }
    }

    if cli.in_place {
        output::print_rewrite_summary(rewritten, &cli.files, colored);
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn emit(cycler: &Cycler, source: Option<&Path>, text: &str, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => output::print_json(source, &cycler.outcomes(text))?,
        OutputFormat::Text if cli.files.len() > 1 => {
            output::print_text_section(source, &cycler.transform(text))?
        }
        OutputFormat::Text => output::print_text(&cycler.transform(text))?,
    }
    if cli.explain {
        output::print_explain(source, &cycler.outcomes(text), !cli.no_color);
    }
    Ok(())
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                print!("{}", config.to_toml()?);
            }
            ConfigCommands::Path => {
                match Config::global_config_path() {
                    Some(path) => println!("global: {}", path.display()),
                    None => println!("global: <unavailable>"),
                }
                println!("local:  {}", LOCAL_CONFIG_FILE);
            }
        },
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("casecycle=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
