use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mathlex_charcommands::{GeneratorConfig, InvalidPolicy, RuleGenerator};
use mathlex_unicode::SurrogatePair;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mathlex")]
#[command(about = "Lexer rule generator for LaTeX character commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate lexer rules from a character table
    Generate {
        /// Character table (stdin if omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
        /// Rule file to write (stdout if omitted)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// JSON file overriding the classification tables
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Skip bad records instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print the per-token UTF-16 ranges as JSON
    Ranges {
        /// Character table (stdin if omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print the escaped UTF-16 form of code points
    Encode {
        /// Hexadecimal code points, e.g. 1D400, U+1D400 or 0x1D400
        #[arg(value_name = "CODE_POINT", required = true)]
        code_points: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            input,
            output,
            config,
            skip_invalid,
        } => {
            let table = read_input(input.as_deref())?;
            let generator = RuleGenerator::with_config(load_config(config.as_deref())?);
            let rules = generator.generate(&table, policy(*skip_invalid))?;
            log::info!("Generated {} rules", rules.len());

            let mut out = open_output(output.as_deref())?;
            for rule in &rules {
                writeln!(out, "{}", rule)?;
            }
            out.flush()?;
        }
        Commands::Ranges {
            input,
            config,
            skip_invalid,
        } => {
            let table = read_input(input.as_deref())?;
            let mut generator = RuleGenerator::with_config(load_config(config.as_deref())?);
            generator.feed(&table, policy(*skip_invalid))?;
            println!("{}", serde_json::to_string_pretty(&generator.ranges())?);
        }
        Commands::Encode { code_points } => {
            for text in code_points {
                let pair = SurrogatePair::encode(parse_code_point(text)?)?;
                println!("{}", pair);
            }
        }
    }
    Ok(())
}

fn policy(skip_invalid: bool) -> InvalidPolicy {
    if skip_invalid {
        InvalidPolicy::Skip
    } else {
        InvalidPolicy::Abort
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => Ok(GeneratorConfig::load_from_path(path)?),
        None => Ok(GeneratorConfig::default()),
    }
}

fn parse_code_point(text: &str) -> Result<u32> {
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).with_context(|| format!("invalid code point `{}`", text))
}
