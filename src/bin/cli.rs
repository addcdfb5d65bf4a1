//! Fieldbus Wire CLI - Command-line interface
//!
//! Packs coils and computes Modbus checksums for scripting and bench work.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fieldbus_wire::cli::{commands, input_or_stdin, print_exit_codes, CliResult, ExitCodes, PipeMode, Report};
use fieldbus_wire::config::{OutputFormat, WireConfig};
use fieldbus_wire::{ChecksumType, HexCodec};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Checksum selector on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// CRC-16/Modbus (RTU)
    Crc,
    /// LRC (ASCII)
    Lrc,
}

impl From<Kind> for ChecksumType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Crc => ChecksumType::Crc16,
            Kind::Lrc => ChecksumType::Lrc,
        }
    }
}

/// Fieldbus Wire CLI
#[derive(Parser, Debug)]
#[command(
    name = "fieldbus-wire",
    version,
    about = "Coil packing and CRC-16/LRC checksums for Modbus serial frames",
    long_about = None
)]
struct Cli {
    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Config file path
    #[arg(long, env = "FIELDBUS_WIRE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a bit string (e.g. "1011 0000 11") into a count-prefixed frame
    Pack {
        /// Bits, first coil first; read from stdin if omitted
        bits: Option<String>,
    },

    /// Unpack a count-prefixed frame into bits
    Unpack {
        /// Hex frame; read from stdin if omitted
        data: Option<String>,

        /// Keep only this many bits (drops padding)
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Compute the CRC-16/Modbus of a payload
    Crc {
        /// Hex payload; read from stdin if omitted
        data: Option<String>,
    },

    /// Compute the LRC of a payload
    Lrc {
        /// Hex payload; read from stdin if omitted
        data: Option<String>,
    },

    /// Check a payload against an expected checksum value
    Check {
        /// Checksum kind
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Hex payload
        data: String,

        /// Expected value as a hex number (e.g. CDC5)
        expected: String,
    },

    /// Append a checksum trailer to a payload
    Append {
        /// Checksum kind
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Hex payload; read from stdin if omitted
        data: Option<String>,
    },

    /// Verify the checksum trailer of a complete frame
    Verify {
        /// Checksum kind
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Hex frame including trailer; read from stdin if omitted
        data: Option<String>,
    },

    /// Print the exit code table
    ExitCodes,
}

fn load_config(cli: &Cli) -> Result<WireConfig, CliResult> {
    let config = match &cli.config {
        Some(path) => WireConfig::load_from(path)?,
        None => WireConfig::load()?,
    };
    Ok(config)
}

fn init_logging(cli: &Cli, config: &WireConfig) {
    let default_directive = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        config.log_level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(arg: Option<&str>) -> Result<String, CliResult> {
    match input_or_stdin(arg, PipeMode::detect())? {
        Some(text) => Ok(text),
        None => Err(CliResult::error(
            ExitCodes::INVALID_ARGS,
            "No input given and nothing piped on stdin",
        )),
    }
}

fn run_command(cli: &Cli, codec: &HexCodec) -> Result<Option<Report>, CliResult> {
    let report = match &cli.command {
        Commands::Pack { bits } => commands::pack(&read_input(bits.as_deref())?)?,
        Commands::Unpack { data, count } => {
            commands::unpack(&read_input(data.as_deref())?, *count, codec)?
        }
        Commands::Crc { data } => commands::crc(&read_input(data.as_deref())?, codec)?,
        Commands::Lrc { data } => commands::lrc(&read_input(data.as_deref())?, codec)?,
        Commands::Check { kind, data, expected } => {
            commands::check((*kind).into(), data, expected, codec)?
        }
        Commands::Append { kind, data } => {
            commands::append((*kind).into(), &read_input(data.as_deref())?, codec)?
        }
        Commands::Verify { kind, data } => {
            commands::verify((*kind).into(), &read_input(data.as_deref())?, codec)?
        }
        Commands::ExitCodes => {
            print_exit_codes();
            return Ok(None);
        }
    };
    Ok(Some(report))
}

fn run(cli: &Cli) -> CliResult {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(result) => return result,
    };
    init_logging(cli, &config);
    tracing::debug!(?config, "loaded configuration");

    let format = cli.format.unwrap_or(config.format);
    let codec = HexCodec::new().format(config.hex_style);

    let report = match run_command(cli, &codec) {
        Ok(Some(report)) => report,
        Ok(None) => return CliResult::success(),
        Err(result) => return result,
    };

    let code = report.exit_code();
    match report.render(format, &codec) {
        Ok(output) if code == ExitCodes::SUCCESS => CliResult::success_with_message(output),
        Ok(output) => CliResult::error(code, output),
        Err(err) => err.into(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let result = run(&cli);

    match &result {
        CliResult::Success(Some(output)) => println!("{}", output),
        CliResult::Success(None) => {}
        CliResult::Error(code, msg) if *code == ExitCodes::VALIDATION_FAILED => {
            // Mismatch reports are normal output for scripts to parse
            println!("{}", msg);
        }
        CliResult::Error(code, msg) => {
            tracing::error!(code, "{}", msg);
            if !cli.quiet {
                eprintln!("error: {}", msg);
            }
        }
    }

    std::io::Write::flush(&mut std::io::stdout()).context("failed to flush stdout")?;
    Ok(result.to_exit_code())
}
