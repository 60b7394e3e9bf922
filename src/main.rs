use acceptor::description::{append_inputs, read_description};
use acceptor::{AcceptorConfig, AutomatonModel, BatchReport, Evaluator, ValidationPolicy};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "acceptor",
    version,
    about = "Run input strings through a deterministic finite automaton"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON configuration file
    #[arg(long, global = true, env = "ACCEPTOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate every input string listed in a description file
    Run {
        /// Description file: automaton header followed by one input per line
        input: PathBuf,

        /// Also write the numbered verdicts to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report as JSON instead of numbered lines
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Tolerate state ids outside the declared state space
        #[arg(long, default_value_t = false)]
        lenient: bool,
    },

    /// Append input strings to a description file
    Append {
        input: PathBuf,

        /// Strings to append; read from stdin when omitted
        strings: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            input,
            output,
            json,
            lenient,
        } => {
            let policy = if lenient {
                ValidationPolicy::Lenient
            } else {
                config.policy
            };
            run(&input, output.as_deref(), json, policy, &config)
        }
        Commands::Append { input, strings } => append(&input, strings, &config),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AcceptorConfig> {
    let Some(path) = path else {
        return Ok(AcceptorConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    AcceptorConfig::from_json(&text)
        .with_context(|| format!("Invalid config {}", path.display()))
}

fn run(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    policy: ValidationPolicy,
    config: &AcceptorConfig,
) -> Result<()> {
    let file = read_description(input, config)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let model = AutomatonModel::construct_with(&file.description, policy)
        .with_context(|| format!("Invalid automaton in {}", input.display()))?;

    if file.inputs.is_empty() {
        warn!(path = %input.display(), "description contains no input strings");
    }

    let report = BatchReport::evaluate(&Evaluator::new(), &model, &file.inputs);
    info!(
        accepted = report.accepted(),
        rejected = report.rejected(),
        "evaluation finished"
    );

    let stdout = io::stdout();
    if json {
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.write_to(stdout.lock())?;
    }

    if let Some(path) = output {
        let writer = BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        );
        report.write_to(writer)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn append(input: &Path, strings: Vec<String>, config: &AcceptorConfig) -> Result<()> {
    let strings = if strings.is_empty() {
        eprintln!(
            "Enter strings to append, one per line ('{}' or EOF to finish):",
            config.append_terminator
        );
        read_until_terminator(io::stdin().lock(), &config.append_terminator)?
    } else {
        strings
    };

    let written = append_inputs(input, &strings)
        .with_context(|| format!("Failed to append to {}", input.display()))?;
    println!("Appended {written} string(s) to {}", input.display());
    Ok(())
}

fn read_until_terminator<R: BufRead>(reader: R, terminator: &str) -> io::Result<Vec<String>> {
    let mut strings = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line == terminator {
            break;
        }
        strings.push(line.to_string());
    }
    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::parse_from(["acceptor", "-vv", "run", "in.txt", "-o", "out.txt", "--lenient"]);

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run {
                input,
                output,
                json,
                lenient,
            } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
                assert!(!json);
                assert!(lenient);
            }
            other => panic!("Expected run command, got {other:?}"),
        }
    }

    #[test]
    fn stdin_reading_stops_at_terminator() {
        let input = "ab\nba\r\nfim\nignored\n";
        let strings = read_until_terminator(input.as_bytes(), "fim").unwrap();
        assert_eq!(strings, vec!["ab", "ba"]);
    }

    #[test]
    fn stdin_reading_stops_at_eof() {
        let strings = read_until_terminator("x\n".as_bytes(), "fim").unwrap();
        assert_eq!(strings, vec!["x"]);
    }
}
