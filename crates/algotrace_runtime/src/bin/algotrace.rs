//! algotrace CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use algotrace_builders::Algorithm;
use algotrace_playback::{PlaybackConfig, Player, TickOutcome};
use algotrace_runtime::{AnyTrace, HumanFormatter, InputLimits, Sampler, input};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    algorithm: Option<String>,
    input: Option<String>,
    random: Option<usize>,
    seed: u64,
    play: bool,
    interval_ms: Option<u64>,
    save: Option<PathBuf>,
    load: Option<PathBuf>,
    step: Option<usize>,
    markers: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--play" => config.play = true,
            "--markers" => config.markers = true,
            flag @ ("--random" | "--seed" | "--interval" | "--step" | "--save" | "--load") => {
                i += 1;
                let raw = value(args, i, flag)?;
                let bad = || format!("invalid {flag} value: {raw}");
                match flag {
                    "--random" => config.random = Some(raw.parse().map_err(|_| bad())?),
                    "--seed" => config.seed = raw.parse().map_err(|_| bad())?,
                    "--interval" => config.interval_ms = Some(raw.parse().map_err(|_| bad())?),
                    "--step" => config.step = Some(raw.parse().map_err(|_| bad())?),
                    "--save" => config.save = Some(PathBuf::from(raw)),
                    _ => config.load = Some(PathBuf::from(raw)),
                }
            }
            arg if arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("unknown option: {arg}").into());
            }
            positional => {
                if config.algorithm.is_none() {
                    config.algorithm = Some(positional.to_string());
                } else if config.input.is_none() {
                    config.input = Some(positional.to_string());
                } else {
                    return Err(format!("unexpected argument: {positional}").into());
                }
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("algotrace {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let trace = obtain_trace(&config)?;

    if let Some(path) = &config.save {
        algotrace_runtime::save_to_file(&trace, path)?;
        eprintln!("Saved {} steps to {}", trace.len(), path.display());
    }

    let mut formatter = HumanFormatter::new();
    if config.markers {
        formatter = formatter.with_markers();
    }

    if let Some(step) = config.step {
        println!("{}", trace.format_step(&formatter, step));
    } else if config.play {
        play(&trace, &formatter, config.interval_ms);
    } else {
        println!("{}", trace.format_all(&formatter));
    }

    println!("\n{}: {}", trace.algorithm(), trace.summary());
    Ok(())
}

fn obtain_trace(config: &CliConfig) -> Result<AnyTrace, Box<dyn std::error::Error>> {
    if let Some(path) = &config.load {
        return Ok(algotrace_runtime::load_from_file(path)?);
    }

    let name = config
        .algorithm
        .as_deref()
        .ok_or("missing ALGORITHM (see --help)")?;
    let algorithm: Algorithm = name.parse()?;

    let limits = InputLimits::for_algorithm(algorithm);
    let input = match (&config.input, config.random) {
        (Some(text), None) => input::parse(algorithm, text, &limits)?,
        (None, Some(size)) => {
            let sample = Sampler::new(config.seed).sample_within(algorithm, size, &limits)?;
            tracing::debug!(?sample, seed = config.seed, "generated sample");
            sample
        }
        (Some(_), Some(_)) => return Err("give either INPUT or --random, not both".into()),
        (None, None) => return Err(format!("missing INPUT for {algorithm}").into()),
    };

    Ok(AnyTrace::build(algorithm, &input)?)
}

fn play(trace: &AnyTrace, formatter: &HumanFormatter, interval_ms: Option<u64>) {
    let mut config = PlaybackConfig::default().with_start_playing(true);
    if let Some(ms) = interval_ms {
        config = config.with_interval_ms(ms);
    }
    let interval = config.interval();
    let mut player = Player::new(trace.len(), config);

    println!("{}", trace.format_step(formatter, player.index()));
    loop {
        thread::sleep(interval);
        match player.tick() {
            TickOutcome::Advanced(index) => println!("{}", trace.format_step(formatter, index)),
            TickOutcome::Finished(index) => {
                if index > 0 {
                    println!("{}", trace.format_step(formatter, index));
                }
                break;
            }
            TickOutcome::Paused | TickOutcome::Restarted => break,
        }
    }
}

fn print_help() {
    println!(
        "\x1b[1malgotrace\x1b[0m - Step-by-step traces of classic algorithms

\x1b[1mUSAGE:\x1b[0m
    algotrace <ALGORITHM> [INPUT] [OPTIONS]
    algotrace --load PATH [OPTIONS]

\x1b[1mALGORITHMS:\x1b[0m
    sorted        Check that an array is in ascending order
    palindrome    Check recursively that a string reads the same both ways
    reverse       Reverse an array in place by recursive swapping
    spiral        Read a matrix in clockwise spiral order
    brackets      Check that brackets are balanced using a stack

\x1b[1mINPUT:\x1b[0m
    Numbers are separated by commas or spaces. Grid rows are separated
    by ';' or newlines. Strings are used as given.

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, --verbose      Log debug events to stderr
    --random N         Trace a seeded sample of size N instead of INPUT
    --seed S           Seed for --random (default 0)
    --play             Print steps one at a time
    --interval MS      Delay between steps with --play (default 1000)
    --step N           Print only step N (clamped to the trace)
    --markers          Show the highlighted source lines
    --save PATH        Save the trace as MessagePack
    --load PATH        Load a saved trace instead of building one

\x1b[1mEXAMPLES:\x1b[0m
    algotrace sorted \"1, 2, 3, 4, 5, 6, 7\"
    algotrace palindrome racecar --play --interval 300
    algotrace spiral \"1 2 3; 4 5 6; 7 8 9\" --markers
    algotrace brackets \"({{[]}})\" --save brackets.msgpack
    algotrace --load brackets.msgpack --step 3

Set RUST_LOG to filter log output, e.g. RUST_LOG=algotrace_builders=trace."
    );
}
