//! Command-line front-end: create a logger, optionally apply a configuration,
//! and emit messages, the system summary, or the demonstration sequence.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use levels::{Level, LevelError};
use logging::{
    DEFAULT_LOGGER_NAME, Logger, LoggerOptions, LoggerRegistry, LoggingConfig, LoggingError,
};
use thiserror::Error;

const PROGRAM_NAME: &str = "tierlog";
const EXIT_SUCCESS: u8 = 0;
const EXIT_RUNTIME: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Runtime failures reported as `tierlog: <message>`.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("failed to write to stdout: {0}")]
    Output(#[from] io::Error),
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct ParsedArgs {
    name: String,
    directory: PathBuf,
    stream_level: Level,
    file_sink: bool,
    stream_sink: bool,
    config: Option<PathBuf>,
    level: Level,
    system_info: bool,
    demo: bool,
    message: Vec<String>,
}

impl ParsedArgs {
    fn options(&self) -> LoggerOptions {
        LoggerOptions {
            directory: self.directory.clone(),
            stream_level: self.stream_level,
            add_file_sink: self.file_sink,
            add_stream_sink: self.stream_sink,
        }
    }
}

fn parse_level(text: &str) -> Result<Level, LevelError> {
    text.parse()
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Emit messages through a tiered multi-sink logger.")
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .default_value(DEFAULT_LOGGER_NAME)
                .help("Logger name; also names the default log file."),
        )
        .arg(
            Arg::new("directory")
                .long("directory")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory for log files (default: current directory)."),
        )
        .arg(
            Arg::new("stream-level")
                .long("stream-level")
                .value_name("LEVEL")
                .value_parser(parse_level)
                .default_value("INFO")
                .help("Minimum level printed to stdout (name or number)."),
        )
        .arg(
            Arg::new("no-file")
                .long("no-file")
                .help("Do not attach the <NAME>.log file sink.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-stream")
                .long("no-stream")
                .help("Do not attach the stdout sink.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Apply a TOML logging configuration first."),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .value_name("LEVEL")
                .value_parser(parse_level)
                .default_value("INFO")
                .help("Level of MESSAGE (name or number)."),
        )
        .arg(
            Arg::new("system-info")
                .long("system-info")
                .help("Write a system information summary at FILEONLY.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Run the demonstration sequence.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .action(ArgAction::Append)
                .num_args(0..)
                .trailing_var_arg(true)
                .help("Message to emit; words are joined with spaces."),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(arguments)?;

    Ok(ParsedArgs {
        name: matches
            .remove_one::<String>("name")
            .unwrap_or_else(|| DEFAULT_LOGGER_NAME.to_owned()),
        directory: matches.remove_one::<PathBuf>("directory").unwrap_or_default(),
        stream_level: matches
            .remove_one::<Level>("stream-level")
            .unwrap_or(Level::INFO),
        file_sink: !matches.get_flag("no-file"),
        stream_sink: !matches.get_flag("no-stream"),
        config: matches.remove_one::<PathBuf>("config"),
        level: matches.remove_one::<Level>("level").unwrap_or(Level::INFO),
        system_info: matches.get_flag("system-info"),
        demo: matches.get_flag("demo"),
        message: matches
            .remove_many::<String>("message")
            .map(Iterator::collect)
            .unwrap_or_default(),
    })
}

/// Parses `arguments`, runs against the process-wide registry, and maps the
/// outcome to an exit status.
pub(crate) fn run_with<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    ExitCode::from(run_in(LoggerRegistry::global(), arguments, stdout, stderr))
}

fn run_in<I, S, Out, Err>(
    registry: &LoggerRegistry,
    arguments: I,
    stdout: &mut Out,
    stderr: &mut Err,
) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let rendered = error.render();
            if error.use_stderr() {
                let _ = write!(stderr, "{rendered}");
                return EXIT_USAGE;
            }
            let _ = write!(stdout, "{rendered}");
            return EXIT_SUCCESS;
        }
    };

    match execute(registry, &parsed, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            EXIT_RUNTIME
        }
    }
}

fn execute<Out: Write>(
    registry: &LoggerRegistry,
    parsed: &ParsedArgs,
    stdout: &mut Out,
) -> Result<(), CliError> {
    if let Some(path) = &parsed.config {
        let config = LoggingConfig::from_path(path).map_err(LoggingError::from)?;
        config.apply(registry)?;
    }

    let logger = registry.get_or_create(&parsed.name, &parsed.options())?;

    if parsed.demo {
        run_demo(&logger, &parsed.directory, stdout)?;
    }
    if parsed.system_info {
        logger.log_system_info();
    }
    if !parsed.message.is_empty() {
        logger.log(parsed.level, &parsed.message.join(" "));
    }

    registry.flush_all()?;
    stdout.flush()?;
    Ok(())
}

fn emit_every_level(logger: &Logger) {
    logger.raise("This is a raisemsg level (99) message");
    logger.critical("This is a critical level (50) message");
    logger.error("This is an error level (40) message");
    logger.warning("This is a warning level (30) message");
    logger.important_info("This is an importantinfo level (25) message");
    logger.info("This is a info level (20) message");
    logger.debug("This is a debug level (10) message");
    logger.file_only("This is a fileonly level (1) message");
}

/// Walks through threshold changes, an extra file sink, the diagnostics
/// helpers, and error logging. Narration goes to `stdout`; records go through
/// the logger's own sinks.
fn run_demo<Out: Write>(logger: &Logger, directory: &Path, stdout: &mut Out) -> Result<(), CliError> {
    writeln!(stdout, "\nStream level 0: every level is shown.\n")?;
    stdout.flush()?;
    logger.set_stream_level(Level::NOTSET);
    emit_every_level(logger);

    writeln!(stdout, "\nStream level 20: INFO and above are shown.\n")?;
    stdout.flush()?;
    logger.set_stream_level(Level::INFO);
    emit_every_level(logger);

    let path = logger.add_file_handler("demo", directory, Level::FILE_ONLY)?;
    writeln!(stdout, "\nAdded file sink {}.", path.display())?;

    writeln!(stdout, "Writing system information to the log files.")?;
    logger.log_system_info();

    writeln!(stdout, "Writing a dictionary to the log files.")?;
    logger.log_dict([("a", 1), ("b", 2), ("c", 3)]);

    writeln!(stdout, "\nStream level 51: only RAISEMSG is shown.\n")?;
    stdout.flush()?;
    logger.set_stream_level(51u8);
    emit_every_level(logger);

    writeln!(stdout, "\nLogging a parse failure at ERROR to the log files.")?;
    if let Err(error) = "one point zero".parse::<f64>() {
        logger.exception("This is an exception message", &error);
    }
    Ok(())
}
