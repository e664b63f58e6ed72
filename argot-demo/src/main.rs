mod error;

use std::{env, process::ExitCode};

use anyhow::Context;
use argot::{Argument, ArgumentConfig, RawInput, ValueType};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::error::DemoError;

/// `resize [--mode MODE] [-v...] SIZE SIZE`
#[derive(Debug)]
struct Resize {
    mode: Argument,
    verbose: Argument,
    size: Argument,
}

/// The words from the command line, sorted by the argument they belong to
#[derive(Debug, Default)]
struct Words<'a> {
    mode: Option<&'a str>,
    verbose: u32,
    size: Vec<&'a str>,
}

impl Resize {
    fn new() -> Result<Self, DemoError> {
        Ok(Self {
            mode: ArgumentConfig::new()
                .long("mode")
                .help("how to fit the image into the new size")
                .choices([
                    ("fit", "scale to fit inside, keeping the aspect ratio"),
                    ("fill", "scale to cover, keeping the aspect ratio"),
                    ("stretch", "scale to exactly the new size"),
                ])
                .default("fit")
                .build()?,
            verbose: ArgumentConfig::new()
                .long("verbose")
                .short("v")
                .help("print more; may be repeated")
                .arity(0)
                .append(true)
                .build()?,
            size: ArgumentConfig::new()
                .name("SIZE")
                .help("the new width and height")
                .value_type(ValueType::Int)
                .arity(2)
                .build()?,
        })
    }

    fn usage(&self) -> String {
        format!(
            "usage: resize {} {} {}",
            self.mode.synopsis(),
            self.verbose.synopsis(),
            self.size.synopsis(),
        )
    }

    /// Sort the words into arguments. This only understands exactly the
    /// forms this command uses; it is not a general tokenizer.
    fn split<'a>(&self, args: &'a [String]) -> Result<Words<'a>, DemoError> {
        let mut words = Words::default();
        let mut args = args.iter().map(String::as_str);
        let mut positional_only = false;

        while let Some(arg) = args.next() {
            if positional_only {
                words.size.push(arg);
            } else if arg == "--" {
                positional_only = true;
            } else if let Some(value) = arg.strip_prefix("--mode=") {
                words.mode = Some(value);
            } else if arg == "--mode" {
                let value = args
                    .next()
                    .ok_or_else(|| DemoError::NeedArg(self.mode.display_form().to_string()))?;
                words.mode = Some(value);
            } else if arg == "--verbose" {
                words.verbose = words.verbose.saturating_add(1);
            } else if let Some(flags) = arg.strip_prefix('-')
                && !flags.is_empty()
                && flags.chars().all(|c| c == 'v')
            {
                let count = u32::try_from(flags.len()).unwrap_or(u32::MAX);
                words.verbose = words.verbose.saturating_add(count);
            } else if arg.starts_with('-') && arg.parse::<i64>().is_err() {
                return Err(DemoError::Unrecognized(arg.to_owned()));
            } else {
                words.size.push(arg);
            }
        }

        debug!(?words, "split command line");
        Ok(words)
    }

    fn run(&self, args: &[String]) -> Result<(), DemoError> {
        let words = self.split(args)?;

        let size = match words.size.as_slice() {
            [] if self.size.required() => {
                return Err(DemoError::Required(self.size.display_form().to_string()));
            }
            [] => RawInput::Multiple(None),
            size => RawInput::Multiple(Some(size)),
        };

        let mode = self.mode.coerce(RawInput::Single(words.mode))?;
        let verbose = self.verbose.coerce(RawInput::Count(words.verbose))?;
        let size = self.size.coerce(size)?;

        println!("{}: {mode}", self.mode.name());
        println!("{}: {verbose}", self.verbose.name());
        println!("{}: {size}", self.size.name());

        Ok(())
    }
}

/// Log to stderr, at the level given by `ARGOT_LOG` (`warn` by default)
fn initialize_logging() -> anyhow::Result<()> {
    let level = match env::var("ARGOT_LOG") {
        Ok(level) => level
            .parse::<Level>()
            .with_context(|| format!("invalid ARGOT_LOG level {level:?}"))?,
        Err(_) => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")
}

fn collect_args() -> Result<Vec<String>, DemoError> {
    env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| DemoError::InvalidUtf8(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

fn main() -> ExitCode {
    if let Err(error) = initialize_logging() {
        eprintln!("resize: {error:#}");
    }

    let resize = match Resize::new() {
        Ok(resize) => resize,
        Err(error) => {
            eprintln!("resize: {error}");
            return ExitCode::from(2);
        }
    };

    match collect_args().and_then(|args| resize.run(&args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("resize: {error}");
            eprintln!("{}", resize.usage());
            ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2))
        }
    }
}
