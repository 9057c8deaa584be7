#![allow(missing_docs)]
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{Level, info};

use kubesplit_core::{CollisionPolicy, STDIN_ARG, SplitOptions, Splitter};

const USAGE: &str = "\
Write each document of YAML streams to its own file.

Files are named <apiVersion>__<kind>__<namespace>__<name>.yaml after the
resource they hold. Failures are logged to stderr and never change the exit code.

USAGE:
    kubesplit [OPTIONS] [SOURCE]...

ARGS:
    <SOURCE>...    Files to split, '-' reads the standard input

OPTIONS:
    -o, --output-dir <DIR>    Directory receiving the files [default: current directory]
        --strict              Skip a document whose file was already written by this run
    -v, --verbose             Also log successful writes
    -h, --help                Print this help
";

fn main() -> Result<()> {
    let args = AppArgs::parse(pico_args::Arguments::from_env()).context("parsing arguments")?;
    if args.help {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .init();

    let splitter = Splitter::new(args.options());
    let report = splitter.run(&args.sources);

    info!(
        sources = report.sources,
        failed_sources = report.failed_sources,
        documents = report.documents,
        failed_documents = report.failed_documents,
        written = report.written_count(),
        "done"
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_usage() {
    print!("{USAGE}");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct AppArgs {
    help: bool,
    verbose: bool,
    strict: bool,
    output_dir: Option<PathBuf>,
    sources: Vec<OsString>,
}

impl AppArgs {
    fn parse(mut pargs: pico_args::Arguments) -> Result<Self> {
        let help = pargs.contains(["-h", "--help"]);
        let verbose = pargs.contains(["-v", "--verbose"]);
        let strict = pargs.contains("--strict");
        let output_dir = pargs
            .opt_value_from_str(["-o", "--output-dir"])
            .context("parsing output-dir argument")?;

        let mut sources = Vec::new();
        let mut after_separator = false;
        for arg in pargs.finish() {
            if after_separator {
                sources.push(arg);
            } else if arg == "--" {
                after_separator = true;
            } else if is_option(&arg) {
                bail!("unknown option '{}'", arg.to_string_lossy());
            } else {
                sources.push(arg);
            }
        }

        Ok(Self {
            help,
            verbose,
            strict,
            output_dir,
            sources,
        })
    }

    fn options(&self) -> SplitOptions {
        let collision_policy = if self.strict {
            CollisionPolicy::Strict
        } else {
            CollisionPolicy::Overwrite
        };
        let options = SplitOptions::default().with_collision_policy(collision_policy);
        match &self.output_dir {
            Some(dir) => options.with_output_dir(dir),
            None => options,
        }
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

fn is_option(arg: &OsString) -> bool {
    arg.to_str()
        .is_some_and(|arg| arg.starts_with('-') && arg != STDIN_ARG)
}
