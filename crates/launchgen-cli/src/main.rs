use anyhow::{Context, Result};
use clap::Parser;
use launchgen_config::{init_tracing, LaunchgenConfig, CONFIG_ENV_VAR};
use launchgen_core::{convert_dir, write_manifest, ConvertOptions, LAUNCH_FILE_NAME};
use std::ffi::OsString;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: launchgen ./path-to-runConfigurations --module ModuleName
\t--module ModuleName    this flag will override the runConfigurations default module name with the ModuleName provided.";

/// Convert IntelliJ run configurations into a VS Code `launch.json`.
///
/// The file is written to the current directory, replacing any existing `launch.json`.
#[derive(Debug, Parser)]
#[command(name = "launchgen", version, about)]
struct Cli {
    /// Directory containing IntelliJ run configurations (usually `.idea/runConfigurations`)
    path: PathBuf,
    /// Use this module name for every configuration instead of the one it references
    #[arg(short, long, value_name = "MODULE_NAME")]
    module: Option<String>,
    /// Positionals after the directory are accepted and ignored.
    #[arg(hide = true)]
    extra: Vec<OsString>,
}

fn main() {
    let exit_code = match run(std::env::args_os().collect()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(args: Vec<OsString>) -> Result<i32> {
    if !accepts_argument_count(args.len().saturating_sub(1)) {
        println!("{USAGE}");
        return Ok(0);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            // Covers `--help`/`--version` as well as invalid flags.
            err.print()?;
            return Ok(err.exit_code());
        }
    };

    init_logging();
    tracing::debug!(
        target: "launchgen.cli",
        path = %cli.path.display(),
        module_override = ?cli.module,
        ignored_arguments = cli.extra.len(),
        "converting run configurations"
    );

    let options = ConvertOptions {
        module_override: cli.module,
        ..ConvertOptions::default()
    };
    let manifest = convert_dir(&cli.path, &options)?;
    write_manifest(&manifest)?;

    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    println!(
        "{LAUNCH_FILE_NAME} created successfully in '{}'!",
        cwd.display()
    );
    Ok(0)
}

/// A directory alone, or a directory plus `--module <name>` in either order.
fn accepts_argument_count(count: usize) -> bool {
    count == 1 || count == 3
}

fn init_logging() {
    let config = match LaunchgenConfig::load_from_env() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!(
                "launchgen: failed to load config from {CONFIG_ENV_VAR}: {err}; continuing with defaults"
            );
            LaunchgenConfig::default()
        }
    };
    init_tracing(&config.logging);
}
