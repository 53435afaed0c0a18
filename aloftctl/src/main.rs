use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use aloft_common::{init_logging, LogOpts};
use aloftctl::{
    fetch_snapshot, locate_point, parse_file, run_history, Config, Opts, SubCommand,
};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    let lopts = LogOpts {
        use_tree: opts.tree,
        use_file: opts.log_dir.clone(),
    };
    init_logging(NAME, &lopts)?;

    // Completion does not need anything else
    //
    if let SubCommand::Completion(copts) = &opts.subcmd {
        generate(copts.shell, &mut Opts::command(), NAME, &mut io::stdout());
        return Ok(());
    }

    let cfg = Config::load(opts.config.as_deref())?;

    // Banner
    //
    banner();
    info!("Modules: {}", modules());

    handle_subcmd(&cfg, &opts.subcmd)
}

pub fn handle_subcmd(cfg: &Config, subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        // Handle `fetch hour`
        //
        SubCommand::Fetch(fopts) => {
            trace!("fetch");

            fetch_snapshot(cfg, fopts)?;
        }

        // Handle `parse file`
        //
        SubCommand::Parse(popts) => {
            trace!("parse");

            parse_file(popts)?;
        }

        // Handle `history`
        //
        SubCommand::History(hopts) => {
            trace!("history");

            run_history(cfg, hopts)?;
        }

        // Handle `locate lat lon`
        //
        SubCommand::Locate(lopts) => {
            trace!("locate");

            locate_point(cfg, lopts)?;
        }

        // Already handled before loading the configuration
        //
        SubCommand::Completion(_) => (),
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// All the library versions
///
fn modules() -> String {
    [
        aloft_common::version(),
        aloft_formats::version(),
        aloft_sources::version(),
        aloft_boundaries::version(),
        aloft_history::version(),
    ]
    .join(" ")
}

/// Display banner
///
fn banner() {
    eprintln!(
        r##"
{} by {}
{}
"##,
        version(),
        AUTHORS,
        crate_description!()
    )
}
