use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Plays checkers between bots.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    ///
    /// Game results are logged at `info`, the reasoning of bots at `debug`
    /// and the inner workings of the rules at `trace`.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    pub fn execute(self) -> Result<(), Anyhow> {
        logging(self.verbosity);
        self.run()
    }

    #[instrument(level = "trace", skip(self), err)]
    fn run(self) -> Result<(), Anyhow> {
        self.applet.unwrap_or_default().execute()
    }
}

/// Logs to stderr, so that the games printed to stdout can be piped elsewhere.
fn logging(verbosity: Level) {
    let filter = Targets::new()
        .with_target("cli", verbosity)
        .with_target("lib", verbosity)
        .with_default(min(Level::WARN, verbosity));

    let writer = layer()
        .pretty()
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stderr);

    registry().with(filter).with(writer).init();
}
