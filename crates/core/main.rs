#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod commands;
mod file;
mod interact;

use commands::Commands;

use ean_search::{Config, EanSearch, Language, Token};

use clap::{Args, Parser};
use eyre::WrapErr;
use log::trace;
use url::Url;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                token,
                lang,
                base_url,
                interact,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let token = Token::new(token.unwrap_or_default())
        .wrap_err("No API token given, use --token or set EAN_SEARCH_API_TOKEN")?;

    let mut config = Config::new(token);
    if let Some(base_url) = base_url {
        trace!("Using base url '{base_url}'");
        config = config.with_base_url(base_url);
    }

    let client = EanSearch::new(config);
    let message = command.execute(&client, lang, interact)?;

    if !message.is_empty() {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .module(module_path!())
        .module("ean_search")
        .verbosity(verbosity)
        .init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "ean")]
#[clap(about = "Look up products by EAN, GTIN or ISBN using the ean-search.org database")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// API token issued by ean-search.org
    #[clap(
        short,
        long,
        env = "EAN_SEARCH_API_TOKEN",
        hide_env_values = true,
        global = true
    )]
    token: Option<String>,

    /// Language of the product names, by name (e.g. german) or code
    #[clap(short, long, default_value = "any", global = true)]
    lang: Language,

    #[clap(long, hide = true, global = true)]
    base_url: Option<Url>,

    /// Ask whether to fetch the next page while a search has more results.
    #[clap(short, long, global = true)]
    interact: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only errors are printed to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}
