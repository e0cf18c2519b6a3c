use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::app::services::DEFAULT_SEARCH_LIMIT;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile to read endpoints and flow settings from. Default is 'default'.
    /// If the profile is not configured, the public API endpoints are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: FetchCommand,
}

/// What to fetch
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    /// Fetch a random cat
    Cat,
    /// Fetch a random dog
    Dog,
    /// Fetch one cat image by its ID
    CatId {
        /// Image ID, e.g. 0XYvRd7oD
        id: String,
    },
    /// List several random cat images
    Search {
        #[clap(short = 'l', long, default_value_t = DEFAULT_SEARCH_LIMIT, help = "number of images")]
        limit: u32,
    },
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    command: FetchCommand,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn command(&self) -> &FetchCommand {
        &self.command
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            command: args.command,
        }
    }
}
