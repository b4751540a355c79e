use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use repo_search_lib::DEFAULT_API_URL;
use std::path::PathBuf;

/// Search GitHub repositories.
///
/// Without a query, reads one command per line from stdin: a query starts a
/// search, `:N` shows details of result N, `:q` quits.
#[derive(Debug, Parser)]
#[command(name = "repo-search", version, about)]
pub struct Args {
    #[clap(
        value_name = "QUERY",
        help = "Search query, appended to the request URL as-is (encode it yourself)"
    )]
    pub query: Option<String>,

    #[clap(
        long = "api-url",
        value_name = "URL",
        help = "GitHub REST API base URL",
        env = "REPO_SEARCH_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(
        short = 'd',
        long = "detail",
        value_name = "N",
        help = "Also show details of result N"
    )]
    pub detail: Option<usize>,

    #[clap(
        short = 'o',
        long = "avatar-out",
        value_name = "PATH",
        help = "Write the owner avatar of the detailed result to PATH"
    )]
    pub avatar_out: Option<PathBuf>,

    #[clap(long = "json", help = "Print results as JSON")]
    pub json: bool,
}

impl Args {
    /// With a QUERY the only detail view is `--detail`, so `--avatar-out`
    /// needs it. Interactive sessions pick the result with `:N` instead.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.query.is_some() && self.avatar_out.is_some() && self.detail.is_none() {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "--avatar-out requires --detail when a QUERY is given",
            ));
        }
        Ok(())
    }
}
