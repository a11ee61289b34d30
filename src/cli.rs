//! Command-line surface shared by both binaries
//!
//! Neither program takes input. Any argument vector is accepted and ignored,
//! including ones clap would otherwise reject.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct IgnoredArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl IgnoredArgs {
    /// Parses process arguments, never failing
    pub fn parse_lenient() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }
}
