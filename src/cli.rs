//! Defines the command-line interface for the application.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "html2md-filter",
    version,
    about = "Convert HTML read from stdin into Markdown written to stdout.",
    long_about = "Convert HTML read from stdin into Markdown written to stdout.\n\n\
                  The whole input is read before conversion starts. Set RUST_LOG=debug \
                  to log what each step did."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["html2md-filter"]).is_ok());
        assert!(Cli::try_parse_from(["html2md-filter", "page.html"]).is_err());
        assert!(Cli::try_parse_from(["html2md-filter", "--output", "x.md"]).is_err());
    }
}
