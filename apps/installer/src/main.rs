//! gwfinstall entry point.
//!
//! Usage:
//!   gwfinstall mywatchface.zip
//!   gwfinstall watchface.prg
//!   gwfinstall https://garmin.watchfacebuilder.com/watchface/xxxx/

mod app;
mod config;
mod console;
mod prompt;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "gwfinstall", version)]
#[command(about = "Install Garmin watch faces and apps onto a mounted device")]
struct Cli {
    /// Zip archive, .prg or .set file, or https:// URL to install
    #[arg(value_name = "FILE_OR_URL", allow_hyphen_values = true)]
    file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting gwfinstall");

    let config = config::Config::load()?;

    let rt = tokio::runtime::Runtime::new()?;
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    rt.block_on(app::run(cli.file, &config, &mut input, &mut output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_no_argument() {
        let cli = Cli::try_parse_from(["gwfinstall"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[test]
    fn accepts_one_positional() {
        let cli = Cli::try_parse_from(["gwfinstall", "mywatchface.zip"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some("mywatchface.zip"));
    }

    #[test]
    fn url_argument_is_kept_verbatim() {
        let url = "https://garmin.watchfacebuilder.com/watchface/abc/?id=1";
        let cli = Cli::try_parse_from(["gwfinstall", url]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(url));
    }

    #[test]
    fn leading_hyphen_is_a_file_name() {
        let cli = Cli::try_parse_from(["gwfinstall", "-face.prg"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some("-face.prg"));
    }
}
