use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Build the TLS configuration once, report the result and exit.
    #[arg(long)]
    pub check: bool,
    /// Install a certificate from a JSON reload payload after startup.
    #[arg(long)]
    pub payload: Option<String>,
}
