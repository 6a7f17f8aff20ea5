pub mod commands;
pub mod utils;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::commands::{
    assets::AssetsCmd, config::ConfigCmd, edit::EditCmd, init::InitCmd, render::RenderCmd,
};
use circuitnote_config::Config;

#[derive(Parser)]
#[command(name = "circuitnote")]
#[command(version)]
#[command(about = "Live circuit simulations in your notes")]
#[command(
    long_about = "Circuitnote renders Markdown notes whose fenced code blocks contain circuit \
descriptions as live embedded simulations, pointing each embed at the remote simulator or at a \
locally installed offline bundle."
)]
#[command(after_help = "EXAMPLES:\n  \
    circuitnote init \n  \
    circuitnote render note.md -o note.html\n  \
    circuitnote assets download\n  \
    circuitnote edit amplifier.ckt\n\
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path, defaults to ./circuitnote.json
    #[arg(long, short = 'c', global = true, default_value_t = Config::default_path())]
    pub config: Utf8PathBuf,

    /// No logging except for errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verbose logging (-v) or trace logging (-vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    #[allow(clippy::missing_errors_doc)]
    pub async fn handle(&self) -> anyhow::Result<()> {
        let cfg = Config::load(&self.config);

        match &self.command {
            Commands::Init(cmd) => cmd.handle(&self.config)?,
            Commands::Config(cmd) => cmd.handle(&cfg?)?,
            Commands::Render(cmd) => cmd.handle(&cfg?).await?,
            Commands::Assets(cmd) => cmd.handle().await?,
            Commands::Edit(cmd) => cmd.handle(&cfg?)?,
        }

        Ok(())
    }
}

#[derive(Debug, Subcommand)]
#[command(styles=utils::styles::get_styles())]
pub enum Commands {
    /// Initialize configuration file
    #[command(long_about = "Initialize the circuitnote.json configuration file.")]
    Init(InitCmd),

    /// Show the effective configuration
    #[command(long_about = "Print the effective settings and where they were loaded from.")]
    Config(ConfigCmd),

    /// Render a Markdown note to HTML with embedded simulations
    #[command(
        long_about = "Render a Markdown note to HTML, replacing circuit code blocks with live \
embedded simulations."
    )]
    Render(RenderCmd),

    /// Manage the offline simulator bundle
    #[command(subcommand)]
    Assets(AssetsCmd),

    /// Open a circuit in the remote simulator for editing
    #[command(
        long_about = "Build the remote simulator URL for a circuit file and open it in the \
system browser, with interactivity forced on."
    )]
    Edit(EditCmd),
}
