use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;

use crate::commands::USER_CANCELLED;
use crate::utils::styles::{fmt_bold, fmt_dimmed, fmt_success};
use circuitnote_config::{Config, Settings};

#[derive(Debug, Clone, Parser)]
pub struct InitCmd {
    /// Use default values and skip interactive prompts
    #[arg(long, short)]
    pub yes: bool,
}

impl InitCmd {
    pub(crate) fn handle(&self, path: &Utf8PathBuf) -> Result<()> {
        let mut cfg = if Config::load(path).is_ok() {
            let re_init = if self.yes {
                true
            } else {
                inquire::Confirm::new(&format!(
                    "A circuitnote config already exists at {}, overwrite it?",
                    fmt_dimmed(path.as_ref())
                ))
                .with_default(true)
                .prompt()?
            };
            if re_init {
                Config::default().with_path(path)
            } else {
                anyhow::bail!(USER_CANCELLED)
            }
        } else {
            Config::default().with_path(path)
        };

        if !self.yes {
            cfg.settings = prompt_settings()?;
        }

        cfg.save()?;

        info!(
            "{}",
            fmt_success(&format!(
                "{name} configuration created: {path}",
                name = fmt_bold("circuitnote"),
                path = fmt_dimmed(cfg.path().as_str()),
            ))
        );

        Ok(())
    }
}

fn prompt_settings() -> Result<Settings> {
    let defaults = Settings::default();

    let offline_mode = inquire::Confirm::new("Use the offline simulator bundle when installed?")
        .with_default(defaults.offline_mode)
        .with_help_message(&format!(
            "install it any time with {}",
            fmt_bold("circuitnote assets download")
        ))
        .prompt()?;

    let editable = inquire::Confirm::new("Allow interacting with embedded simulations?")
        .with_default(defaults.editable)
        .prompt()?;

    let edit_link = inquire::Confirm::new("Show an [EDIT] link above each simulation?")
        .with_default(defaults.edit_link)
        .prompt()?;

    let circuit_js_url = inquire::Text::new("Remote simulator URL:")
        .with_default(defaults.circuit_js_url.as_str())
        .prompt()?
        .parse()?;

    let circuit_tag = inquire::Text::new("Code block tag:")
        .with_default(&defaults.circuit_tag)
        .prompt()?;

    Ok(Settings {
        editable,
        edit_link,
        circuit_js_url,
        circuit_tag,
        offline_mode,
    })
}
