use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::load_settings;

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = modhub_search::settings_path();
    let settings = load_settings(None)?;

    log::info!(
        "{}",
        "modhub Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    let rendered = settings
        .to_toml_string()
        .map_err(|e| CliError::config(format!("cannot render settings: {e}")))?;
    crate::log_blank();
    for line in rendered.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", modhub_search::settings_path().display());
}
