use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use weather_core::{Config, Coordinates, FixedPosition, View, WeatherWidget};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city or your location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show weather for a city.
    Search {
        /// City name, e.g. "Paris".
        city: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show weather for your current location.
    Locate {
        /// Latitude to use instead of looking up the position.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude to use instead of looking up the position.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for searches until you quit.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!(command = ?self.command, "running");

        match self.command {
            Command::Configure => configure(),
            Command::Search { city, json } => {
                let mut widget = WeatherWidget::from_config(&Config::load()?)?;
                widget.search(&city).await;
                print_outcome(widget.view(), json)
            }
            Command::Locate { lat, lon, json } => {
                let mut widget = WeatherWidget::from_config(&Config::load()?)?;
                if let (Some(lat), Some(lon)) = (lat, lon) {
                    widget = widget
                        .with_geolocator(Box::new(FixedPosition(Coordinates::new(lat, lon))));
                }

                widget.locate().await;
                if let (false, Some(label)) =
                    (json, located_label(widget.view(), widget.state().query_text()))
                {
                    println!("Location: {label}\n");
                }
                print_outcome(widget.view(), json)
            }
            Command::Interactive => interactive(WeatherWidget::from_config(&Config::load()?)?).await,
        }
    }
}

/// Place label to show after `locate`. The query text only names the current
/// position when the lookup succeeded; otherwise it is left over from an earlier search.
fn located_label<'a>(view: &View, query_text: &'a str) -> Option<&'a str> {
    if view.snapshot().is_none() {
        if !query_text.is_empty() {
            tracing::debug!(query_text, "locate failed, not showing previous query text");
        }
        return None;
    }

    Some(query_text).filter(|text| !text.is_empty())
}

/// Print the result area. An error view becomes a failing exit status.
fn print_outcome(view: &View, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", render::json(view)?);
    }

    match view {
        View::Error(msg) => bail!("{msg}"),
        _ => {
            if !json {
                println!("{}", render::view(view));
            }
            Ok(())
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // Read the file only, so an environment override is never persisted.
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    if key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(&key);
    let saved = config.save()?;
    println!("Saved API key to {}", saved.display());

    Ok(())
}

const SEARCH: &str = "Search by city";
const LOCATE: &str = "Use my location";
const QUIT: &str = "Quit";

async fn interactive(mut widget: WeatherWidget) -> anyhow::Result<()> {
    loop {
        let choice = match Select::new("Weather", vec![SEARCH, LOCATE, QUIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            SEARCH => {
                let text = Text::new("City:")
                    .with_initial_value(widget.state().query_text())
                    .with_placeholder("Enter a city name to know the weather")
                    .prompt();

                match text {
                    Ok(text) => {
                        widget.search(&text).await;
                    }
                    Err(InquireError::OperationCanceled) => continue,
                    Err(InquireError::OperationInterrupted) => break,
                    Err(e) => return Err(e.into()),
                }
            }
            LOCATE => {
                widget.locate().await;
                if let Some(label) = located_label(widget.view(), widget.state().query_text()) {
                    println!("Location: {label}");
                }
            }
            _ => break,
        }

        println!("\n{}\n", render::view(widget.view()));
    }

    Ok(())
}
