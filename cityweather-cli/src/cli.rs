use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{Config, WeatherClient, WeatherSource, WeatherView, catalog};
use inquire::{InquireError, Text};

use crate::display;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather and 7-day forecast by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather backend base URL, e.g. "http://127.0.0.1:5000".
    Configure {
        endpoint: String,
    },

    /// Show weather for a city.
    Show {
        /// City name.
        city: String,

        /// Backend base URL; overrides the configured one.
        #[arg(long)]
        endpoint: Option<String>,

        /// Print the view model as JSON instead of drawing it.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for city names until Esc or Ctrl-C.
    Interactive {
        /// Backend base URL; overrides the configured one.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// List the known weather codes.
    Codes,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { endpoint } => {
                let mut cfg = Config::load()?;
                cfg.set_endpoint(&endpoint)?;
                cfg.save()?;
                println!("Endpoint set to {}", cfg.endpoint_or_default());
            }
            Command::Show { city, endpoint, json } => {
                let mut view = WeatherView::new(client(endpoint)?);
                if let Some(out) = show(&mut view, &city, json).await? {
                    print!("{out}");
                }
            }
            Command::Interactive { endpoint } => {
                let mut view = WeatherView::new(client(endpoint)?);
                loop {
                    let input = match Text::new("City:").prompt() {
                        Ok(input) => input,
                        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                            break;
                        }
                        Err(err) => return Err(err).context("Failed to read city name"),
                    };

                    let Some(ticket) = view.begin_search(&input) else {
                        continue;
                    };
                    print!("{}", display::draw(&view.render_now()));

                    let result = view.source().fetch_weather(ticket.city()).await;
                    view.complete(ticket, result);
                    print!("{}", display::draw(&view.render_now()));
                }
            }
            Command::Codes => {
                for (code, entry) in catalog::entries() {
                    println!("{code:>3}  {} {}", display::glyph(entry.icon), entry.description);
                }
            }
        }

        Ok(())
    }
}

/// One search. `None` when the city is blank and nothing was requested.
async fn show<S: WeatherSource>(
    view: &mut WeatherView<S>,
    city: &str,
    json: bool,
) -> anyhow::Result<Option<String>> {
    if !view.search(city).await {
        return Ok(None);
    }

    let vm = view.render_now();
    let out = if json {
        let mut out = serde_json::to_string_pretty(&vm).context("Failed to serialize view")?;
        out.push('\n');
        out
    } else {
        display::draw(&vm)
    };

    Ok(Some(out))
}

fn client(endpoint: Option<String>) -> anyhow::Result<WeatherClient> {
    let mut cfg = Config::load()?;
    if let Some(endpoint) = endpoint {
        cfg.set_endpoint(&endpoint)?;
    }
    Ok(WeatherClient::new(cfg.endpoint_or_default()))
}
