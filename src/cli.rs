use clap::{Parser, Subcommand};

use crate::services::delivery::DeliveryMode;

/// Scheduling links for the landing page
#[derive(Parser, Debug)]
#[command(author, version, about = "Serve or open scheduling links")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Open one intent's link in the system browser
    Open {
        intent: String,
        /// Navigate instead of opening a popup
        #[arg(long)]
        inline: bool,
    },
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve { port: None })
    }
}

pub fn delivery_mode(inline: bool) -> DeliveryMode {
    if inline {
        DeliveryMode::Inline
    } else {
        DeliveryMode::Popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("booklink").chain(args.iter().copied())).map(Cli::command)
    }

    #[test]
    fn test_no_args_serves() {
        assert_eq!(parse(&[]).unwrap(), Command::Serve { port: None });
    }

    #[test]
    fn test_serve_with_port() {
        assert_eq!(
            parse(&["serve", "--port", "8080"]).unwrap(),
            Command::Serve { port: Some(8080) }
        );
    }

    #[test]
    fn test_open_inline() {
        assert_eq!(
            parse(&["open", "demo", "--inline"]).unwrap(),
            Command::Open {
                intent: "demo".to_string(),
                inline: true,
            }
        );
        assert_eq!(delivery_mode(true), DeliveryMode::Inline);
        assert_eq!(delivery_mode(false), DeliveryMode::Popup);
    }

    #[test]
    fn test_usage_errors() {
        // top-level flags are not accepted
        assert!(parse(&["--port", "8080"]).is_err());
        assert!(parse(&["open"]).is_err());
        assert!(parse(&["open", "demo", "junk"]).is_err());
        assert!(parse(&["open", "demo", "--popup"]).is_err());
    }
}
