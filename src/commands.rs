//! Command-line parsing
//!
//! Parses `property-finder [command] [args...]`.

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the search window (no arguments)
    Gui,
    /// Run one search without a window: search <place>
    Search { place: String },
    /// Print the query URL for a place: url <place>
    Url { place: String },
    /// Show help: help
    Help,
    /// Anything else
    Unknown { input: String },
}

impl Command {
    /// Parse the arguments after the program name.
    ///
    /// Place names may span several arguments; they are joined with spaces.
    /// An omitted place falls back to `default_place`.
    pub fn parse(args: &[String], default_place: &str) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Gui;
        };

        let place = if args.len() > 1 {
            args[1..].join(" ")
        } else {
            default_place.to_string()
        };

        match cmd.to_lowercase().as_str() {
            "search" | "s" => Command::Search { place },
            "url" => Command::Url { place },
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Unknown { input: cmd.clone() },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"Property Finder - search for houses to buy

Usage: property-finder [command]

Commands:
  (none)          Open the search window
  search <place>  Search by place-name or postcode and print the listings
  url <place>     Print the query URL for a place
  help            Show this help message

Settings are read from <config dir>/property-finder/config.toml
Set RUST_LOG=debug for verbose logging."#
    }
}
