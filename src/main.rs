//! Property Finder: search for houses to buy
//!
//! Usage:
//!   property-finder                 - Open the search window
//!   property-finder search <place>  - Search and print listings
//!   property-finder url <place>     - Print the query URL
//!   property-finder help            - Show help

mod app;
mod backend;
mod commands;
mod config;
mod navigation;
mod query;
mod search;
mod ui;

use app::PropertyFinder;
use backend::ListingsClient;
use commands::Command;
use config::Settings;
use iced::{window, Size, Task};
use query::QueryBuilder;
use search::{Effect, Event, SearchScreen};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::warn!("Could not load settings: {} (using defaults)", e);
        Settings::default()
    });

    let args: Vec<String> = env::args().skip(1).collect();

    match Command::parse(&args, &settings.initial_search) {
        Command::Gui => match start_gui(settings) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Search { place } => run_search(&settings, &place),
        Command::Url { place } => {
            let builder = QueryBuilder::new(&settings.api_base);
            println!("{}", builder.url_for("place_name", &place, 1));
            ExitCode::SUCCESS
        }
        Command::Help => {
            println!("{}", Command::help_text());
            ExitCode::SUCCESS
        }
        Command::Unknown { input } => {
            eprintln!("Unknown command: {}", input);
            eprintln!("Run 'property-finder help' for usage");
            ExitCode::FAILURE
        }
    }
}

/// Run one search cycle without a window, driving the same screen logic
fn run_search(settings: &Settings, place: &str) -> ExitCode {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = ListingsClient::new();
    let mut screen = SearchScreen::new(QueryBuilder::new(&settings.api_base), place);

    let Effect::Fetch(url) = screen.handle(Event::SearchPressed) else {
        return ExitCode::FAILURE;
    };

    let event = match rt.block_on(client.fetch(&url)) {
        Ok(response) => Event::ResponseArrived(response),
        Err(e) => Event::RequestFailed(e.to_string()),
    };

    match screen.handle(event) {
        Effect::Navigate { listings, .. } => {
            println!("{} properties found for {:?}\n", listings.len(), place);
            for listing in &listings {
                println!("{}", listing.price().unwrap_or("Price on application"));
                println!("  {}", listing.title().unwrap_or("Untitled listing"));
                let rooms = listing.rooms_line();
                if !rooms.is_empty() {
                    println!("  {}", rooms);
                }
            }
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", screen.state().message);
            ExitCode::FAILURE
        }
    }
}

fn start_gui(settings: Settings) -> iced::Result {
    tracing::info!("Starting Property Finder window");

    iced::application(PropertyFinder::title, PropertyFinder::update, PropertyFinder::view)
        .subscription(PropertyFinder::subscription)
        .theme(PropertyFinder::theme)
        .window(window::Settings {
            size: Size::new(420.0, 640.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (PropertyFinder::new(&settings), Task::none()))
}
