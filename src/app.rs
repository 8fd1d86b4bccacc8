//! Core application state and Iced Application implementation
//!
//! Wires the search state machine and the navigator into the Iced 0.13
//! update/view loop. Network calls run as tasks and come back as messages.

use iced::widget::{button, column, container, row, text, Space};
use iced::keyboard::Key;
use iced::{keyboard, Background, Border, Color, Element, Event, Length, Shadow, Subscription, Task, Theme};

use crate::backend::{ListingResponse, ListingsClient};
use crate::config::Settings;
use crate::navigation::{Navigator, RouteParams, Screen};
use crate::query::QueryBuilder;
use crate::search::{Effect, Event as SearchEvent, SearchScreen};
use crate::ui::spinner::{self, Spinner};
use crate::ui::theme::LightTheme;
use crate::ui::{results, search_bar};

// ============================================================================
// Application State
// ============================================================================

pub struct PropertyFinder {
    search: SearchScreen,
    navigator: Navigator,
    client: ListingsClient,
    spinner: Spinner,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchTextChanged(String),
    SearchPressed,
    SearchFinished(Result<ListingResponse, String>),
    Back,
    SpinnerTick,
    IcedEvent(Event),
}

impl PropertyFinder {
    pub fn new(settings: &Settings) -> Self {
        Self {
            search: SearchScreen::new(QueryBuilder::new(&settings.api_base), &settings.initial_search),
            navigator: Navigator::new(),
            client: ListingsClient::new(),
            spinner: Spinner::default(),
        }
    }

    pub fn title(&self) -> String {
        self.navigator.current().route().title().to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchTextChanged(text) => self.dispatch(SearchEvent::TextChanged(text)),

            Message::SearchPressed => self.dispatch(SearchEvent::SearchPressed),

            Message::SearchFinished(Ok(response)) => {
                self.dispatch(SearchEvent::ResponseArrived(response))
            }

            Message::SearchFinished(Err(description)) => {
                self.dispatch(SearchEvent::RequestFailed(description))
            }

            Message::Back => {
                self.navigator.back();
                Task::none()
            }

            Message::SpinnerTick => {
                self.spinner.advance();
                Task::none()
            }

            Message::IcedEvent(event) => {
                if let Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(keyboard::key::Named::Escape),
                    ..
                }) = event
                {
                    return self.update(Message::Back);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.navigator.current() {
            Screen::Home => self.view_search(),
            Screen::Results { listings } => results::view(listings),
        };

        container(column![self.view_header(), body].spacing(0))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(LightTheme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    fn view_search(&self) -> Element<'_, Message> {
        let state = self.search.state();

        let spinner: Element<'_, Message> = if state.is_loading {
            text(self.spinner.glyph())
                .size(36)
                .color(LightTheme::PRIMARY)
                .into()
        } else {
            Space::with_height(36).into()
        };

        column![
            text("Search for houses to buy!").size(18).color(LightTheme::DESCRIPTION),
            text("Search by place-name or postcode.").size(18).color(LightTheme::DESCRIPTION),
            search_bar::view(&state.search_text, Message::SearchTextChanged, Message::SearchPressed),
            spinner,
            text(&state.message).size(18).color(LightTheme::DESCRIPTION),
        ]
        .spacing(20)
        .padding(30)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill)
        .into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        // Root screen gets a same-width gap so the title stays centred.
        let back: Element<'_, Message> = if self.navigator.can_go_back() {
            button(text("‹ Back").size(16))
                .on_press(Message::Back)
                .width(70)
                .style(|_theme, _status| button::Style {
                    background: Some(Background::Color(Color::TRANSPARENT)),
                    text_color: LightTheme::PRIMARY,
                    border: Border::default(),
                    shadow: Shadow::default(),
                })
                .into()
        } else {
            Space::with_width(70).into()
        };

        container(
            row![
                back,
                Space::with_width(Length::Fill),
                text(self.title()).size(18).color(LightTheme::TEXT),
                Space::with_width(Length::Fill),
                Space::with_width(70),
            ]
            .align_y(iced::Alignment::Center),
        )
        .padding(8)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(LightTheme::SURFACE)),
            border: Border {
                color: LightTheme::SEPARATOR,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keys = iced::event::listen().map(Message::IcedEvent);

        if self.search.state().is_loading {
            Subscription::batch([keys, spinner::tick_subscription().map(|_| Message::SpinnerTick)])
        } else {
            keys
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    // ========================================================================
    // Business Logic
    // ========================================================================

    /// Feed an event to the search screen and carry out its effect
    fn dispatch(&mut self, event: SearchEvent) -> Task<Message> {
        match self.search.handle(event) {
            Effect::None => Task::none(),

            // In-flight requests are never cancelled; each one reports back
            // independently.
            Effect::Fetch(url) => {
                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch(&url).await.map_err(|e| e.to_string()) },
                    Message::SearchFinished,
                )
            }

            Effect::Navigate { route, listings } => {
                self.navigator.navigate_to(route, RouteParams { listings });
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::ResponseBody;
    use crate::backend::Listing;
    use crate::navigation::Route;
    use crate::search::LOCATION_NOT_RECOGNIZED;
    use serde_json::json;

    fn finished(code: &str, listings: Vec<Listing>) -> Message {
        Message::SearchFinished(Ok(ListingResponse {
            response: ResponseBody {
                application_response_code: code.to_string(),
                listings,
            },
        }))
    }

    #[test]
    fn test_starts_on_home() {
        let app = PropertyFinder::new(&Settings::default());
        assert_eq!(app.title(), "Property Finder");
        assert_eq!(app.search.state().search_text, "london");
    }

    #[test]
    fn test_results_then_back() {
        let mut app = PropertyFinder::new(&Settings::default());
        let listings = vec![Listing(json!({ "title": "Flat" }))];

        let _ = app.update(Message::SearchPressed);
        assert!(app.search.state().is_loading);

        let _ = app.update(finished("100", listings.clone()));
        assert_eq!(app.navigator.current(), &Screen::Results { listings });
        assert_eq!(app.title(), Route::Results.title());
        assert!(!app.search.state().is_loading);

        let _ = app.update(Message::Back);
        assert_eq!(app.navigator.current(), &Screen::Home);
    }

    #[test]
    fn test_unrecognized_stays_home() {
        let mut app = PropertyFinder::new(&Settings::default());
        let _ = app.update(Message::SearchPressed);
        let _ = app.update(finished("200", vec![]));

        assert_eq!(app.navigator.current(), &Screen::Home);
        assert_eq!(app.search.state().message, LOCATION_NOT_RECOGNIZED);
    }

    #[test]
    fn test_failure_shows_message() {
        let mut app = PropertyFinder::new(&Settings::default());
        let _ = app.update(Message::SearchPressed);
        let _ = app.update(Message::SearchFinished(Err("timeout".into())));

        assert_eq!(app.search.state().message, "Something bad happened timeout");
        assert_eq!(app.navigator.depth(), 1);
    }

    #[test]
    fn test_header_back_only_off_root() {
        let mut app = PropertyFinder::new(&Settings::default());
        assert!(!app.navigator.can_go_back());
        let _ = app.view();

        let _ = app.update(finished("100", vec![]));
        assert!(app.navigator.can_go_back());
        assert_eq!(app.title(), "Results");
        let _ = app.view();
    }

    #[test]
    fn test_late_failure_after_results() {
        let mut app = PropertyFinder::new(&Settings::default());
        let listings = vec![Listing(json!({ "title": "Flat" }))];

        let _ = app.update(Message::SearchPressed);
        let _ = app.update(Message::SearchPressed);
        assert!(app.search.state().is_loading);

        // The second request completes first; the first one fails later.
        let _ = app.update(finished("100", listings.clone()));
        let _ = app.update(Message::SearchFinished(Err("timeout".into())));

        assert_eq!(app.navigator.current(), &Screen::Results { listings });
        assert_eq!(app.navigator.depth(), 2);
        assert_eq!(app.search.state().message, "Something bad happened timeout");
        assert!(!app.search.state().is_loading);

        let _ = app.update(Message::Back);
        assert_eq!(app.navigator.current(), &Screen::Home);
        assert_eq!(app.search.state().message, "Something bad happened timeout");
    }

    #[test]
    fn test_two_successes_stack_results() {
        let mut app = PropertyFinder::new(&Settings::default());
        let first = vec![Listing(json!({ "title": "Flat" }))];
        let second = vec![Listing(json!({ "title": "House" }))];

        let _ = app.update(Message::SearchPressed);
        let _ = app.update(Message::SearchPressed);
        let _ = app.update(finished("100", first.clone()));
        let _ = app.update(finished("101", second.clone()));

        assert_eq!(app.navigator.depth(), 3);
        assert_eq!(app.navigator.current(), &Screen::Results { listings: second });
        let _ = app.update(Message::Back);
        assert_eq!(app.navigator.current(), &Screen::Results { listings: first });
    }

    #[test]
    fn test_text_input_updates_state() {
        let mut app = PropertyFinder::new(&Settings::default());
        let _ = app.update(Message::SearchTextChanged("manchester".into()));
        assert_eq!(app.search.state().search_text, "manchester");
        assert!(!app.search.state().is_loading);
    }
}
