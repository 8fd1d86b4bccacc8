//! Results list

use iced::widget::{column, container, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::LightTheme;
use crate::backend::Listing;

/// Scrollable list of listings, one row each
pub fn view<'a, Message: 'a>(listings: &'a [Listing]) -> Element<'a, Message> {
    if listings.is_empty() {
        return container(
            text("No properties found.")
                .size(16)
                .color(LightTheme::DESCRIPTION),
        )
        .padding(30)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into();
    }

    let rows: Vec<Element<'a, Message>> = listings.iter().map(row).collect();

    scrollable(column(rows).spacing(1))
        .height(Length::Fill)
        .into()
}

fn row<'a, Message: 'a>(listing: &'a Listing) -> Element<'a, Message> {
    let price = text(listing.price().unwrap_or("Price on application"))
        .size(22)
        .color(LightTheme::PRIMARY);

    let title = text(listing.title().unwrap_or("Untitled listing"))
        .size(18)
        .color(LightTheme::DESCRIPTION);

    let mut details = column![price, title].spacing(4);

    let rooms = listing.rooms_line();
    if !rooms.is_empty() {
        details = details.push(text(rooms).size(14).color(LightTheme::TEXT_MUTED));
    }
    if let Some(summary) = listing.summary() {
        details = details.push(Space::with_height(2));
        details = details.push(text(summary).size(13).color(LightTheme::TEXT));
    }

    container(details)
        .padding(Padding::from([10.0, 12.0]))
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
