//! Search field with the "Go" button

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding, Shadow};

use super::theme::LightTheme;

/// Search row: text field plus "Go"
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input("Search via name or postcode", value)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(Padding::from([6.0, 8.0]))
        .size(18)
        .width(Length::Fill)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(LightTheme::SURFACE),
            border: Border {
                color: LightTheme::PRIMARY,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: LightTheme::TEXT_MUTED,
            placeholder: LightTheme::TEXT_MUTED,
            value: LightTheme::PRIMARY,
            selection: LightTheme::SEPARATOR,
        });

    let go = button(text("Go").size(18))
        .on_press(on_submit)
        .padding(Padding::from([6.0, 14.0]))
        .style(|_theme, _status| button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: LightTheme::PRIMARY,
            border: Border::default(),
            shadow: Shadow::default(),
        });

    container(row![input, go].spacing(5).align_y(iced::Alignment::Center))
        .width(Length::Fill)
        .into()
}
