use iced::{
    widget::{
        button::{self, Status},
        center, text, Button,
    },
    Border, Color, Length, Shadow, Theme,
};

use crate::Message;

use super::{darken, gray, lighten, REMIT_BLUE};

/// Full width call to action. The button reads as disabled until the caller
/// gives it an `on_press`.
pub fn h_button(text_str: &str) -> Button<'_, Message, Theme> {
    let content = text(text_str).size(20);

    Button::new(center(content))
        .style(|_theme, status| {
            let background = match status {
                Status::Disabled => darken(gray(), 0.2),
                Status::Hovered => lighten(REMIT_BLUE, 0.1),
                Status::Pressed => darken(REMIT_BLUE, 0.1),
                Status::Active => REMIT_BLUE,
            };

            let text_color = match status {
                Status::Disabled => gray(),
                _ => Color::WHITE,
            };

            button::Style {
                background: Some(background.into()),
                text_color,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.,
                    radius: (12.).into(),
                },
                shadow: Shadow::default(),
            }
        })
        .width(Length::Fill)
        .height(Length::Fixed(56.))
}
