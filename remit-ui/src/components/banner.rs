use iced::widget::{container, text};
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::Message;

use super::REMIT_TEAL;

/// Confirmation shown under the send button once a transfer settles.
pub fn h_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(18))
        .padding(16)
        .center_x(Length::Fill)
        .style(|_theme: &Theme| {
            let tint = Color {
                a: 0.15,
                ..REMIT_TEAL
            };
            container::Style {
                text_color: Some(REMIT_TEAL),
                background: Some(Background::Color(tint)),
                border: Border {
                    color: REMIT_TEAL,
                    width: 1.,
                    radius: (12.).into(),
                },
                ..Default::default()
            }
        })
        .into()
}
