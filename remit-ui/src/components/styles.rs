use iced::{widget::text::Style, Color, Theme};

use super::{lighten, BACKGROUND_GREY};

pub fn subtitle(theme: &Theme) -> Style {
    let gray = lighten(theme.palette().background, 0.5);
    Style { color: Some(gray) }
}

pub fn danger_text(theme: &Theme) -> Style {
    Style {
        color: Some(theme.palette().danger),
    }
}

pub fn gray() -> Color {
    lighten(BACKGROUND_GREY, 0.5)
}
