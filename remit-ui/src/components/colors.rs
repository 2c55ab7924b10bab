use iced::{color, Color};

pub const REMIT_TEAL: Color = color!(0, 166, 147);
pub const REMIT_BLUE: Color = color!(21, 101, 192);
pub const DANGER_RED: Color = color!(250, 0, 80);
pub const BACKGROUND_GREY: Color = color!(23, 23, 25);
