use iced::widget::text;
use iced::Element;

use remit_client::ValidationError;

use crate::Message;

use super::danger_text;

pub fn h_validation_text(error: ValidationError) -> Element<'static, Message> {
    text(error.to_string()).size(18).style(danger_text).into()
}
