use iced::widget::{container, scrollable, Column};
use iced::Length;
use iced::{Element, Padding};

use crate::Message;

pub fn basic_layout(column: Column<Message>) -> Element<Message> {
    container(
        scrollable(column.width(Length::Fill).padding(Padding::new(24.))).height(Length::Fill),
    )
    .into()
}
