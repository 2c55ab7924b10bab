use iced::{
    widget::{
        column, row, text,
        text_input::{self, focus, Id},
        TextInput,
    },
    Background, Border, Color, Element, Task, Theme,
};

use crate::Message;

use super::{darken, lighten};

pub fn focus_input_id(id: &'static str) -> Task<Message> {
    let id = Id::new(id);
    focus(id)
}

pub struct InputArgs<'a> {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub on_input: fn(String) -> Message,
    pub on_submit: Option<Message>,
    pub disabled: bool,
    pub id: Option<&'static str>,
    pub suffix: Option<&'a str>,
}

impl Default for InputArgs<'_> {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: "",
            value: "",
            on_input: |_| Message::Noop,
            on_submit: None,
            disabled: false,
            id: None,
            suffix: None,
        }
    }
}

pub fn h_input<'a>(args: InputArgs<'_>) -> Element<'a, Message, Theme> {
    let InputArgs {
        label,
        placeholder,
        value,
        on_input,
        on_submit,
        disabled,
        id,
        suffix,
    } = args;

    let on_submit = on_submit.unwrap_or(Message::Noop);

    let input = TextInput::new(placeholder, value)
        .style(|theme: &Theme, status| {
            let gray = lighten(theme.palette().background, 0.5);
            let border_color = match status {
                text_input::Status::Active => Color::WHITE,
                text_input::Status::Focused => theme.palette().primary,
                text_input::Status::Hovered => darken(Color::WHITE, 0.2),
                text_input::Status::Disabled => gray,
            };
            let border = Border {
                color: border_color,
                width: 2.,
                radius: (12.).into(),
            };

            let value = if text_input::Status::Disabled == status {
                lighten(gray, 0.2)
            } else {
                Color::WHITE
            };

            text_input::Style {
                background: Background::Color(Color::BLACK),
                border,
                placeholder: gray,
                value,
                icon: Color::WHITE,
                selection: theme.palette().primary,
            }
        })
        .size(20)
        .padding(12);

    // Without handlers iced renders the input as disabled
    let input = if disabled {
        input
    } else {
        input.on_input(on_input).on_submit(on_submit)
    };

    let input = if let Some(id) = id {
        input.id(Id::new(id))
    } else {
        input
    };

    let input = if let Some(suffix) = suffix {
        let suffix_text = text(suffix.to_string()).size(20);
        row![input, suffix_text]
            .spacing(8)
            .align_y(iced::Alignment::Center)
    } else {
        row![input]
    };

    let label = text(label).size(18);

    column![label, input].spacing(8).into()
}
