use iced::widget::column;
use iced::Element;

use crate::components::{
    basic_layout, h_banner, h_button, h_header, h_input, h_validation_text, InputArgs,
};
use crate::{Message, RemitApp, AMOUNT_INPUT_ID, RECIPIENT_INPUT_ID};

pub fn send(remit: &RemitApp) -> Element<Message> {
    let form = &remit.form;

    let header = h_header("Send money", "Pay someone from your balance.");

    let recipient_input = h_input(InputArgs {
        label: "Recipient name",
        placeholder: "Ana",
        value: form.recipient_name(),
        on_input: Message::RecipientNameChanged,
        on_submit: Some(Message::FocusAmount),
        id: Some(RECIPIENT_INPUT_ID),
        ..InputArgs::default()
    });

    let amount_input = h_input(InputArgs {
        label: "Amount to send",
        placeholder: "100.00",
        value: form.amount_input(),
        on_input: Message::AmountInputChanged,
        on_submit: Some(Message::Submit),
        id: Some(AMOUNT_INPUT_ID),
        suffix: Some(form.currency()),
        ..InputArgs::default()
    });

    let balance = form.formatted_balance();
    let balance_input = h_input(InputArgs {
        label: "Current balance",
        value: &balance,
        disabled: true,
        ..InputArgs::default()
    });

    let mut content = column![header, recipient_input, amount_input, balance_input].spacing(24);

    if let Some(error) = form.validation_message() {
        content = content.push(h_validation_text(error));
    }

    // The button stays disabled until the form can actually settle
    let send_button =
        h_button("Send").on_press_maybe(form.can_submit().then_some(Message::Submit));
    content = content.push(send_button);

    if !form.last_message().trim().is_empty() {
        content = content.push(h_banner(form.last_message()));
    }

    basic_layout(content)
}
