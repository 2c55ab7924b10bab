use crate::components::{focus_input_id, BACKGROUND_GREY, DANGER_RED, REMIT_BLUE, REMIT_TEAL};
use crate::config::{load_config, Config};
use iced::{window, Color, Element, Size, Task};
use log::{debug, error, info};
use remit_client::TransferForm;

pub mod components;
mod config;
pub mod routes;

pub const RECIPIENT_INPUT_ID: &str = "recipient_input";
pub const AMOUNT_INPUT_ID: &str = "amount_input";

// This starts the program. Config is loaded up front so the form opens with the right balance.
pub fn main() -> iced::Result {
    pretty_env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Falling back to default config: {e:#}");
            Config::default()
        }
    };

    let window_settings = window::Settings {
        size: Size::new(400., 760.),
        resizable: false,
        ..Default::default()
    };

    iced::application("Remit", RemitApp::update, RemitApp::view)
        .theme(RemitApp::theme)
        .window(window_settings)
        .run_with(move || (RemitApp::new(config), focus_input_id(RECIPIENT_INPUT_ID)))
}

#[derive(Debug, Clone)]
pub enum Message {
    // Text inputs
    RecipientNameChanged(String),
    AmountInputChanged(String),
    FocusAmount,
    // Send button
    Submit,
    Noop,
}

// This is the UI state. The transfer rules live in the form, everything here is only for rendering.
#[derive(Debug, Default)]
pub struct RemitApp {
    form: TransferForm,
}

impl RemitApp {
    fn new(config: Config) -> Self {
        info!(
            "Opening transfer form with balance {} {}",
            config.currency, config.initial_balance
        );
        Self {
            form: TransferForm::new(config.initial_balance).with_currency(config.currency),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RecipientNameChanged(name) => {
                self.form.set_recipient_name(name);
                Task::none()
            }
            Message::AmountInputChanged(input) => {
                self.form.set_amount_input(&input);
                debug!(
                    "Amount input {input:?} stored as {:?}",
                    self.form.amount_input()
                );
                Task::none()
            }
            Message::FocusAmount => focus_input_id(AMOUNT_INPUT_ID),
            Message::Submit => {
                match self.form.submit() {
                    Some(transfer) => {
                        info!("Send success: {transfer:?}");
                    }
                    None => {
                        debug!("Send pressed while the form was invalid");
                    }
                }
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    fn view(&self) -> Element<Message> {
        crate::routes::send(self)
    }

    fn theme(&self) -> iced::Theme {
        iced::Theme::custom(
            String::from("Remit"),
            iced::theme::Palette {
                background: BACKGROUND_GREY,
                primary: REMIT_BLUE,
                text: Color::WHITE,
                success: REMIT_TEAL,
                danger: DANGER_RED,
            },
        )
    }
}
