// SPDX-License-Identifier: MPL-2.0
//! Demo sign-in strip: Gmail button, phone field and one-time code field.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Field contents owned by the application.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub phone: String,
    pub code: String,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Whether a code was issued and awaits verification.
    pub code_pending: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    GmailPressed,
    PhoneChanged(String),
    SendCodePressed,
    CodeChanged(String),
    VerifyPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    GmailSignIn,
    RequestCode(String),
    VerifyCode(String),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::GmailPressed => Event::GmailSignIn,
        Message::PhoneChanged(phone) => {
            state.phone = phone;
            Event::None
        }
        Message::CodeChanged(code) => {
            state.code = code;
            Event::None
        }
        Message::SendCodePressed => {
            state.code.clear();
            Event::RequestCode(state.phone.clone())
        }
        Message::VerifyPressed => Event::VerifyCode(std::mem::take(&mut state.code)),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let gmail = button(Text::new(i18n.tr("login-gmail")).size(typography::BODY))
        .on_press(Message::GmailPressed)
        .style(styles::button::unselected);

    let phone = text_input(&i18n.tr("login-phone-placeholder"), &ctx.state.phone)
        .on_input(Message::PhoneChanged)
        .on_submit(Message::SendCodePressed)
        .padding(spacing::XS)
        .width(Length::Fixed(200.0));

    let send = button(Text::new(i18n.tr("login-send-code")).size(typography::BODY))
        .on_press(Message::SendCodePressed)
        .style(styles::button::primary);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("login-title")).size(typography::TITLE_SM))
        .push(gmail)
        .push(phone)
        .push(send);

    if ctx.code_pending {
        let code = text_input(&i18n.tr("login-code-placeholder"), &ctx.state.code)
            .on_input(Message::CodeChanged)
            .on_submit(Message::VerifyPressed)
            .padding(spacing::XS)
            .width(Length::Fixed(140.0));
        let verify = button(Text::new(i18n.tr("login-verify")).size(typography::BODY))
            .on_press(Message::VerifyPressed)
            .style(styles::button::primary);
        row = row.push(code).push(verify);
    }

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::toolbar)
        .into()
}
