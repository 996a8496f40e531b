// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component messages are translated into controller input. The commands the
//! controller returns are applied to the projection in order, and the ones
//! that need the outside world (dialogs, transfers) become tasks here.

use super::Message;
use crate::application::download::{DownloadFlow, DownloadStep};
use crate::application::login::{self, LoginNotice, OtpChallenge};
use crate::application::port::Downloader;
use crate::domain::media::ItemId;
use crate::error::DownloadError;
use crate::gallery::{self, AutoplayObserver, Command, Gallery};
use crate::i18n::fluent::I18n;
use crate::infrastructure::download::file_name_for;
use crate::infrastructure::{dialog, download, DownloadQueue, DownloadReport, RandomOtp};
use crate::ui::gallery::{self as gallery_view, grid, GridViewport, ImageCache, PageProjection};
use crate::ui::login_panel;
use crate::ui::notifications::{self, Notification};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::path::Path;
use std::time::Duration;

/// How long the demo one-time code stays on screen.
const OTP_NOTICE_DURATION: Duration = Duration::from_secs(30);

/// Prefix shared by every sign-in toast, so a new step replaces the last.
const LOGIN_NOTIFICATION_PREFIX: &str = "notification-login-";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a mut Gallery,
    pub projection: &'a mut PageProjection,
    pub search_text: &'a mut String,
    pub search_generation: &'a mut u64,
    pub search_debounce_ms: u64,
    pub images: &'a mut ImageCache,
    pub autoplay: &'a mut AutoplayObserver,
    pub viewport: &'a mut GridViewport,
    pub login: &'a mut login_panel::State,
    pub otp: &'a mut OtpChallenge,
    pub otp_generator: &'a mut RandomOtp,
    pub downloads: &'a mut DownloadQueue,
    pub downloads_dir: Option<&'a Path>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    let input = match message {
        gallery_view::Message::SearchInput(text) => return handle_search_input(ctx, text),
        gallery_view::Message::GridScrolled(viewport) => {
            *ctx.viewport = viewport;
            sync_autoplay(ctx.autoplay, ctx.gallery, ctx.projection, *ctx.viewport);
            return Task::none();
        }
        gallery_view::Message::FilterPressed(category) => {
            let flushed = flush_pending_search(ctx);
            let commands = ctx.gallery.handle(gallery::Message::FilterSelected(category));
            let effects = apply_commands(ctx, commands);
            return Task::batch([flushed, effects, scroll_grid_to_top(ctx)]);
        }
        gallery_view::Message::CardPressed(id) => gallery::Message::ItemActivated(id),
        gallery_view::Message::DownloadPressed(source) => {
            gallery::Message::DownloadRequested(source)
        }
        gallery_view::Message::ClosePressed => gallery::Message::ClosePreview,
        gallery_view::Message::Pointer(target) => gallery::Message::PointerActivated(target),
    };

    let commands = ctx.gallery.handle(input);
    apply_commands(ctx, commands)
}

/// Keeps the typed text and forwards it, right away or after the configured
/// delay.
fn handle_search_input(ctx: &mut UpdateContext<'_>, text: String) -> Task<Message> {
    ctx.search_text.clone_from(&text);

    if ctx.search_debounce_ms == 0 {
        return submit_search(ctx, text);
    }

    *ctx.search_generation = ctx.search_generation.wrapping_add(1);
    let generation = *ctx.search_generation;
    let delay = Duration::from_millis(ctx.search_debounce_ms);
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            text
        },
        move |query| Message::SearchDebounced { generation, query },
    )
}

pub fn handle_search_debounced(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    query: String,
) -> Task<Message> {
    if generation != *ctx.search_generation {
        return Task::none();
    }
    submit_search(ctx, query)
}

/// Delivers typed text still waiting on the debounce delay, so the next
/// input is matched against what the search field shows.
fn flush_pending_search(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.search_text.as_str() == ctx.gallery.query() {
        return Task::none();
    }
    *ctx.search_generation = ctx.search_generation.wrapping_add(1);
    let query = ctx.search_text.clone();
    let commands = ctx.gallery.handle(gallery::Message::SearchChanged(query));
    apply_commands(ctx, commands)
}

fn submit_search(ctx: &mut UpdateContext<'_>, query: String) -> Task<Message> {
    let commands = ctx.gallery.handle(gallery::Message::SearchChanged(query));
    let effects = apply_commands(ctx, commands);
    Task::batch([effects, scroll_grid_to_top(ctx)])
}

/// The grid content changed: show it from the start.
fn scroll_grid_to_top(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.viewport.offset_y = 0.0;
    sync_autoplay(ctx.autoplay, ctx.gallery, ctx.projection, *ctx.viewport);
    operation::snap_to(
        Id::new(grid::GRID_SCROLL_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}

/// Applies controller commands to the projection, in order.
fn apply_commands(ctx: &mut UpdateContext<'_>, commands: Vec<Command>) -> Task<Message> {
    let mut tasks = Vec::new();
    for command in commands {
        ctx.projection.apply(&command);
        if let Command::Download(step) = command {
            tasks.push(handle_download_step(ctx, step));
        }
    }
    sync_autoplay(ctx.autoplay, ctx.gallery, ctx.projection, *ctx.viewport);
    Task::batch(tasks)
}

/// Re-evaluates grid autoplay against the current viewport.
///
/// The grid is covered while the preview is open, so every card pauses.
/// Hidden cards count as fully out of view.
pub fn sync_autoplay(
    autoplay: &mut AutoplayObserver,
    gallery: &Gallery,
    projection: &PageProjection,
    viewport: GridViewport,
) {
    if projection.modal().open {
        for command in autoplay.pause_all() {
            tracing::debug!(?command, "autoplay");
        }
        return;
    }

    let shown: Vec<ItemId> = projection.visible_items().collect();
    let ratios = gallery.catalog().iter().map(|record| {
        let ratio = shown
            .iter()
            .position(|id| *id == record.id())
            .filter(|_| record.is_video())
            .map_or(0.0, |position| viewport.card_ratio(position));
        (record.id(), ratio)
    });

    for (id, ratio) in ratios {
        if let Some(command) = autoplay.observe(id, ratio) {
            tracing::debug!(?command, ratio, "autoplay");
        }
    }
}

fn handle_download_step(ctx: &mut UpdateContext<'_>, step: DownloadStep) -> Task<Message> {
    match step {
        DownloadStep::Unavailable => blocking_notice(
            ctx.i18n,
            "notice-unavailable-title",
            "notice-unavailable-body",
        ),
        DownloadStep::NothingSelected => blocking_notice(
            ctx.i18n,
            "notice-nothing-selected-title",
            "notice-nothing-selected-body",
        ),
        DownloadStep::ConfirmPayment { title, url } => {
            let dialog_title = ctx.i18n.tr("payment-dialog-title");
            let body = ctx
                .i18n
                .tr_with_args("payment-dialog-body", &[("title", title.as_str())]);
            Task::perform(dialog::confirm_payment(dialog_title, body), move |accepted| {
                Message::PaymentAnswered { accepted, url }
            })
        }
        DownloadStep::Start { url } => {
            ctx.downloads.trigger(&url);
            start_queued_downloads(ctx)
        }
        DownloadStep::Cancelled => {
            ctx.notifications
                .push(Notification::warning("notification-download-cancelled"));
            Task::none()
        }
    }
}

fn blocking_notice(i18n: &I18n, title_key: &str, body_key: &str) -> Task<Message> {
    Task::perform(
        dialog::show_notice(i18n.tr(title_key), i18n.tr(body_key)),
        |()| Message::NoticeClosed,
    )
}

pub fn handle_payment_answer(
    ctx: &mut UpdateContext<'_>,
    accepted: bool,
    url: String,
) -> Task<Message> {
    handle_download_step(ctx, DownloadFlow::resolve_payment(accepted, url))
}

/// Turns every queued target into a transfer task.
fn start_queued_downloads(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let targets = ctx.downloads.drain();

    let Some(directory) = ctx.downloads_dir else {
        for url in targets {
            tracing::warn!(url, "download dropped, no target directory");
            ctx.notifications.push(Notification::error(
                DownloadError::NoTargetDirectory.i18n_key(),
            ));
        }
        return Task::none();
    };

    let tasks: Vec<Task<Message>> = targets
        .into_iter()
        .map(|url| {
            ctx.notifications.push(
                Notification::info("notification-download-started")
                    .with_arg("file", file_name_for(&url)),
            );
            Task::perform(
                download::download(url, directory.to_path_buf()),
                Message::DownloadFinished,
            )
        })
        .collect();
    Task::batch(tasks)
}

pub fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<DownloadReport, DownloadError>,
) {
    match result {
        Ok(report) => ctx.notifications.push(
            Notification::success("notification-download-finished")
                .with_arg("path", report.path.display().to_string()),
        ),
        Err(err) => {
            tracing::warn!(%err, "download failed");
            ctx.notifications.push(
                Notification::error(err.i18n_key()).with_arg("detail", err.to_string()),
            );
        }
    }
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    src: String,
    result: Result<Vec<u8>, DownloadError>,
) {
    match result {
        Ok(bytes) => ctx.images.insert(src, bytes),
        Err(err) => {
            tracing::warn!(%err, src, "image unavailable");
            ctx.images.mark_failed(src);
        }
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.viewport = GridViewport {
        offset_y: ctx.viewport.offset_y,
        ..GridViewport::from_window(size)
    };
    sync_autoplay(ctx.autoplay, ctx.gallery, ctx.projection, *ctx.viewport);
}

pub fn handle_login_message(
    ctx: &mut UpdateContext<'_>,
    message: login_panel::Message,
) -> Task<Message> {
    let notice = match login_panel::update(ctx.login, message) {
        login_panel::Event::None => return Task::none(),
        login_panel::Event::GmailSignIn => login::gmail_sign_in(),
        login_panel::Event::RequestCode(phone) => ctx.otp.start(&phone, ctx.otp_generator),
        login_panel::Event::VerifyCode(code) => ctx.otp.verify(&code),
    };

    ctx.notifications.dismiss_with_prefix(LOGIN_NOTIFICATION_PREFIX);
    ctx.notifications.push(login_notification(notice));
    Task::none()
}

fn login_notification(notice: LoginNotice) -> Notification {
    match notice {
        LoginNotice::GmailRedirect => Notification::info("notification-login-gmail"),
        LoginNotice::PhoneRequired => Notification::warning("notification-login-phone-required"),
        LoginNotice::CodeIssued { code } => Notification::info("notification-login-code-issued")
            .with_arg("code", code)
            .auto_dismiss(OTP_NOTICE_DURATION),
        LoginNotice::Success => Notification::success("notification-login-success"),
        LoginNotice::InvalidCode => Notification::error("notification-login-invalid"),
    }
}
