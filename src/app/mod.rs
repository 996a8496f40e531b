// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery page, the
//! demo sign-in strip and the notification overlay.
//!
//! The `App` struct owns the gallery controller and the projection of its
//! commands, and translates messages into side effects like dialogs, file
//! transfers and image fetches. The controller itself never performs I/O.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::login::OtpChallenge;
use crate::catalog::Page;
use crate::gallery::{AutoplayObserver, Gallery};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{fetch, DownloadQueue, RandomOtp};
use crate::ui::gallery::{filter_bar, GridViewport, ImageCache, PageProjection};
use crate::ui::login_panel;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::{operation, Id};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Page shown when no page path is given on the command line.
const DEMO_PAGE: &str = include_str!("../../assets/demo/gallery.html");

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    /// What the page currently shows, built only from controller commands.
    projection: PageProjection,
    /// Search field content as typed, possibly ahead of the controller.
    search_text: String,
    search_generation: u64,
    search_debounce_ms: u64,
    images: ImageCache,
    autoplay: AutoplayObserver,
    viewport: GridViewport,
    login: login_panel::State,
    otp: OtpChallenge,
    otp_generator: RandomOtp,
    downloads: DownloadQueue,
    downloads_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.gallery.catalog().len())
            .field("query", &self.gallery.query())
            .field("preview", &self.gallery.preview().state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the page given on the command line, or the bundled demo page.
///
/// A page that cannot be read falls back to the demo page with an error
/// toast.
fn load_page(page_path: Option<&str>, notifications: &mut notifications::Manager) -> Page {
    if let Some(path) = page_path {
        match Page::load(Path::new(path)) {
            Ok(page) => return page,
            Err(err) => {
                tracing::error!(%err, path, "failed to load gallery page");
                notifications.push(
                    Notification::error("notification-page-load-error")
                        .with_arg("path", path.to_string()),
                );
            }
        }
    }

    Page::from_source(DEMO_PAGE, None).unwrap_or_else(|err| {
        tracing::error!(%err, "bundled demo page is invalid");
        Page::default()
    })
}

impl App {
    /// Loads configuration and the page, computes the initial projection and
    /// starts fetching remote images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let page = load_page(flags.page_path.as_deref(), &mut notifications);
        let initial_filter = config
            .gallery
            .default_filter()
            .unwrap_or(page.initial_filter);
        let mut gallery = Gallery::new(page.catalog, page.filters, initial_filter);
        let mut projection = PageProjection::new(gallery.catalog().len());
        projection.apply_all(&gallery.refresh());

        let mut tasks: Vec<Task<Message>> = ImageCache::remote_sources(gallery.catalog())
            .into_iter()
            .map(|src| {
                let key = src.clone();
                Task::perform(fetch::fetch_bytes(src), move |result| Message::ImageFetched {
                    src: key,
                    result,
                })
            })
            .collect();

        let downloads_dir = paths::get_downloads_dir(config.downloads.directory.as_deref());
        if downloads_dir.is_none() {
            tracing::warn!("no downloads directory available");
        }

        let mut app = App {
            i18n,
            gallery,
            projection,
            search_text: String::new(),
            search_generation: 0,
            search_debounce_ms: config.gallery.search_debounce_ms(),
            images: ImageCache::default(),
            autoplay: AutoplayObserver::new(config.gallery.autoplay_threshold()),
            viewport: GridViewport::from_window(window_settings().size),
            login: login_panel::State::default(),
            otp: OtpChallenge::default(),
            otp_generator: RandomOtp,
            downloads: DownloadQueue::default(),
            downloads_dir,
            theme_mode: config.general.theme_mode,
            notifications,
        };
        update::sync_autoplay(&mut app.autoplay, &app.gallery, &app.projection, app.viewport);

        tracing::info!(
            items = app.gallery.catalog().len(),
            remote_images = tasks.len(),
            "gallery ready"
        );

        tasks.push(operation::focus(Id::new(filter_bar::SEARCH_INPUT_ID)));
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.previewed() {
            Some(record) if !record.title().is_empty() => {
                format!("{} - {app_name}", record.title())
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            gallery: &mut self.gallery,
            projection: &mut self.projection,
            search_text: &mut self.search_text,
            search_generation: &mut self.search_generation,
            search_debounce_ms: self.search_debounce_ms,
            images: &mut self.images,
            autoplay: &mut self.autoplay,
            viewport: &mut self.viewport,
            login: &mut self.login,
            otp: &mut self.otp,
            otp_generator: &mut self.otp_generator,
            downloads: &mut self.downloads,
            downloads_dir: self.downloads_dir.as_deref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SearchDebounced { generation, query } => {
                update::handle_search_debounced(&mut ctx, generation, query)
            }
            Message::PaymentAnswered { accepted, url } => {
                update::handle_payment_answer(&mut ctx, accepted, url)
            }
            Message::NoticeClosed => Task::none(),
            Message::DownloadFinished(result) => {
                update::handle_download_finished(&mut ctx, result);
                Task::none()
            }
            Message::ImageFetched { src, result } => {
                update::handle_image_fetched(&mut ctx, src, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            projection: &self.projection,
            search_text: &self.search_text,
            images: &self.images,
            autoplay: &self.autoplay,
            viewport: self.viewport,
            login: &self.login,
            code_pending: self.otp.is_pending(),
            notifications: &self.notifications,
        })
    }
}
