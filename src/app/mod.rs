// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the gallery, the collaborators around it
//! (info text, accordion, contact popup, background music, clipboard) and
//! localization, and translates their effects into toasts and tasks.

pub mod paths;

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::bgm::{self, BgmControl, StartMode};
use crate::config::{self, REVEAL_DELAY_MS};
use crate::gallery::{Gallery, GallerySettings};
use crate::i18n::fluent::I18n;
use crate::info::{InvitationInfo, PageText};
use crate::ui::accordion::Accordion;
use crate::ui::contact_popup::ContactPopup;
use crate::ui::notifications::{self, Notification};
use iced::widget::scrollable::RelativeOffset;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    site_dir: PathBuf,
    page_text: PageText,
    gallery: Gallery,
    accordion: Accordion,
    contact_popup: ContactPopup,
    bgm: BgmControl,
    /// Last known scroll position of the page.
    page_offset: RelativeOffset,
    /// Whether the start-up fade-in has happened.
    revealed: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("site_dir", &self.site_dir)
            .field("gallery_open", &self.gallery.is_open())
            .field("revealed", &self.revealed)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
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

impl App {
    /// Loads configuration, starts the photo loads and the info file read,
    /// attempts the background music start and schedules the page reveal.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone(), flags.site_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let site_dir = paths::get_site_dir();
        log::info!("serving invitation from {}", site_dir.display());

        let settings = GallerySettings::from(&config.gallery);
        let (gallery, gallery_task) = Gallery::new(&site_dir, settings);

        let bgm_path = paths::bgm_file(&site_dir, &config.bgm);
        let mut bgm = BgmControl::new(bgm::open_backend(
            &bgm_path,
            config.bgm.repeat.unwrap_or(true),
        ));
        bgm.start(StartMode::resolve(
            flags.play_bgm,
            config.bgm.autoplay.unwrap_or(true),
        ));

        let mut app = App {
            i18n,
            site_dir,
            page_text: PageText::default(),
            gallery,
            accordion: Accordion::default(),
            contact_popup: ContactPopup::default(),
            bgm,
            page_offset: RelativeOffset::START,
            revealed: false,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let info_path = paths::info_file(&app.site_dir);
        let info_task = Task::perform(
            async move { InvitationInfo::load(&info_path).await },
            Message::InfoLoaded,
        );
        let reveal_task = Task::perform(
            tokio::time::sleep(Duration::from_millis(REVEAL_DELAY_MS)),
            |()| Message::Revealed,
        );

        let task = Task::batch([
            gallery_task.map(|message| Message::Page(crate::ui::page::Message::Gallery(message))),
            info_task,
            reveal_task,
        ]);
        (app, task)
    }

    fn title(&self) -> String {
        let couple = format!(
            "{} {}",
            self.page_text.main.groom_name, self.page_text.main.bride_name
        );
        let couple = couple.trim();
        if couple.is_empty() {
            self.i18n.tr("window-title")
        } else {
            self.i18n
                .tr_with_args("window-title-couple", &[("couple", couple)])
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_frame_subscription(self.gallery.is_animating()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_bgm_subscription(self.bgm.is_playing()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(&mut update::UpdateContext::new(self), message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page_text: &self.page_text,
            gallery: &self.gallery,
            accordion: &self.accordion,
            contact_popup: &self.contact_popup,
            bgm_icon: self.bgm.icon(),
            notifications: &self.notifications,
            revealed: self.revealed,
        })
    }
}
