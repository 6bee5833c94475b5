// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the status screen.
//!
//! The `App` struct wires together the monitor, the layout measurement, the
//! scannable code cache and localization, and translates timer and window
//! events into state changes.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::fault::Catalog;
use crate::domain::monitor::Monitor;
use crate::domain::sizing::Sizing;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::layout;
use crate::ui::status::{CodeCache, StatusView};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Size, Subscription, Task, Theme};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    monitor: Monitor,
    rng: ChaCha20Rng,
    sizing: Sizing,
    code: CodeCache,
    background: Option<Handle>,
    theme_mode: ThemeMode,
    tick_interval: Duration,
    fullscreen: bool,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.monitor.state())
            .field("ticks", &self.monitor.ticks())
            .field("qr_size", &self.sizing.qr_size())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(config::MIN_WINDOW_WIDTH, config::MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Loads `settings.toml` and initializes application state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    /// Initializes application state from an already loaded configuration.
    ///
    /// CLI flags take precedence over configuration entries.
    fn with_config(flags: Flags, mut config: Config) -> Self {
        if flags.seed.is_some() {
            config.monitor.seed = flags.seed;
        }
        if flags.interval_secs.is_some() {
            config.monitor.tick_interval_secs = flags.interval_secs;
        }
        if flags.fullscreen {
            config.display.fullscreen = Some(true);
        }

        let i18n = I18n::new(flags.lang, &config);
        let rng = match config.monitor.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };

        let background = config.display.background_image.as_deref().and_then(|path| {
            load_background(path)
                .map_err(|err| {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "{}",
                        i18n.tr("warning-background-load")
                    );
                })
                .ok()
        });

        let monitor = Monitor::new(Catalog::builtin(), config.monitor.transition_policy());
        let tick_interval = config.monitor.tick_interval();

        tracing::info!(
            faults = monitor.catalog().len(),
            fault_probability = monitor.policy().fault_probability(),
            interval_secs = tick_interval.as_secs(),
            seeded = config.monitor.seed.is_some(),
            locale = %i18n.current_locale(),
            "status monitor started"
        );

        Self {
            i18n,
            monitor,
            rng,
            sizing: Sizing::default(),
            code: CodeCache::default(),
            background,
            theme_mode: config.general.theme_mode.resolve(),
            tick_interval,
            fullscreen: config.display.fullscreen.unwrap_or(false),
            window_id: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.monitor.is_running(), self.tick_interval);

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(_) => {
                self.handle_tick();
                Task::none()
            }
            Message::WindowOpened { id, size } => {
                self.window_id = Some(id);
                self.handle_resize(size);
                if self.fullscreen {
                    window::set_mode(id, window::Mode::Fullscreen)
                } else {
                    Task::none()
                }
            }
            Message::WindowResized(size) => {
                self.handle_resize(size);
                Task::none()
            }
            Message::WindowCloseRequested(_) => {
                self.monitor.stop();
                tracing::info!(ticks = self.monitor.ticks(), "status monitor stopped");
                iced::exit()
            }
        }
    }

    fn handle_tick(&mut self) {
        if !self.monitor.is_running() {
            return;
        }

        let transition = self.monitor.tick(&mut self.rng);
        tracing::trace!(tick = self.monitor.ticks(), "tick");

        if transition.changed() {
            match self.monitor.current_fault() {
                Some(fault) => tracing::debug!(code = %fault.code, "showing fault"),
                None => tracing::debug!("showing ready"),
            }
        }

        self.sizing.refresh();
        self.sync_code();
    }

    fn handle_resize(&mut self, window: Size) {
        let bounds = layout::content_bounds(window);
        if self.sizing.measure(bounds) {
            tracing::debug!(
                width = bounds.width(),
                height = bounds.height(),
                qr_size = ?self.sizing.qr_size().map(|size| size.value()),
                "status panel measured"
            );
            self.sync_code();
        }
    }

    fn sync_code(&mut self) {
        let payload = self.monitor.current_fault().map(|fault| fault.url.as_str());
        if let Err(err) = self.code.sync(payload, self.sizing.qr_size()) {
            tracing::warn!(%err, "scannable code unavailable, showing link text");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let status = StatusView::build(
            &self.i18n,
            self.monitor.current_fault(),
            self.sizing.qr_size(),
            &self.code,
        );

        view::view(view::ViewContext {
            i18n: &self.i18n,
            status,
            colors: self.theme_mode.colors(),
            background: self.background.as_ref(),
        })
    }
}

fn load_background(path: &Path) -> Result<Handle> {
    let image = image_rs::open(path)?.to_rgba8();
    let (width, height) = image.dimensions();
    Ok(Handle::from_rgba(width, height, image.into_raw()))
}
