use std::sync::Arc;

use crate::api::CatalogApi;
use crate::ui::fetch::{FetchEvent, FetchSender};
use crate::ui::navigation::{NavigationIntent, Route};
use crate::ui::screen::Screen;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    should_quit: bool,
    screen: Screen,
    api: Arc<dyn CatalogApi>,
    tx: FetchSender,
    spinner_frame: usize,
    source: String,
}

impl App {
    /// Creates the app with the view for `route` mounted.
    pub fn new(api: Arc<dyn CatalogApi>, tx: FetchSender, route: Route) -> Self {
        let screen = Screen::mount(route, &api, &tx);
        Self {
            should_quit: false,
            screen,
            api,
            tx,
            spinner_frame: 0,
            source: String::new(),
        }
    }

    /// Sets the catalog source label shown in the header.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Unmounts the current view and mounts the target of `intent`.
    ///
    /// Dropping the old view aborts its fetch; a result it already queued
    /// carries a stale ticket and is discarded by the new view.
    pub fn navigate(&mut self, intent: NavigationIntent) {
        tracing::info!(%intent, "navigate");
        self.screen = Screen::mount(intent.route(), &self.api, &self.tx);
    }

    /// Routes a fetch result to the mounted view.
    pub fn on_fetch(&mut self, event: FetchEvent) -> bool {
        self.screen.on_fetch(event)
    }

    pub fn on_tick(&mut self) {
        if self.screen.is_fetching() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}
