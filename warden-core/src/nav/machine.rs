//! Navigation state machine
//!
//! Polled once per main-loop iteration. Timers are evaluated by comparing
//! elapsed time on every tick; nothing runs in the background. Side effects
//! (aborts, session clear, power-off) are issued synchronously inside the
//! tick and are never repeated for the same state.

use log::{debug, info, warn};

use super::command::{RenderCommand, Transition};
use super::context::NavContext;
use super::home::HomeView;
use super::info::InfoPageView;
use super::input::ButtonEdges;
use super::screen::{InfoPage, ScreenId};
use crate::config::{ConfigError, NavConfig};
use crate::dialog::DialogDescriptor;
use crate::traits::{
    Clock, ConfigStore, DeviceInfo, Platform, RenderError, Renderer, SessionControl,
};
use crate::Millis;

/// Elapsed time, zero if the clock appears to have gone backwards
fn elapsed(now: Millis, since: Millis) -> Millis {
    now.saturating_sub(since)
}

/// Screen navigation, auto-lock and tamper handling
#[derive(Debug, Clone)]
pub struct Navigator {
    ctx: NavContext,
    config: NavConfig,
}

impl Navigator {
    /// Start on the home screen with default timing
    pub fn new(now: Millis) -> Self {
        Self {
            ctx: NavContext::new(now),
            config: NavConfig::default(),
        }
    }

    /// Start on the home screen with custom timing
    pub fn with_config(config: NavConfig, now: Millis) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ctx: NavContext::new(now),
            config,
        })
    }

    /// Navigation context (screen and timers)
    pub fn context(&self) -> &NavContext {
        &self.ctx
    }

    /// Timing configuration
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Current screen
    pub fn current(&self) -> ScreenId {
        self.ctx.current
    }

    /// Back to home with fresh timers, without rendering
    pub fn reset(&mut self, now: Millis) {
        debug!("nav: reset at {} ms", now);
        self.ctx.reset(now);
    }

    /// Hand the screen to a confirmation dialog
    pub fn enter_dialog(&mut self, dialog: DialogDescriptor) -> RenderCommand {
        self.set_screen(ScreenId::DialogActive);
        RenderCommand::Dialog {
            dialog,
            transition: Transition::Swipe,
        }
    }

    /// Show the home screen
    ///
    /// Counts as activity, so the auto-lock timer restarts.
    pub fn go_home<C: ConfigStore + ?Sized>(&mut self, now: Millis, config: &C) -> RenderCommand {
        let transition = if self.ctx.current.is_idle() {
            Transition::Clear
        } else {
            Transition::Swipe
        };
        self.log_transition(ScreenId::Home);
        self.ctx.show_home(now);
        RenderCommand::Home {
            transition,
            view: HomeView::from_config(config),
        }
    }

    /// Process one tick
    ///
    /// `edges` are the button releases since the previous tick. Event
    /// combinations not covered by a transition leave the state unchanged.
    pub fn tick<P: Platform + ?Sized>(
        &mut self,
        edges: ButtonEdges,
        now: Millis,
        platform: &mut P,
    ) -> RenderCommand {
        if edges.any() {
            self.ctx.last_activity_ms = now;
        }

        let mut command = match self.ctx.current {
            ScreenId::Home => self.on_home(edges, now, &*platform),
            ScreenId::InfoPage(page) => self.on_info_page(page, edges, now, &*platform),
            ScreenId::Screensaver => {
                if edges.any() {
                    self.go_home(now, &*platform)
                } else {
                    RenderCommand::Unchanged
                }
            }
            ScreenId::DialogActive | ScreenId::Locked => {
                if edges.cancel {
                    abort_operations(platform);
                }
                RenderCommand::Unchanged
            }
        };

        if self.ctx.current == ScreenId::Home {
            if let Some(lock) = self.check_auto_lock(now, platform) {
                command = lock;
            }
        }

        if self.ctx.current == ScreenId::Home {
            if let Some(home) = self.poll_status(now, platform) {
                command = home;
            }
        }

        command
    }

    /// Tick with the time from `clock`, then paint the result
    ///
    /// A render failure is returned after the tick's state change and side
    /// effects have taken place; neither is rolled back.
    pub fn poll<C, P, R>(
        &mut self,
        edges: ButtonEdges,
        clock: &C,
        platform: &mut P,
        renderer: &mut R,
    ) -> Result<RenderCommand, RenderError>
    where
        C: Clock + ?Sized,
        P: Platform + ?Sized,
        R: Renderer + ?Sized,
    {
        let command = self.tick(edges, clock.now_ms(), platform);
        if let Err(e) = command.dispatch(renderer) {
            warn!("nav: render failed on {:?}: {:?}", self.ctx.current, e);
            return Err(e);
        }
        Ok(command)
    }

    fn on_home<P: DeviceInfo + ConfigStore + ?Sized>(
        &mut self,
        edges: ButtonEdges,
        now: Millis,
        platform: &P,
    ) -> RenderCommand {
        if edges.prev {
            self.show_info_page(InfoPage::new(self.config.info_page_count), now, &*platform)
        } else if edges.next {
            self.show_info_page(InfoPage::FIRST, now, &*platform)
        } else {
            RenderCommand::Unchanged
        }
    }

    /// Info pages are plain navigation: cancel leaves them without aborting
    fn on_info_page<P: DeviceInfo + ConfigStore + ?Sized>(
        &mut self,
        page: InfoPage,
        edges: ButtonEdges,
        now: Millis,
        platform: &P,
    ) -> RenderCommand {
        let shown_for = elapsed(now, self.ctx.info_display_started_ms);
        if shown_for >= u64::from(self.config.info_page_timeout_ms) {
            debug!("nav: info page {} timed out", page.number());
            return self.go_home(now, platform);
        }

        let number = page.number();
        if edges.prev {
            if number > 1 {
                self.show_info_page(InfoPage::new(number - 1), now, platform)
            } else {
                self.go_home(now, platform)
            }
        } else if edges.next {
            if number < self.config.info_page_count {
                self.show_info_page(InfoPage::new(number + 1), now, platform)
            } else {
                self.go_home(now, platform)
            }
        } else if edges.cancel {
            self.go_home(now, platform)
        } else {
            RenderCommand::Unchanged
        }
    }

    fn show_info_page<P: DeviceInfo + ConfigStore + ?Sized>(
        &mut self,
        page: InfoPage,
        now: Millis,
        platform: &P,
    ) -> RenderCommand {
        self.log_transition(ScreenId::InfoPage(page));
        self.ctx.show_info_page(page, now);
        RenderCommand::InfoPage(InfoPageView::build(page, platform))
    }

    /// Lock after the configured inactivity delay
    fn check_auto_lock<P: Platform + ?Sized>(
        &mut self,
        now: Millis,
        platform: &mut P,
    ) -> Option<RenderCommand> {
        let delay = u64::from(platform.auto_lock_delay_ms());
        if elapsed(now, self.ctx.last_activity_ms) < delay {
            return None;
        }

        platform.clear_session(true);
        if platform.transport_present() {
            info!("nav: auto-lock, transport present, screensaver");
            self.set_screen(ScreenId::Screensaver);
            Some(RenderCommand::Screensaver)
        } else {
            info!("nav: auto-lock, no transport, powering off");
            self.set_screen(ScreenId::Locked);
            platform.power_off();
            Some(RenderCommand::Blank)
        }
    }

    /// Periodic transport/tamper check while on the home screen
    fn poll_status<P: Platform + ?Sized>(
        &mut self,
        now: Millis,
        platform: &mut P,
    ) -> Option<RenderCommand> {
        let interval = u64::from(self.config.status_poll_interval_ms);
        if elapsed(now, self.ctx.last_logo_poll_ms) < interval {
            return None;
        }
        self.ctx.last_logo_poll_ms = now;

        if !platform.tamper_or_disconnect_detected() {
            return None;
        }
        warn!("nav: tamper or disconnect detected, clearing session");
        abort_operations(platform);
        platform.clear_session(true);
        Some(self.go_home(now, &*platform))
    }

    fn set_screen(&mut self, next: ScreenId) {
        self.log_transition(next);
        self.ctx.current = next;
    }

    fn log_transition(&self, next: ScreenId) {
        if self.ctx.current != next {
            debug!("nav: {:?} -> {:?}", self.ctx.current, next);
        }
    }
}

/// Cancel in-flight signing and recovery
fn abort_operations<S: SessionControl + ?Sized>(session: &mut S) {
    session.abort_signing();
    session.abort_recovery();
}
