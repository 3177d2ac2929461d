//! Navigation state machine behavior against recording fakes

mod common;

use common::{ManualClock, RecordingPlatform, RecordingRenderer, RenderCall, SessionCall};
use warden_core::dialog::{ButtonLabel, DialogBuilder};
use warden_core::nav::{
    Button, ButtonEdges, HomeBanner, InfoPage, Navigator, RenderCommand, ScreenId, Transition,
};
use warden_core::traits::RenderError;

const ALL_BUTTONS: [Button; 4] = [Button::Cancel, Button::Confirm, Button::Prev, Button::Next];

fn dialog() -> warden_core::dialog::DialogDescriptor {
    DialogBuilder::question(ButtonLabel::Confirm)
        .title("Sign message?")
        .line("hello")
        .build()
}

#[test]
fn auto_lock_with_transport_enters_screensaver() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);

    assert!(nav.tick(ButtonEdges::NONE, 59_999, &mut platform).is_unchanged());
    assert_eq!(nav.current(), ScreenId::Home);

    let cmd = nav.tick(ButtonEdges::NONE, 60_000, &mut platform);
    assert_eq!(cmd, RenderCommand::Screensaver);
    assert_eq!(nav.current(), ScreenId::Screensaver);
    assert_eq!(
        platform.count(SessionCall::ClearSession { wipe_keys: true }),
        1
    );
    assert_eq!(platform.count(SessionCall::PowerOff), 0);

    // Staying idle on the screensaver repeats nothing
    nav.tick(ButtonEdges::NONE, 600_000, &mut platform);
    assert_eq!(
        platform.count(SessionCall::ClearSession { wipe_keys: true }),
        1
    );
}

#[test]
fn auto_lock_without_transport_powers_off() {
    let mut platform = RecordingPlatform {
        transport: false,
        ..Default::default()
    };
    let mut nav = Navigator::new(0);

    let cmd = nav.tick(ButtonEdges::NONE, 60_000, &mut platform);
    assert_eq!(cmd, RenderCommand::Blank);
    assert_eq!(nav.current(), ScreenId::Locked);
    assert_eq!(platform.count(SessionCall::PowerOff), 1);
    assert_eq!(
        platform.calls,
        vec![
            SessionCall::ClearSession { wipe_keys: true },
            SessionCall::PowerOff
        ]
    );

    nav.tick(ButtonEdges::NONE, 120_000, &mut platform);
    assert_eq!(platform.count(SessionCall::PowerOff), 1);
}

#[test]
fn auto_lock_delay_read_every_tick() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);

    nav.tick(ButtonEdges::NONE, 30_000, &mut platform);
    assert_eq!(nav.current(), ScreenId::Home);

    platform.auto_lock_delay_ms = 20_000;
    nav.tick(ButtonEdges::NONE, 30_001, &mut platform);
    assert_eq!(nav.current(), ScreenId::Screensaver);
}

#[test]
fn button_activity_postpones_auto_lock() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);

    nav.tick(Button::Confirm.into(), 50_000, &mut platform);
    nav.tick(ButtonEdges::NONE, 100_000, &mut platform);
    assert_eq!(nav.current(), ScreenId::Home);
    assert!(platform.calls.is_empty());

    nav.tick(ButtonEdges::NONE, 110_000, &mut platform);
    assert_eq!(nav.current(), ScreenId::Screensaver);
}

#[test]
fn cancel_in_dialog_aborts_once_and_keeps_screen() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);
    nav.enter_dialog(dialog());

    let cmd = nav.tick(Button::Cancel.into(), 100, &mut platform);
    assert!(cmd.is_unchanged());
    assert_eq!(nav.current(), ScreenId::DialogActive);
    assert_eq!(platform.aborts(), (1, 1));
    assert_eq!(platform.calls.len(), 2);

    // No new edge, no new abort
    nav.tick(ButtonEdges::NONE, 100, &mut platform);
    assert_eq!(platform.aborts(), (1, 1));
}

#[test]
fn dialog_never_auto_locks() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);
    nav.enter_dialog(dialog());

    nav.tick(ButtonEdges::NONE, 10 * 60_000, &mut platform);
    assert_eq!(nav.current(), ScreenId::DialogActive);
    assert!(platform.calls.is_empty());
    assert_eq!(platform.status_polls, 0);
}

#[test]
fn cancel_on_info_page_returns_home_without_aborts() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);
    nav.tick(Button::Next.into(), 10, &mut platform);

    let cmd = nav.tick(Button::Cancel.into(), 20, &mut platform);
    assert!(matches!(
        cmd,
        RenderCommand::Home {
            transition: Transition::Swipe,
            ..
        }
    ));
    assert_eq!(nav.current(), ScreenId::Home);
    assert_eq!(platform.aborts(), (0, 0));
}

#[test]
fn screensaver_wakes_on_any_button_without_aborts() {
    for button in ALL_BUTTONS {
        let mut platform = RecordingPlatform::default();
        let mut nav = Navigator::new(0);
        nav.tick(ButtonEdges::NONE, 60_000, &mut platform);
        assert_eq!(nav.current(), ScreenId::Screensaver);
        platform.calls.clear();

        let cmd = nav.tick(button.into(), 61_000, &mut platform);
        assert!(matches!(
            cmd,
            RenderCommand::Home {
                transition: Transition::Clear,
                ..
            }
        ));
        assert_eq!(nav.current(), ScreenId::Home);
        assert_eq!(nav.context().pending_info_page(), 0);
        assert_eq!(platform.aborts(), (0, 0));
    }
}

#[test]
fn idle_ticks_are_idempotent() {
    let mut platform = RecordingPlatform::default();
    let mut renderer = RecordingRenderer::default();
    let clock = ManualClock::at(5_000);
    let mut nav = Navigator::new(0);

    let first = nav
        .poll(ButtonEdges::NONE, &clock, &mut platform, &mut renderer)
        .unwrap();
    let polls = platform.status_polls;
    let calls = renderer.calls.len();
    let second = nav
        .poll(ButtonEdges::NONE, &clock, &mut platform, &mut renderer)
        .unwrap();

    assert!(first.is_unchanged());
    assert!(second.is_unchanged());
    assert_eq!(platform.status_polls, polls);
    assert_eq!(renderer.calls.len(), calls);
    assert!(platform.calls.is_empty());
}

#[test]
fn info_pages_cycle_and_time_out() {
    let mut platform = RecordingPlatform::default();
    let mut renderer = RecordingRenderer::default();
    let clock = ManualClock::at(0);
    let mut nav = Navigator::new(0);

    nav.poll(Button::Prev.into(), &clock, &mut platform, &mut renderer)
        .unwrap();
    assert_eq!(nav.current(), ScreenId::InfoPage(InfoPage::LAST));
    clock.advance(9_000);
    nav.poll(Button::Prev.into(), &clock, &mut platform, &mut renderer)
        .unwrap();
    assert_eq!(nav.current(), ScreenId::InfoPage(InfoPage::new(3)));

    // Timer restarted on the page change
    clock.advance(9_999);
    nav.poll(ButtonEdges::NONE, &clock, &mut platform, &mut renderer)
        .unwrap();
    assert_eq!(nav.current(), ScreenId::InfoPage(InfoPage::new(3)));
    clock.advance(1);
    nav.poll(ButtonEdges::NONE, &clock, &mut platform, &mut renderer)
        .unwrap();
    assert_eq!(nav.current(), ScreenId::Home);

    assert_eq!(
        renderer.calls,
        vec![
            RenderCall::InfoPage(4),
            RenderCall::Refresh,
            RenderCall::InfoPage(3),
            RenderCall::Refresh,
            RenderCall::Home(Transition::Swipe),
            RenderCall::Refresh,
        ]
    );
}

#[test]
fn timeout_overrides_buttons_in_same_tick() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);
    nav.tick(Button::Next.into(), 0, &mut platform);

    nav.tick(Button::Next.into(), 10_000, &mut platform);
    assert_eq!(nav.current(), ScreenId::Home);
}

#[test]
fn tamper_poll_aborts_and_rerenders_home() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);

    nav.tick(ButtonEdges::NONE, 1_000, &mut platform);
    assert_eq!(platform.status_polls, 1);
    assert!(platform.calls.is_empty());

    platform.tamper = true;
    nav.tick(ButtonEdges::NONE, 1_500, &mut platform);
    assert_eq!(platform.status_polls, 1);

    let cmd = nav.tick(ButtonEdges::NONE, 2_000, &mut platform);
    assert!(matches!(cmd, RenderCommand::Home { .. }));
    assert_eq!(nav.current(), ScreenId::Home);
    assert_eq!(
        platform.calls,
        vec![
            SessionCall::AbortSigning,
            SessionCall::AbortRecovery,
            SessionCall::ClearSession { wipe_keys: true },
        ]
    );
}

#[test]
fn status_not_polled_off_home() {
    let mut platform = RecordingPlatform {
        tamper: true,
        ..Default::default()
    };
    let mut nav = Navigator::new(0);
    nav.tick(Button::Next.into(), 0, &mut platform);

    nav.tick(ButtonEdges::NONE, 5_000, &mut platform);
    assert_eq!(platform.status_polls, 0);
    assert!(platform.calls.is_empty());
}

#[test]
fn home_view_carries_banner() {
    let mut platform = RecordingPlatform {
        needs_backup: true,
        ..Default::default()
    };
    let mut renderer = RecordingRenderer::default();
    let mut nav = Navigator::new(0);
    nav.enter_dialog(dialog());

    nav.go_home(10, &platform)
        .dispatch(&mut renderer)
        .unwrap();
    let home = renderer.last_home.clone().unwrap();
    assert_eq!(home.label(), Some("Test wallet"));
    assert_eq!(home.banner, Some(HomeBanner::NeedsBackup));
    assert_eq!(renderer.calls[0], RenderCall::Home(Transition::Swipe));

    platform.initialized = false;
    let cmd = nav.go_home(20, &platform);
    match cmd {
        RenderCommand::Home { transition, view } => {
            assert_eq!(transition, Transition::Clear);
            assert_eq!(view.label(), None);
            assert_eq!(view.banner, Some(HomeBanner::NotActivated));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn render_failure_keeps_side_effects() {
    let mut platform = RecordingPlatform {
        transport: false,
        ..Default::default()
    };
    let mut renderer = RecordingRenderer {
        fail_with: Some(RenderError::Communication),
        ..Default::default()
    };
    let clock = ManualClock::at(60_000);
    let mut nav = Navigator::new(0);

    let result = nav.poll(ButtonEdges::NONE, &clock, &mut platform, &mut renderer);
    assert_eq!(result, Err(RenderError::Communication));
    assert_eq!(nav.current(), ScreenId::Locked);
    assert_eq!(platform.count(SessionCall::PowerOff), 1);
}

#[test]
fn reset_returns_home_with_fresh_timers() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(0);
    nav.enter_dialog(dialog());
    nav.reset(1_000_000);

    assert_eq!(nav.current(), ScreenId::Home);
    assert_eq!(nav.context().last_activity_ms(), 1_000_000);
    nav.tick(ButtonEdges::NONE, 1_000_500, &mut platform);
    assert_eq!(nav.current(), ScreenId::Home);
}

#[test]
fn clock_going_backwards_is_harmless() {
    let mut platform = RecordingPlatform::default();
    let mut nav = Navigator::new(100_000);

    nav.tick(ButtonEdges::NONE, 5, &mut platform);
    assert_eq!(nav.current(), ScreenId::Home);
    assert!(platform.calls.is_empty());
}
