//! Device setup and settings prompts

use core::fmt::Write;

use heapless::String;

use super::descriptor::{ButtonLabel, DialogBuilder, DialogDescriptor, Icon};

/// English ordinal suffix for a seed word position
fn ordinal_suffix(position: u32) -> &'static str {
    match position {
        1 | 21 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// One seed word during backup
///
/// `pass` 0 writes the words down, pass 1 checks them. The button on the
/// last word finishes the check or starts it again.
pub fn reset_word(word: &str, pass: u8, position: u32, last: bool) -> DialogDescriptor {
    let button = match (last, pass) {
        (true, 1) => ButtonLabel::Finish,
        (true, _) => ButtonLabel::Again,
        (false, _) => ButtonLabel::Next,
    };
    let action = if pass == 1 {
        "Please check the seed"
    } else {
        "Write down the seed"
    };

    let mut index: String<16> = String::new();
    let _ = write!(
        index,
        "{}{} word is:",
        position % 100,
        ordinal_suffix(position)
    );

    DialogBuilder::new(button)
        .icon(Icon::Info)
        .line(action)
        .blank()
        .line(&index)
        .blank()
        .line(word)
        .build()
}

/// Confirmation of a new auto-lock delay
pub fn confirm_auto_lock_delay(delay_ms: u32) -> DialogDescriptor {
    let seconds = delay_ms / 1000;
    let (num, unit) = if delay_ms >= 60 * 60 * 1000 {
        (seconds / 3600, "hour")
    } else if delay_ms >= 60 * 1000 {
        (seconds / 60, "minute")
    } else {
        (seconds, "second")
    };

    let mut line: String<32> = String::new();
    let plural = if num > 1 { "s" } else { "" };
    let _ = write!(line, "after {} {}{}?", num, unit, plural);

    DialogBuilder::question(ButtonLabel::Confirm)
        .line("Do you really want to")
        .line("auto-lock your device")
        .line(&line)
        .build()
}
