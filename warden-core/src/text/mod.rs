//! Text shaping for confirmation dialogs
//!
//! Both utilities are pure: they own no state and return fresh values.

pub mod pager;
pub mod path;

pub use pager::{
    is_printable_ascii, paginate, paginate_auto, paginate_hex, PageEncoding, PagedLine, PagedText,
};
pub use path::{humanize, humanize_raw, raw_path, PathComponent, PathLabel, UNKNOWN_LONG_PATH};
