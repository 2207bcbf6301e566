/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("config", "Ignoring {}: {}", path, err);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

/// Status line announcing a deprecated helper and its replacement.
#[macro_export]
macro_rules! log_deprecated {
    ($old:expr, $new:expr) => {
        $crate::log_status!("deprecated", "`{}` is deprecated, use `{}` instead.", $old, $new)
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `primext::string` instead of `primext::core::string`
pub use crate::core::*;
pub use crate::utils::*;

/// Every extension trait, for `use primext::prelude::*;`.
pub mod prelude {
    pub use crate::core::array::{ArrayExt, RecordsExt};
    pub use crate::core::hash::{HashExt, MapExt};
    pub use crate::core::membership::InExt;
    pub use crate::core::path::PathExt;
    pub use crate::core::record::RecordExt;
    pub use crate::core::stream::RereadExt;
    pub use crate::core::string::StringExt;
    pub use crate::core::time::TimeExt;
    pub use crate::utils::many::{Many, ManyBy, ManyEntries};
    pub use crate::utils::vacant::Vacant;
}
