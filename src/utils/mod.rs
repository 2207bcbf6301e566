//! Generic utility primitives shared by the extension modules.
//!
//! - `diff` - Structural difference between two JSON objects
//! - `io` - File I/O with consistent error handling
//! - `many` - More-than-one checks for collections
//! - `split` - Text splitting for case conversion
//! - `vacant` - Null/empty checks

pub mod diff;
pub mod io;
pub mod many;
pub mod split;
pub mod vacant;

pub use many::{Many, ManyBy, ManyEntries};
pub use vacant::Vacant;
