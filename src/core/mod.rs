// Extension modules
pub mod array;
pub mod hash;
pub mod logger;
pub mod membership;
pub mod method;
pub mod path;
pub mod record;
pub mod stream;
pub mod string;
pub mod time;

pub mod error;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public modules for configuration access
pub mod defaults;

// Re-export common types for convenience
pub use array::{ArrayExt, RecordsExt};
pub use error::{Error, ErrorCode, Result};
pub use hash::{HashExt, KeyCase, MapExt, Transform};
pub use logger::{LogDevice, Logger, Severity};
pub use membership::{InExt, Includes};
pub use path::{PathExt, TempDirOptions};
pub use record::RecordExt;
pub use stream::RereadExt;
pub use string::StringExt;
pub use time::TimeExt;
