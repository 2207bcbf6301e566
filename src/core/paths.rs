use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base primext config directory (~/.config/primext/ on Unix-like systems)
pub fn primext() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("primext"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("primext"))
    }
}

/// Global primext.json config file path
pub fn primext_json() -> Result<PathBuf> {
    Ok(primext()?.join("primext.json"))
}
