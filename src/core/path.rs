//! Filesystem path helpers.
//!
//! Every helper that touches the disk returns `Result`, mapping native I/O failures
//! through [`map_io_error`]. Chainable helpers return the receiving path.

use regex::{NoExpand, Regex};
use std::env;
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};
use std::time::SystemTime;

use crate::defaults;
use crate::error::{Error, Result};
use crate::utils::io::{map_io_error, read_file, write_file};

/// Options for [`make_temp_dir`] and [`with_temp_dir`].
///
/// Unset fields fall back to the configured `tempDirs` defaults and the system
/// temporary directory.
#[derive(Debug, Clone, Default)]
pub struct TempDirOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub root: Option<PathBuf>,
}

impl TempDirOptions {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn create(&self) -> Result<tempfile::TempDir> {
        let fallback = &defaults::defaults().temp_dirs;
        let prefix = self.prefix.as_deref().unwrap_or(&fallback.prefix);
        let suffix = self.suffix.as_deref().unwrap_or(&fallback.suffix);

        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).suffix(suffix);

        let result = match &self.root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        };

        result.map_err(|e| {
            let root = self.root.clone().unwrap_or_else(env::temp_dir);
            map_io_error(e, &root, "create temp dir in")
        })
    }
}

/// The current user's home directory.
pub fn home() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~").as_ref())
}

/// The filesystem root.
pub fn root() -> PathBuf {
    PathBuf::from(MAIN_SEPARATOR_STR)
}

/// Create a temporary directory that outlives the call.
pub fn make_temp_dir(options: &TempDirOptions) -> Result<PathBuf> {
    Ok(options.create()?.keep())
}

/// Run `f` inside a fresh temporary directory, removing it afterwards.
pub fn with_temp_dir<R, F>(options: &TempDirOptions, f: F) -> Result<R>
where
    F: FnOnce(&Path) -> R,
{
    let dir = options.create()?;
    let result = f(dir.path());
    let path = dir.path().to_path_buf();
    dir.close().map_err(|e| map_io_error(e, &path, "remove temp dir"))?;
    Ok(result)
}

pub trait PathExt {
    /// Make this path the process working directory.
    fn change_dir(&self) -> Result<&Self>;

    /// Run `f` with this path as working directory, then restore the previous one.
    fn within_dir<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Path) -> R;

    /// Remove every child of this directory.
    fn clear(&self) -> Result<&Self>;

    /// Copy this file to `to`, or into `to` when it is a directory.
    fn copy(&self, to: &Path) -> Result<&Self>;

    /// Remove this file or empty directory.
    fn delete(&self) -> Result<&Self>;

    /// Sibling path with `prefix` stripped from the file name, extension kept.
    fn delete_prefix(&self, prefix: &str) -> PathBuf;

    /// Sibling path with `suffix` stripped from the file name, extension kept.
    fn delete_suffix(&self, suffix: &str) -> PathBuf;

    /// Sorted directories below this path matching `pattern`.
    fn directories(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    /// Sorted files below this path matching `pattern`.
    fn files(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    /// Truncate a file, or recreate a directory with no children.
    fn empty(&self) -> Result<&Self>;

    /// All extensions of the file name, each with its leading dot.
    fn extensions(&self) -> Vec<String>;

    fn gsub(&self, pattern: &Regex, replacement: &str) -> PathBuf;

    /// Create every missing parent directory.
    fn make_ancestors(&self) -> Result<&Self>;

    fn make_dir(&self) -> Result<&Self>;

    fn make_path(&self) -> Result<&Self>;

    /// File name without its last extension.
    fn name(&self) -> PathBuf;

    /// Write `content` followed by a newline, replacing existing content.
    fn puts(&self, content: &str) -> Result<&Self>;

    /// Parent of this path expressed relative to `root`.
    fn relative_parent(&self, root: &Path) -> Result<PathBuf>;

    /// Remove this directory when it exists; it must be empty.
    fn remove_dir(&self) -> Result<&Self>;

    /// Remove this path and everything below it when it exists.
    fn remove_tree(&self) -> Result<&Self>;

    /// Replace the file content with `f(content)`.
    fn rewrite<F>(&self, f: F) -> Result<&Self>
    where
        F: FnOnce(String) -> String;

    /// Create an empty file, or update the timestamps of an existing path.
    fn touch(&self) -> Result<&Self>;

    fn touch_at(&self, at: SystemTime) -> Result<&Self>;

    /// Create missing parents, then touch.
    fn touch_deep(&self) -> Result<&Self>;

    #[deprecated(note = "use `touch_deep` instead")]
    fn deep_touch(&self) -> Result<&Self>;

    /// Write `content` starting at byte `offset` without truncating.
    fn write_at(&self, content: &[u8], offset: u64) -> Result<&Self>;
}

impl PathExt for Path {
    fn change_dir(&self) -> Result<&Self> {
        env::set_current_dir(self).map_err(|e| map_io_error(e, self, "change dir to"))?;
        Ok(self)
    }

    fn within_dir<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&Path) -> R,
    {
        let previous = env::current_dir()
            .map_err(|e| Error::internal_io(e.to_string(), Some("read working dir".to_string())))?;

        self.change_dir()?;
        let restore = RestoreDir(previous);
        let result = f(self);
        restore.finish()?;

        Ok(result)
    }

    fn clear(&self) -> Result<&Self> {
        let entries = fs::read_dir(self).map_err(|e| map_io_error(e, self, "clear"))?;

        for entry in entries {
            let path = entry.map_err(|e| map_io_error(e, self, "clear"))?.path();
            path.remove_tree()?;
        }

        Ok(self)
    }

    fn copy(&self, to: &Path) -> Result<&Self> {
        let destination = match (to.is_dir(), self.file_name()) {
            (true, Some(name)) => to.join(name),
            _ => to.to_path_buf(),
        };

        fs::copy(self, &destination).map_err(|e| map_io_error(e, self, "copy"))?;
        Ok(self)
    }

    fn delete(&self) -> Result<&Self> {
        let result = if self.is_dir() {
            fs::remove_dir(self)
        } else {
            fs::remove_file(self)
        };

        result.map_err(|e| map_io_error(e, self, "delete"))?;
        Ok(self)
    }

    fn delete_prefix(&self, prefix: &str) -> PathBuf {
        let name = self.name().to_string_lossy().into_owned();
        let stripped = name.strip_prefix(prefix).unwrap_or(&name);
        sibling(self, stripped)
    }

    fn delete_suffix(&self, suffix: &str) -> PathBuf {
        let name = self.name().to_string_lossy().into_owned();
        let stripped = name.strip_suffix(suffix).unwrap_or(&name);
        sibling(self, stripped)
    }

    fn directories(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        Ok(matching(self, pattern)?
            .into_iter()
            .filter(|path| path.is_dir())
            .collect())
    }

    fn files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        Ok(matching(self, pattern)?
            .into_iter()
            .filter(|path| path.is_file())
            .collect())
    }

    fn empty(&self) -> Result<&Self> {
        if self.is_file() {
            let file = OpenOptions::new()
                .write(true)
                .open(self)
                .map_err(|e| map_io_error(e, self, "truncate"))?;
            file.set_len(0).map_err(|e| map_io_error(e, self, "truncate"))?;
            return Ok(self);
        }

        self.remove_tree()?.make_dir()
    }

    fn extensions(&self) -> Vec<String> {
        let Some(name) = self.file_name() else {
            return Vec::new();
        };
        let name = name.to_string_lossy();

        let starts: Vec<usize> = name
            .char_indices()
            .filter(|(index, ch)| *ch == '.' && *index > 0)
            .map(|(index, _)| index)
            .collect();

        starts
            .iter()
            .enumerate()
            .map(|(position, start)| {
                let end = starts.get(position + 1).copied().unwrap_or(name.len());
                name[*start..end].to_string()
            })
            .collect()
    }

    fn gsub(&self, pattern: &Regex, replacement: &str) -> PathBuf {
        let text = self.to_string_lossy();
        PathBuf::from(pattern.replace_all(&text, NoExpand(replacement)).into_owned())
    }

    fn make_ancestors(&self) -> Result<&Self> {
        if let Some(parent) = self.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            parent.make_path()?;
        }
        Ok(self)
    }

    fn make_dir(&self) -> Result<&Self> {
        if !self.exists() {
            fs::create_dir(self).map_err(|e| map_io_error(e, self, "create dir"))?;
        }
        Ok(self)
    }

    fn make_path(&self) -> Result<&Self> {
        fs::create_dir_all(self).map_err(|e| map_io_error(e, self, "create path"))?;
        Ok(self)
    }

    fn name(&self) -> PathBuf {
        self.file_stem().map(PathBuf::from).unwrap_or_default()
    }

    fn puts(&self, content: &str) -> Result<&Self> {
        write_file(self, format!("{}\n", content).as_bytes(), "write")?;
        Ok(self)
    }

    fn relative_parent(&self, root: &Path) -> Result<PathBuf> {
        let mut relative = relative_path(self, root)?;

        if relative == Path::new(".") {
            return Ok(PathBuf::from(".."));
        }

        // The parent of a path ending in `..` is one more level up.
        if relative.components().next_back() == Some(Component::ParentDir) {
            relative.push("..");
            return Ok(relative);
        }

        Ok(match relative.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        })
    }

    fn remove_dir(&self) -> Result<&Self> {
        if self.exists() {
            fs::remove_dir(self).map_err(|e| map_io_error(e, self, "remove dir"))?;
        }
        Ok(self)
    }

    fn remove_tree(&self) -> Result<&Self> {
        let result = if self.is_dir() {
            fs::remove_dir_all(self)
        } else if self.symlink_metadata().is_ok() {
            fs::remove_file(self)
        } else {
            Ok(())
        };

        result.map_err(|e| map_io_error(e, self, "remove tree"))?;
        Ok(self)
    }

    fn rewrite<F>(&self, f: F) -> Result<&Self>
    where
        F: FnOnce(String) -> String,
    {
        let content = read_file(self, "rewrite")?;
        write_file(self, f(content).as_bytes(), "rewrite")?;
        Ok(self)
    }

    fn touch(&self) -> Result<&Self> {
        self.touch_at(SystemTime::now())
    }

    fn touch_at(&self, at: SystemTime) -> Result<&Self> {
        if !self.exists() {
            write_file(self, b"", "touch")?;
            return Ok(self);
        }

        let times = FileTimes::new().set_accessed(at).set_modified(at);
        File::open(self)
            .and_then(|file| file.set_times(times))
            .map_err(|e| map_io_error(e, self, "touch"))?;

        Ok(self)
    }

    fn touch_deep(&self) -> Result<&Self> {
        self.make_ancestors()?.touch()
    }

    fn deep_touch(&self) -> Result<&Self> {
        crate::log_deprecated!("PathExt::deep_touch", "PathExt::touch_deep");
        self.touch_deep()
    }

    fn write_at(&self, content: &[u8], offset: u64) -> Result<&Self> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self)
            .map_err(|e| map_io_error(e, self, "open"))?;

        file.seek(SeekFrom::Start(offset))
            .and_then(|_| file.write_all(content))
            .map_err(|e| map_io_error(e, self, "write"))?;

        Ok(self)
    }
}

/// Returns to a saved working directory when dropped, including on unwind.
struct RestoreDir(PathBuf);

impl RestoreDir {
    fn finish(self) -> Result<()> {
        let previous = self.0.clone();
        std::mem::forget(self);
        previous.change_dir()?;
        Ok(())
    }
}

impl Drop for RestoreDir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    let file_name = match path.extension() {
        Some(extension) => format!("{}.{}", name, extension.to_string_lossy()),
        None => name.to_string(),
    };

    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn matching(path: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let base = glob::Pattern::escape(&path.to_string_lossy());
    let full = Path::new(&base).join(pattern);
    let full = full.to_string_lossy();

    let mut entries: Vec<PathBuf> = glob::glob(&full)
        .map_err(|e| {
            Error::validation_invalid_argument(
                "pattern",
                format!("Invalid glob pattern '{}': {}", pattern, e),
                Some(vec![pattern.to_string()]),
            )
        })?
        .filter_map(|entry| entry.ok())
        .collect();

    entries.sort();
    Ok(entries)
}

/// Lexical path from `root` to `path`; both must be absolute or both relative.
fn relative_path(path: &Path, root: &Path) -> Result<PathBuf> {
    if path.is_absolute() != root.is_absolute() {
        return Err(Error::validation_invalid_argument(
            "root",
            format!(
                "Cannot relate {} to {}: different prefix",
                path.display(),
                root.display()
            ),
            None,
        ));
    }

    let path_parts: Vec<Component> = path.components().filter(|c| *c != Component::CurDir).collect();
    let root_parts: Vec<Component> = root.components().filter(|c| *c != Component::CurDir).collect();

    let shared = path_parts
        .iter()
        .zip(root_parts.iter())
        .take_while(|(left, right)| left == right)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..root_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[shared..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }

    Ok(relative)
}
