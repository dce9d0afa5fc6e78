use std::collections::BTreeSet;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{PathBuf, MAIN_SEPARATOR};

use concat_string::concat_string;
use log::{debug, trace};

use crate::error::Error;

/// Cowfile extension, without the dot.
pub const EXTENSION: &str = "cow";

/// Environment variable overriding the search path.
pub const COWPATH: &str = "COWPATH";

const SYSTEM_DIR: &str = "/usr/share/cows";

/// Directories searched, in order, for cowfiles.
#[derive(Debug, Clone)]
pub struct CowPath {
    dirs: Vec<PathBuf>,
}

impl CowPath {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// `$COWPATH` if set and non-empty, otherwise `~/.cows` then the system directory.
    pub fn from_env() -> Self {
        match env::var_os(COWPATH) {
            Some(value) if !value.is_empty() => Self::new(
                env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect(),
            ),
            _ => Self::default(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Reads the cowfile called `name`.
    ///
    /// Names containing a path separator or ending in `.cow` are read as paths
    /// and never looked up on the search path.
    pub fn read(&self, name: &str) -> Result<String, Error> {
        if is_literal(name) {
            debug!("reading cowfile {name} directly");
            return fs::read_to_string(name).map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::TemplateNotFound(name.to_owned()),
                _ => Error::io(name, e),
            });
        }

        let file = concat_string!(name, ".", EXTENSION);
        for dir in &self.dirs {
            let path = dir.join(&file);
            match fs::read_to_string(&path) {
                Ok(cow) => {
                    debug!("using cowfile {}", path.display());
                    return Ok(cow);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    trace!("{} not in {}", file, dir.display());
                }
                Err(e) => return Err(Error::io(path.display().to_string(), e)),
            }
        }
        Err(Error::TemplateNotFound(file))
    }

    /// Names of all cowfiles on the search path, sorted and de-duplicated.
    /// Missing directories are skipped.
    pub fn list(&self) -> Result<Vec<String>, Error> {
        let mut names = BTreeSet::new();
        for dir in &self.dirs {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    trace!("skipping missing {}", dir.display());
                    continue;
                }
                Err(e) => return Err(Error::io(dir.display().to_string(), e)),
            };
            for entry in entries {
                let path = entry
                    .map_err(|e| Error::io(dir.display().to_string(), e))?
                    .path();
                if path.extension() != Some(OsStr::new(EXTENSION)) {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                    names.insert(stem.to_owned());
                }
            }
        }
        Ok(names.into_iter().collect())
    }
}

impl Default for CowPath {
    fn default() -> Self {
        let mut search = Vec::with_capacity(2);
        if let Some(home) = dirs::home_dir() {
            search.push(home.join(".cows"));
        }
        search.push(PathBuf::from(SYSTEM_DIR));
        Self::new(search)
    }
}

fn is_literal(name: &str) -> bool {
    name.contains('/')
        || name.contains(MAIN_SEPARATOR)
        || name
            .strip_suffix(EXTENSION)
            .is_some_and(|stem| stem.ends_with('.'))
}
