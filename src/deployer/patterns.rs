//! File name patterns deciding which files are runtime binaries
//!
//! Patterns are unanchored regular expressions searched in the file name, so
//! `.dll` matches `foo.dll` but also `foo.dll.manifest` and `fooxdll`. Only
//! the `.so` pattern is anchored at the end, to take versioned sonames
//! (`libfoo.so.1.2.3`) without taking `libfoo.sold`.

use regex::Regex;

use crate::error::{Result, config::invalid_pattern};

/// Default library patterns, in match order
pub const DEFAULT_PATTERNS: &[&str] = &[r"\.so(\.\d+)*$", ".dylib", ".dll"];

/// Ordered set of file name matchers
#[derive(Debug, Clone)]
pub struct FilePatterns {
    matchers: Vec<Regex>,
    match_all: bool,
}

impl FilePatterns {
    /// Compile a pattern list
    ///
    /// An empty list is allowed and matches nothing.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|e| invalid_pattern(p, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            matchers,
            match_all: false,
        })
    }

    /// Matcher accepting every file name, used for binary directories
    pub fn all() -> Self {
        Self {
            matchers: Vec::new(),
            match_all: true,
        }
    }

    /// Whether `file_name` is eligible for deployment
    pub fn is_match(&self, file_name: &str) -> bool {
        self.match_all || self.matchers.iter().any(|re| re.is_match(file_name))
    }

    /// Source text of the patterns, in order
    pub fn as_strs(&self) -> Vec<&str> {
        self.matchers.iter().map(Regex::as_str).collect()
    }
}

impl Default for FilePatterns {
    fn default() -> Self {
        // The defaults are known-good regexes
        Self {
            matchers: DEFAULT_PATTERNS
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect(),
            match_all: false,
        }
    }
}
