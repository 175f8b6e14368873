//! Glyph outlines from an external glyph tool.

use glyphmark_core::glyph::{Glyph, parse_glyphs};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Font the icon letters are set in.
pub const DEFAULT_FONT: &str = "HelveticaNeue-Bold";

/// Location of the Swift helper, relative to the work directory.
pub const GLYPH_TOOL_RELATIVE_PATH: &str = ".codex/glyph-to-path.swift";

/// Swift module cache used by the helper, relative to the work directory.
pub const MODULE_CACHE_RELATIVE_PATH: &str = ".codex/swift-module-cache";

const GLYPH_TOOL_SOURCE: &str = include_str!("../assets/glyph-to-path.swift");

/// Glyph tool errors.
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("glyph tool failed ({text}): {diagnostic}")]
    Source { text: String, diagnostic: String },
    #[error("Failed to parse glyph data for \"{text}\": {message}")]
    Parse { text: String, message: String },
}

/// Result type for glyph lookups.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Anything that can turn text into glyph records, one per mapped character.
pub trait GlyphSource {
    fn glyphs(&mut self, text: &str) -> GlyphResult<Vec<Glyph>>;
}

/// Helper script the tool command runs, written on first use.
#[derive(Debug, Clone)]
struct HelperScript {
    path: PathBuf,
    source: &'static str,
    cache_dir: PathBuf,
}

/// Runs `<program> <args...> <FONT> <TEXT>` and reads JSON glyphs from stdout.
#[derive(Debug, Clone)]
pub struct CommandGlyphSource {
    program: OsString,
    args: Vec<OsString>,
    envs: Vec<(OsString, OsString)>,
    work_dir: PathBuf,
    font: String,
    helper: Option<HelperScript>,
}

impl CommandGlyphSource {
    /// Any executable speaking the glyph tool protocol.
    pub fn custom<P, I, A>(program: P, args: I, work_dir: impl Into<PathBuf>, font: &str) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            envs: Vec::new(),
            work_dir: work_dir.into(),
            font: font.to_string(),
            helper: None,
        }
    }

    /// The bundled CoreText helper, run through `swift`.
    ///
    /// The script and its module cache live under `<work_dir>/.codex/`.
    pub fn swift(work_dir: impl Into<PathBuf>, font: &str) -> Self {
        let work_dir = work_dir.into();
        let tool_path = work_dir.join(GLYPH_TOOL_RELATIVE_PATH);
        let cache_dir = work_dir.join(MODULE_CACHE_RELATIVE_PATH);

        let mut source = Self::custom(
            "swift",
            [
                OsString::from("-module-cache-path"),
                cache_dir.clone().into_os_string(),
                tool_path.clone().into_os_string(),
            ],
            work_dir,
            font,
        );
        source.envs.push((
            OsString::from("SWIFT_MODULE_CACHE_PATH"),
            cache_dir.clone().into_os_string(),
        ));
        source.helper = Some(HelperScript {
            path: tool_path,
            source: GLYPH_TOOL_SOURCE,
            cache_dir,
        });
        source
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write the helper script if absent and create its module cache.
    fn prepare(&self, text: &str) -> GlyphResult<()> {
        let Some(helper) = &self.helper else {
            return Ok(());
        };
        let io_error = |what: &str, path: &Path, e: std::io::Error| GlyphError::Source {
            text: text.to_string(),
            diagnostic: format!("Failed to {} {}: {}", what, path.display(), e),
        };

        if let Some(parent) = helper.path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
        }
        if !helper.path.exists() {
            log::debug!("Writing glyph helper to {}", helper.path.display());
            fs::write(&helper.path, helper.source)
                .map_err(|e| io_error("write", &helper.path, e))?;
        }
        fs::create_dir_all(&helper.cache_dir).map_err(|e| io_error("create", &helper.cache_dir, e))?;
        Ok(())
    }
}

impl GlyphSource for CommandGlyphSource {
    fn glyphs(&mut self, text: &str) -> GlyphResult<Vec<Glyph>> {
        self.prepare(text)?;

        log::debug!(
            "Running glyph tool {:?} for \"{}\" ({})",
            self.program,
            text,
            self.font
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.font)
            .arg(text)
            .current_dir(&self.work_dir)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .output()
            .map_err(|e| GlyphError::Source {
                text: text.to_string(),
                diagnostic: format!("Failed to execute {:?}: {}", self.program, e),
            })?;

        if !output.status.success() {
            return Err(GlyphError::Source {
                text: text.to_string(),
                diagnostic: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| GlyphError::Parse {
            text: text.to_string(),
            message: e.to_string(),
        })?;
        parse_glyphs(&stdout).map_err(|e| GlyphError::Parse {
            text: text.to_string(),
            message: e.to_string(),
        })
    }
}

/// Memoizes another source by exact text for the life of the process.
#[derive(Debug)]
pub struct CachedGlyphSource<S> {
    inner: S,
    cache: HashMap<String, Vec<Glyph>>,
}

impl<S: GlyphSource> CachedGlyphSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: HashMap::new(),
        }
    }

    /// Whether `text` has already been fetched.
    pub fn is_cached(&self, text: &str) -> bool {
        self.cache.contains_key(text)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: GlyphSource> GlyphSource for CachedGlyphSource<S> {
    fn glyphs(&mut self, text: &str) -> GlyphResult<Vec<Glyph>> {
        if let Some(glyphs) = self.cache.get(text) {
            log::trace!("Glyph cache hit for \"{}\"", text);
            return Ok(glyphs.clone());
        }
        let glyphs = self.inner.glyphs(text)?;
        self.cache.insert(text.to_string(), glyphs.clone());
        Ok(glyphs)
    }
}
