//! Localized resource loading and lookup

use crate::error::{LocalizationError, LocalizationResult};
use crate::format::format_template;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Language used when the caller does not supply one
pub const DEFAULT_LANGUAGE: &str = "english";

const ERROR_CODES_SECTION: &str = "error_codes";
const MESSAGES_SECTION: &str = "messages";

/// Section name to key/value entries, as parsed from the resource file
type Sections = HashMap<String, HashMap<String, String>>;

/// A localized resource file, loaded once and queried read-only.
///
/// The file is resolved from a `(resources_dir, prefix, language)` triple as
/// `<resources_dir>/<prefix>_<language>.ini` and parsed at construction. Two
/// sections are meaningful: `error_codes` (integer-like keys) and `messages`
/// (named keys). Lookups return templates run through
/// [`format_template`](crate::format_template), with `{variable}`
/// placeholders left for the caller.
///
/// All error messages raised here are in English: by definition no language
/// file has been loaded yet, or the loaded one is unusable.
#[derive(Debug)]
pub struct LocalizedResource {
    /// Directory holding the per-language resource files
    resources_dir: PathBuf,
    prefix: String,
    language: String,
    file_name: String,
    file_path: PathBuf,
    /// Parsed sections; never mutated after construction
    sections: Sections,
}

impl LocalizedResource {
    /// Loads the resource file for `language` from `resources_dir`.
    ///
    /// `prefix` is the application part of the file name: loading
    /// `"squirrel_english.ini"` takes a prefix of `"squirrel"` and a language
    /// of `"english"`.
    ///
    /// Fails if the directory or the resolved file does not exist, or if the
    /// file cannot be read or parsed.
    pub fn new<P: AsRef<Path>>(
        resources_dir: P,
        prefix: &str,
        language: &str,
    ) -> LocalizationResult<Self> {
        let resources_dir = resources_dir.as_ref().to_path_buf();

        if !resources_dir.exists() {
            return Err(LocalizationError::ResourcesDirMissing {
                path: resources_dir,
            });
        }

        let file_name = format!("{prefix}_{language}.ini");
        let file_path = resources_dir.join(&file_name);
        let sections = load_sections(&file_path)?;

        info!("Loaded localized resources from {:?}", file_path);

        Ok(Self {
            resources_dir,
            prefix: prefix.to_string(),
            language: language.to_string(),
            file_name,
            file_path,
            sections,
        })
    }

    /// Loads the resource file for the default language, `"english"`.
    pub fn with_default_language<P: AsRef<Path>>(
        resources_dir: P,
        prefix: &str,
    ) -> LocalizationResult<Self> {
        Self::new(resources_dir, prefix, DEFAULT_LANGUAGE)
    }

    /// Returns the formatted error message registered under `code`.
    ///
    /// `code` may be anything displayable as a string; integer and string
    /// forms of the same code resolve identically. The returned string still
    /// contains its `{variable}` placeholders.
    pub fn get_error_message<C: Display>(&self, code: C) -> LocalizationResult<String> {
        let code = code.to_string();

        let section = self.sections.get(ERROR_CODES_SECTION).ok_or_else(|| {
            LocalizationError::ErrorCodesSectionMissing {
                path: self.file_path.clone(),
            }
        })?;

        let template = section
            .get(&code)
            .ok_or_else(|| LocalizationError::ErrorCodeMissing {
                path: self.file_path.clone(),
                code,
            })?;

        Ok(format_template(template))
    }

    /// Returns the formatted message registered under `message_key`.
    pub fn get_message(&self, message_key: &str) -> LocalizationResult<String> {
        let section = self.sections.get(MESSAGES_SECTION).ok_or_else(|| {
            LocalizationError::MessagesSectionMissing {
                path: self.file_path.clone(),
            }
        })?;

        let template =
            section
                .get(message_key)
                .ok_or_else(|| LocalizationError::MessageMissing {
                    path: self.file_path.clone(),
                    key: message_key.to_string(),
                })?;

        Ok(format_template(template))
    }

    /// Checks whether `code` exists in the `error_codes` section.
    pub fn has_error_code<C: Display>(&self, code: C) -> bool {
        self.sections
            .get(ERROR_CODES_SECTION)
            .is_some_and(|section| section.contains_key(&code.to_string()))
    }

    /// Checks whether `message_key` exists in the `messages` section.
    pub fn has_message(&self, message_key: &str) -> bool {
        self.sections
            .get(MESSAGES_SECTION)
            .is_some_and(|section| section.contains_key(message_key))
    }

    /// Like [`get_error_message`](Self::get_error_message), but falls back to
    /// `default` on any lookup failure.
    pub fn get_error_message_or_default<C: Display>(&self, code: C, default: &str) -> String {
        let code = code.to_string();
        self.get_error_message(&code).unwrap_or_else(|err| {
            warn!("Error code '{}' unavailable, using default: {}", code, err);
            default.to_string()
        })
    }

    /// Like [`get_message`](Self::get_message), but falls back to `default`
    /// on any lookup failure.
    pub fn get_message_or_default(&self, message_key: &str, default: &str) -> String {
        self.get_message(message_key).unwrap_or_else(|err| {
            warn!(
                "Message '{}' unavailable, using default: {}",
                message_key, err
            );
            default.to_string()
        })
    }

    /// Directory the resource file was resolved against
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Application prefix of the resource file name
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Language of the loaded resource file
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resolved file name, `<prefix>_<language>.ini`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the loaded resource file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// Reads and parses the resource file at `path`.
fn load_sections(path: &Path) -> LocalizationResult<Sections> {
    debug!("Loading resource file: {:?}", path);

    if !path.exists() {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        warn!("Resource file does not exist: {:?}", absolute);
        return Err(LocalizationError::ResourceFileMissing { path: absolute });
    }

    let content = fs::read_to_string(path)?;
    parse_ini(path, &content)
}

/// Parses INI-style text into sections of key/value entries.
///
/// `;` and `#` begin comment lines. Keys may be delimited from values with
/// `=` or `:`; a key line without a delimiter maps to the empty string.
/// Duplicate keys within a section resolve last-value-wins, and a repeated
/// section header merges into the existing section. Section and key names
/// are case-sensitive.
fn parse_ini(path: &Path, content: &str) -> LocalizationResult<Sections> {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(LocalizationError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: format!("unclosed section header '{line}'"),
                });
            }
            let name = line[1..line.len() - 1].trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let section = match current.as_ref().and_then(|name| sections.get_mut(name)) {
            Some(section) => section,
            None => {
                return Err(LocalizationError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: format!("entry '{line}' appears before any section header"),
                });
            }
        };

        let (key, value) = match line.find(['=', ':']) {
            Some(pos) => (line[..pos].trim_end(), line[pos + 1..].trim_start()),
            None => (line, ""),
        };

        if key.is_empty() {
            return Err(LocalizationError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                reason: "entry has an empty key".to_string(),
            });
        }

        section.insert(key.to_string(), value.to_string());
    }

    Ok(sections)
}
