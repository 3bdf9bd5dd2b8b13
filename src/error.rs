//! Error types for localized resource operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for localization operations
pub type LocalizationResult<T> = std::result::Result<T, LocalizationError>;

/// Errors that can occur while loading or querying a localized resource file.
///
/// Every failure site maps to a small numeric code via [`code`](Self::code),
/// usable as a stable discriminator by callers that report errors before any
/// language file has been loaded.
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// The resources directory does not exist
    #[error("Resources directory {} does not exist.", .path.display())]
    ResourcesDirMissing { path: PathBuf },

    /// The resolved resource file does not exist
    #[error("Cannot locate resource file: {}", .path.display())]
    ResourceFileMissing { path: PathBuf },

    /// The loaded file has no `error_codes` section
    #[error("Localization file {} is corrupt: It is missing the error_codes section.", .path.display())]
    ErrorCodesSectionMissing { path: PathBuf },

    /// The requested code is not present in the `error_codes` section
    #[error("Localization file {} is corrupt: It is missing the error_code: {}.", .path.display(), .code)]
    ErrorCodeMissing { path: PathBuf, code: String },

    /// The loaded file has no `messages` section
    #[error("Localization file {} is corrupt: It is missing the messages section.", .path.display())]
    MessagesSectionMissing { path: PathBuf },

    /// The requested key is not present in the `messages` section
    #[error("Localization file {} is corrupt: It is missing the message: {}.", .path.display(), .key)]
    MessageMissing { path: PathBuf, key: String },

    /// The file exists but is not valid INI-style text
    #[error("Localization file {} is malformed at line {}: {}", .path.display(), .line, .reason)]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// IO error while reading the resource file
    #[error("Failed to read resource file: {0}")]
    Io(#[from] std::io::Error),
}

impl LocalizationError {
    /// Numeric discriminator for the failure site.
    ///
    /// Failure sites without an assigned code report 0.
    pub fn code(&self) -> u8 {
        match self {
            Self::ResourcesDirMissing { .. } | Self::Parse { .. } | Self::Io(_) => 0,
            Self::ResourceFileMissing { .. } => 1,
            Self::ErrorCodesSectionMissing { .. } => 2,
            Self::ErrorCodeMissing { .. } => 3,
            Self::MessagesSectionMissing { .. } => 4,
            Self::MessageMissing { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_codes() {
        let path = PathBuf::from("/tmp/app_english.ini");

        let dir_missing = LocalizationError::ResourcesDirMissing { path: path.clone() };
        assert_eq!(dir_missing.code(), 0);

        let file_missing = LocalizationError::ResourceFileMissing { path: path.clone() };
        assert_eq!(file_missing.code(), 1);

        let section_missing = LocalizationError::ErrorCodesSectionMissing { path: path.clone() };
        assert_eq!(section_missing.code(), 2);

        let code_missing = LocalizationError::ErrorCodeMissing {
            path: path.clone(),
            code: "101".to_string(),
        };
        assert_eq!(code_missing.code(), 3);

        let messages_missing = LocalizationError::MessagesSectionMissing { path: path.clone() };
        assert_eq!(messages_missing.code(), 4);

        let message_missing = LocalizationError::MessageMissing {
            path,
            key: "hello".to_string(),
        };
        assert_eq!(message_missing.code(), 5);
    }

    #[test]
    fn test_error_display_formatting() {
        let error = LocalizationError::ResourceFileMissing {
            path: PathBuf::from("/tmp/app_english.ini"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot locate resource file: /tmp/app_english.ini"
        );

        let error = LocalizationError::ErrorCodeMissing {
            path: PathBuf::from("/tmp/app_english.ini"),
            code: "404".to_string(),
        };
        assert!(error.to_string().contains("missing the error_code: 404."));

        let error = LocalizationError::Parse {
            path: PathBuf::from("/tmp/app_english.ini"),
            line: 3,
            reason: "entry appears before any section header".to_string(),
        };
        assert!(error.to_string().contains("malformed at line 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: LocalizationError = io_error.into();

        assert_eq!(error.code(), 0);
        assert!(error.to_string().contains("Failed to read resource file"));
    }
}
