//! Localized string resources for terminal applications
//!
//! This crate loads a per-language resource file that maps error codes to
//! error strings and message keys to messages, and resolves both into
//! formatted display strings. It includes:
//!
//! - Resource file resolution by naming convention
//! - Section and key validation with coded failures
//! - Inline `{{COLOR_*}}` tag substitution for ANSI terminal colors
//! - Literal `\n` expansion into real newlines
//!
//! # Resource file format
//!
//! Resource files are INI-style and named `<prefix>_<language>.ini`, one file
//! per language the application is localized in. Each file has two sections:
//!
//! ```ini
//! [error_codes]
//! 101=This is error 101
//! 102=This is error 102
//!
//! [messages]
//! hello=Hello world.
//! do_quit=Do you really want to quit?
//! ```
//!
//! Values may embed colors as `{{COLOR_NAME}}` tags and variables as
//! `{variable_name}` placeholders. A message that prints "Your name is Bob"
//! in red, with the name supplied by the caller, looks like:
//!
//! ```ini
//! msg={{COLOR_RED}}Your name is {name}{{COLOR_NONE}}
//! ```
//!
//! Remember to turn the color off with `{{COLOR_NONE}}` or the following
//! text keeps the same color.
//!
//! # Example
//!
//! ```rust
//! use locres::LocalizedResource;
//!
//! # fn example() -> locres::LocalizationResult<()> {
//! let resources = LocalizedResource::new("/path/to/resources", "myapp", "english")?;
//!
//! let msg = resources.get_error_message(101)?;
//! let msg = msg.replace("{replace_me}", "some text to fill into the variable");
//! println!("{}", msg);
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod resource;

pub use color::color_code;
pub use error::{LocalizationError, LocalizationResult};
pub use format::format_template;
pub use resource::{LocalizedResource, DEFAULT_LANGUAGE};
