use camino::Utf8PathBuf;
use core::error::Error;
use pisserror::Error;
use uuid::Uuid;

/// Bad or missing input. These are reported through the status line and
/// never go further than the handler that caused them.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Type a URL before adding.")]
    EmptyLocator,

    #[error("Invalid URL `{_0}`. It must start with http:// or https://")]
    MalformedLocator(String),

    #[error("Pick an image file (jpg/png/webp). `{name}` has type `{media_type}`.")]
    NotAnImage { name: String, media_type: String },
}

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("{_0}")]
    Validation(#[from] ValidationError),

    #[error("No card with id `{_0}` is in the gallery.")]
    UnknownCard(Uuid),

    #[error("Card `{id}` can't move from `{from}` to `{to}`.")]
    InvalidTransition {
        id: Uuid,
        from: crate::models::card::CardState,
        to: crate::models::card::CardState,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// during fs read from disk
    #[error("Failed to read config file. See: `{_0}`")]
    ReadFailed(#[from] std::io::Error),

    /// parsing
    #[error("Failed to parse config file. See: `{_0}`")]
    ParseFailed(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read the local file at `{path}`. Err: `{err}`.")]
    ReadFailed {
        path: Utf8PathBuf,
        err: std::io::Error,
    },

    #[error("The local file at `{_0}` has no file name.")]
    NoFileName(Utf8PathBuf),
}

/// A registration field that didn't pass. The message is shown right under
/// the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Must be at least {_0} characters long.")]
    NameTooShort(usize),

    #[error("Email is required.")]
    EmailRequired,

    #[error("Invalid format. Example: mail@example.com")]
    EmailMalformed,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("At least 8 characters, with 1 number and 1 special character.")]
    PasswordWeak,

    #[error("Confirm your password.")]
    ConfirmRequired,

    #[error("Passwords don't match.")]
    PasswordMismatch,

    #[error("Birth date is required.")]
    BirthdateRequired,

    #[error("Invalid date.")]
    BirthdateInvalid,

    #[error("You must be at least {_0} years old.")]
    Underage(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("The email format isn't valid.")]
    InvalidEmail,
}
