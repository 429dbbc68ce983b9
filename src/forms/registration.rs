//! The registration form.
//!
//! Every field is re-checked on each edit so the page can show live feedback.
//! Submitting only works once all of them pass.

use std::sync::LazyLock;

use chrono::NaiveDate;
use fancy_regex::Regex;

use crate::{config::RegistrationRules, error::FieldError};

use super::FieldState;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern should compile")
});

/// At least 8 characters, with a digit and a special character somewhere.
static PASSWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?=.*\d)(?=.*[!@#$%^&*()_\-+={}\[\]|\\:;"'<>,.?/~`]).{8,}$"#)
        .expect("password pattern should compile")
});

pub const AGE_HINT_UNKNOWN: &str = "Calculated age: —";

fn matches(re: &Regex, s: &str) -> bool {
    re.is_match(s)
        .inspect_err(|e| tracing::warn!("regex matching gave up. err: {e}"))
        .unwrap_or(false)
}

/// Whole years between `birth` and `today`.
///
/// `None` when `birth` is in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth)
}

/// Whether a password field shows its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    visible: bool,
}

impl PasswordVisibility {
    /// Flips between masked and plain text. Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The input type the field should use.
    pub fn input_type(&self) -> &'static str {
        if self.visible {
            "text"
        } else {
            "password"
        }
    }

    /// Label for the toggle button, describing what pressing it does.
    pub fn aria_label(&self) -> &'static str {
        if self.visible {
            "Hide password"
        } else {
            "Show password"
        }
    }
}

/// Everything the page needs to redraw the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    pub name: FieldState<FieldError>,
    pub email: FieldState<FieldError>,
    pub password: FieldState<FieldError>,
    pub confirm_password: FieldState<FieldError>,
    pub birthdate: FieldState<FieldError>,
    /// Computed from the birth date, when it parses.
    pub age: Option<u32>,
    pub age_hint: String,
    pub submit_enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `YYYY-MM-DD`, as a date input gives it. Empty when unset.
    pub birthdate: String,

    pub password_visibility: PasswordVisibility,
    pub confirm_visibility: PasswordVisibility,

    rules: RegistrationRules,
}

impl RegistrationForm {
    pub fn new(rules: RegistrationRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn validate_name(&self) -> Result<(), FieldError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(FieldError::NameRequired);
        }
        if name.chars().count() < self.rules.min_name_length {
            return Err(FieldError::NameTooShort(self.rules.min_name_length));
        }
        Ok(())
    }

    pub fn validate_email(&self) -> Result<(), FieldError> {
        let email = self.email.trim();

        if email.is_empty() {
            return Err(FieldError::EmailRequired);
        }
        if !matches(&EMAIL, email) {
            return Err(FieldError::EmailMalformed);
        }
        Ok(())
    }

    pub fn validate_password(&self) -> Result<(), FieldError> {
        if self.password.is_empty() {
            return Err(FieldError::PasswordRequired);
        }
        if !matches(&PASSWORD, &self.password) {
            return Err(FieldError::PasswordWeak);
        }
        Ok(())
    }

    pub fn validate_confirm_password(&self) -> Result<(), FieldError> {
        if self.confirm_password.is_empty() {
            return Err(FieldError::ConfirmRequired);
        }
        if self.confirm_password != self.password {
            return Err(FieldError::PasswordMismatch);
        }
        Ok(())
    }

    /// Checks the birth date against `today`. Also returns the age, if the
    /// date could be read at all.
    pub fn validate_birthdate(&self, today: NaiveDate) -> (Result<(), FieldError>, Option<u32>) {
        if self.birthdate.is_empty() {
            return (Err(FieldError::BirthdateRequired), None);
        }

        let Ok(birth) = NaiveDate::parse_from_str(&self.birthdate, "%Y-%m-%d") else {
            tracing::debug!("couldn't parse birth date `{}`", self.birthdate);
            return (Err(FieldError::BirthdateInvalid), None);
        };

        let Some(age) = age_on(birth, today) else {
            return (Err(FieldError::BirthdateInvalid), None);
        };
        if age < self.rules.min_age {
            return (Err(FieldError::Underage(self.rules.min_age)), Some(age));
        }
        (Ok(()), Some(age))
    }

    /// Checks every field.
    #[tracing::instrument(skip(self))]
    pub fn validate_all(&self, today: NaiveDate) -> RegistrationReport {
        let (birthdate, age) = self.validate_birthdate(today);

        let mut report = RegistrationReport {
            name: self.validate_name().into(),
            email: self.validate_email().into(),
            password: self.validate_password().into(),
            confirm_password: self.validate_confirm_password().into(),
            birthdate: birthdate.into(),
            age,
            age_hint: match age {
                Some(age) => format!("Calculated age: {age} years"),
                None => AGE_HINT_UNKNOWN.to_string(),
            },
            submit_enabled: false,
        };

        report.submit_enabled = [
            &report.name,
            &report.email,
            &report.password,
            &report.confirm_password,
            &report.birthdate,
        ]
        .iter()
        .all(|f| f.is_valid());

        tracing::debug!("submit enabled: {}", report.submit_enabled);
        report
    }

    /// Submits the form, giving back the first field that didn't pass.
    pub fn submit(&self, today: NaiveDate) -> Result<(), FieldError> {
        self.validate_name()?;
        self.validate_email()?;
        self.validate_password()?;
        self.validate_confirm_password()?;
        self.validate_birthdate(today).0?;

        tracing::info!("registration form submitted");
        Ok(())
    }

    /// Clears every field and masks both passwords again.
    pub fn reset(&mut self) {
        *self = Self::new(self.rules.clone());
    }

    /// What the page shows right after a reset, before anything is checked.
    pub fn blank_report() -> RegistrationReport {
        RegistrationReport {
            age_hint: AGE_HINT_UNKNOWN.to_string(),
            ..Default::default()
        }
    }
}
