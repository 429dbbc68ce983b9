use crate::{error::ContactError, models::view::Status};

/// The "get in touch" form on the product page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,

    status: Status,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the form and "sends" it.
    ///
    /// On success the fields are cleared. Either way, [`status`] says what
    /// happened.
    ///
    /// [`status`]: ContactForm::status
    #[tracing::instrument(skip(self))]
    pub fn submit(&mut self) -> Result<(), ContactError> {
        match self.check() {
            Ok(()) => {
                tracing::info!("contact form sent");
                *self = Self {
                    status: Status::info("Form sent! We'll get in touch soon."),
                    ..Self::default()
                };
                Ok(())
            }
            Err(e) => {
                tracing::debug!("contact form refused: {e}");
                self.status = Status::error(e.to_string());
                Err(e)
            }
        }
    }

    fn check(&self) -> Result<(), ContactError> {
        let (name, email, message) = (self.name.trim(), self.email.trim(), self.message.trim());

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn status(&self) -> &Status {
        &self.status
    }
}
