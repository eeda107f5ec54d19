//! Booking inquiry form state. Submitting never leaves the page: it only
//! raises a local "submitted" flag that clears itself after a while.

use crate::constants::CONTACT_RESET_MS;
use crate::error::ContactError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub guests: String,
    pub message: String,
}

impl ContactFields {
    /// Set a field by its form `name` attribute. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "service" => &mut self.service,
            "date" => &mut self.date,
            "guests" => &mut self.guests,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    reset_after_ms: f64,
    submitted_at: Option<f64>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(CONTACT_RESET_MS)
    }
}

impl ContactForm {
    pub fn new(reset_after_ms: f64) -> Self {
        Self {
            fields: ContactFields::default(),
            reset_after_ms,
            submitted_at: None,
        }
    }

    /// Prefill the service picked from the catalog.
    pub fn book(&mut self, service: &str) {
        self.fields.service = service.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.fields.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        let email = self.fields.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn submit(&mut self, now_ms: f64) -> Result<(), ContactError> {
        self.validate()?;
        self.submitted_at = Some(now_ms);
        log::info!("[contact] inquiry for `{}` accepted", self.fields.service);
        Ok(())
    }

    pub fn is_submitted(&self, now_ms: f64) -> bool {
        self.submitted_at
            .map(|t| now_ms - t < self.reset_after_ms)
            .unwrap_or(false)
    }

    #[inline]
    pub fn reset_after_ms(&self) -> f64 {
        self.reset_after_ms
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !s.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}
