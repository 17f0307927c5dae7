use std::sync::Arc;
use tracing::info;

use staybite_client::api::ContactApi;
use staybite_core::contact::ContactDraft;

use crate::error::FlowError;

/// The public contact form. Subject is the one optional field.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct ContactFlow {
    api: Arc<dyn ContactApi>,
}

impl ContactFlow {
    pub fn new(api: Arc<dyn ContactApi>) -> Self {
        Self { api }
    }

    /// Validate and submit the form. No auth gate; anyone can write in. On
    /// success the form is cleared.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<(), FlowError> {
        if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
            return Err(FlowError::validation("Please fill in all required fields"));
        }

        let draft = ContactDraft {
            name: form.name.clone(),
            email: form.email.clone(),
            subject: if form.subject.is_empty() {
                None
            } else {
                Some(form.subject.clone())
            },
            message: form.message.clone(),
        };
        self.api.submit_contact(&draft).await?;
        form.clear();
        info!("contact message submitted");
        Ok(())
    }
}
