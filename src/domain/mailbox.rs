use chrono::{DateTime, Utc};

use crate::domain::email::{Email, EmailId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub address: String,
    pub created_at: DateTime<Utc>,
    /// Arrival order.
    pub emails: Vec<Email>,
}

impl Mailbox {
    pub fn email(&self, id: EmailId) -> Option<&Email> {
        self.emails.iter().find(|e| e.id == id)
    }

    pub fn email_mut(&mut self, id: EmailId) -> Option<&mut Email> {
        self.emails.iter_mut().find(|e| e.id == id)
    }
}
