use thiserror::Error;

use crate::domain::email::EmailId;
use crate::domain::mailbox::Mailbox;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no mailbox with address {0}")]
    MailboxNotFound(String),

    #[error("no email {id} in mailbox {address}")]
    EmailNotFound { address: String, id: EmailId },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Mailbox collection addressed by stable keys: mailbox address and email id.
pub trait MailboxRepository {
    /// Appends a new mailbox holding exactly one welcome email.
    fn generate_mailbox(&mut self) -> &Mailbox;

    /// Mailboxes in generation order.
    fn mailboxes(&self) -> &[Mailbox];
    fn mailbox(&self, address: &str) -> Option<&Mailbox>;

    fn toggle_star(&mut self, address: &str, id: EmailId) -> StoreResult<()>;
    fn toggle_archive(&mut self, address: &str, id: EmailId) -> StoreResult<()>;
    /// Sets the read flag. There is no way back to unread.
    fn mark_read(&mut self, address: &str, id: EmailId) -> StoreResult<()>;
    /// Removes the email; an emptied mailbox stays in the collection.
    fn delete_email(&mut self, address: &str, id: EmailId) -> StoreResult<()>;
}
