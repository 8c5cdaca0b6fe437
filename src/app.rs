//! The application controller. Everything the UI can change goes through
//! here, and every dashboard command requires a signed-in user.

use thiserror::Error;

use crate::auth::gate::AuthGate;
use crate::domain::email::{Email, EmailId};
use crate::domain::filter::visible_emails;
use crate::domain::mailbox::Mailbox;
use crate::store::memory::MemoryStore;
use crate::store::repo::{MailboxRepository, StoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("sign in first")]
    NotAuthenticated,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub struct App<R: MailboxRepository = MemoryStore> {
    pub auth: AuthGate,
    store: R,
    /// Shared by every mailbox view.
    search: String,
}

impl<R: MailboxRepository> App<R> {
    pub fn new(store: R) -> Self {
        Self {
            auth: AuthGate::new(),
            store,
            search: String::new(),
        }
    }

    fn ensure_signed_in(&self) -> AppResult<()> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn mailboxes(&self) -> AppResult<&[Mailbox]> {
        self.ensure_signed_in()?;
        Ok(self.store.mailboxes())
    }

    pub fn mailbox(&self, address: &str) -> AppResult<&Mailbox> {
        self.ensure_signed_in()?;
        self.store
            .mailbox(address)
            .ok_or_else(|| StoreError::MailboxNotFound(address.to_string()).into())
    }

    /// Emails of `address` that pass the current search term.
    pub fn visible_emails(&self, address: &str) -> AppResult<Vec<&Email>> {
        let mailbox = self.mailbox(address)?;
        Ok(visible_emails(&mailbox.emails, &self.search).collect())
    }

    /// Returns the new mailbox's address.
    pub fn generate_mailbox(&mut self) -> AppResult<String> {
        self.ensure_signed_in()?;
        Ok(self.store.generate_mailbox().address.clone())
    }

    pub fn toggle_star(&mut self, address: &str, id: EmailId) -> AppResult<()> {
        self.ensure_signed_in()?;
        Ok(self.store.toggle_star(address, id)?)
    }

    pub fn toggle_archive(&mut self, address: &str, id: EmailId) -> AppResult<()> {
        self.ensure_signed_in()?;
        Ok(self.store.toggle_archive(address, id)?)
    }

    pub fn mark_read(&mut self, address: &str, id: EmailId) -> AppResult<()> {
        self.ensure_signed_in()?;
        Ok(self.store.mark_read(address, id)?)
    }

    pub fn delete_email(&mut self, address: &str, id: EmailId) -> AppResult<()> {
        self.ensure_signed_in()?;
        Ok(self.store.delete_email(address, id)?)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MemoryStore::default())
    }
}
