use chrono::Utc;
use log::debug;

use crate::domain::address::AddressGenerator;
use crate::domain::email::{Email, EmailId};
use crate::domain::mailbox::Mailbox;
use crate::store::repo::{MailboxRepository, StoreError, StoreResult};

/// Random draws tried before falling back to a numbered local part.
const MAX_REROLLS: usize = 16;

/// Process-lifetime store. Nothing here outlives the process.
#[derive(Debug)]
pub struct MemoryStore {
    mailboxes: Vec<Mailbox>,
    next_id: EmailId,
    /// Suffix for numbered addresses once random draws keep colliding.
    next_suffix: u64,
    addresses: AddressGenerator,
}

impl MemoryStore {
    pub fn new(addresses: AddressGenerator) -> Self {
        Self {
            mailboxes: Vec::new(),
            next_id: 1,
            next_suffix: 1,
            addresses,
        }
    }

    fn allocate_id(&mut self) -> EmailId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// A random address not used by any mailbox yet. When the random space
    /// is crowded, a counter is appended to the local part, so this always
    /// returns.
    fn unique_address(&mut self) -> String {
        for _ in 0..MAX_REROLLS {
            let candidate = self.addresses.next_address();
            if self.mailbox(&candidate).is_none() {
                return candidate;
            }
            debug!("address {candidate} already taken, rolling again");
        }
        loop {
            let candidate = format!(
                "{}{}@{}",
                self.addresses.next_local_part(),
                self.next_suffix,
                self.addresses.domain()
            );
            self.next_suffix += 1;
            if self.mailbox(&candidate).is_none() {
                debug!("random addresses crowded, using {candidate}");
                return candidate;
            }
        }
    }

    fn email_mut(&mut self, address: &str, id: EmailId) -> StoreResult<&mut Email> {
        let mailbox = self
            .mailboxes
            .iter_mut()
            .find(|m| m.address == address)
            .ok_or_else(|| StoreError::MailboxNotFound(address.to_string()))?;
        mailbox
            .email_mut(id)
            .ok_or_else(|| StoreError::EmailNotFound {
                address: address.to_string(),
                id,
            })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(AddressGenerator::default())
    }
}

impl MailboxRepository for MemoryStore {
    fn generate_mailbox(&mut self) -> &Mailbox {
        let address = self.unique_address();
        let now = Utc::now();
        let welcome = Email::welcome(self.allocate_id(), now);

        debug!("generated mailbox {address}");
        self.mailboxes.push(Mailbox {
            address,
            created_at: now,
            emails: vec![welcome],
        });
        &self.mailboxes[self.mailboxes.len() - 1]
    }

    fn mailboxes(&self) -> &[Mailbox] {
        &self.mailboxes
    }

    fn mailbox(&self, address: &str) -> Option<&Mailbox> {
        self.mailboxes.iter().find(|m| m.address == address)
    }

    fn toggle_star(&mut self, address: &str, id: EmailId) -> StoreResult<()> {
        let email = self.email_mut(address, id)?;
        email.is_starred = !email.is_starred;
        debug!("email {id} in {address}: starred={}", email.is_starred);
        Ok(())
    }

    fn toggle_archive(&mut self, address: &str, id: EmailId) -> StoreResult<()> {
        let email = self.email_mut(address, id)?;
        email.is_archived = !email.is_archived;
        debug!("email {id} in {address}: archived={}", email.is_archived);
        Ok(())
    }

    fn mark_read(&mut self, address: &str, id: EmailId) -> StoreResult<()> {
        self.email_mut(address, id)?.is_read = true;
        debug!("email {id} in {address}: read");
        Ok(())
    }

    fn delete_email(&mut self, address: &str, id: EmailId) -> StoreResult<()> {
        let mailbox = self
            .mailboxes
            .iter_mut()
            .find(|m| m.address == address)
            .ok_or_else(|| StoreError::MailboxNotFound(address.to_string()))?;
        let pos = mailbox
            .emails
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::EmailNotFound {
                address: address.to_string(),
                id,
            })?;
        mailbox.emails.remove(pos);
        debug!("email {id} deleted from {address}");
        Ok(())
    }
}
