use chrono::{DateTime, Utc};

pub type EmailId = u64;

pub const WELCOME_SUBJECT: &str = "🎄 Welcome to Mailly.Christmas! 🎅";
pub const WELCOME_PREVIEW: &str = "Congratulations on getting your holiday mailbox...";
pub const WELCOME_CONTENT: &str = "Congratulations on getting your holiday mailbox! \
Now you can receive letters in the spirit of Christmas all year round. \
Wishing you magical moments! 🎁✨";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub id: EmailId,
    pub subject: String,
    pub preview: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub is_read: bool,
    pub is_starred: bool,
    pub is_archived: bool,
}

impl Email {
    /// The message every freshly generated mailbox starts with.
    pub fn welcome(id: EmailId, date: DateTime<Utc>) -> Self {
        Self {
            id,
            subject: WELCOME_SUBJECT.to_string(),
            preview: WELCOME_PREVIEW.to_string(),
            content: WELCOME_CONTENT.to_string(),
            date,
            is_read: false,
            is_starred: false,
            is_archived: false,
        }
    }
}
