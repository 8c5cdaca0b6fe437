pub mod address;
pub mod email;
pub mod filter;
pub mod mailbox;
