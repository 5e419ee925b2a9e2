pub mod enrollment;
pub mod session;
pub mod teaching;
pub mod unlink;

pub use session::Session;

/// Whether a relationship operation changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// A new link was created on both sides
    Linked,
    /// The link already existed; nothing changed
    AlreadyLinked,
    /// An existing link was removed from both sides
    Unlinked,
    /// There was no link to remove; nothing changed
    NotLinked,
}

/// Result of a relationship operation, with a message fit for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    pub status: LinkStatus,
    pub message: String,
}

impl LinkOutcome {
    pub(crate) fn new(status: LinkStatus, message: String) -> Self {
        Self { status, message }
    }

    /// True when the session was mutated
    pub fn changed(&self) -> bool {
        matches!(self.status, LinkStatus::Linked | LinkStatus::Unlinked)
    }
}
