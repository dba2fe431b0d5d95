use std::fmt;

/// Keys of the documents the service reads from the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKey {
    /// The user's résumé, stored as stringified JSON.
    Resume,
    /// Reference corpus consulted when writing recommendations.
    Everything,
}

impl DocumentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKey::Resume => "resume",
            DocumentKey::Everything => "everything",
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
