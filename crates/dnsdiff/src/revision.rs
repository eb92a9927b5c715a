use derive_more::Display;

/// A point-in-time snapshot of the record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Revision {
    /// The live, unversioned snapshot
    #[display(fmt = "current")]
    Current,

    /// A historical revision
    #[display(fmt = "revision {}", _0)]
    Numbered(i64),
}

impl From<i64> for Revision {
    /// Zero is the sentinel for the current snapshot
    fn from(rev: i64) -> Self {
        if rev == 0 {
            Revision::Current
        } else {
            Revision::Numbered(rev)
        }
    }
}
