use std::fmt;

/// A point `(x, P(x) mod p)` on a secret polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Share {
    pub x: u64,
    pub y: u64,
}

impl Share {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl From<(u64, u64)> for Share {
    fn from((x, y): (u64, u64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Share> for (u64, u64) {
    fn from(share: Share) -> Self {
        (share.x, share.y)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
