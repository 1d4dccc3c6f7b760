use core::fmt::{self, Display, Formatter};

/// Raised by [`Array`](crate::Array) when an index is past its length.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundsError {
    pub index: usize,
    pub len: usize,
}

impl Display for BoundsError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "index {} was out of bounds of len {}", self.index, self.len)
    }
}

impl core::error::Error for BoundsError {}

/// The only failure an [`ArrayList`](crate::ArrayList) reports.
///
/// Every variant records the list length at the time of the call so callers
/// can tell how far off the argument was.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutOfRange {
    Position {
        pos: usize,
        len: usize,
    },
    Take {
        n: usize,
        len: usize,
    },
    Drop {
        n: usize,
        len: usize,
    },
    Mid {
        start: usize,
        count: usize,
        len: usize,
    },
    NthLargest {
        n: usize,
        len: usize,
    },
}

impl OutOfRange {

    #[inline(always)]
    pub fn len(&self) -> usize {
        match *self {
            Self::Position { len, .. } |
            Self::Take { len, .. } |
            Self::Drop { len, .. } |
            Self::Mid { len, .. } |
            Self::NthLargest { len, .. } => len,
        }
    }
}

impl Display for OutOfRange {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position { pos, .. } => {
                write!(f, "ArrayList: invalid position: {}", pos)
            },
            Self::Take { n, .. } => {
                write!(f, "ArrayList: invalid number of elements to take: {}", n)
            },
            Self::Drop { n, .. } => {
                write!(f, "ArrayList: invalid number of elements to drop: {}", n)
            },
            Self::Mid { start, count, .. } => {
                write!(f, "ArrayList: mid({},{}) invalid", start, count)
            },
            Self::NthLargest { n, .. } => {
                write!(f, "ArrayList: invalid element in list: {}", n)
            },
        }
    }
}

impl core::error::Error for OutOfRange {}
