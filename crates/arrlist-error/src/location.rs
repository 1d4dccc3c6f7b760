use core::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(&'static core::panic::Location<'static>);

impl Location {

    #[inline(always)]
    pub fn file(&self) -> &'static str {
        self.0.file()
    }

    #[inline(always)]
    pub fn line(&self) -> u32 {
        self.0.line()
    }
}

impl Display for Location {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.0, f)
    }
}

impl Debug for Location {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        <core::panic::Location<'_> as Debug>::fmt(self.0, f)
    }
}

/// Location of whoever called the enclosing `#[track_caller]` function.
#[inline(always)]
#[track_caller]
pub fn caller() -> Location {
    Location(core::panic::Location::caller())
}

