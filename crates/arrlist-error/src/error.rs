use core::{
    error,
    fmt::{self, Display, Debug, Formatter},
};

use compact_str::{CompactString, ToCompactString};

use crate::location::{self, Location};

type Source = Box<dyn error::Error + Send + Sync + 'static>;

pub struct Error {
    ctx: CompactString,
    source: Option<Source>,
    loc: Option<Location>,
}

impl Error {

    #[inline(always)]
    pub fn new<C>(ctx: C, err: impl error::Error + Send + Sync + 'static) -> Self
        where C: Display,
    {
        Self {
            ctx: ctx.to_compact_string(),
            source: Some(Box::new(err)),
            loc: None,
        }
    }

    #[track_caller]
    pub fn new_tracked<C>(ctx: C, err: impl error::Error + Send + Sync + 'static) -> Self
        where C: Display,
    {
        Self::new(ctx, err).with_location(location::caller())
    }

    #[inline(always)]
    pub fn just_context<C>(ctx: C) -> Self
        where C: Display,
    {
        Self {
            ctx: ctx.to_compact_string(),
            source: None,
            loc: None,
        }
    }

    #[track_caller]
    pub fn just_context_tracked<C>(ctx: C) -> Self
        where C: Display,
    {
        Self::just_context(ctx).with_location(location::caller())
    }

    #[inline(always)]
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    #[inline(always)]
    pub fn context(&self) -> &str {
        &self.ctx
    }

    #[inline(always)]
    pub fn location(&self) -> Option<Location> {
        self.loc
    }

    /// Walks the source chain looking for an `E`.
    pub fn find_source<E: error::Error + 'static>(&self) -> Option<&E> {
        let mut next = error::Error::source(self);
        while let Some(err) = next {
            if let Some(err) = err.downcast_ref::<E>() {
                return Some(err)
            }
            next = err.source();
        }
        None
    }

    /// Context and every source, joined by `: `.
    pub fn chain(&self) -> String {
        let mut out = String::from(self.ctx.as_str());
        let mut next = error::Error::source(self);
        while let Some(err) = next {
            out.push_str(": ");
            out.push_str(&err.to_string());
            next = err.source();
        }
        out
    }
}

impl Display for Error {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ctx)
    }
}

impl Debug for Error {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.source, &self.loc) {
            (None, None) => write!(f, "Error(ctx: {}, err: None)", self.ctx),
            (Some(err), None) => write!(f, "Error(ctx: {}, err: {:?})", self.ctx, err),
            (None, Some(loc)) => write!(f, "Error(ctx: {}, err: None, loc: {})", self.ctx, loc),
            (Some(err), Some(loc)) => {
                write!(f, "Error(ctx: {}, err: {:?}, loc: {})", self.ctx, err, loc)
            },
        }
    }
}

impl error::Error for Error {

    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn error::Error + 'static))
    }
}
