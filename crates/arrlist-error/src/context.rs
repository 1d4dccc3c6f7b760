use core::{
    error,
    fmt::Display,
};

use crate::{Error, location};

/// Attaches context to the error of a `Result`.
///
/// # Example
/// ```rust
/// use arrlist_error::Context;
/// use arrlist_mem::ArrayList;
///
/// let list: ArrayList<i32> = ArrayList::new();
/// let err = list.take(3).ctx_err("taking from an empty list").unwrap_err();
/// assert_eq!(err.chain(), "taking from an empty list: ArrayList: invalid number of elements to take: 3");
/// ```
pub trait Context<T, E: error::Error + Send + Sync + 'static> {

    fn ctx_err<C: Display>(self, ctx: C) -> Result<T, Error>;

    fn ctx_err_with<C: Display>(self, f: impl FnOnce(&E) -> C) -> Result<T, Error>;

    /// Like [`Context::ctx_err`], also recording the caller.
    #[track_caller]
    fn ctx_err_tracked<C: Display>(self, ctx: C) -> Result<T, Error>;
}

impl<T, E: error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {

    #[inline(always)]
    fn ctx_err<C: Display>(self, ctx: C) -> Result<T, Error> {
        self.map_err(|err| Error::new(ctx, err))
    }

    #[inline(always)]
    fn ctx_err_with<C: Display>(self, f: impl FnOnce(&E) -> C) -> Result<T, Error> {
        self.map_err(|err| Error::new(f(&err), err))
    }

    #[track_caller]
    fn ctx_err_tracked<C: Display>(self, ctx: C) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::new(ctx, err).with_location(location::caller())),
        }
    }
}
