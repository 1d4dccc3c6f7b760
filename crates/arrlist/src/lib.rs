pub mod scenarios;

pub use arrlist_mem as mem;
pub use arrlist_log as log;
pub use arrlist_error as error;

pub use mem::{ArrayList, OrderedList, OutOfRange, nth_largest};
pub use error::{Error, Context};
