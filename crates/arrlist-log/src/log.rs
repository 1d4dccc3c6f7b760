use std::{
    io::Write,
    sync::{Mutex, MutexGuard, OnceLock},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::*;

use crate::fmt::SegmentSpec;

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Level filters parsed from a `RUST_LOG` style string.
///
/// Entries are comma separated, either `level` (sets the base level) or
/// `target=level`. Entries with an unknown level are skipped. When a target
/// is listed twice the quieter level wins.
#[derive(Clone, Debug, PartialEq)]
pub struct Filters {
    pub base_level: Level,
    pub target_levels: FxHashMap<CompactString, Level>,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            base_level: Level::Error,
            target_levels: FxHashMap::default(),
        }
    }
}

impl Filters {

    pub fn parse(spec: &str) -> Self {
        let mut filters = Self::default();
        for arg in spec.split(',') {
            let (target, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            if let Some(target) = target {
                let entry = filters.target_levels
                    .entry(CompactString::new(target))
                    .or_insert(level);
                *entry = (*entry).min(level);
            } else {
                filters.base_level = level;
            }
        }
        filters
    }

    pub fn from_env() -> Self {
        std::env::var("RUST_LOG")
            .map(|env| Self::parse(&env))
            .unwrap_or_default()
    }

    /// Level of the longest `::` prefix of `target` that has a filter.
    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }
}

pub struct Logger<W: WriteColor> {
    out: W,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    always_fmt: LogFmt,
    filters: Filters,
}

impl<W: WriteColor> Logger<W> {

    pub fn new(out: W, filters: Filters) -> Self {
        Self {
            out,
            error_fmt: LogFmt::level_default(Level::Error),
            warn_fmt: LogFmt::level_default(Level::Warn),
            info_fmt: LogFmt::level_default(Level::Info),
            debug_fmt: LogFmt::level_default(Level::Debug),
            trace_fmt: LogFmt::level_default(Level::Trace),
            always_fmt: LogFmt::level_default(Level::Always),
            filters,
        }
    }

    #[inline(always)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Always => &mut self.always_fmt,
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    pub fn set_fmt(&mut self, level: Level, mut f: impl FnMut(&mut LogFmtBuilder)) {
        let mut builder = LogFmtBuilder::new(self.fmt_mut(level));
        f(&mut builder);
    }

    /// Writes one line if `level` passes the filter for `target`.
    pub fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if self.filters.target_level(target) < level {
            return Ok(false)
        }
        // borrow the format field directly so `out` stays writable
        let fmt = match level {
            Level::Always => &self.always_fmt,
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        for segment in fmt {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        write!(self.out, "{}", msg)?;
                        self.out.reset()?;
                    } else {
                        write!(self.out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        self.out.write_all(text.as_bytes())?;
                        self.out.reset()?;
                    } else {
                        self.out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        self.out.write_all(b"\n")?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger<StandardStream>>> = OnceLock::new();

/// Installs the global stderr logger, reading filters from `RUST_LOG`.
///
/// Later calls are no-ops.
pub fn init() {
    LOGGER.get_or_init(|| {
        Mutex::new(Logger::new(
            StandardStream::stderr(ColorChoice::Auto),
            Filters::from_env(),
        ))
    });
}

fn logger() -> Result<MutexGuard<'static, Logger<StandardStream>>> {
    LOGGER
        .get()
        .ok_or(LogError::NotInitialized)?
        .lock()
        .map_err(|_| LogError::Poisoned)
}

macro_rules! level_fmt {
    ($($level:ident => $variant:ident),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Replaces the global format for `" $variant "` lines."]
                #[inline(always)]
                pub fn [<$level _fmt>](f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
                    logger()?.set_fmt(Level::$variant, f);
                    Ok(())
                }
            )+
        }
    };
}

level_fmt!(
    error => Error,
    warn => Warn,
    info => Info,
    debug => Debug,
    trace => Trace,
    always => Always,
);

#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    logger()?.log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
