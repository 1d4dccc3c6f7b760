use core::slice;

use compact_str::CompactString;

use arrlist_mem::ArrayList;

use crate::{Color, ColorSpec, Level};

/// Sequence of segments written for every line of one level.
#[derive(Default, Clone)]
pub struct LogFmt {
    segments: ArrayList<SegmentSpec>,
}

impl LogFmt {

    /// `[LEVEL] message`, with the tag colored by level.
    pub fn level_default(level: Level) -> Self {
        let mut fmt = Self::default();
        let (tag, color) = match level {
            Level::Always => ("[LOG] ", None),
            Level::Error => ("[ERROR] ", Some(Color::Red)),
            Level::Warn => ("[WARN] ", Some(Color::Yellow)),
            Level::Info => ("[INFO] ", Some(Color::Green)),
            Level::Debug => ("[DEBUG] ", Some(Color::Cyan)),
            Level::Trace => ("[TRACE] ", None),
        };
        LogFmtBuilder::new(&mut fmt)
            .text(tag, |spec| match color {
                Some(color) => spec.with_color_spec(|c| { c.set_fg(Some(color)).set_bold(true); }),
                None => spec,
            })
            .message(|spec| spec);
        fmt
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.size()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default, Clone, Debug)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

#[derive(Clone, Debug)]
pub enum SegmentSpec {
    Message(LogSpec),
    Text(CompactString, LogSpec),
}

impl Default for SegmentSpec {

    fn default() -> Self {
        Self::Message(LogSpec::default())
    }
}

pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    /// Starts over from an empty format.
    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.add(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.add(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_replaces_segments() {
        let mut fmt = LogFmt::level_default(Level::Warn);
        assert_eq!(fmt.len(), 2);
        LogFmtBuilder::new(&mut fmt)
            .text("> ", |s| s)
            .message(|s| s)
            .text(" <", |s| s);
        assert_eq!(fmt.len(), 3);
        let texts: Vec<&str> = fmt
            .into_iter()
            .filter_map(|seg| match seg {
                SegmentSpec::Text(text, _) => Some(text.as_str()),
                SegmentSpec::Message(_) => None,
            })
            .collect();
        assert_eq!(texts, vec!["> ", " <"]);
    }

    #[test]
    fn default_tags_are_colored() {
        let fmt = LogFmt::level_default(Level::Error);
        match fmt.into_iter().next() {
            Some(SegmentSpec::Text(text, spec)) => {
                assert_eq!(text.as_str(), "[ERROR] ");
                assert_eq!(spec.color_spec.as_ref().and_then(|c| c.fg()), Some(&Color::Red));
            },
            other => panic!("unexpected first segment {:?}", other),
        }
    }
}
