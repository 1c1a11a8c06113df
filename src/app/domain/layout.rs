//! Width-driven layout rules.

use super::content::{Emphasis, Span};
use super::section::SectionId;

/// Small-screen breakpoint (two-column skills grid from here).
pub const SM_BREAKPOINT: i32 = 640;
/// Desktop navigation from this width up.
pub const MD_BREAKPOINT: i32 = 768;
/// Three-column skills grid from this width up.
pub const LG_BREAKPOINT: i32 = 1024;
/// Widest the content column gets; wider windows centre it.
pub const MAX_CONTENT_WIDTH: i32 = 1152;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn from_width(width: i32) -> Self {
        if width >= MD_BREAKPOINT {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == LayoutMode::Mobile
    }
}

/// Number of skill cards per grid row at `width`.
pub fn skill_grid_columns(width: i32) -> usize {
    if width >= LG_BREAKPOINT {
        3
    } else if width >= SM_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Left offset and width of the centred content column.
pub fn content_column(window_width: i32, padding: i32) -> (i32, i32) {
    let width = (window_width - 2 * padding).clamp(0, MAX_CONTENT_WIDTH);
    ((window_width - width) / 2, width)
}

/// Greedy word wrap. `measure` returns the drawn width of a string.
///
/// Words wider than `max_width` get a line of their own rather than being
/// split.
pub fn wrap_text<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Row-major packing of `count` items into rows of `columns`.
pub fn grid_rows(count: usize, columns: usize) -> Vec<std::ops::Range<usize>> {
    let columns = columns.max(1);
    (0..count)
        .step_by(columns)
        .map(|start| start..(start + columns).min(count))
        .collect()
}

/// A word of rich text. `glued` words attach to the previous word
/// without a space (punctuation right after an emphasized run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub emphasis: Emphasis,
    pub glued: bool,
}

/// Split spans into words, remembering where span boundaries carry no
/// whitespace.
pub fn split_words<'a>(spans: &'a [Span]) -> Vec<Word<'a>> {
    let mut words = Vec::new();
    let mut trailing_space = true;
    for span in spans {
        let leading_space = span.text.starts_with(char::is_whitespace);
        for (i, text) in span.text.split_whitespace().enumerate() {
            let glued = i == 0 && !leading_space && !trailing_space;
            words.push(Word { text, emphasis: span.emphasis, glued });
        }
        if !span.text.trim().is_empty() {
            trailing_space = span.text.ends_with(char::is_whitespace);
        }
    }
    words
}

/// A word placed on a line, `x` relative to the line start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed<'a> {
    pub x: f64,
    pub text: &'a str,
    pub emphasis: Emphasis,
}

/// Flow rich words into lines no wider than `max_width`. Glued words
/// never start a line; they wrap together with the word before them.
pub fn flow_words<'a, F>(words: &[Word<'a>], max_width: f64, space: f64, measure: F) -> Vec<Vec<Placed<'a>>>
where
    F: Fn(&str, Emphasis) -> f64,
{
    let mut units: Vec<Vec<&Word<'a>>> = Vec::new();
    for word in words {
        if word.glued {
            if let Some(unit) = units.last_mut() {
                unit.push(word);
                continue;
            }
        }
        units.push(vec![word]);
    }

    let mut lines: Vec<Vec<Placed<'a>>> = Vec::new();
    let mut line: Vec<Placed<'a>> = Vec::new();
    let mut cursor = 0.0;
    for unit in units {
        let width: f64 = unit.iter().map(|w| measure(w.text, w.emphasis)).sum();
        let mut gap = if line.is_empty() { 0.0 } else { space };
        if !line.is_empty() && cursor + gap + width > max_width {
            lines.push(std::mem::take(&mut line));
            cursor = 0.0;
            gap = 0.0;
        }
        let mut x = cursor + gap;
        for word in unit {
            line.push(Placed { x, text: word.text, emphasis: word.emphasis });
            x += measure(word.text, word.emphasis);
        }
        cursor = x;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Flow fixed-width boxes (chips) left to right. Returns `(x, row)` per box.
pub fn flow_boxes(widths: &[i32], max_width: i32, gap: i32) -> Vec<(i32, usize)> {
    let mut placed = Vec::with_capacity(widths.len());
    let mut x = 0;
    let mut row = 0;
    for &w in widths {
        if x > 0 && x + w > max_width {
            row += 1;
            x = 0;
        }
        placed.push((x, row));
        x += w + gap;
    }
    placed
}

/// Content-relative offsets of the navigable sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionAnchors {
    offsets: Vec<(SectionId, i32)>,
    content_height: i32,
}

impl SectionAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: SectionId, offset: i32) {
        self.offsets.retain(|(s, _)| *s != section);
        self.offsets.push((section, offset));
    }

    pub fn set_content_height(&mut self, height: i32) {
        self.content_height = height;
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn offset(&self, section: SectionId) -> Option<i32> {
        self.offsets.iter().find(|(s, _)| *s == section).map(|(_, y)| *y)
    }

    /// Largest valid scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll(&self, viewport_height: i32) -> i32 {
        (self.content_height - viewport_height).max(0)
    }

    /// Scroll offset that brings `section` to the top, clamped to the
    /// scrollable range. None if the section was never laid out.
    pub fn scroll_target(&self, section: SectionId, viewport_height: i32) -> Option<i32> {
        self.offset(section)
            .map(|y| y.clamp(0, self.max_scroll(viewport_height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn test_layout_mode_breakpoint() {
        assert_eq!(LayoutMode::from_width(320), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_width(767), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_width(768), LayoutMode::Desktop);
        assert!(!LayoutMode::from_width(1920).is_mobile());
    }

    #[test]
    fn test_skill_grid_columns() {
        assert_eq!(skill_grid_columns(639), 1);
        assert_eq!(skill_grid_columns(640), 2);
        assert_eq!(skill_grid_columns(1023), 2);
        assert_eq!(skill_grid_columns(1024), 3);
    }

    #[test]
    fn test_content_column_centres_and_caps() {
        assert_eq!(content_column(800, 16), (16, 768));
        let (x, w) = content_column(2000, 16);
        assert_eq!(w, MAX_CONTENT_WIDTH);
        assert_eq!(x, (2000 - MAX_CONTENT_WIDTH) / 2);
        assert_eq!(content_column(10, 16), (5, 0));
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("the quick brown fox jumps", 10.0, chars);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_long_word_stands_alone() {
        let lines = wrap_text("a extraordinarily b", 5.0, chars);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("   ", 10.0, chars).is_empty());
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(6, 3), vec![0..3, 3..6]);
        assert_eq!(grid_rows(5, 2), vec![0..2, 2..4, 4..5]);
        assert_eq!(grid_rows(2, 0), vec![0..1, 1..2]);
    }

    fn span(text: &'static str, emphasis: Emphasis) -> Span {
        Span { text, emphasis }
    }

    #[test]
    fn test_split_words_glues_punctuation() {
        let spans = [
            span("working at ", Emphasis::Plain),
            span("ACME", Emphasis::Strong),
            span(", I build", Emphasis::Plain),
        ];
        let words = split_words(&spans);
        let texts: Vec<&str> = words.iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["working", "at", "ACME", ",", "I", "build"]);
        assert!(!words[2].glued);
        assert_eq!(words[2].emphasis, Emphasis::Strong);
        assert!(words[3].glued);
        assert!(!words[4].glued);
    }

    #[test]
    fn test_flow_words_wraps_and_keeps_glue() {
        let spans = [span("aa bb", Emphasis::Plain), span("cc", Emphasis::Strong), span(" dd", Emphasis::Plain)];
        let words = split_words(&spans);
        let lines = flow_words(&words, 6.0, 1.0, |t, _| chars(t));
        let texts: Vec<Vec<&str>> = lines.iter().map(|l| l.iter().map(|p| p.text).collect()).collect();
        // "bbcc" is glued, so it cannot break between bb and cc
        assert_eq!(texts, vec![vec!["aa"], vec!["bb", "cc"], vec!["dd"]]);
        assert_eq!(lines[1][1].x, 2.0);
        assert_eq!(lines[1][1].emphasis, Emphasis::Strong);
    }

    #[test]
    fn test_flow_words_positions() {
        let spans = [span("ab cd ef", Emphasis::Plain)];
        let lines = flow_words(&split_words(&spans), 100.0, 1.0, |t, _| chars(t));
        assert_eq!(lines.len(), 1);
        let xs: Vec<f64> = lines[0].iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 6.0]);
    }

    #[test]
    fn test_flow_boxes() {
        assert_eq!(flow_boxes(&[40, 40, 40], 100, 8), vec![(0, 0), (48, 0), (0, 1)]);
        assert_eq!(flow_boxes(&[200], 100, 8), vec![(0, 0)]);
        assert!(flow_boxes(&[], 100, 8).is_empty());
    }

    #[test]
    fn test_scroll_target_is_clamped() {
        let mut anchors = SectionAnchors::new();
        anchors.insert(SectionId::About, 400);
        anchors.insert(SectionId::Contact, 2900);
        anchors.set_content_height(3000);
        assert_eq!(anchors.scroll_target(SectionId::About, 600), Some(400));
        assert_eq!(anchors.scroll_target(SectionId::Contact, 600), Some(2400));
        assert_eq!(anchors.scroll_target(SectionId::Skills, 600), None);
        assert_eq!(anchors.max_scroll(5000), 0);
    }

    #[test]
    fn test_anchor_reinsert_replaces() {
        let mut anchors = SectionAnchors::new();
        anchors.insert(SectionId::Skills, 10);
        anchors.insert(SectionId::Skills, 20);
        assert_eq!(anchors.offset(SectionId::Skills), Some(20));
    }
}
