//! FLTK rendition of the page tree.
//!
//! The page lives in a vertical `Scroll`. Every layout pass clears the
//! content group and walks the `PageSection` tree again, so a resize or a
//! theme switch is just another render.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use fltk::{
    app::{self, Sender, TimeoutHandle},
    button::Button,
    draw,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::{Group, Scroll, ScrollType},
    prelude::*,
};

use crate::app::controllers::{ScrollAnimation, SectionScroller, bounce_offset};
use crate::app::domain::content::{Accent, Emphasis, Span};
use crate::app::domain::layout::{
    LayoutMode, SectionAnchors, content_column, flow_boxes, flow_words, grid_rows, skill_grid_columns,
    split_words, wrap_text,
};
use crate::app::domain::messages::Message;
use crate::app::domain::page::{Alignment, Block, LinkButton, PageSection, SectionTone, TextStyle};
use crate::app::domain::section::SectionId;
use super::theme::Palette;

const FRAME_INTERVAL: f64 = 1.0 / 60.0;
const BOUNCE_INTERVAL: f64 = 1.0 / 30.0;
const BOUNCE_HEIGHT: i32 = 8;
const COLUMN_PADDING: i32 = 16;
const CHIP_HEIGHT: i32 = 28;
const CHIP_PADDING: i32 = 12;
const CHIP_GAP: i32 = 8;
const LINK_HEIGHT: i32 = 48;
const BULLET_INDENT: i32 = 20;

/// Escape FLTK label markup (`@` starts a symbol).
pub fn frame_label(text: &str) -> String {
    text.replace('@', "@@")
}

/// Escape for button labels, which also treat `&` as a shortcut marker.
pub fn button_label(text: &str) -> String {
    frame_label(text).replace('&', "&&")
}

/// Font and point size for a text style.
pub fn text_font(style: TextStyle, mode: LayoutMode) -> (Font, i32) {
    let mobile = mode.is_mobile();
    match style {
        TextStyle::Display => (Font::HelveticaBold, if mobile { 36 } else { 48 }),
        TextStyle::SectionTitle => (Font::HelveticaBold, if mobile { 26 } else { 30 }),
        TextStyle::CardTitle => (Font::HelveticaBold, if mobile { 19 } else { 22 }),
        TextStyle::Subtitle => (Font::Helvetica, if mobile { 19 } else { 22 }),
        TextStyle::Label => (Font::HelveticaBold, 16),
        TextStyle::Body => (Font::Helvetica, if mobile { 16 } else { 17 }),
        TextStyle::Caption => (Font::Helvetica, 14),
    }
}

/// Vertical space after a block within its section or card.
fn gap_after(block: &Block) -> i32 {
    match block {
        Block::Text { style: TextStyle::SectionTitle, .. } => 32,
        Block::Text { style: TextStyle::Display | TextStyle::Subtitle, .. } => 12,
        Block::Avatar(_) => 24,
        _ => 16,
    }
}

fn section_padding(tone: SectionTone, mode: LayoutMode) -> (i32, i32) {
    match tone {
        SectionTone::Hero => (48, 40),
        SectionTone::Light | SectionTone::Muted if mode.is_mobile() => (48, 48),
        SectionTone::Light | SectionTone::Muted => (64, 64),
        SectionTone::Dark => (32, 32),
    }
}

#[derive(Debug, Clone, Copy)]
struct Ctx {
    tone: SectionTone,
    centered: bool,
    accent: Accent,
    depth: u32,
}

/// A rich-text word positioned inside its frame.
struct Run {
    x: i32,
    line: i32,
    text: String,
    emphasis: Emphasis,
}

fn emphasis_font(emphasis: Emphasis) -> Font {
    match emphasis {
        Emphasis::Plain => Font::Helvetica,
        Emphasis::Strong | Emphasis::Highlight => Font::HelveticaBold,
    }
}

struct Painter<'a> {
    x: i32,
    cursor: i32,
    width: i32,
    window_width: i32,
    mode: LayoutMode,
    palette: &'a Palette,
    sender: Sender<Message>,
    started: Instant,
    hints: Vec<Frame>,
}

impl Painter<'_> {
    fn section(&mut self, section: &PageSection) {
        let centered = match section.align {
            Alignment::Start => false,
            Alignment::Center => true,
            Alignment::Responsive => self.mode.is_mobile(),
        };
        let ctx = Ctx { tone: section.tone, centered, accent: Accent::Slate, depth: 0 };
        let (pad_top, pad_bottom) = section_padding(section.tone, self.mode);
        let top = self.cursor;

        let mut bg = Frame::new(self.x, top, self.width, 0, None);
        bg.set_frame(FrameType::FlatBox);
        bg.set_color(self.palette.section_background(section.tone));

        let (offset, column_width) = content_column(self.width, COLUMN_PADDING);
        let column_x = self.x + offset;
        let mut y = top + pad_top;
        for (i, block) in section.blocks.iter().enumerate() {
            y += self.block(block, column_x, y, column_width, ctx);
            if i + 1 < section.blocks.len() {
                y += gap_after(block);
            }
        }
        let bottom = y + pad_bottom;
        bg.resize(self.x, top, self.width, bottom - top);
        self.cursor = bottom;
    }

    /// Lay out one block at `(x, y)` within width `w`; returns its height.
    fn block(&mut self, block: &Block, x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        match block {
            Block::Avatar(initials) => self.avatar(initials, x, y, w, ctx),
            Block::Text { text, style } => {
                let color = self.palette.text_color(ctx.tone, *style);
                self.text(text, *style, color, x, y, w, ctx.centered)
            }
            Block::AccentText { text, style } => {
                let color = self.palette.accent(ctx.accent).text;
                self.text(text, *style, color, x, y, w, ctx.centered)
            }
            Block::Rich(spans) => self.rich(spans, x, y, w, ctx),
            Block::Chips { items, accent } => self.chips(items, *accent, x, y, w),
            Block::Bullets(items) => self.bullets(items, x, y, w, ctx),
            Block::Badge(text) => self.badge(text, x, y),
            Block::Location(text) => self.location(text, x, y, w, ctx),
            Block::Links(links) => self.links(links, x, y, w, ctx),
            Block::Card { title, accent, children } => self.card(*title, *accent, children, x, y, w, ctx).0,
            Block::Grid(cards) => self.grid(cards, x, y, w, ctx),
            Block::ScrollHint => self.scroll_hint(x, y, w, ctx),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn text(&mut self, text: &str, style: TextStyle, color: Color, x: i32, y: i32, w: i32, centered: bool) -> i32 {
        let (font, size) = text_font(style, self.mode);
        draw::set_font(font, size);
        let lines = wrap_text(text, w as f64, draw::width);
        let h = lines.len() as i32 * draw::height();

        let mut frame = Frame::new(x, y, w, h, None);
        let label: Vec<String> = lines.iter().map(|l| frame_label(l)).collect();
        frame.set_label(&label.join("\n"));
        frame.set_label_font(font);
        frame.set_label_size(size);
        frame.set_label_color(color);
        let horizontal = if centered { Align::Center } else { Align::Left };
        frame.set_align(Align::Inside | Align::Top | horizontal);
        h
    }

    fn rich(&mut self, spans: &[Span], x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        let (_, size) = text_font(TextStyle::Body, self.mode);
        let measure = |text: &str, emphasis: Emphasis| {
            draw::set_font(emphasis_font(emphasis), size);
            draw::width(text)
        };
        draw::set_font(Font::Helvetica, size);
        let space = draw::width(" ");
        let line_height = draw::height();
        let descent = draw::descent();

        let words = split_words(spans);
        let lines = flow_words(&words, w as f64, space, &measure);
        let mut runs = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let line_width = line
                .last()
                .map(|p| p.x + measure(p.text, p.emphasis))
                .unwrap_or(0.0);
            let indent = if ctx.centered { ((w as f64 - line_width) / 2.0).max(0.0) } else { 0.0 };
            for placed in line {
                runs.push(Run {
                    x: (indent + placed.x).round() as i32,
                    line: i as i32,
                    text: placed.text.to_string(),
                    emphasis: placed.emphasis,
                });
            }
        }
        let h = lines.len() as i32 * line_height;

        let body = self.palette.text_color(ctx.tone, TextStyle::Body);
        let strong = self.palette.heading;
        let highlight = self.palette.link;
        let mut frame = Frame::new(x, y, w, h, None);
        frame.draw(move |f| {
            for run in &runs {
                draw::set_font(emphasis_font(run.emphasis), size);
                draw::set_draw_color(match run.emphasis {
                    Emphasis::Plain => body,
                    Emphasis::Strong => strong,
                    Emphasis::Highlight => highlight,
                });
                let baseline = f.y() + (run.line + 1) * line_height - descent;
                draw::draw_text(&run.text, f.x() + run.x, baseline);
            }
        });
        h
    }

    fn chips(&mut self, items: &[&str], accent: Accent, x: i32, y: i32, w: i32) -> i32 {
        let colors = self.palette.accent(accent);
        draw::set_font(Font::Helvetica, 14);
        let widths: Vec<i32> = items
            .iter()
            .map(|item| draw::width(item).ceil() as i32 + 2 * CHIP_PADDING)
            .collect();
        let placed = flow_boxes(&widths, w, CHIP_GAP);
        let mut rows = 0;
        for ((item, width), (dx, row)) in items.iter().zip(&widths).zip(&placed) {
            let chip_y = y + *row as i32 * (CHIP_HEIGHT + CHIP_GAP);
            let mut chip = Frame::new(x + dx, chip_y, *width, CHIP_HEIGHT, None);
            chip.set_frame(FrameType::RFlatBox);
            chip.set_color(colors.chip_bg);
            chip.set_label(&frame_label(item));
            chip.set_label_size(14);
            chip.set_label_color(colors.chip_text);
            rows = rows.max(row + 1);
        }
        let rows = rows as i32;
        if rows == 0 { 0 } else { rows * CHIP_HEIGHT + (rows - 1) * CHIP_GAP }
    }

    fn bullets(&mut self, items: &[&str], x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        let color = self.palette.text_color(ctx.tone, TextStyle::Body);
        let bullet_color = self.palette.link;
        let mut cy = y;
        for (i, item) in items.iter().enumerate() {
            let mut bullet = Frame::new(x, cy, BULLET_INDENT, 20, "\u{2022}");
            bullet.set_label_color(bullet_color);
            bullet.set_label_size(18);
            bullet.set_align(Align::Left | Align::Top | Align::Inside);
            cy += self.text(item, TextStyle::Body, color, x + BULLET_INDENT, cy, w - BULLET_INDENT, false);
            if i + 1 < items.len() {
                cy += 8;
            }
        }
        cy - y
    }

    fn badge(&mut self, text: &str, x: i32, y: i32) -> i32 {
        let (fill, label) = self.palette.badge();
        draw::set_font(Font::HelveticaBold, 14);
        let width = draw::width(text).ceil() as i32 + 32;
        let mut badge = Frame::new(x, y, width, 32, None);
        badge.set_frame(FrameType::RFlatBox);
        badge.set_color(fill);
        badge.set_label(&frame_label(text));
        badge.set_label_font(Font::HelveticaBold);
        badge.set_label_size(14);
        badge.set_label_color(label);
        32
    }

    fn location(&mut self, text: &str, x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        let mut pin = Frame::new(x, y + 6, 12, 12, None);
        pin.set_frame(FrameType::OFlatBox);
        pin.set_color(self.palette.link);
        let color = self.palette.text_color(ctx.tone, TextStyle::Caption);
        self.text(text, TextStyle::Body, color, x + 20, y, w - 20, false)
    }

    fn links(&mut self, links: &[LinkButton], x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        draw::set_font(Font::HelveticaBold, 16);
        let widths: Vec<i32> = links
            .iter()
            .map(|l| draw::width(&l.label).ceil() as i32 + 48)
            .collect();

        let stacked = self.mode.is_mobile();
        let row_width: i32 = widths.iter().sum::<i32>() + 16 * (links.len() as i32 - 1).max(0);
        let mut cx = if ctx.centered && !stacked { x + ((w - row_width) / 2).max(0) } else { x };
        let mut cy = y;
        for (link, width) in links.iter().zip(widths) {
            let (fill, label) = self.palette.link_button(link.primary);
            let bw = if stacked { w } else { width };
            let mut btn = Button::new(cx, cy, bw, LINK_HEIGHT, None);
            btn.set_label(&button_label(&link.label));
            btn.set_frame(FrameType::RFlatBox);
            btn.set_down_frame(FrameType::RFlatBox);
            btn.set_color(fill);
            btn.set_selection_color(fill.darker());
            btn.set_label_color(label);
            btn.set_label_font(Font::HelveticaBold);
            btn.set_label_size(16);
            btn.clear_visible_focus();
            btn.set_tooltip(&link.link.uri());
            let target = link.link;
            let s = self.sender;
            btn.set_callback(move |_| s.send(Message::OpenLink(target)));
            if stacked {
                cy += LINK_HEIGHT + 12;
            } else {
                cx += width + 16;
            }
        }
        if stacked { (cy - y - 12).max(0) } else { LINK_HEIGHT }
    }

    /// Lay out a card; returns its height and the background frame so a
    /// grid can stretch it to the row height.
    #[allow(clippy::too_many_arguments)]
    fn card(
        &mut self,
        title: Option<&str>,
        accent: Accent,
        children: &[Block],
        x: i32,
        y: i32,
        w: i32,
        ctx: Ctx,
    ) -> (i32, Frame) {
        let fill = match (ctx.depth, ctx.tone) {
            (0, SectionTone::Muted) => self.palette.card_bg,
            (0, _) => self.palette.card_inset_bg,
            _ => self.palette.card_nested_bg,
        };
        let mut bg = Frame::new(x, y, w, 0, None);
        bg.set_frame(FrameType::RFlatBox);
        bg.set_color(fill);

        let pad = if self.mode.is_mobile() { 20 } else { 24 };
        let inner = Ctx { accent, depth: ctx.depth + 1, centered: false, ..ctx };
        let (inner_x, inner_w) = (x + pad, w - 2 * pad);
        let mut cy = y + pad;
        if let Some(title) = title {
            let color = match accent {
                Accent::Slate => self.palette.heading,
                _ => self.palette.accent(accent).text,
            };
            cy += self.text(title, TextStyle::CardTitle, color, inner_x, cy, inner_w, false) + 12;
        }
        for (i, child) in children.iter().enumerate() {
            cy += self.block(child, inner_x, cy, inner_w, inner);
            if i + 1 < children.len() {
                cy += 12;
            }
        }
        let h = cy + pad - y;
        bg.resize(x, y, w, h);
        (h, bg)
    }

    fn grid(&mut self, cards: &[Block], x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        let gap = if self.mode.is_mobile() { 16 } else { 24 };
        let columns = skill_grid_columns(self.window_width);
        let col_w = (w - gap * (columns as i32 - 1)) / columns as i32;
        let mut cy = y;
        let rows = grid_rows(cards.len(), columns);
        for (r, row) in rows.iter().enumerate() {
            let mut row_height = 0;
            let mut backgrounds = Vec::new();
            for (i, card) in cards[row.clone()].iter().enumerate() {
                let cx = x + i as i32 * (col_w + gap);
                let height = match card {
                    Block::Card { title, accent, children } => {
                        let (h, bg) = self.card(*title, *accent, children, cx, cy, col_w, ctx);
                        backgrounds.push(bg);
                        h
                    }
                    other => self.block(other, cx, cy, col_w, ctx),
                };
                row_height = row_height.max(height);
            }
            for bg in &mut backgrounds {
                let (bx, by, bw) = (bg.x(), bg.y(), bg.w());
                bg.resize(bx, by, bw, row_height);
            }
            cy += row_height;
            if r + 1 < rows.len() {
                cy += gap;
            }
        }
        cy - y
    }

    fn avatar(&mut self, initials: &str, x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        let size = if self.mode.is_mobile() { 140 } else { 176 };
        let ring = 6;
        let ax = if ctx.centered { x + (w - size) / 2 } else { x };

        let mut border = Frame::new(ax, y, size, size, None);
        border.set_frame(FrameType::OFlatBox);
        border.set_color(Color::White);

        let mut face = Frame::new(ax + ring, y + ring, size - 2 * ring, size - 2 * ring, None);
        face.set_frame(FrameType::OFlatBox);
        face.set_color(self.palette.avatar_bg);
        face.set_label(&frame_label(initials));
        face.set_label_size(size / 3);
        face.set_label_color(Color::White);

        let dot = 32;
        let mut dot_ring = Frame::new(ax + size - dot, y + size - dot, dot, dot, None);
        dot_ring.set_frame(FrameType::OFlatBox);
        dot_ring.set_color(Color::White);
        let mut status = Frame::new(ax + size - dot + 5, y + size - dot + 5, dot - 10, dot - 10, None);
        status.set_frame(FrameType::OFlatBox);
        status.set_color(self.palette.status_dot);
        size
    }

    fn scroll_hint(&mut self, x: i32, y: i32, w: i32, ctx: Ctx) -> i32 {
        let background = self.palette.section_background(ctx.tone);
        let color = self.palette.text_color(ctx.tone, TextStyle::Subtitle);
        let started = self.started;
        let mut hint = Frame::new(x, y, w, 48, None);
        hint.draw(move |f| {
            let lift = bounce_offset(started.elapsed().as_secs_f64(), BOUNCE_HEIGHT);
            draw::draw_rect_fill(f.x(), f.y(), f.w(), f.h(), background);
            draw::set_draw_color(color);
            draw::set_font(Font::Helvetica, 20);
            draw::draw_text2("@2>", f.x(), f.y() + BOUNCE_HEIGHT + 8 + lift, f.w(), 24, Align::Center);
        });
        self.hints.push(hint);
        48
    }
}

pub struct PageView {
    pub scroll: Scroll,
    content: Group,
    sections: Vec<PageSection>,
    anchors: SectionAnchors,
    sender: Sender<Message>,
    scroll_duration: f64,
    animation: Rc<Cell<Option<TimeoutHandle>>>,
    bounce: Option<TimeoutHandle>,
}

impl PageView {
    /// Create the scroll container in the current group. Nothing is laid
    /// out until the first `render`.
    pub fn new(sections: Vec<PageSection>, sender: Sender<Message>, scroll_duration: f64) -> Self {
        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);
        let content = Group::default();
        content.end();
        scroll.end();

        Self {
            scroll,
            content,
            sections,
            anchors: SectionAnchors::new(),
            sender,
            scroll_duration,
            animation: Rc::new(Cell::new(None)),
            bounce: None,
        }
    }

    /// Lay the whole page out again for the current scroll width, keeping
    /// the scroll offset where possible.
    pub fn render(&mut self, palette: &Palette, mode: LayoutMode, window_width: i32) {
        self.cancel_animation();
        self.stop_bounce();
        let offset = self.scroll.yposition();
        self.scroll.scroll_to(0, 0);
        self.scroll.set_color(palette.window_bg);

        let origin_y = self.scroll.y();
        let width = (self.scroll.w() - app::scrollbar_size()).max(0);
        let mut painter = Painter {
            x: self.scroll.x(),
            cursor: origin_y,
            width,
            window_width,
            mode,
            palette,
            sender: self.sender,
            started: Instant::now(),
            hints: Vec::new(),
        };

        self.content.clear();
        self.content.begin();
        let mut anchors = SectionAnchors::new();
        for section in &self.sections {
            if let Some(id) = section.nav() {
                anchors.insert(id, painter.cursor - origin_y);
            }
            painter.section(section);
        }
        self.content.end();
        Group::set_current(None::<&Group>);

        let height = painter.cursor - origin_y;
        self.content.resize(self.scroll.x(), origin_y, width, height);
        anchors.set_content_height(height);
        let restored = offset.min(anchors.max_scroll(self.scroll.h()));
        self.anchors = anchors;
        self.scroll.scroll_to(0, restored);
        self.scroll.redraw();
        self.start_bounce(painter.hints);
        tracing::debug!(width, height, ?mode, "page laid out");
    }

    /// Keep redrawing the scroll hints so they bounce.
    fn start_bounce(&mut self, mut hints: Vec<Frame>) {
        if hints.is_empty() {
            return;
        }
        let handle = app::add_timeout3(BOUNCE_INTERVAL, move |handle| {
            for hint in &mut hints {
                hint.redraw();
            }
            app::repeat_timeout3(BOUNCE_INTERVAL, handle);
        });
        self.bounce = Some(handle);
    }

    fn stop_bounce(&mut self) {
        if let Some(handle) = self.bounce.take() {
            app::remove_timeout3(handle);
        }
    }

    fn cancel_animation(&mut self) {
        if let Some(handle) = self.animation.take() {
            app::remove_timeout3(handle);
        }
    }
}

impl SectionScroller for PageView {
    fn scroll_into_view(&mut self, section: SectionId) -> bool {
        let Some(target) = self.anchors.scroll_target(section, self.scroll.h()) else {
            return false;
        };
        self.cancel_animation();

        let animation = ScrollAnimation::new(self.scroll.yposition(), target, self.scroll_duration);
        if animation.is_finished(0.0) {
            self.scroll.scroll_to(0, target);
            self.scroll.redraw();
            return true;
        }

        let start = Instant::now();
        let content_height = self.anchors.content_height();
        let mut scroll = self.scroll.clone();
        let active = self.animation.clone();
        let handle = app::add_timeout3(FRAME_INTERVAL, move |handle| {
            let elapsed = start.elapsed().as_secs_f64();
            // Scroll::scroll_to does not clamp, so bound it by the live viewport.
            let max = (content_height - scroll.h()).max(0);
            scroll.scroll_to(0, animation.position_at(elapsed).min(max));
            scroll.redraw();
            if animation.is_finished(elapsed) {
                active.set(None);
            } else {
                app::repeat_timeout3(FRAME_INTERVAL, handle);
            }
        });
        self.animation.set(Some(handle));
        true
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        self.cancel_animation();
        self.stop_bounce();
    }
}
