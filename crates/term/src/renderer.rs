//! TerminalRenderer: presents board frames on the real terminal.
//!
//! The board only changes in response to input (a tile picked up, dragged,
//! dropped, a check), so most frames touch a handful of rows. Each frame is
//! compared row by row with the one on screen and only the changed span of
//! each row is rewritten. The first frame, and every frame after a resize or
//! [`invalidate`], clears the screen and paints everything.
//!
//! [`invalidate`]: TerminalRenderer::invalidate

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// How much of the screen one frame rewrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub rows: u16,
    pub cells: usize,
    pub full: bool,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, mouse capture and focus reports.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(event::EnableFocusChange)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(event::DisableFocusChange)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next frame.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown buffer in its place so
    /// the caller can paint the next frame into it.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<FrameStats> {
        let shown = self.shown.take();
        self.buf.clear();
        let prev = shown.as_ref().filter(|prev| prev.same_size(fb));
        let stats = encode_frame(prev, fb, &mut self.buf)?;
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        let mut back = shown.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut back, fb);
        self.shown = Some(back);
        Ok(stats)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without `prev` the screen is cleared and every row is painted. Nothing is
/// written when the frames are identical.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<FrameStats> {
    let mut stats = FrameStats {
        full: prev.is_none(),
        ..FrameStats::default()
    };
    if stats.full {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match prev {
            Some(prev) => changed_span(prev.row(y), row),
            None => Some(0..row.len()),
        };
        let Some(span) = span else {
            continue;
        };

        out.queue(cursor::MoveTo(span.start as u16, y))?;
        for &cell in &row[span.clone()] {
            pen.print(out, cell)?;
        }
        stats.rows += 1;
        stats.cells += span.len();
    }

    if stats.rows > 0 {
        pen.finish(out)?;
    }
    Ok(stats)
}

/// Smallest range covering every cell that differs between two rows of the
/// same width.
fn changed_span(old: &[Cell], new: &[Cell]) -> Option<Range<usize>> {
    let first = old.iter().zip(new).position(|(a, b)| a != b)?;
    let last = old.iter().zip(new).rposition(|(a, b)| a != b)?;
    Some(first..last + 1)
}

/// Tracks the style last sent to the terminal and only emits what changes.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        let style = cell.style;
        match self.current {
            Some(current) if current == style => {}
            Some(current) if !current.attrs_differ(&style) => {
                if current.fg != style.fg {
                    out.queue(SetForegroundColor(style.fg.into()))?;
                }
                if current.bg != style.bg {
                    out.queue(SetBackgroundColor(style.bg.into()))?;
                }
            }
            _ => {
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(SetForegroundColor(style.fg.into()))?;
                out.queue(SetBackgroundColor(style.bg.into()))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
            }
        }
        self.current = Some(style);
        out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Rect;

    fn text(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn identical_frames_write_nothing() {
        let mut a = FrameBuffer::new(6, 3);
        a.put_str(0, 1, "tiles", CellStyle::default());
        let b = a.clone();

        let mut out = Vec::new();
        let stats = encode_frame(Some(&a), &b, &mut out).unwrap();
        assert_eq!(stats, FrameStats::default());
        assert!(out.is_empty());
    }

    #[test]
    fn moved_tile_rewrites_only_its_rows() {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(90, 90, 130));
        let mut before = FrameBuffer::new(20, 8);
        before.fill_rect(Rect::new(2, 1, 4, 2), '#', style);
        let mut after = FrameBuffer::new(20, 8);
        after.fill_rect(Rect::new(5, 2, 4, 2), '#', style);

        let mut out = Vec::new();
        let stats = encode_frame(Some(&before), &after, &mut out).unwrap();
        assert!(!stats.full);
        assert_eq!(stats.rows, 3);
        // Row 1 loses cells 2..6, row 2 changes 2..9, row 3 gains 5..9.
        assert_eq!(stats.cells, 4 + 7 + 4);
        assert!(!text(&out).contains("\x1b[2J"));
    }

    #[test]
    fn changed_span_covers_first_to_last_difference() {
        let a = [Cell::default(); 6];
        let mut b = a;
        b[1].ch = 'x';
        b[4].ch = 'y';
        assert_eq!(changed_span(&a, &b), Some(1..5));
        assert_eq!(changed_span(&a, &a), None);
    }

    #[test]
    fn first_frame_clears_and_paints_every_row() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());
        fb.put_str(0, 1, "xyz", CellStyle::default());

        let mut out = Vec::new();
        let stats = encode_frame(None, &fb, &mut out).unwrap();
        assert!(stats.full);
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.cells, 6);

        let text = text(&out);
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("abc"));
        assert!(text.contains("xyz"));
    }

    #[test]
    fn pen_sends_a_style_once_per_run() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_frame(None, &fb, &mut out).unwrap();
        assert_eq!(text(&out).matches("48;2;").count(), 1);

        let bold = CellStyle::default().bold();
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "ab", bold);
        let mut out = Vec::new();
        encode_frame(None, &fb, &mut out).unwrap();
        // plain, bold, plain
        assert_eq!(text(&out).matches("48;2;").count(), 3);
    }
}
