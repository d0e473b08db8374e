//! Character framebuffer the board view paints into.
//!
//! Cells are stored row-major so the renderer can compare whole rows as
//! slices. Every drawing call clips to the buffer, so views never need to
//! check bounds themselves.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    /// True when switching from `self` to `other` needs an attribute reset.
    pub fn attrs_differ(&self, other: &CellStyle) -> bool {
        self.bold != other.bold || self.dim != other.dim
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    /// Same size, moved so that its center sits at `(cx, cy)` (clamped at 0).
    pub fn centered_at(&self, cx: u16, cy: u16) -> Self {
        Self {
            x: cx.saturating_sub(self.w / 2),
            y: cy.saturating_sub(self.h / 2),
            ..*self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Change dimensions, keeping the allocation. Contents are unspecified
    /// afterwards; views clear before painting.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Row `y` as a slice, empty when out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    fn row_mut(&mut self, y: u16) -> &mut [Cell] {
        if y >= self.height {
            return &mut [];
        }
        let start = y as usize * self.width as usize;
        &mut self.cells[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        self.put_str_clipped(x, y, s, u16::MAX, style);
    }

    /// Like [`put_str`](Self::put_str), writing at most `max_w` cells.
    pub fn put_str_clipped(&mut self, x: u16, y: u16, s: &str, max_w: u16, style: CellStyle) {
        let row = self.row_mut(y);
        let cells = row.iter_mut().skip(x as usize).take(max_w as usize);
        for (cell, ch) in cells.zip(s.chars()) {
            *cell = style.into_cell(ch);
        }
    }

    /// Center `s` inside `rect` on its middle row, clipped to the rect width.
    pub fn put_str_centered(&mut self, rect: Rect, s: &str, style: CellStyle) {
        let len = s.chars().count().min(rect.w as usize) as u16;
        let x = rect.x + (rect.w - len) / 2;
        self.put_str_clipped(x, rect.y + rect.h / 2, s, rect.w, style);
    }

    pub fn fill_rect(&mut self, rect: Rect, ch: char, style: CellStyle) {
        for y in rect.y..rect.bottom() {
            let row = self.row_mut(y);
            let end = (rect.right() as usize).min(row.len());
            if let Some(span) = row.get_mut(rect.x as usize..end) {
                span.fill(style.into_cell(ch));
            }
        }
    }

    /// Single-line box along the edge of `rect`.
    pub fn draw_frame(&mut self, rect: Rect, style: CellStyle) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let (left, right) = (rect.x, rect.right() - 1);
        let (top, bottom) = (rect.y, rect.bottom() - 1);

        let inner = Rect::new(left + 1, top, rect.w - 2, 1);
        self.fill_rect(inner, '─', style);
        self.fill_rect(Rect { y: bottom, ..inner }, '─', style);
        let side = Rect::new(left, top + 1, 1, rect.h - 2);
        self.fill_rect(side, '│', style);
        self.fill_rect(Rect { x: right, ..side }, '│', style);

        for (x, y, ch) in [
            (left, top, '┌'),
            (right, top, '┐'),
            (left, bottom, '└'),
            (right, bottom, '┘'),
        ] {
            if let Some(cell) = self.row_mut(y).get_mut(x as usize) {
                *cell = style.into_cell(ch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "abcdef", CellStyle::default());
        assert_eq!(text(&fb, 0), " abc");
        fb.put_str(0, 5, "off screen", CellStyle::default());
        assert!(fb.row(5).is_empty());
    }

    #[test]
    fn test_put_str_centered() {
        let mut fb = FrameBuffer::new(9, 3);
        fb.put_str_centered(Rect::new(0, 0, 9, 3), "abc", CellStyle::default());
        assert_eq!(text(&fb, 1), "   abc   ");
    }

    #[test]
    fn test_fill_rect_clips_to_buffer() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.fill_rect(Rect::new(2, 1, 10, 10), '#', CellStyle::default());
        assert_eq!(text(&fb, 0), "    ");
        assert_eq!(text(&fb, 1), "  ##");
    }

    #[test]
    fn test_draw_frame_corners() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_frame(Rect::new(0, 0, 4, 3), CellStyle::default());
        assert_eq!(text(&fb, 0), "┌──┐");
        assert_eq!(text(&fb, 1), "│  │");
        assert_eq!(text(&fb, 2), "└──┘");
    }

    #[test]
    fn test_resize_changes_rows() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.row(2).len(), 5);
        assert_eq!(fb.get(5, 2), None);
        assert!(!fb.same_size(&FrameBuffer::new(2, 2)));
    }

    #[test]
    fn test_style_builders() {
        let style = CellStyle::default().bold();
        assert!(style.bold && !style.dim);
        assert!(style.attrs_differ(&CellStyle::default()));
        assert!(style.attrs_differ(&style.dim()));
        assert!(!style.attrs_differ(&CellStyle::new(Rgb::new(1, 2, 3), Rgb::default()).bold()));
    }
}
