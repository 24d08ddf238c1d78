//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame and any frame after a resize are drawn in full. Otherwise
//! only runs of glyphs that changed since the previous frame are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

/// A horizontal run of changed glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, diffing against the previously drawn frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_runs_into(fb, &changed_runs(prev, fb), &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let runs: Vec<Run> = (0..fb.height())
        .map(|y| Run {
            x: 0,
            y,
            len: fb.width(),
        })
        .collect();
    encode_runs_into(fb, &runs, out)
}

/// Encode the given runs of `fb` into `out`.
pub fn encode_runs_into(fb: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Style> = None;
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            let glyph = fb.get(x, run.y).unwrap_or_default();
            if current != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Runs of glyphs that differ between two equally sized frames.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let (a, b) = (prev.row(y), next.row(y));
        let differs = |x: usize| a.get(x) != b.get(x);
        let mut x = 0;
        while x < b.len() {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < b.len() && differs(x) {
                x += 1;
            }
            runs.push(Run {
                x: start as u16,
                y,
                len: (x - start) as u16,
            });
        }
    }
    runs
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let style = Style::default();
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);

        for x in 1..=3 {
            b.put(x, 0, 'X', style);
        }
        b.put(4, 1, 'Y', style);

        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 4, y: 1, len: 1 }]
        );
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let a = FrameBuffer::new(3, 3);
        assert!(changed_runs(&a, &a.clone()).is_empty());
    }

    #[test]
    fn full_encode_writes_every_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put(0, 0, 'A', Style::default());
        fb.put(1, 0, 'B', Style::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('B'));
    }
}
