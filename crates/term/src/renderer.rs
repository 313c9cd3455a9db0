//! TerminalRenderer: flushes rendered screens to a real terminal.
//!
//! Every changed frame is a full redraw; the board is small enough that diffing
//! buys nothing. Identical consecutive frames are skipped.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::engine::{Frame, FrameSink};
use crate::game_view::{GameView, Screen};
use crate::glyph::Glyph;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    view: GameView,
    last: Option<Screen>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            view: GameView::new(),
            last: None,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
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

    /// Draw a screen unless it matches the previous one
    pub fn draw(&mut self, screen: Screen) -> Result<()> {
        if self.last.as_ref() == Some(&screen) {
            return Ok(());
        }
        self.buf.clear();
        encode_full_into(&screen, &mut self.buf)?;
        self.flush_buf()?;
        self.last = Some(screen);
        Ok(())
    }

    /// Underlying writer
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        let screen = self.view.render(frame);
        self.draw(screen)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to a terminal.
pub fn encode_full_into(screen: &Screen, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for row in &screen.rows {
        for glyph in row {
            print_glyph(out, glyph)?;
        }
        out.queue(Print("\r\n"))?;
    }

    for line in &screen.status {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn print_glyph(out: &mut Vec<u8>, glyph: &Glyph) -> Result<()> {
    match glyph.color {
        Some(color) => {
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(glyph.text))?;
            out.queue(ResetColor)?;
        }
        None => {
            out.queue(Print(glyph.text))?;
        }
    }
    Ok(())
}
