//! Interactive labeling on the terminal
//!
//! Each glyph is drawn with block characters and the operator presses the
//! key it represents. Esc or Ctrl-C cancels the scan.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use fontscan_core::GlyphBitmap;
use fontscan_io::Labeler;
use fontscan_recog::SinkError;
use log::debug;
use std::io::{self, Stdout, Write};

/// What a key press means to the labeler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Use this character as the label
    Label(char),
    /// Stop labeling
    Cancel,
    /// Not a label key; keep waiting
    Ignore,
}

/// Interpret one terminal key event.
pub fn key_action(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Cancel
        }
        KeyCode::Char(c) => KeyAction::Label(c),
        _ => KeyAction::Ignore,
    }
}

/// Restores cooked mode when dropped
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// [`Labeler`] that previews glyphs on stdout and reads single key presses
pub struct ConsoleLabeler {
    out: Stdout,
    retrying: bool,
}

impl Default for ConsoleLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLabeler {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            retrying: false,
        }
    }

    fn read_key(&mut self) -> Result<char, SinkError> {
        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                match key_action(&key) {
                    KeyAction::Label(c) => return Ok(c),
                    KeyAction::Cancel => return Err(SinkError::Cancelled),
                    KeyAction::Ignore => debug!("ignoring key {:?}", key.code),
                }
            }
        }
    }
}

impl Labeler for ConsoleLabeler {
    fn label(&mut self, glyph: &GlyphBitmap) -> Result<String, SinkError> {
        if !self.retrying {
            write!(self.out, "{}", preview(glyph))?;
        }
        write!(self.out, "character> ")?;
        self.out.flush()?;

        let c = self.read_key()?;
        writeln!(self.out, "{}", c.escape_debug())?;
        self.retrying = false;
        Ok(c.to_string())
    }

    fn rejected(&mut self, candidate: &str) {
        self.retrying = true;
        if let Err(e) = writeln!(
            self.out,
            "{:?} cannot be used in a file name, press another key",
            candidate
        ) {
            debug!("console write failed: {}", e);
        }
    }
}

/// Block rendering of a glyph followed by a blank line.
pub fn preview(glyph: &GlyphBitmap) -> String {
    let mut text = format!(
        "{}x{} glyph at ({}, {}):\n",
        glyph.width(),
        glyph.height(),
        glyph.origin().x,
        glyph.origin().y
    );
    text.push_str(&glyph.render_blocks());
    text.push('\n');
    text
}
