/// Plain-text trace lines.
///
/// ```text
/// Processing main.cpp
/// Found include: #include "a.h" in main.cpp
/// Closing main.cpp
/// ```
use crate::render::Render;
use includesleuth_core::TraceEvent;
use std::io::{self, Write};

pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn event(&mut self, event: &TraceEvent) -> io::Result<()> {
        match event {
            TraceEvent::Enter { path } => writeln!(self.out, "Processing {}", path.display())?,
            TraceEvent::Found {
                path, directive, ..
            } => writeln!(
                self.out,
                "Found include: {} in {}",
                directive.raw_line,
                path.display()
            )?,
            TraceEvent::Close { path } => writeln!(self.out, "Closing {}", path.display())?,
            // Already on stderr.
            TraceEvent::Error { .. } => return Ok(()),
        }
        self.out.flush()
    }
}
