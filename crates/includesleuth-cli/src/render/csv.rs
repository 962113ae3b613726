/// CSV output with a fixed header row.
use crate::render::Render;
use ::csv::Writer;
use includesleuth_core::TraceEvent;
use std::io::{self, Write};

pub const CSV_HEADER: [&str; 7] = ["event", "path", "line_no", "line", "target", "quote", "message"];

pub struct CsvRenderer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvRenderer<W> {
    /// Create the renderer and write the header row immediately.
    pub fn new(out: W) -> io::Result<Self> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl<W: Write> Render for CsvRenderer<W> {
    fn event(&mut self, event: &TraceEvent) -> io::Result<()> {
        let path = event.path().to_string_lossy();
        let row: [String; 7] = match event {
            TraceEvent::Found {
                line_no, directive, ..
            } => [
                event.kind_str().to_string(),
                path.into_owned(),
                line_no.to_string(),
                directive.raw_line.clone(),
                directive.target.clone(),
                directive.quote_kind.as_str().to_string(),
                String::new(),
            ],
            TraceEvent::Error { error } => [
                event.kind_str().to_string(),
                path.into_owned(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                error.to_string(),
            ],
            TraceEvent::Enter { .. } | TraceEvent::Close { .. } => [
                event.kind_str().to_string(),
                path.into_owned(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
        };
        self.writer.write_record(&row)?;
        self.writer.flush()
    }
}
