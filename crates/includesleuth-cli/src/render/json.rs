/// JSON Lines output: one object per event.
///
/// ```text
/// {"event":"enter","path":"main.cpp"}
/// {"event":"found","path":"main.cpp","line_no":1,"line":"#include \"a.h\"","target":"a.h","quote":"quoted"}
/// {"event":"error","path":"a.h","error_kind":"open","message":"No such file or directory (os error 2)"}
/// ```
use crate::render::Render;
use includesleuth_core::{QuoteKind, TraceEvent};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct EventRecord<'a> {
    event: &'static str,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_no: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<QuoteKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<'a> EventRecord<'a> {
    fn from_event(event: &'a TraceEvent) -> Self {
        let mut record = Self {
            event: event.kind_str(),
            path: event.path().to_string_lossy().into_owned(),
            line_no: None,
            line: None,
            target: None,
            quote: None,
            error_kind: None,
            message: None,
        };
        match event {
            TraceEvent::Found {
                line_no, directive, ..
            } => {
                record.line_no = Some(*line_no);
                record.line = Some(&directive.raw_line);
                record.target = Some(&directive.target);
                record.quote = Some(directive.quote_kind);
            }
            TraceEvent::Error { error } => {
                record.error_kind = Some(error.kind_str());
                record.message = Some(error.io_error().to_string());
            }
            TraceEvent::Enter { .. } | TraceEvent::Close { .. } => {}
        }
        record
    }
}

pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Render for JsonRenderer<W> {
    fn event(&mut self, event: &TraceEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &EventRecord::from_event(event))?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
