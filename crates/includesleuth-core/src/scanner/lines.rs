/// Line reader that tolerates arbitrary bytes.
///
/// Source files are not guaranteed to be UTF-8 (Latin-1 comments are common
/// in older headers). `BufRead::lines` would turn those into errors, so this
/// reader decodes lossily and only reports genuine I/O failures.
use std::io::{self, BufRead};

/// Iterator over the lines of a buffered reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped. After the first error the
/// iterator is exhausted.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
