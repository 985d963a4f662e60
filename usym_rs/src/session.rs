use std::io::Write;

/// A live debugging session accepting textual directives. Append-only:
/// directives are sent, never read back.
pub trait Session {
    fn execute(&mut self, directive: &str) -> Result<(), String>;
}

/// Writes one directive per line, suitable for piping to a debugger or
/// for producing a command file the debugger sources.
pub struct WriterSession<W: Write> {
    out: W,
}

impl<W: Write> WriterSession<W> {
    pub fn new(out: W) -> WriterSession<W> {
        WriterSession { out }
    }
}

impl<W: Write> Session for WriterSession<W> {
    fn execute(&mut self, directive: &str) -> Result<(), String> {
        writeln!(self.out, "{}", directive)
            .map_err(|e| format!("failed to write directive: {}", e))
    }
}
