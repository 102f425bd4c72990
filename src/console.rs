//! Line-oriented console I/O.
//!
//! Players and the orchestrator talk to the terminal through [`LineIo`], so
//! tests can drive a whole session from an in-memory script.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::trace;

/// Reads answers and writes prompts, one line at a time.
#[async_trait::async_trait]
pub trait LineIo: Send {
    /// Reads the next line without its terminator. `None` at end of input.
    async fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes `text` as-is and flushes.
    async fn write(&mut self, text: &str) -> Result<()>;

    /// Writes `text` followed by a newline.
    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text)).await
    }

    /// Writes `question` and reads the answer.
    async fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.write(question).await?;
        self.read_line().await
    }
}

/// [`LineIo`] over any async reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait::async_trait]
impl<R, W> LineIo for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            trace!("End of input");
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read line");
        Ok(Some(line))
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_lines_until_eof() {
        let mut console = Console::new(&b"first\r\nsecond\nlast"[..], Vec::new());
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_prompt_writes_then_reads() {
        let mut console = Console::new(&b"4\n"[..], Vec::new());
        let answer = console.prompt("Column? ").await.unwrap();
        assert_eq!(answer.as_deref(), Some("4"));
        console.write_line("ok").await.unwrap();

        let (_, out) = console.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Column? ok\n");
    }

    #[tokio::test]
    async fn test_empty_line_is_not_eof() {
        let mut console = Console::new(&b"\n"[..], Vec::new());
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(console.read_line().await.unwrap(), None);
    }
}
