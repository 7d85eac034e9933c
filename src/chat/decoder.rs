use anyhow::{Error, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct ChunkMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct Chunk {
    message: Option<ChunkMessage>,
    #[serde(default)]
    done: bool,
}

/// One decoded line of the model's response
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    pub content: String,
    pub done: bool,
}

/// Incremental decoder for newline delimited JSON. Bytes are
/// buffered until a full line arrives so JSON objects and multi-byte
/// characters split across network chunks decode correctly.
#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    buffer: Vec<u8>,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of bytes and return every fragment
    /// completed by it
    pub fn push(&mut self, bytes: &[u8]) -> Result<Vec<Fragment>, Error> {
        self.buffer.extend_from_slice(bytes);

        let mut fragments = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(fragment) = parse_line(&line)? {
                fragments.push(fragment);
            }
        }
        Ok(fragments)
    }

    /// Decode whatever is left once the body closes. The last line
    /// doesn't need a trailing newline.
    pub fn finish(&mut self) -> Result<Option<Fragment>, Error> {
        let line = std::mem::take(&mut self.buffer);
        parse_line(&line)
    }
}

fn parse_line(line: &[u8]) -> Result<Option<Fragment>, Error> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Ok(None);
    }
    let chunk = serde_json::from_slice::<Chunk>(line).inspect_err(|e| {
        tracing::error!(
            "Parsing chat chunk failed for {}\nError:{}",
            String::from_utf8_lossy(line),
            e
        )
    })?;
    Ok(Some(Fragment {
        content: chunk.message.map(|m| m.content).unwrap_or_default(),
        done: chunk.done,
    }))
}
