use std::io;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::parser::ParseError;

/// Request-head bytes with a hard upper bound on their size.
#[derive(Debug)]
pub struct HeadBuffer {
    buf: BytesMut,
    limit: usize,
}

impl HeadBuffer {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(limit.min(4096)),
            limit,
        }
    }

    pub fn push_line(&mut self, line: &[u8]) -> Result<(), ParseError> {
        if line.len() > self.remaining() {
            return Err(ParseError::HeadTooLarge);
        }
        self.buf.extend_from_slice(line);
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Outcome of reading one request head off a connection.
#[derive(Debug)]
pub enum HeadRead {
    /// Lines up to (not including) the terminating blank line.
    Complete(Bytes),
    /// The head did not fit in the configured limit.
    TooLarge,
    /// The peer closed the connection before sending anything.
    Closed,
}

/// Reads lines until a bare `"\r\n"` or end of stream.
pub async fn read_head<R>(reader: &mut R, limit: usize) -> io::Result<HeadRead>
where
    R: AsyncBufRead + Unpin,
{
    let mut head = HeadBuffer::with_limit(limit);
    let mut line = Vec::new();

    loop {
        line.clear();
        // Two bytes past the budget: room for the blank terminator line
        // once the head is full, and enough to detect an oversized line
        // without buffering the whole thing.
        let budget = head.remaining() as u64 + 2;
        let n = (&mut *reader).take(budget).read_until(b'\n', &mut line).await?;

        if n == 0 {
            break;
        }
        if line == b"\r\n" {
            return Ok(HeadRead::Complete(head.freeze()));
        }
        if head.push_line(&line).is_err() {
            return Ok(HeadRead::TooLarge);
        }
    }

    if head.is_empty() {
        Ok(HeadRead::Closed)
    } else {
        Ok(HeadRead::Complete(head.freeze()))
    }
}
