use std::future::Future;
use std::io;
use std::time::Duration;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::response::{
    BodySource, ContentTypeStyle, INTERNAL_ERROR_BODY, ResponseDescriptor, StatusCode, head_bytes,
};

/// Chunk size for body transfers
const BUFFER_SIZE: usize = 8192;

/// Opens the body before anything is written, so a failure can still be
/// answered with a 500.
pub async fn open_body(body: &BodySource) -> anyhow::Result<File> {
    let path = body.path();
    File::open(path)
        .await
        .with_context(|| format!("opening body {}", path.display()))
}

pub async fn write_head<W>(
    stream: &mut W,
    response: &ResponseDescriptor,
    style: ContentTypeStyle,
    write_timeout: Duration,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let head = response.head_bytes(style);
    with_deadline(write_timeout, stream.write_all(&head))
        .await
        .context("writing response head")
}

/// Copies `body` to `stream` one chunk at a time. Each write is bounded by
/// `write_timeout`. Returns the number of body bytes sent.
pub async fn stream_body<R, W>(
    body: &mut R,
    stream: &mut W,
    write_timeout: Duration,
) -> anyhow::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut chunk = [0u8; BUFFER_SIZE];
    let mut sent = 0u64;

    loop {
        let n = body.read(&mut chunk).await.context("reading body")?;
        if n == 0 {
            break;
        }

        with_deadline(write_timeout, stream.write_all(&chunk[..n]))
            .await
            .context("writing body")?;
        sent += n as u64;
    }

    Ok(sent)
}

pub async fn write_internal_error<W>(
    stream: &mut W,
    style: ContentTypeStyle,
    write_timeout: Duration,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = head_bytes(StatusCode::InternalServerError, "text/html", style);
    buf.extend_from_slice(INTERNAL_ERROR_BODY);
    with_deadline(write_timeout, stream.write_all(&buf))
        .await
        .context("writing internal error response")
}

pub(crate) async fn with_deadline<F, T>(limit: Duration, fut: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => Err(io::Error::new(io::ErrorKind::TimedOut, "deadline elapsed")),
    }
}
