use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::handler::Handler;
use crate::http::writer::ResponseWriter;

/// Bytes read from the socket per readiness wakeup.
const READ_CHUNK: usize = 1500;

/// One accepted client socket and its buffers.
///
/// Lifecycle: `Reading -> Handling -> Writing -> Closed`. There is no
/// keep-alive transition back to `Reading`: the connection serves exactly
/// one request and closes once the response has fully drained, or
/// immediately when the peer hangs up first.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    handler: Arc<dyn Handler>,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Handling(Vec<u8>),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<dyn Handler>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            handler,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(raw) => {
                            self.state = ConnectionState::Handling(raw);
                        }
                        None => {
                            // Peer closed before a full header block arrived;
                            // partial input is discarded.
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Handling(raw) => {
                    let response = self.handler.handle(raw);
                    self.state = ConnectionState::Writing(ResponseWriter::new(response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates reads until the header-block terminator `\r\n\r\n` is
    /// present, so a request split across TCP segments is still handled
    /// whole. Returns `None` if the peer closes first.
    async fn read_request(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        loop {
            if find_header_end(&self.buffer).is_some() {
                return Ok(Some(self.buffer.to_vec()));
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
