//! WebSocket Server
//!
//! Accepts browser connections, hands each one a fresh `Session`, and
//! drives it frame by frame. One tokio task owns each socket and its
//! session, so commands are processed strictly in arrival order and no
//! session is ever touched concurrently.
//!
//! A process-wide registry tracks live sessions; it exists for logging
//! and introspection, not coordination — sessions share nothing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use futures_util::{Sink, SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use super::protocol::{ClientCommand, ServerEvent};
use crate::graph::CanvasSpec;
use crate::session::{Session, SessionError};

/// Errors that stop the server before it serves anything.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Unique identifier for a connection's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate the next id.
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// The visualizer server. Cheap to clone; all clones share the registry.
#[derive(Clone)]
pub struct Server {
    canvas: CanvasSpec,
    sessions: Arc<DashMap<SessionId, SocketAddr>>,
}

impl Server {
    pub fn new(canvas: CanvasSpec) -> Self {
        Self {
            canvas,
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Number of currently connected sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Bind and serve until the task is dropped.
    pub async fn run(&self, addr: SocketAddr) -> Result<(), ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        info!(%addr, "listening");

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    let server = self.clone();
                    tokio::spawn(async move {
                        server.handle_connection(stream, peer).await;
                    });
                }
                Err(e) => {
                    warn!(error = %e, "accept failed");
                }
            }
        }
    }

    /// Drive one connection to completion.
    async fn handle_connection(&self, stream: TcpStream, peer: SocketAddr) {
        let mut ws = match accept_async(stream).await {
            Ok(ws) => ws,
            Err(e) => {
                warn!(%peer, error = %e, "websocket handshake failed");
                return;
            }
        };

        let id = SessionId::next();
        self.sessions.insert(id, peer);
        info!(
            session = id.raw(),
            %peer,
            live = self.sessions.len(),
            "session opened"
        );

        let mut session = Session::new(self.canvas);

        // The original page draws once on load, before any interaction.
        let initial = vec![
            ServerEvent::Scene(session.scene()),
            ServerEvent::Status(session.status()),
        ];
        if send_events(&mut ws, &initial).await.is_err() {
            self.close(id);
            return;
        }

        while let Some(frame) = ws.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    let events = dispatch(&mut session, id, &text);
                    if send_events(&mut ws, &events).await.is_err() {
                        break;
                    }
                }
                Ok(Message::Close(_)) | Err(_) => break,
                // Pings are answered by the protocol layer; binary and
                // pong frames carry nothing for us.
                _ => {}
            }
        }

        self.close(id);
    }

    fn close(&self, id: SessionId) {
        self.sessions.remove(&id);
        info!(session = id.raw(), live = self.sessions.len(), "session closed");
    }
}

/// Translate one inbound frame into the events to send back.
///
/// A successful command yields a full redraw plus fresh readouts; a
/// failed one yields only the notice, leaving the last drawing in place —
/// failed operations never mutate, so there is nothing new to draw.
fn dispatch(session: &mut Session, id: SessionId, raw: &str) -> Vec<ServerEvent> {
    let command: ClientCommand = match serde_json::from_str(raw) {
        Ok(command) => command,
        Err(e) => {
            warn!(session = id.raw(), error = %e, "unparseable frame");
            return vec![ServerEvent::Notice {
                text: "unrecognized command".to_string(),
            }];
        }
    };

    debug!(session = id.raw(), ?command, "dispatch");
    match apply(session, command) {
        Ok(()) => vec![
            ServerEvent::Scene(session.scene()),
            ServerEvent::Status(session.status()),
        ],
        Err(e) => vec![ServerEvent::Notice { text: e.to_string() }],
    }
}

fn apply(session: &mut Session, command: ClientCommand) -> Result<(), SessionError> {
    match command {
        ClientCommand::GenerateGraph { vertices } => session.generate_graph(&vertices),
        ClientCommand::AddEdge {
            source,
            dest,
            weight,
        } => session.add_edge(&source, &dest, &weight),
        ClientCommand::Step => session.step().map(|_| ()),
        ClientCommand::Reset => {
            session.reset();
            Ok(())
        }
        ClientCommand::ShowPaths { dest } => session.show_paths(&dest).map(|_| ()),
    }
}

async fn send_events<S>(ws: &mut S, events: &[ServerEvent]) -> Result<(), ()>
where
    S: Sink<Message> + Unpin,
{
    for event in events {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize event");
                continue;
            }
        };
        if ws.send(Message::Text(json)).await.is_err() {
            return Err(());
        }
    }
    Ok(())
}
