//! Session IO task — connection lifecycle and command dispatch.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use holibot_domain::session::SessionState;

use crate::Shared;
use crate::error::HubError;
use crate::events::SessionEvents as _;
use crate::protocol::{self, Frame};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Drive the session until it is explicitly closed.
///
/// The first connect attempt is special: failing there terminates the
/// session, which the caller observes as `await_connected` erroring.
/// Once a connection has been established, transport drops are retried
/// with backoff until a close is requested.
pub(crate) async fn run(shared: Arc<Shared>) {
    let mut ever_connected = false;

    loop {
        if shared.should_close() {
            break;
        }

        shared.set_state(SessionState::Connecting);

        let mut stream = match connect_async(shared.config.url()).await {
            Ok((stream, _response)) => stream,
            Err(err) => {
                shared.events.on_error(&HubError::Connect(err));
                if !ever_connected {
                    break;
                }
                backoff_sleep(&shared).await;
                continue;
            }
        };

        if let Err(err) = handshake(&shared, &mut stream).await {
            shared.events.on_error(&err);
            if !ever_connected {
                break;
            }
            backoff_sleep(&shared).await;
            continue;
        }

        ever_connected = true;
        shared.set_state(SessionState::Connected);
        shared.queue.set_accepting(true);
        shared.events.on_connected(shared.retries.load(Ordering::SeqCst));

        let requested = drive(&shared, stream).await;

        shared.queue.set_accepting(false);
        shared.events.on_disconnected(requested);

        if requested || shared.should_close() {
            break;
        }

        backoff_sleep(&shared).await;
    }

    shared.queue.set_accepting(false);
    shared.set_state(SessionState::Closed);
}

/// Send the credentials frame followed by the full-state request.
async fn handshake(shared: &Shared, stream: &mut WsStream) -> Result<(), HubError> {
    let auth = protocol::auth_request(&shared.config.username, &shared.config.password);
    stream
        .send(Message::Text(auth))
        .await
        .map_err(HubError::Send)?;
    stream
        .send(Message::Text(protocol::SNAPSHOT_REQUEST.to_string()))
        .await
        .map_err(HubError::Send)?;
    Ok(())
}

/// Increment the retry counter and wait out the backoff, waking early
/// when a close is requested.
async fn backoff_sleep(shared: &Shared) {
    let retries = shared.retries.fetch_add(1, Ordering::SeqCst) + 1;
    let delay = shared.config.backoff(retries);
    tracing::debug!(retries, delay_secs = delay.as_secs(), "reconnecting after backoff");
    tokio::select! {
        () = tokio::time::sleep(delay) => {}
        () = shared.close_requested.notified() => {}
    }
}

/// Pump one established connection until it ends.
///
/// Returns true when the connection ended because close was requested,
/// false on an unrequested drop (the caller then reconnects).
async fn drive(shared: &Shared, stream: WsStream) -> bool {
    let (mut sink, mut source) = stream.split();

    loop {
        tokio::select! {
            () = shared.close_requested.notified() => {
                shared.set_state(SessionState::Closing);
                if let Err(err) = sink.close().await {
                    shared.events.on_error(&HubError::Send(err));
                }
                drain_close(&mut source).await;
                return true;
            }
            command = shared.queue.next() => {
                tracing::debug!(%command, "dispatching command");
                if let Err(err) = sink.send(Message::Text(command.as_str().to_owned())).await {
                    shared.events.on_error(&HubError::Send(err));
                    return false;
                }
                shared.queue.signal_empty_if_idle();
            }
            frame = source.next() => match frame {
                Some(Ok(Message::Text(text))) => handle_frame(shared, &text),
                Some(Ok(Message::Close(_))) | None => return shared.should_close(),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    shared.events.on_error(&HubError::Receive(err));
                    return false;
                }
            },
        }
    }
}

/// Read out the remainder of the close handshake.
async fn drain_close(source: &mut SplitStream<WsStream>) {
    while let Some(frame) = source.next().await {
        if matches!(frame, Ok(Message::Close(_)) | Err(_)) {
            break;
        }
    }
}

/// Interpret one inbound text frame.
///
/// Every inbound frame doubles as an opportunity to observe the queue
/// empty, mirroring the drain bookkeeping done after each dispatch.
fn handle_frame(shared: &Shared, text: &str) {
    match protocol::parse_frame(text) {
        Ok(Frame::Snapshot(programs)) => {
            shared.events.on_snapshot(&programs);
            shared.store_programs(programs);
            if !shared.should_close() {
                shared.set_state(SessionState::Ready);
            }
        }
        Ok(Frame::Other) => {}
        Err(err) => {
            tracing::warn!(%err, "malformed snapshot, keeping cached programs");
        }
    }
    shared.queue.signal_empty_if_idle();
}
