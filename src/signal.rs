use std::sync::mpsc::{Receiver, SyncSender, TryRecvError, sync_channel};

/// Create the paired halves of the session termination signal.
///
/// The channel is buffered with capacity two so that `exit` — which runs
/// synchronously on the loop's own call stack — can signal without blocking
/// even when a previous signal is still unread.
pub(crate) fn exit_channel() -> (ExitSignal, ExitWatch) {
    let (tx, rx) = sync_channel(2);
    (ExitSignal { tx }, ExitWatch { rx })
}

/// Sending half of the termination signal, held by the `exit` builtin.
#[derive(Clone)]
pub(crate) struct ExitSignal {
    tx: SyncSender<()>,
}

impl ExitSignal {
    /// Request session termination. Never blocks; a full buffer means an
    /// exit is already pending and the request can be dropped.
    pub fn notify(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiving half, polled by the loop at the top of each iteration.
pub(crate) struct ExitWatch {
    rx: Receiver<()>,
}

impl ExitWatch {
    /// Non-blocking poll. A disconnected sender also ends the session, since
    /// no exit request can arrive anymore.
    pub fn is_set(&self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => true,
        }
    }
}
