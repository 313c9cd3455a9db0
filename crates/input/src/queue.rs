//! Input queue: keys and keep-alive ticks merged into one channel.
//!
//! Two producers feed a single bounded channel that the game loop drains with
//! a blocking receive:
//!
//! - a reader thread polling a [`KeySource`] with a short timeout, so it can
//!   notice shutdown between keys;
//! - a timer task on a small tokio runtime that sends [`InputEvent::Tick`]
//!   whenever a full tick period passes without a key.
//!
//! Events are delivered in arrival order; neither producer has priority.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::{mpsc, Notify};
use tracing::{debug, warn};

use crate::map::symbol_for_key;
use crate::types::{InputEvent, InputSource};

/// How long the reader waits for a key before re-checking for shutdown
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(200);

/// At most one event waits in the channel
const QUEUE_DEPTH: usize = 1;

/// Producer of raw key symbols
pub trait KeySource: Send + 'static {
    /// Wait up to `timeout` for the next symbol
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<char>>;
}

/// Keys from the controlling terminal via crossterm
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<char>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(symbol_for_key(key)),
            _ => Ok(None),
        }
    }
}

/// Fixed key sequence, useful for demos and tests.
///
/// Once exhausted it behaves like an idle keyboard.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(symbols: &str) -> Self {
        Self {
            keys: symbols.chars().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<char>> {
        match self.keys.pop_front() {
            Some(symbol) => Ok(Some(symbol)),
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

/// Single-consumer queue of input events
pub struct InputQueue {
    rx: mpsc::Receiver<InputEvent>,
    shutdown: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
    runtime: Option<Runtime>,
}

impl InputQueue {
    /// Read keys from the terminal, ticking every `tick` while idle
    pub fn terminal(tick: Duration) -> Result<Self> {
        Self::start(TerminalKeys, tick)
    }

    /// Start both producers
    pub fn start<K: KeySource>(keys: K, tick: Duration) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("blockfall-timer")
            .enable_all()
            .build()
            .context("failed to create input runtime")?;

        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        let activity = Arc::new(Notify::new());
        let shutdown = Arc::new(AtomicBool::new(false));

        runtime.spawn(tick_loop(tx.clone(), activity.clone(), tick));

        let reader = {
            let shutdown = shutdown.clone();
            thread::Builder::new()
                .name("blockfall-keys".to_string())
                .spawn(move || read_keys(keys, tx, activity, shutdown))
                .context("failed to spawn key reader")?
        };

        Ok(Self {
            rx,
            shutdown,
            reader: Some(reader),
            runtime: Some(runtime),
        })
    }
}

impl InputSource for InputQueue {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.rx.blocking_recv()
    }
}

impl Drop for InputQueue {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        // Wakes a producer blocked on a full channel.
        self.rx.close();
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
        }
    }
}

fn read_keys<K: KeySource>(
    mut keys: K,
    tx: mpsc::Sender<InputEvent>,
    activity: Arc<Notify>,
    shutdown: Arc<AtomicBool>,
) {
    while !shutdown.load(Ordering::Relaxed) {
        match keys.poll_key(POLL_INTERVAL) {
            Ok(Some(symbol)) => {
                activity.notify_one();
                if tx.blocking_send(InputEvent::Key(symbol)).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "key reader stopped");
                break;
            }
        }
    }
    debug!("key reader exited");
}

async fn tick_loop(tx: mpsc::Sender<InputEvent>, activity: Arc<Notify>, period: Duration) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(period) => {
                debug!("keep-alive tick");
                if tx.send(InputEvent::Tick).await.is_err() {
                    break;
                }
            }
            // A real key restarts the idle period.
            _ = activity.notified() => {}
            _ = tx.closed() => break,
        }
    }
}
