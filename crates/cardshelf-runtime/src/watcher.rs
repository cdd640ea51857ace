use crate::loader::{CatalogSnapshot, load_catalog};
use crate::{Error, Result};
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub enum CatalogEvent {
    /// Catalog (re)loaded; the first event after start carries the initial load.
    Reloaded(Box<CatalogSnapshot>),
    /// Load failed; the previous snapshot stays authoritative.
    Error(String),
}

/// Polls one catalog file and reloads it whenever it changes.
pub struct CatalogWatcher {
    _watcher: PollWatcher,
    rx: Receiver<CatalogEvent>,
}

impl CatalogWatcher {
    pub fn new(source: PathBuf) -> Result<Self> {
        Self::with_poll_interval(source, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(source: PathBuf, interval: Duration) -> Result<Self> {
        if !source.is_file() {
            return Err(Error::Config(format!(
                "Cannot watch {}: not a regular file",
                source.display()
            )));
        }

        let (tx_out, rx_out) = channel();
        let (tx_fs, rx_fs) = channel();

        let config = notify::Config::default().with_poll_interval(interval);
        let mut watcher = PollWatcher::new(
            move |res: notify::Result<Event>| {
                if let Ok(event) = res {
                    let _ = tx_fs.send(event);
                }
            },
            config,
        )?;
        watcher.watch(&source, RecursiveMode::NonRecursive)?;

        reload(&source, &tx_out);

        let tx_worker = tx_out.clone();
        std::thread::Builder::new()
            .name("catalog-watcher-worker".to_string())
            .spawn(move || {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    while let Ok(event) = rx_fs.recv() {
                        // Polling reports data and metadata changes separately
                        let mut relevant = is_content_change(&event);
                        while let Ok(extra) = rx_fs.try_recv() {
                            relevant |= is_content_change(&extra);
                        }

                        if relevant && !reload(&source, &tx_worker) {
                            break;
                        }
                    }
                }));

                if let Err(panic_err) = result {
                    let panic_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_err.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Worker thread panicked with unknown error".to_string()
                    };
                    let _ = tx_worker.send(CatalogEvent::Error(format!(
                        "FATAL: Worker thread panicked: {}",
                        panic_msg
                    )));
                }
            })?;

        Ok(Self {
            _watcher: watcher,
            rx: rx_out,
        })
    }

    pub fn receiver(&self) -> &Receiver<CatalogEvent> {
        &self.rx
    }
}

fn is_content_change(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    )
}

/// Returns false once nobody is listening anymore.
fn reload(source: &Path, tx: &Sender<CatalogEvent>) -> bool {
    let event = match load_catalog(source) {
        Ok(snapshot) => CatalogEvent::Reloaded(Box::new(snapshot)),
        Err(e) => {
            tracing::warn!(source = %source.display(), error = %e, "catalog reload failed");
            CatalogEvent::Error(e.to_string())
        }
    };
    tx.send(event).is_ok()
}
