use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to watch models directory: {0}")]
    Notify(#[from] notify::Error),

    #[error("Watcher channel closed")]
    Disconnected,
}

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Recursive filesystem watcher over the models directory
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
}

impl FileWatcher {
    pub fn new(path: &Path) -> WatcherResult<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(path, RecursiveMode::Recursive)?;

        Ok(Self {
            watcher,
            receiver: rx,
        })
    }

    /// Also watch the direct children of `path`, e.g. the project directory
    /// holding the config file
    pub fn watch_shallow(&mut self, path: &Path) -> WatcherResult<()> {
        self.watcher.watch(path, RecursiveMode::NonRecursive)?;
        Ok(())
    }

    /// Block until a create/modify/remove event touches a path accepted by
    /// `filter`, then drain whatever else arrives within `debounce`
    ///
    /// Returns the distinct matching paths.
    pub fn wait_for_changes(
        &self,
        filter: impl Fn(&Path) -> bool,
        debounce: Duration,
    ) -> WatcherResult<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = Vec::new();

        while paths.is_empty() {
            let event = self.receiver.recv().map_err(|_| WatcherError::Disconnected)?;
            collect_paths(event?, &filter, &mut paths);
        }

        loop {
            match self.receiver.recv_timeout(debounce) {
                Ok(event) => collect_paths(event?, &filter, &mut paths),
                Err(RecvTimeoutError::Timeout) => return Ok(paths),
                Err(RecvTimeoutError::Disconnected) => return Err(WatcherError::Disconnected),
            }
        }
    }
}

fn collect_paths(event: Event, filter: &impl Fn(&Path) -> bool, paths: &mut Vec<PathBuf>) {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return;
    }

    for path in event.paths {
        if filter(&path) && !paths.contains(&path) {
            paths.push(path);
        }
    }
}
