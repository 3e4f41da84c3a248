//! Callback contract between the views and the owner of the file data.

/// Implemented by whoever owns the snapshot. Views never mutate data
/// themselves; they request changes through these calls.
pub trait ViewCallbacks {
    fn on_select_file(&mut self, path: &str);
    fn on_copy_path(&mut self, path: &str);
    fn on_delete_file(&mut self, path: &str);
    fn on_toggle_exclude(&mut self, path: &str);
    fn on_close(&mut self);
}

/// A single callback request emitted by a view interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SelectFile(String),
    CopyPath(String),
    DeleteFile(String),
    ToggleExclude(String),
    Close,
}

impl ViewEvent {
    /// Invoke the matching callback exactly once.
    pub fn dispatch<C: ViewCallbacks + ?Sized>(self, callbacks: &mut C) {
        match self {
            ViewEvent::SelectFile(path) => callbacks.on_select_file(&path),
            ViewEvent::CopyPath(path) => callbacks.on_copy_path(&path),
            ViewEvent::DeleteFile(path) => callbacks.on_delete_file(&path),
            ViewEvent::ToggleExclude(path) => callbacks.on_toggle_exclude(&path),
            ViewEvent::Close => callbacks.on_close(),
        }
    }

    /// Path acted upon, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            ViewEvent::SelectFile(p)
            | ViewEvent::CopyPath(p)
            | ViewEvent::DeleteFile(p)
            | ViewEvent::ToggleExclude(p) => Some(p),
            ViewEvent::Close => None,
        }
    }
}

/// Records every callback in order. Useful for tests and dry runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingCallbacks {
    pub calls: Vec<ViewEvent>,
}

impl RecordingCallbacks {
    pub fn count(&self, pred: impl Fn(&ViewEvent) -> bool) -> usize {
        self.calls.iter().filter(|e| pred(e)).count()
    }
}

impl ViewCallbacks for RecordingCallbacks {
    fn on_select_file(&mut self, path: &str) {
        self.calls.push(ViewEvent::SelectFile(path.to_string()));
    }

    fn on_copy_path(&mut self, path: &str) {
        self.calls.push(ViewEvent::CopyPath(path.to_string()));
    }

    fn on_delete_file(&mut self, path: &str) {
        self.calls.push(ViewEvent::DeleteFile(path.to_string()));
    }

    fn on_toggle_exclude(&mut self, path: &str) {
        self.calls.push(ViewEvent::ToggleExclude(path.to_string()));
    }

    fn on_close(&mut self) {
        self.calls.push(ViewEvent::Close);
    }
}
