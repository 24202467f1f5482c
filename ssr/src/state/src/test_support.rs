use std::cell::RefCell;

use crate::toast::{Notifier, ToastKind};

#[derive(Default)]
pub struct RecordingNotifier {
    pub seen: RefCell<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.of_kind(ToastKind::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(ToastKind::Success)
    }

    fn of_kind(&self, kind: ToastKind) -> Vec<String> {
        self.seen
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: String) {
        self.seen.borrow_mut().push((ToastKind::Success, message));
    }

    fn error(&self, message: String) {
        self.seen.borrow_mut().push((ToastKind::Error, message));
    }
}

/// Collects every value reported through a `ValueSink`
#[derive(Default)]
pub struct Reported(pub RefCell<Vec<String>>);

impl Reported {
    pub fn sink(&self) -> impl Fn(String) + '_ {
        move |v| self.0.borrow_mut().push(v)
    }

    pub fn values(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}
