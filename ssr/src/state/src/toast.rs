use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Where user-facing success/error notices go.
pub trait Notifier {
    fn success(&self, message: String);
    fn error(&self, message: String);
}

#[derive(Clone, Copy, Debug)]
pub struct ToastState {
    toasts: RwSignal<Vec<Toast>>,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn get() -> Self {
        let this: Self = expect_context();
        this
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn push(&self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            gloo::timers::callback::Timeout::new(consts::TOAST_DURATION_MS, move || {
                this.dismiss(id)
            })
            .forget();
        }

        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Notifier for ToastState {
    fn success(&self, message: String) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: String) {
        self.push(ToastKind::Error, message);
    }
}
