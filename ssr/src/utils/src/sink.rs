/// Something a child control reports its resolved value to.
///
/// Closures over `Fn(String)` implement this, so a Leptos `Callback` is wired
/// in as `move |url| on_change.run(url)` and tests can record into a `RefCell`.
pub trait ValueSink {
    fn report(&self, value: String);
}

impl<F: Fn(String)> ValueSink for F {
    fn report(&self, value: String) {
        self(value)
    }
}
