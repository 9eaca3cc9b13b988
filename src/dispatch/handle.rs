//! Cross-thread access to a running UI.

use super::queue::EventSender;
use crate::event::Event;

/// Thread-safe handle for scheduling work onto the UI.
///
/// Nothing submitted through a handle runs inline: it is queued behind
/// everything already waiting and executed later on the scheduler. Every
/// method returns false once the [`Ui`](super::Ui) has been dropped.
pub struct UiHandle<R> {
    sender: EventSender<R>,
}

impl<R> Clone for UiHandle<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R> UiHandle<R> {
    pub(crate) fn new(sender: EventSender<R>) -> Self {
        Self { sender }
    }

    /// Run `f` with the root widget on the scheduler thread.
    ///
    /// ```ignore
    /// let handle = ui.handle();
    /// std::thread::spawn(move || {
    ///     let line = fetch();
    ///     handle.submit_callback(move |root: &mut Listing| root.push(line));
    /// });
    /// ```
    pub fn submit_callback<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut R) + Send + 'static,
    {
        self.send(Event::callback(f))
    }

    pub fn request_repaint(&self) -> bool {
        self.send(Event::Repaint)
    }

    /// Ask the scheduler to stop once it reaches this request.
    pub fn quit(&self) -> bool {
        self.send(Event::Quit)
    }

    /// Enqueue any event, e.g. a synthetic key press.
    pub fn send(&self, event: Event<R>) -> bool {
        let kind = event.kind();
        let sent = self.sender.send(event);
        if !sent {
            log::warn!("{} event sent to a UI that no longer exists", kind);
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::queue::{Envelope, EventQueue};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_submit_never_runs_inline() {
        let queue = EventQueue::<()>::new();
        let handle = UiHandle::new(queue.sender());
        let ran = Arc::new(AtomicBool::new(false));

        let flag = ran.clone();
        assert!(handle.submit_callback(move |_| flag.store(true, Ordering::SeqCst)));
        assert!(!ran.load(Ordering::SeqCst));

        match queue.try_recv() {
            Some(Envelope::Event(Event::Callback(f))) => f(&mut ()),
            _ => panic!("expected a queued callback"),
        }
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_handle_is_send_and_clone() {
        fn assert_send<T: Send>(_: &T) {}

        let queue = EventQueue::<String>::new();
        let handle = UiHandle::new(queue.sender());
        let other = handle.clone();
        assert_send(&other);

        std::thread::spawn(move || {
            other.request_repaint();
            other.quit();
        })
        .join()
        .unwrap();

        assert!(matches!(queue.try_recv(), Some(Envelope::Event(Event::Repaint))));
        assert!(matches!(queue.try_recv(), Some(Envelope::Event(Event::Quit))));
    }

    #[test]
    fn test_methods_report_dropped_ui() {
        let queue = EventQueue::<()>::new();
        let handle = UiHandle::new(queue.sender());
        drop(queue);

        assert!(!handle.submit_callback(|_| {}));
        assert!(!handle.request_repaint());
        assert!(!handle.quit());
    }
}
