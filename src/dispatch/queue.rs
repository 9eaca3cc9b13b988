//! The event queue - one ordered channel, one consumer.
//!
//! Producers (the input thread, [`UiHandle`](super::UiHandle)s on any
//! thread) hold an [`EventSender`]; the scheduler owns the receiving end.
//! The channel is unbounded, so sending never blocks a producer.

use std::sync::mpsc;

use crate::error::Error;
use crate::event::Event;
use crate::input::{InputSink, ParsedEvent};

/// What travels on the channel: an event, or a fault from the input thread.
pub(crate) enum Envelope<R> {
    Event(Event<R>),
    Fault(Error),
}

pub struct EventQueue<R> {
    tx: mpsc::Sender<Envelope<R>>,
    rx: mpsc::Receiver<Envelope<R>>,
}

impl<R> EventQueue<R> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A new producer handle for this queue.
    pub fn sender(&self) -> EventSender<R> {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Block until the next envelope arrives.
    ///
    /// The queue keeps a sender of its own, so this only returns `None` if
    /// the channel is torn down underneath us.
    pub(crate) fn recv(&self) -> Option<Envelope<R>> {
        self.rx.recv().ok()
    }

    pub(crate) fn try_recv(&self) -> Option<Envelope<R>> {
        self.rx.try_recv().ok()
    }

    /// Throw away everything currently queued. Returns how many were dropped.
    pub(crate) fn discard_pending(&self) -> usize {
        self.rx.try_iter().count()
    }
}

impl<R> Default for EventQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`EventQueue`]. Cheap to clone, usable from any thread.
pub struct EventSender<R> {
    tx: mpsc::Sender<Envelope<R>>,
}

impl<R> Clone for EventSender<R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<R> EventSender<R> {
    /// Enqueue an event. Returns false if the queue no longer exists.
    pub fn send(&self, event: Event<R>) -> bool {
        self.tx.send(Envelope::Event(event)).is_ok()
    }

    pub(crate) fn fault(&self, error: Error) -> bool {
        self.tx.send(Envelope::Fault(error)).is_ok()
    }
}

impl<R: 'static> InputSink for EventSender<R> {
    fn push(&self, event: ParsedEvent) -> bool {
        log::trace!("input: {:?}", event);
        self.send(event.into())
    }

    fn fail(&self, error: Error) {
        log::debug!("input stopped: {}", error);
        self.fault(error);
    }
}
