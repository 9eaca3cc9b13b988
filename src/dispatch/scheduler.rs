//! The scheduler - the one thread that touches the UI.
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐
//! │ input      │   │ UiHandle     │  (any thread)
//! └─────┬──────┘   └──────┬───────┘
//!       └────────┬────────┘
//!                ▼
//!          EventQueue (FIFO)
//!                │
//!                ▼
//!     Ui::run: recv → apply → repaint
//!        Key      → keybinding, else root widget
//!        Mouse    → root widget
//!        Callback → run with the root widget
//!        Repaint  → layout + diffed redraw
//!        Quit     → stop
//! ```
//!
//! The root widget, the keybindings and the screen are only ever touched
//! from inside [`Ui::run`]. Other threads get at them by queueing callbacks.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::handle::UiHandle;
use super::keybindings::{KeyBinding, KeybindingRegistry};
use super::queue::{Envelope, EventQueue};
use crate::backend::Backend;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{Event, Key, KeyEvent, ModMask, MouseEvent};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::widget::Widget;

/// Scheduler lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Inside [`Ui::run`], consuming events.
    Running,
    /// Not started yet, or `run` has returned.
    Stopped,
}

/// A terminal UI: a root widget, a backend and the event loop between them.
pub struct Ui<R, B> {
    root: R,
    backend: B,
    config: Config,
    queue: EventQueue<R>,
    keybindings: KeybindingRegistry<R>,
    frame: FrameBuffer,
    renderer: DiffRenderer,
    state: State,
    /// Taken off the queue while merging repaints; processed next
    lookahead: Option<Envelope<R>>,
}

impl<R: Widget + 'static, B: Backend> Ui<R, B> {
    pub fn new(root: R, backend: B) -> Self {
        Self::with_config(root, backend, Config::default())
    }

    pub fn with_config(root: R, backend: B, config: Config) -> Self {
        Self {
            root,
            backend,
            config,
            queue: EventQueue::new(),
            keybindings: KeybindingRegistry::new(),
            frame: FrameBuffer::new(0, 0),
            renderer: DiffRenderer::new(),
            state: State::Stopped,
            lookahead: None,
        }
    }

    // =========================================================================
    // Registration and producers
    // =========================================================================

    /// Bind `action` to a key. Replaces any earlier binding.
    ///
    /// Printable characters are bound with [`Ui::register_rune_binding`].
    /// Passing [`Key::Rune`] here binds every character that has no
    /// binding of its own.
    pub fn register_keybinding<F>(&mut self, key: Key, modifiers: ModMask, action: F) -> bool
    where
        F: FnMut(&mut R) + 'static,
    {
        self.keybindings.register(KeyBinding::new(key, modifiers), action)
    }

    /// Bind `action` to a printable character.
    pub fn register_rune_binding<F>(&mut self, ch: char, modifiers: ModMask, action: F) -> bool
    where
        F: FnMut(&mut R) + 'static,
    {
        self.keybindings.register(KeyBinding::rune(ch, modifiers), action)
    }

    pub fn keybindings(&self) -> &KeybindingRegistry<R> {
        &self.keybindings
    }

    pub fn keybindings_mut(&mut self) -> &mut KeybindingRegistry<R> {
        &mut self.keybindings
    }

    /// A handle other threads can use to reach this UI.
    pub fn handle(&self) -> UiHandle<R> {
        UiHandle::new(self.queue.sender())
    }

    /// Queue `f` to run on the scheduler. Same as [`UiHandle::submit_callback`].
    pub fn submit_callback<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut R) + Send + 'static,
    {
        self.handle().submit_callback(f)
    }

    pub fn request_repaint(&self) -> bool {
        self.handle().request_repaint()
    }

    /// Queue a stop request. Events queued before it still run.
    pub fn quit(&self) -> bool {
        self.handle().quit()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    /// Take over the terminal and process events until a quit request.
    ///
    /// The terminal is restored before this returns, whatever the outcome.
    /// After a callback failure the events queued behind it are kept, and
    /// calling `run` again resumes with them.
    pub fn run(&mut self) -> Result<()> {
        log::debug!("ui starting");
        self.state = State::Running;
        let result = self.event_loop();
        self.state = State::Stopped;

        let restored = self.backend.restore().map_err(Error::from);
        match result {
            Ok(()) => {
                log::debug!("ui stopped");
                restored
            }
            Err(error) => {
                if let Err(restore_error) = restored {
                    log::warn!("terminal restore failed: {}", restore_error);
                }
                log::debug!("ui stopped: {}", error);
                Err(error)
            }
        }
    }

    fn event_loop(&mut self) -> Result<()> {
        self.backend.init()?;
        self.renderer.invalidate();
        self.backend.start(Box::new(self.queue.sender()))?;
        self.repaint()?;

        loop {
            let envelope = match self.lookahead.take() {
                Some(envelope) => envelope,
                None => match self.queue.recv() {
                    Some(envelope) => envelope,
                    None => return Ok(()),
                },
            };
            let event = match envelope {
                Envelope::Event(event) => event,
                Envelope::Fault(error) => return Err(error),
            };

            match event {
                Event::Key(key) => {
                    self.dispatch_key(&key)?;
                    self.repaint()?;
                }
                Event::Mouse(mouse) => {
                    self.dispatch_mouse(&mouse)?;
                    self.repaint()?;
                }
                Event::Repaint => self.repaint()?,
                Event::Callback(callback) => {
                    let root = &mut self.root;
                    guarded("callback", || callback(root))?;
                    self.repaint()?;
                }
                Event::Quit => {
                    let discarded = self.discard_pending();
                    if discarded > 0 {
                        log::debug!("quit: discarded {} queued events", discarded);
                    }
                    return Ok(());
                }
            }
        }
    }

    fn dispatch_key(&mut self, event: &KeyEvent) -> Result<()> {
        let root = &mut self.root;
        if let Some(action) = self.keybindings.get_mut(event) {
            log::trace!("key {} -> keybinding", event);
            return guarded("keybinding", || action(root));
        }

        let handled = guarded("key handler", || root.on_key(event))?;
        log::trace!("key {} -> root widget (handled: {})", event, handled);
        Ok(())
    }

    fn dispatch_mouse(&mut self, event: &MouseEvent) -> Result<()> {
        if !self.frame.bounds().contains(event.pos) {
            log::trace!("mouse event outside the screen: {:?}", event);
            return Ok(());
        }
        let root = &mut self.root;
        guarded("mouse handler", || root.on_mouse(event))?;
        Ok(())
    }

    /// Lay out and draw the root widget, then send the changes to the backend.
    fn repaint(&mut self) -> Result<()> {
        if self.config.coalesce_repaints {
            self.merge_queued_repaints();
        }

        let (width, height) = self.backend.size()?;
        if width != self.frame.width() || height != self.frame.height() {
            log::debug!("screen size {}x{}", width, height);
            self.frame.resize(width, height);
        } else {
            self.frame.clear();
        }

        let root = &mut self.root;
        let frame = &mut self.frame;
        guarded("draw", || {
            root.resize(frame.bounds());
            root.draw(frame);
        })?;

        self.renderer.render(&self.frame, &mut self.backend)?;
        Ok(())
    }

    /// Swallow repaint requests queued directly behind this one.
    ///
    /// The first other event is parked in `lookahead`, so ordering holds.
    fn merge_queued_repaints(&mut self) {
        if self.lookahead.is_some() {
            return;
        }

        let mut merged = 0;
        while let Some(envelope) = self.queue.try_recv() {
            if matches!(envelope, Envelope::Event(Event::Repaint)) {
                merged += 1;
            } else {
                self.lookahead = Some(envelope);
                break;
            }
        }
        if merged > 0 {
            log::trace!("merged {} repaint requests", merged);
        }
    }

    fn discard_pending(&mut self) -> usize {
        usize::from(self.lookahead.take().is_some()) + self.queue.discard_pending()
    }
}

/// Run user code, turning a panic into [`Error::Callback`].
fn guarded<T>(what: &str, f: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        log::error!("{} panicked: {}", what, message);
        Error::Callback(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
