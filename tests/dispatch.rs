//! End-to-end tests for the dispatch loop, driven through `TestBackend`.
//!
//! Input fed to the backend before `run` is delivered once input starts,
//! which is after anything already queued through a handle. Tests that mix
//! the two stop the loop from a keybinding or a callback placed after the
//! input.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use spark_dispatch::{
    Config, Error, Event, FrameBuffer, Key, KeyEvent, ModMask, MouseButton, MouseEvent, MouseKind,
    Point, State, Style, TestBackend, Ui, UiHandle, Widget,
};

// =============================================================================
// Fixtures
// =============================================================================

/// Records everything that reaches it and draws the latest entry.
#[derive(Default)]
struct Journal {
    log: Vec<String>,
    status: String,
}

impl Journal {
    fn note(&mut self, entry: impl Into<String>) {
        self.log.push(entry.into());
    }
}

impl Widget for Journal {
    fn draw(&self, frame: &mut FrameBuffer) {
        let text = if self.status.is_empty() {
            self.log.last().map(String::as_str).unwrap_or("")
        } else {
            self.status.as_str()
        };
        frame.set_str(0, 0, text, Style::default(), None);
    }

    fn on_key(&mut self, event: &KeyEvent) -> bool {
        self.note(format!("key {}", event));
        true
    }

    fn on_mouse(&mut self, event: &MouseEvent) -> bool {
        self.note(format!("mouse {},{}", event.pos.x, event.pos.y));
        true
    }
}

fn setup(width: u16, height: u16) -> (Ui<Journal, TestBackend>, TestBackend) {
    let backend = TestBackend::new(width, height);
    let ui = Ui::new(Journal::default(), backend.clone());
    (ui, backend)
}

/// Esc quits, the way applications usually wire it.
fn quit_on_esc(ui: &mut Ui<Journal, TestBackend>) {
    let handle = ui.handle();
    ui.register_keybinding(Key::Esc, ModMask::NONE, move |root| {
        root.note("esc");
        handle.quit();
    });
}

// =============================================================================
// Quit
// =============================================================================

#[test]
fn esc_binding_stops_the_loop() {
    let (mut ui, backend) = setup(10, 2);
    quit_on_esc(&mut ui);

    backend.feed(b"\x1b");
    ui.run().unwrap();

    assert_eq!(ui.state(), State::Stopped);
    assert_eq!(ui.root().log, vec!["esc"]);
    assert_eq!(backend.restores(), 1);
    assert!(!backend.is_active());
}

#[test]
fn input_is_not_read_between_runs() {
    let (mut ui, backend) = setup(10, 2);
    quit_on_esc(&mut ui);

    backend.feed(b"a\x1b");
    ui.run().unwrap();
    assert!(!backend.is_reading());

    // Typed after the UI exited: waits for the next run
    backend.feed(b"b");
    assert_eq!(ui.root().log, vec!["key a", "esc"]);

    backend.feed(b"\x1b");
    ui.run().unwrap();
    assert_eq!(ui.root().log, vec!["key a", "esc", "key b", "esc"]);
}

#[test]
fn quit_twice_stops_once() {
    let (mut ui, backend) = setup(10, 2);
    let handle = ui.handle();

    assert!(handle.quit());
    handle.submit_callback(|root: &mut Journal| root.note("between"));
    assert!(handle.quit());
    ui.run().unwrap();

    assert!(ui.root().log.is_empty());
    assert_eq!(backend.inits(), 1);
    assert_eq!(backend.restores(), 1);

    // The second quit was discarded with the rest of the queue
    handle.submit_callback(|root: &mut Journal| root.note("second run"));
    handle.quit();
    ui.run().unwrap();
    assert_eq!(ui.root().log, vec!["second run"]);
    assert_eq!(backend.restores(), 2);
}

#[test]
fn quit_lets_earlier_events_finish() {
    let (mut ui, _backend) = setup(10, 2);

    ui.submit_callback(|root: &mut Journal| root.note("one"));
    ui.submit_callback(|root: &mut Journal| root.note("two"));
    ui.quit();
    ui.submit_callback(|root: &mut Journal| root.note("too late"));
    ui.run().unwrap();

    assert_eq!(ui.root().log, vec!["one", "two"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn events_run_in_enqueue_order() {
    let (mut ui, _backend) = setup(10, 2);
    let handle = ui.handle();

    handle.send(KeyEvent::rune('a', ModMask::NONE).into());
    handle.submit_callback(|root: &mut Journal| root.note("cb1"));
    handle.send(Event::Repaint);
    handle.send(KeyEvent::new(Key::Enter, ModMask::CTRL).into());
    handle.submit_callback(|root: &mut Journal| root.note("cb2"));
    handle.quit();
    ui.run().unwrap();

    assert_eq!(ui.root().log, vec!["key a", "cb1", "key Ctrl+Enter", "cb2"]);
}

#[test]
fn callback_from_another_thread_runs_after_current_key() {
    let (mut ui, backend) = setup(10, 2);
    let handle = ui.handle();

    ui.register_rune_binding('x', ModMask::NONE, move |root| {
        root.note("key start");

        // Submitted and fully enqueued while this key is being dispatched
        let remote = handle.clone();
        thread::spawn(move || {
            let quitter = remote.clone();
            remote.submit_callback(move |root: &mut Journal| {
                root.note("callback");
                quitter.quit();
            });
        })
        .join()
        .unwrap();

        root.note("key end");
    });

    backend.feed(b"x");
    ui.run().unwrap();

    assert_eq!(ui.root().log, vec!["key start", "key end", "callback"]);
}

#[test]
fn producers_on_many_threads_keep_their_own_order() {
    let (mut ui, _backend) = setup(10, 2);
    let handle = ui.handle();
    let (done_tx, done_rx) = mpsc::channel();

    for producer in 0..4 {
        let handle = handle.clone();
        let done = done_tx.clone();
        thread::spawn(move || {
            for i in 0..25 {
                handle.submit_callback(move |root: &mut Journal| root.note(format!("{producer}:{i}")));
            }
            done.send(()).unwrap();
        });
    }
    drop(done_tx);

    // Quit only after every producer is done
    let quitter = handle.clone();
    thread::spawn(move || {
        for _ in done_rx {}
        quitter.quit();
    });
    ui.run().unwrap();

    let log = &ui.root().log;
    assert_eq!(log.len(), 100);
    for producer in 0..4 {
        let prefix = format!("{producer}:");
        let seen: Vec<usize> = log
            .iter()
            .filter_map(|entry| entry.strip_prefix(&prefix))
            .map(|i| i.parse().unwrap())
            .collect();
        assert_eq!(seen, (0..25).collect::<Vec<_>>());
    }
}

// =============================================================================
// Keys and mouse
// =============================================================================

#[test]
fn keybindings_win_over_the_root_widget() {
    let (mut ui, backend) = setup(10, 2);
    quit_on_esc(&mut ui);
    ui.register_rune_binding('q', ModMask::NONE, |root| root.note("bound q"));

    backend.feed(b"qw\x1bq\x1b");
    ui.run().unwrap();

    // Alt+q does not match the plain q binding
    assert_eq!(ui.root().log, vec!["bound q", "key w", "key Alt+q", "esc"]);
}

#[test]
fn alt_enter_does_not_fire_the_esc_binding() {
    let (mut ui, backend) = setup(10, 2);
    quit_on_esc(&mut ui);

    backend.feed(b"\x1b\r");
    backend.feed(b"\x1b\x7f");
    backend.feed("\x1bé".as_bytes());
    backend.feed(b"\x1b");
    ui.run().unwrap();

    assert_eq!(
        ui.root().log,
        vec!["key Alt+Enter", "key Alt+Backspace2", "key Alt+é", "esc"]
    );
}

#[test]
fn any_rune_binding_catches_unbound_characters() {
    let (mut ui, backend) = setup(10, 2);
    quit_on_esc(&mut ui);
    ui.register_rune_binding('q', ModMask::NONE, |root| root.note("bound q"));
    ui.register_keybinding(Key::Rune, ModMask::NONE, |root| root.note("any rune"));

    backend.feed(b"qa\x1bb\x1b");
    ui.run().unwrap();

    // The exact binding wins, Alt+b has no catch-all of its own
    assert_eq!(ui.root().log, vec!["bound q", "any rune", "key Alt+b", "esc"]);
}

#[test]
fn mouse_events_reach_the_root_widget() {
    let (mut ui, backend) = setup(10, 4);
    quit_on_esc(&mut ui);

    // Press at column 3 row 2 (1-based), then one far outside the screen
    backend.feed(b"\x1b[<0;3;2M\x1b[<0;50;50M\x1b");
    ui.run().unwrap();

    assert_eq!(ui.root().log, vec!["mouse 2,1", "esc"]);
}

#[test]
fn synthetic_mouse_events_can_be_sent() {
    let (mut ui, _backend) = setup(10, 4);
    let handle = ui.handle();

    handle.send(
        MouseEvent {
            pos: Point::new(9, 3),
            kind: MouseKind::Release(MouseButton::Right),
            modifiers: ModMask::SHIFT,
        }
        .into(),
    );
    handle.quit();
    ui.run().unwrap();

    assert_eq!(ui.root().log, vec!["mouse 9,3"]);
}

// =============================================================================
// Screen
// =============================================================================

#[test]
fn background_thread_updates_the_screen() {
    let (mut ui, backend) = setup(12, 1);
    let handle: UiHandle<Journal> = ui.handle();

    let worker = thread::spawn(move || {
        for n in 1..=3 {
            handle.submit_callback(move |root: &mut Journal| root.status = format!("step {n}"));
        }
        handle.quit();
    });
    ui.run().unwrap();
    worker.join().unwrap();

    assert_eq!(backend.rows(), vec!["step 3      "]);
}

#[test]
fn resize_shows_up_on_next_repaint() {
    let (mut ui, backend) = setup(4, 1);
    let terminal = backend.clone();

    ui.submit_callback(move |root: &mut Journal| {
        terminal.resize(8, 2);
        root.status = "wide".into();
    });
    ui.quit();
    ui.run().unwrap();

    assert_eq!(backend.rows(), vec!["wide    ", "        "]);
}

#[test]
fn repeated_repaints_are_merged() {
    let (mut ui, backend) = setup(4, 1);

    for _ in 0..10 {
        ui.request_repaint();
    }
    ui.quit();
    ui.run().unwrap();
    assert_eq!(backend.flushes(), 1);

    let backend = TestBackend::new(4, 1);
    let config = Config {
        coalesce_repaints: false,
        ..Config::default()
    };
    let mut ui = Ui::with_config(Journal::default(), backend.clone(), config);
    for _ in 0..10 {
        ui.request_repaint();
    }
    ui.quit();
    ui.run().unwrap();
    assert_eq!(backend.flushes(), 11);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn panicking_callback_is_reported_and_queue_survives() {
    let (mut ui, backend) = setup(10, 2);

    ui.submit_callback(|_: &mut Journal| panic!("callback exploded"));
    ui.submit_callback(|root: &mut Journal| root.note("after"));
    ui.quit();

    let err = ui.run().unwrap_err();
    assert!(matches!(err, Error::Callback(ref msg) if msg == "callback exploded"));
    assert!(!backend.is_active());
    assert_eq!(backend.restores(), 1);
    assert!(ui.root().log.is_empty());

    // The next run picks up where the failed one stopped
    ui.run().unwrap();
    assert_eq!(ui.root().log, vec!["after"]);
}

#[test]
fn panicking_keybinding_is_reported() {
    let (mut ui, backend) = setup(10, 2);
    ui.register_keybinding(Key::F5, ModMask::NONE, |_| panic!("no refresh today"));

    backend.feed(b"\x1b[15~");
    let err = ui.run().unwrap_err();
    assert!(matches!(err, Error::Callback(_)));
    assert_eq!(backend.restores(), 1);
}

#[test]
fn backend_write_failure_ends_the_session() {
    let (mut ui, backend) = setup(10, 2);
    backend.fail_flush(true);
    ui.quit();

    let err = ui.run().unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(backend.restores(), 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let (mut ui, backend) = setup(10, 2);

    backend.feed(b"hi");
    backend.close_input();
    let err = ui.run().unwrap_err();

    assert!(matches!(err, Error::InputClosed));
    assert_eq!(ui.root().log, vec!["key h", "key i"]);
    assert_eq!(backend.restores(), 1);
}

#[test]
fn handle_outlives_the_ui() {
    let (ui, _backend) = setup(10, 2);
    let handle = ui.handle();
    let ran = Arc::new(AtomicUsize::new(0));

    drop(ui);

    let counter = ran.clone();
    assert!(!handle.submit_callback(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    assert!(!handle.quit());
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}
