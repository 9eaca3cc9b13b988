//! Two-row listing with a highlighted selection.
//!
//! Up/Down move the selection, Esc quits. A background thread appends a
//! row every second through `UiHandle::submit_callback`.
//!
//! Logs go to `color-demo.log` so they do not disturb the screen.
//!
//! Run with: cargo run --example color [config.toml]

use std::thread;
use std::time::Duration;

use spark_dispatch::{
    Attr, Cell, Config, CrosstermBackend, FrameBuffer, Key, KeyEvent, ModMask, Rect, Rgba, Style, Ui,
    Widget,
};

struct Listing {
    rows: Vec<String>,
    selected: usize,
    area: Rect,
}

impl Listing {
    fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            selected: 0,
            area: Rect::default(),
        }
    }
}

impl Widget for Listing {
    fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        for (i, row) in self.rows.iter().enumerate().take(self.area.height as usize) {
            let y = self.area.y + i as u16;
            let (fg, bg) = if i == self.selected {
                (Rgba::WHITE, Rgba::RED)
            } else {
                (Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT)
            };
            let line = Rect::new(self.area.x, y, self.area.width, 1);
            frame.fill(line, Cell { bg, ..Default::default() });
            frame.set_str(self.area.x, y, row, Style::new(fg, bg), Some(&line));
        }

        let help = "Up/Down select, Esc quits";
        if self.area.height > 0 {
            let y = self.area.y + self.area.height - 1;
            let style = Style::new(Rgba::GRAY, Rgba::TERMINAL_DEFAULT).attrs(Attr::DIM);
            frame.set_str(self.area.x, y, help, style, None);
        }
    }

    fn on_key(&mut self, event: &KeyEvent) -> bool {
        match event.key {
            Key::Up => self.selected = self.selected.saturating_sub(1),
            Key::Down => self.selected = (self.selected + 1).min(self.rows.len().saturating_sub(1)),
            _ => return false,
        }
        true
    }
}

fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("color-demo.log")?)
        .apply()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging()?;

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let backend = CrosstermBackend::with_config(&config);
    let mut ui = Ui::with_config(Listing::new(&["First row", "Second row"]), backend, config);

    let handle = ui.handle();
    ui.register_keybinding(Key::Esc, ModMask::NONE, move |_| {
        handle.quit();
    });

    let ticker = ui.handle();
    thread::spawn(move || {
        for n in 1.. {
            thread::sleep(Duration::from_secs(1));
            let row = format!("Row added after {n}s");
            if !ticker.submit_callback(move |listing: &mut Listing| listing.rows.push(row)) {
                break;
            }
        }
    });

    ui.run()?;
    Ok(())
}
