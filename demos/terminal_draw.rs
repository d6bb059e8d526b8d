//! Terminal Draw: Drag with the left mouse button to draw grid-snapped blocks.
//!
//! Blocks snap to 8x2 cells and may not overlap existing blocks.
//! Esc cancels the current drag, 'q' quits.
//!
//! Set `DRAWABLE_LOG=debug` to write engine logs to `drawable.log`.

use crossbeam_channel::bounded;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use drawable::{
    any_overlap, DragTracker, DragUpdate, DrawConfig, GridSpec, InputActor, InputEvent, Padding, Rect,
};
use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn container_for(width: u16, height: u16) -> Rect {
    // last row is the status line
    Rect::new(0, 0, i32::from(width), i32::from(height.saturating_sub(1)))
}

fn fill(out: &mut impl Write, rect: Rect, glyph: char) -> io::Result<()> {
    let row: String = std::iter::repeat(glyph)
        .take(usize::try_from(rect.width).unwrap_or(0))
        .collect();
    for y in rect.top..rect.bottom() {
        let (Ok(col), Ok(line)) = (u16::try_from(rect.left), u16::try_from(y)) else {
            continue;
        };
        queue!(out, cursor::MoveTo(col, line), Print(&row))?;
    }
    Ok(())
}

fn redraw(
    out: &mut impl Write,
    container: Rect,
    blocks: &[Rect],
    proxy: Option<Rect>,
    status: &str,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for block in blocks {
        fill(out, *block, '█')?;
    }
    if let Some(proxy) = proxy {
        let glyph = if any_overlap(&proxy, blocks) { 'x' } else { '░' };
        fill(out, proxy, glyph)?;
    }
    let status_row = u16::try_from(container.bottom()).unwrap_or(0);
    queue!(out, cursor::MoveTo(0, status_row), Print(status))?;
    out.flush()
}

fn init_logging() -> io::Result<()> {
    if std::env::var_os("DRAWABLE_LOG").is_none() {
        return Ok(());
    }
    let file = File::create("drawable.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("DRAWABLE_LOG"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(out: &mut impl Write, tracker: &mut DragTracker, blocks: &mut Vec<Rect>) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let (tx, rx) = bounded::<InputEvent>(64);
    // Dropping the actor on an early return joins its thread.
    let input = InputActor::spawn(tx, Duration::from_millis(10))?;

    let mut status = String::from("drag to draw, esc cancels, q quits");
    redraw(out, tracker.container(), blocks, None, &status)?;

    while let Ok(event) = rx.recv() {
        match event {
            InputEvent::Pointer(pointer) => {
                let proxy = match tracker.handle(&pointer) {
                    Ok(DragUpdate::Started(rect) | DragUpdate::Resized(rect) | DragUpdate::Vetoed(rect)) => {
                        status = format!("{rect:?}");
                        Some(rect)
                    }
                    Ok(DragUpdate::Drawn(rect)) => {
                        if rect.is_empty() || any_overlap(&rect, blocks) {
                            status = format!("rejected {rect:?}");
                        } else {
                            status = format!("drew {rect:?}");
                            blocks.push(rect);
                        }
                        None
                    }
                    Ok(DragUpdate::Armed(_) | DragUpdate::Clicked(_) | DragUpdate::Ignored) => {
                        tracker.session().rect()
                    }
                    Err(e) => {
                        status = e.to_string();
                        None
                    }
                };
                redraw(out, tracker.container(), blocks, proxy, &status)?;
            }
            InputEvent::Cancel => {
                tracker.cancel();
                status = String::from("cancelled");
                redraw(out, tracker.container(), blocks, None, &status)?;
            }
            InputEvent::Resize { width, height } => {
                tracker.set_container(container_for(width, height));
                redraw(out, tracker.container(), blocks, tracker.session().rect(), &status)?;
            }
            InputEvent::Error(message) => status = message,
            InputEvent::Quit | InputEvent::Shutdown => break,
        }
    }

    input.join();
    Ok(())
}

fn restore(out: &mut impl Write) -> io::Result<()> {
    let screen = execute!(out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
    let raw = terminal::disable_raw_mode();
    screen.and(raw)
}

fn main() -> io::Result<()> {
    init_logging()?;

    let config = DrawConfig::new()
        .with_padding(Padding::new(1, 2, 1, 2))
        .with_grid(GridSpec::new(8, 2))
        .with_distance(1);

    let (width, height) = terminal::size()?;
    let mut tracker = DragTracker::new(container_for(width, height), config);
    let mut blocks: Vec<Rect> = Vec::new();

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    let result = run(&mut stdout, &mut tracker, &mut blocks);
    let restored = restore(&mut stdout);
    result?;
    restored?;

    println!("Drew {} block(s)", blocks.len());
    Ok(())
}
