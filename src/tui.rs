//! Terminal handling.
//!
//! [`Tui`] owns the crossterm terminal and a background task that merges
//! terminal input with tick and render timers into one [`Event`] channel.
//! [`TestTui`] draws into memory so tests can drive the whole [`App`](crate::app::App).

use std::{
    io::{Stderr, stderr},
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::{Result, eyre};
use crossterm::execute;
use futures::{FutureExt, StreamExt};
use ratatui::{
    Frame, Terminal,
    backend::{CrosstermBackend, TestBackend},
    crossterm::{
        cursor,
        event::{
            DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
            Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent,
        },
        terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    },
};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

#[derive(Clone, Debug)]
pub enum Event {
    /// The terminal event stream failed
    Error,
    Tick,
    /// Time to draw a frame, also sent when the terminal is resized
    Render,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Map a crossterm event to an app event. Key releases and focus changes are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
        CrosstermEvent::Resize(_, _) => Some(Event::Render),
        _ => None,
    }
}

/// Leave raw mode and the alternate screen if the terminal is still in them.
///
/// Safe to call more than once; the panic hook calls it as well.
pub fn restore() -> Result<()> {
    if !terminal::is_raw_mode_enabled()? {
        return Ok(());
    }
    execute!(
        stderr(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    )?;
    terminal::disable_raw_mode()?;
    Ok(())
}

async fn read_events(
    tx: UnboundedSender<Event>,
    cancellation_token: CancellationToken,
    tick_delay: Duration,
    render_delay: Duration,
) {
    let mut reader = EventStream::new();
    let mut ticks = tokio::time::interval(tick_delay);
    let mut frames = tokio::time::interval(render_delay);
    loop {
        let event = tokio::select! {
            _ = cancellation_token.cancelled() => break,
            _ = ticks.tick() => Event::Tick,
            _ = frames.tick() => Event::Render,
            read = reader.next().fuse() => match read {
                Some(Ok(event)) => match translate(event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    warn!("Error reading terminal events: {}", e);
                    Event::Error
                }
                None => break,
            },
        };
        if tx.send(event).is_err() {
            error!("Event receiver dropped while the event task is running");
            break;
        }
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
    /// Capture mouse events (button hover and click)
    mouse: bool,
    /// Bracketed paste
    paste: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stderr()))?,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate: 60.0,
            tick_rate: 4.0,
            mouse: false,
            paste: false,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = paste;
        self
    }

    fn start(&mut self) {
        self.stop();
        self.cancellation_token = CancellationToken::new();
        self.task = Some(tokio::spawn(read_events(
            self.event_tx.clone(),
            self.cancellation_token.clone(),
            Duration::from_secs_f64(1.0 / self.tick_rate),
            Duration::from_secs_f64(1.0 / self.frame_rate),
        )));
    }

    /// Cancel the event task, aborting it after 50ms
    fn stop(&mut self) {
        self.cancellation_token.cancel();
        let Some(task) = self.task.take() else {
            return;
        };
        for _ in 0..50 {
            if task.is_finished() {
                return;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        warn!("Event task did not stop in time, aborting it");
        task.abort();
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stderr(), EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            execute!(stderr(), EnableMouseCapture)?;
        }
        if self.paste {
            execute!(stderr(), EnableBracketedPaste)?;
        }
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stop();
        self.terminal.flush()?;
        restore()
    }

    /// Leave the terminal and stop the process (SIGTSTP, unix only)
    pub fn suspend(&mut self) -> Result<()> {
        self.exit()?;
        #[cfg(not(windows))]
        signal_hook::low_level::raise(signal_hook::consts::signal::SIGTSTP)?;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        self.enter()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub async fn next(&mut self) -> Result<Event> {
        self.event_rx
            .recv()
            .await
            .ok_or_else(|| eyre!("Terminal event channel closed"))
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!("Unable to exit terminal: {:?}", e);
        }
    }
}

/// In-memory terminal for tests
pub struct TestTui {
    terminal: Terminal<TestBackend>,
}

#[cfg(test)]
impl TestTui {
    pub fn new() -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(80, 25)).unwrap(),
        }
    }
}

impl Deref for TestTui {
    type Target = Terminal<TestBackend>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TestTui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

/// The terminal the [`App`](crate::app::App) draws on
pub enum TuiEnum {
    Crossterm(Tui),
    Test(TestTui),
}

impl From<Tui> for TuiEnum {
    fn from(tui: Tui) -> Self {
        TuiEnum::Crossterm(tui)
    }
}
impl From<TestTui> for TuiEnum {
    fn from(tui: TestTui) -> Self {
        TuiEnum::Test(tui)
    }
}

impl TuiEnum {
    fn crossterm(&mut self) -> Option<&mut Tui> {
        match self {
            TuiEnum::Crossterm(tui) => Some(tui),
            TuiEnum::Test(_) => None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.crossterm().map_or(Ok(()), Tui::enter)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.crossterm().map_or(Ok(()), Tui::exit)
    }

    pub fn suspend(&mut self) -> Result<()> {
        self.crossterm().map_or(Ok(()), Tui::suspend)
    }

    pub fn resume(&mut self) -> Result<()> {
        self.crossterm().map_or(Ok(()), Tui::resume)
    }

    /// The test terminal produces an endless stream of ticks
    pub async fn next(&mut self) -> Result<Event> {
        match self {
            TuiEnum::Crossterm(tui) => tui.next().await,
            TuiEnum::Test(_) => Ok(Event::Tick),
        }
    }

    pub fn draw(&mut self, f: impl FnOnce(&mut Frame)) -> Result<()> {
        match self {
            TuiEnum::Crossterm(tui) => {
                tui.terminal.draw(f)?;
            }
            TuiEnum::Test(tui) => {
                tui.terminal.draw(f)?;
            }
        }
        Ok(())
    }
}
