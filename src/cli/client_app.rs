//! Interactive gesture session for the client user
//!
//! Runs the terminal in raw mode with mouse capture so left-button
//! press/drag/release can stand in for touch input. A dedicated thread
//! feeds crossterm events into the async loop, which multiplexes them
//! with the hold deadline, the message poll, and OS signals.

use std::io::{self, Write};
use std::process::ExitCode;

use async_trait::async_trait;
use colored::Colorize;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use tokio::sync::mpsc;

use crate::application::ports::{Announcer, FeedbackError, FeedbackLevel, FeedbackPanel};
use crate::application::{
    DescribeCallbacks, DescribeSceneUseCase, DictationFlowUseCase, GestureAction, GestureRouter,
    MessagingUseCase, SosUseCase,
};
use crate::domain::clock;
use crate::domain::config::{AppConfig, Interval};
use crate::domain::gesture::{DoubleTapDetector, GestureClassifier, GestureContext, PointerSample};
use crate::domain::session::{Screen, ScreenFlow, UserAccount};
use crate::infrastructure::{
    CommandAnnouncer, DesktopFeedbackPanel, FfmpegFrameSource, FfmpegVoiceRecorder, FixedLocator,
    GeminiSceneDescriber, GeminiTranscriber, JsonMessageStore,
};

use super::app::{build_announcer, require_api_key, EXIT_ERROR, EXIT_SUCCESS};
use super::pointer::{PointerEvent, PointerSurface};
use super::presenter::Presenter;
use super::signals::TerminateSignal;

/// Spoken when the messaging screen opens.
const MESSAGES_ENTRY_ANNOUNCEMENT: &str = "Message interface opened. Swipe gestures are disabled \
    here. Double-click to start recording, double-click again to stop and send your message.";

/// Run the gesture-driven client session until quit or terminated.
pub async fn run_client(account: UserAccount, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (announcer, tool) = match build_announcer(&config).await {
        Ok(pair) => pair,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut terminate = match TerminateSignal::new() {
        Ok(signal) => signal,
        Err(e) => {
            presenter.error(&format!("Failed to install signal handlers: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Feedback from the use cases lands in this channel and is drawn as
    // the overlay line.
    let (feedback_tx, mut feedback_rx) = mpsc::unbounded_channel();

    let voice = config.voice.clone();
    let rate = config.speech_rate_or_default();

    let describe = DescribeSceneUseCase::new(
        FfmpegFrameSource::new(config.camera_device_or_default()),
        GeminiSceneDescriber::new(api_key.clone(), config.model_or_default()),
        CommandAnnouncer::new(tool, voice.clone(), rate),
        SessionFeedback::new(feedback_tx.clone()),
    );

    let messaging = MessagingUseCase::new(
        JsonMessageStore::new(),
        CommandAnnouncer::new(tool, voice.clone(), rate),
        SessionFeedback::new(feedback_tx.clone()),
    );

    let dictation = DictationFlowUseCase::new(
        FfmpegVoiceRecorder::new(),
        GeminiTranscriber::new(api_key.clone(), config.model_or_default()),
        JsonMessageStore::new(),
        CommandAnnouncer::new(tool, voice.clone(), rate),
        SessionFeedback::new(feedback_tx.clone()),
        Interval::default_max_dictation(),
    );

    let sos = SosUseCase::new(
        FixedLocator::from_config(&config),
        JsonMessageStore::new(),
        CommandAnnouncer::new(tool, voice, rate),
        SessionFeedback::new(feedback_tx),
    );

    let mut flow = ScreenFlow::new();
    if let Err(e) = flow.login(account.role) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    let router = GestureRouter::new(account.role);
    let mut classifier = GestureClassifier::new();
    let mut double_tap = DoubleTapDetector::new();
    let surface = PointerSurface::new();
    let mut pending_press: Option<PointerSample> = None;

    let mut view = SessionView::new(account.username.clone());
    let mut poll = tokio::time::interval(config.poll_interval_or_default().as_std());

    let _guard = match RawModeGuard::enter() {
        Ok(guard) => guard,
        Err(e) => {
            presenter.error(&format!("Failed to initialize terminal: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let mut stdout = io::stdout();
    let mut events = spawn_input_thread();

    view.screen = flow.current();
    let _ = view.render(&mut stdout);

    let welcome = format!(
        "Welcome {}. Swipe up to send message, swipe down to read the last message from admin.",
        account.username
    );
    let _ = announcer.announce(&welcome).await;

    let code = loop {
        let hold_deadline = classifier.hold_deadline_ms();
        let mut exit: Option<u8> = None;

        tokio::select! {
            maybe_event = events.recv() => {
                match maybe_event {
                    Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if is_quit(&key) {
                            exit = Some(EXIT_SUCCESS);
                        } else if key.code == KeyCode::Esc {
                            if flow.messaging_active() {
                                dictation.reset().await;
                                double_tap.reset();
                                if flow.close_messages().is_ok() {
                                    let line = "Returning to main screen";
                                    view.set_overlay(line, FeedbackLevel::Info);
                                    let _ = announcer.announce(line).await;
                                }
                            } else if flow.sos_active() {
                                match sos.cancel().await {
                                    Ok(()) => {
                                        let _ = flow.leave_sos();
                                    }
                                    Err(_) => {
                                        let line = "Could not cancel SOS. Please try again.";
                                        view.set_overlay(line, FeedbackLevel::Alert);
                                        let _ = announcer.announce(line).await;
                                    }
                                }
                            }
                        }
                    }
                    Some(Event::Mouse(mouse)) => {
                        let ctx = GestureContext::new(flow.messaging_active());
                        match surface.map_event(&mouse) {
                            Some(PointerEvent::Down(sample)) => {
                                pending_press = Some(sample);
                                classifier.pointer_down(ctx, sample);
                            }
                            Some(PointerEvent::Move(sample)) => {
                                classifier.pointer_move(ctx, sample);
                            }
                            Some(PointerEvent::Up(sample)) => {
                                let press = pending_press.take();
                                if flow.messaging_active() {
                                    if let Some(press) = press {
                                        if double_tap.register_tap(press, sample) {
                                            let _ = dictation.toggle().await;
                                        }
                                    }
                                } else if let Some(classification) =
                                    classifier.pointer_up(ctx, sample)
                                {
                                    if let Some(line) = classification.feedback {
                                        view.set_overlay(line, FeedbackLevel::Info);
                                    } else if let Some(routed) =
                                        router.route(flow.current(), classification.outcome)
                                    {
                                        match routed.action {
                                            GestureAction::DescribeScene => {
                                                if let Some(notice) = routed.notice {
                                                    view.set_overlay(notice, FeedbackLevel::Info);
                                                }
                                                let _ = view.render(&mut stdout);
                                                let result = describe
                                                    .execute(DescribeCallbacks::default())
                                                    .await;
                                                if let Ok(output) = result {
                                                    view.description = Some(output.description);
                                                }
                                            }
                                            GestureAction::AnnounceDateTime => {
                                                let line = format!(
                                                    "Current time and date: {}",
                                                    clock::spoken_now()
                                                );
                                                view.set_overlay(line.clone(), FeedbackLevel::Info);
                                                let _ = announcer.announce(&line).await;
                                            }
                                            GestureAction::OpenMessages => {
                                                if flow.open_messages().is_ok() {
                                                    if let Some(notice) = routed.notice {
                                                        view.set_overlay(
                                                            notice,
                                                            FeedbackLevel::Info,
                                                        );
                                                    }
                                                    double_tap.reset();
                                                    dictation.reset().await;
                                                    let _ = announcer
                                                        .announce(MESSAGES_ENTRY_ANNOUNCEMENT)
                                                        .await;
                                                }
                                            }
                                            GestureAction::ReadLastAdminMessage => {
                                                if let Some(notice) = routed.notice {
                                                    view.set_overlay(notice, FeedbackLevel::Info);
                                                }
                                                let _ = view.render(&mut stdout);
                                                if messaging.read_last_admin().await.is_err() {
                                                    let line =
                                                        "Could not read messages. Please try again.";
                                                    view.set_overlay(line, FeedbackLevel::Alert);
                                                    let _ = announcer.announce(line).await;
                                                }
                                            }
                                            GestureAction::ActivateSos => {
                                                if let Some(notice) = routed.notice {
                                                    view.set_overlay(notice, FeedbackLevel::Alert);
                                                }
                                                match sos.activate().await {
                                                    Ok(_) => {
                                                        let _ = flow.enter_sos();
                                                    }
                                                    Err(_) => {
                                                        let line = "Could not send SOS message. \
                                                            Please try again.";
                                                        view.set_overlay(
                                                            line,
                                                            FeedbackLevel::Alert,
                                                        );
                                                        let _ = announcer.announce(line).await;
                                                    }
                                                }
                                            }
                                            GestureAction::CancelSos => {
                                                match sos.cancel().await {
                                                    Ok(()) => {
                                                        let _ = flow.leave_sos();
                                                    }
                                                    Err(_) => {
                                                        let line = "Could not cancel SOS. \
                                                            Please try again.";
                                                        view.set_overlay(
                                                            line,
                                                            FeedbackLevel::Alert,
                                                        );
                                                        let _ = announcer.announce(line).await;
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            None => {}
                        }
                    }
                    Some(_) => {}
                    None => exit = Some(EXIT_ERROR),
                }
            }
            _ = hold_deadline_sleep(&surface, hold_deadline) => {
                let ctx = GestureContext::new(flow.messaging_active());
                if let Some(notice) = classifier.hold_elapsed(ctx, surface.now_ms()) {
                    view.set_overlay(notice, FeedbackLevel::Info);
                    let _ = announcer.announce(notice).await;
                }
            }
            maybe_feedback = feedback_rx.recv() => {
                if let Some((message, level)) = maybe_feedback {
                    view.set_overlay(message, level);
                }
            }
            _ = poll.tick() => {
                let _ = messaging.announce_new_admin_messages().await;
                if flow.messaging_active() {
                    let _ = dictation.enforce_time_limit().await;
                }
            }
            _ = terminate.recv() => {
                exit = Some(EXIT_SUCCESS);
            }
        }

        if let Some(code) = exit {
            break code;
        }

        view.screen = flow.current();
        view.recording = dictation.is_recording();
        let _ = view.render(&mut stdout);
    };

    ExitCode::from(code)
}

/// Feedback panel that drives the session overlay and mirrors each
/// message to desktop notifications for a sighted helper nearby.
struct SessionFeedback {
    overlay: mpsc::UnboundedSender<(String, FeedbackLevel)>,
    desktop: DesktopFeedbackPanel,
}

impl SessionFeedback {
    fn new(overlay: mpsc::UnboundedSender<(String, FeedbackLevel)>) -> Self {
        Self {
            overlay,
            desktop: DesktopFeedbackPanel::new(),
        }
    }
}

#[async_trait]
impl FeedbackPanel for SessionFeedback {
    async fn show(&self, message: &str, level: FeedbackLevel) -> Result<(), FeedbackError> {
        let _ = self.overlay.send((message.to_string(), level));
        // The desktop mirror is best-effort.
        let _ = self.desktop.show(message, level).await;
        Ok(())
    }
}

/// Restores cooked mode and the main screen on every exit path.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Forward blocking terminal reads into the async loop.
///
/// The thread parks in `event::read()`; it exits once the receiver is
/// dropped and one further event arrives.
fn spawn_input_thread() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
    rx
}

/// Sleep until a pending hold deadline; pend forever when none is armed.
async fn hold_deadline_sleep(surface: &PointerSurface, deadline_ms: Option<u64>) {
    match deadline_ms {
        Some(deadline) => tokio::time::sleep(surface.until(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// What the session currently shows
struct SessionView {
    username: String,
    screen: Screen,
    overlay: Option<(String, FeedbackLevel)>,
    description: Option<String>,
    recording: bool,
}

impl SessionView {
    fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            screen: Screen::Main,
            overlay: None,
            description: None,
            recording: false,
        }
    }

    fn set_overlay(&mut self, message: impl Into<String>, level: FeedbackLevel) {
        self.overlay = Some((message.into(), level));
    }

    /// Redraw the whole alternate screen.
    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let (columns, rows) = terminal::size().unwrap_or((80, 24));
        let width = columns.max(20) as usize;

        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        queue!(
            out,
            Print(format!("Vision Voice - {}", self.username).bold())
        )?;

        match self.screen {
            Screen::Messages => self.render_messages(out)?,
            Screen::Sos => self.render_sos(out)?,
            _ => self.render_main(out, width, rows)?,
        }

        if let Some((message, level)) = &self.overlay {
            let line = match level {
                FeedbackLevel::Info => message.as_str().cyan(),
                FeedbackLevel::Alert => message.as_str().red().bold(),
            };
            queue!(out, cursor::MoveTo(0, rows.saturating_sub(2)), Print(line))?;
        }

        out.flush()
    }

    fn render_main(&self, out: &mut impl Write, width: usize, rows: u16) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 2), Print("Main screen"))?;
        queue!(
            out,
            cursor::MoveTo(0, 4),
            Print("Swipe left: describe surroundings   Swipe right: time and date")
        )?;
        queue!(
            out,
            cursor::MoveTo(0, 5),
            Print("Swipe up: send a message   Swipe down: last admin message")
        )?;
        queue!(
            out,
            cursor::MoveTo(0, 6),
            Print("Hold one second: SOS   q: quit")
        )?;

        if let Some(description) = &self.description {
            queue!(out, cursor::MoveTo(0, 8), Print("Around you:".bold()))?;
            let mut row: u16 = 9;
            for line in wrap_text(description, width) {
                if row >= rows.saturating_sub(3) {
                    break;
                }
                queue!(out, cursor::MoveTo(0, row), Print(line))?;
                row = row.saturating_add(1);
            }
        }

        Ok(())
    }

    fn render_messages(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 2), Print("Messages".bold()))?;
        queue!(
            out,
            cursor::MoveTo(0, 4),
            Print("Double-click to start recording, double-click again to stop and send.")
        )?;
        queue!(
            out,
            cursor::MoveTo(0, 5),
            Print("Esc: back to the main screen")
        )?;
        if self.recording {
            queue!(
                out,
                cursor::MoveTo(0, 7),
                Print("● Recording...".red().bold())
            )?;
        }
        Ok(())
    }

    fn render_sos(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 2), Print("SOS ACTIVE".red().bold()))?;
        queue!(
            out,
            cursor::MoveTo(0, 4),
            Print("Hold one second or press Esc to cancel.")
        )?;
        Ok(())
    }
}

/// Greedy word wrap; words longer than the width get a line of their own.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}
