//! App controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::sync::watch;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use super::screen::{AppContext, Screen, ScreenTransition};
use super::screens::{CustomizationScreen, GameScreen, InfoPage, InfoScreen, SettingsScreen};
use crate::session::GameSession;
use crate::settings::{Settings, SettingsStore};

/// How long one loop iteration waits for terminal input.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// The board.
    Game,
    /// Settings menu.
    Settings,
    /// Piece and board style picker.
    Customization,
    /// Rules summary.
    Help,
    /// Credits.
    Credits,
}

/// Active screen in the state machine. The game screen lives on the
/// controller so its cursor survives a trip through the menus.
#[derive(Debug)]
enum ActiveScreen {
    Game,
    Settings(SettingsScreen),
    Customization(CustomizationScreen),
    Info(InfoScreen),
}

/// Controller that drives the screens.
///
/// Call [`AppController::run`] to start the event loop, or feed events
/// through [`AppController::handle_event`] and render with
/// [`AppController::draw`].
#[derive(Debug)]
pub struct AppController {
    ctx: AppContext,
    settings_rx: watch::Receiver<Settings>,
    game: GameScreen,
    screen: ActiveScreen,
}

impl AppController {
    /// Creates a controller showing the game screen.
    #[instrument(skip(session, store))]
    pub fn new(session: GameSession, store: SettingsStore) -> Self {
        info!("Creating AppController");
        let mut settings_rx = store.subscribe();
        let settings = settings_rx.borrow_and_update().clone();
        Self {
            ctx: AppContext {
                session,
                store,
                settings,
            },
            settings_rx,
            game: GameScreen::new(),
            screen: ActiveScreen::Game,
        }
    }

    /// Shared state seen by every screen.
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// The game screen, even while a menu is showing.
    pub fn game_screen(&self) -> &GameScreen {
        &self.game
    }

    /// Which screen is showing.
    pub fn current_screen(&self) -> ScreenKind {
        match &self.screen {
            ActiveScreen::Game => ScreenKind::Game,
            ActiveScreen::Settings(_) => ScreenKind::Settings,
            ActiveScreen::Customization(_) => ScreenKind::Customization,
            ActiveScreen::Info(s) => match s.page() {
                InfoPage::Help => ScreenKind::Help,
                InfoPage::Credits => ScreenKind::Credits,
            },
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            self.refresh();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(INPUT_POLL)? {
                let event = event::read()?;
                if !self.handle_event(event) {
                    info!("Quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies pending timer ticks and picks up settings changes.
    pub fn refresh(&mut self) {
        self.ctx.session.drain_ticks();

        if self.settings_rx.has_changed().unwrap_or(false) {
            self.ctx.settings = self.settings_rx.borrow_and_update().clone();
            debug!(
                dark_mode = self.ctx.settings.dark_mode(),
                piece_style = %self.ctx.settings.piece_style(),
                board_style = %self.ctx.settings.board_style(),
                "Settings updated"
            );
        }
    }

    /// Renders the active screen.
    pub fn draw(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::Game => self.game.render(frame, &self.ctx),
            ActiveScreen::Settings(s) => s.render(frame, &self.ctx),
            ActiveScreen::Customization(s) => s.render(frame, &self.ctx),
            ActiveScreen::Info(s) => s.render(frame, &self.ctx),
        }
    }

    /// Routes one terminal event to the active screen.
    ///
    /// Returns `false` once the user has asked to quit.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event) -> bool {
        let transition = match event {
            // crossterm reports both press and release on some platforms
            Event::Key(key) if key.kind == KeyEventKind::Release => return true,
            Event::Key(key) => match &mut self.screen {
                ActiveScreen::Game => self.game.handle_key(key, &mut self.ctx),
                ActiveScreen::Settings(s) => s.handle_key(key, &mut self.ctx),
                ActiveScreen::Customization(s) => s.handle_key(key, &mut self.ctx),
                ActiveScreen::Info(s) => s.handle_key(key, &mut self.ctx),
            },
            Event::Mouse(mouse) => match &mut self.screen {
                ActiveScreen::Game => self.game.handle_mouse(mouse, &mut self.ctx),
                ActiveScreen::Settings(s) => s.handle_mouse(mouse, &mut self.ctx),
                ActiveScreen::Customization(s) => s.handle_mouse(mouse, &mut self.ctx),
                ActiveScreen::Info(s) => s.handle_mouse(mouse, &mut self.ctx),
            },
            _ => ScreenTransition::Stay,
        };

        let running = self.apply_transition(transition);
        self.refresh();
        running
    }

    /// Applies a screen transition. Returns `false` to quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        debug!(transition = ?transition, "Applying screen transition");
        self.screen = match transition {
            ScreenTransition::Stay => return true,
            ScreenTransition::Quit => return false,
            ScreenTransition::GoToGame => {
                info!("Navigating to Game");
                ActiveScreen::Game
            }
            ScreenTransition::GoToSettings => {
                info!("Navigating to Settings");
                ActiveScreen::Settings(SettingsScreen::new())
            }
            ScreenTransition::GoToCustomization => {
                info!("Navigating to Customization");
                ActiveScreen::Customization(CustomizationScreen::new(&self.ctx))
            }
            ScreenTransition::GoToHelp => {
                info!("Navigating to Help");
                ActiveScreen::Info(InfoScreen::new(InfoPage::Help))
            }
            ScreenTransition::GoToCredits => {
                info!("Navigating to Credits");
                ActiveScreen::Info(InfoScreen::new(InfoPage::Credits))
            }
        };
        true
    }
}
