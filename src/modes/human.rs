use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputRouter, RouterAction, SwipeTracker};
use crate::render::Renderer;
use crate::score::{HighScoreStore, SessionStats};

/// Interactive game session.
///
/// One tokio task owns every piece of mutable state; input events only
/// ever write the single pending-direction slot, which the next tick
/// consumes. The latest request before a tick boundary wins.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    router: InputRouter,
    swipe: SwipeTracker,
    renderer: Renderer,
    stats: SessionStats,
    high_score: HighScoreStore,
    pending_direction: Option<Direction>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, high_score: HighScoreStore) -> Self {
        let swipe = SwipeTracker::new(config.swipe_threshold);
        let mut engine = GameEngine::new(config);
        let state = engine.idle();

        Self {
            engine,
            state,
            router: InputRouter::new(),
            swipe,
            renderer: Renderer::new(),
            stats: SessionStats::new(),
            high_score,
            pending_direction: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_loop(&mut terminal).await;

        self.restore_terminal(&mut terminal)?;
        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut events = EventStream::new();

        let mut tick_timer = interval(Duration::from_millis(self.engine.config().tick_ms));

        // Redraw faster than the simulation so the clock stays smooth
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Terminal input
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.advance();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats, self.high_score.best());
                    }).context("failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            // Key press only, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.router.route_key(key, self.state.phase);
                self.apply(action);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.release(mouse.column, mouse.row) {
                    let action = self.router.route_swipe(direction, self.state.phase);
                    self.apply(action);
                } else if let Some(button) = self.renderer.pad().hit(mouse.column, mouse.row) {
                    let action = self.router.route_button(button, self.state.phase);
                    self.apply(action);
                } else if self.renderer.board_contains(mouse.column, mouse.row) {
                    let action = self.router.route_board_click(self.state.phase);
                    self.apply(action);
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, action: RouterAction) {
        match action {
            RouterAction::Steer(direction) => {
                // Single slot: the latest request before the tick wins
                self.pending_direction = Some(direction);
            }
            RouterAction::Start => self.start_game(),
            RouterAction::Quit => self.should_quit = true,
            RouterAction::Ignored => {}
        }
    }

    /// Begin a fresh game. Guarded: a game that is already running keeps
    /// its state and its tick cadence.
    fn start_game(&mut self) {
        if self.state.is_running() {
            return;
        }

        self.state = self.engine.reset();
        self.pending_direction = None;
        self.stats.on_game_start();
        info!("game started");
    }

    /// One simulation step; does nothing unless a game is running
    fn advance(&mut self) {
        if !self.state.is_running() {
            return;
        }

        let requested = self.pending_direction.take();
        let outcome = self.engine.tick(&mut self.state, requested);

        if outcome.game_over {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let final_score = self.state.score;
        self.stats.on_game_over();
        info!("game over with score {final_score}");

        match self.high_score.record(final_score) {
            Ok(true) => info!("new high score {final_score}"),
            Ok(false) => {}
            Err(err) => error!("failed to persist high score: {err:#}"),
        }
    }

    fn restore_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
