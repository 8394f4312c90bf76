//! Engine module - lifecycle of the puzzle on a Display Surface
//!
//! ```text
//!   Idle --start--> Running --spawn blocked--> GameOver
//!    ^                 |                          |
//!    +------stop-------+-----------stop-----------+
//! ```
//!
//! The phase is a single enum that owns the session and the attached
//! surface, so there is no way to be running without a surface, or to
//! mutate a finished grid. The host calls [`PuzzleEngine::tick`] from its
//! loop with the elapsed time and forwards player intents through
//! [`PuzzleEngine::handle_input`] on the same thread.

use std::mem;

use log::{debug, info, warn};

use crate::error::StartError;
use crate::rng::PieceSource;
use crate::session::{Session, Step};
use crate::snapshot::FrameSnapshot;
use crate::surface::{DisplaySurface, MountPoint, SurfaceSize};
use crate::types::{Intent, DROP_INTERVAL_MS};

/// Externally visible engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    Idle,
    Running,
    GameOver,
}

impl EngineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Idle => "idle",
            EngineState::Running => "running",
            EngineState::GameOver => "gameOver",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Time budget between forced descents
    pub drop_interval_ms: u32,
    /// Replayable piece sequence; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: None,
        }
    }
}

struct Mounted {
    session: Session,
    surface: Box<dyn DisplaySurface>,
    frame: FrameSnapshot,
}

impl Mounted {
    fn draw(&mut self) {
        self.session.snapshot_into(&mut self.frame);
        self.surface.draw(&self.frame);
    }

    fn show_game_over(&mut self) {
        self.session.snapshot_into(&mut self.frame);
        self.frame.game_over = true;
        self.surface.show_game_over(&self.frame);
    }
}

enum Phase {
    Idle,
    Running(Mounted),
    GameOver(Mounted),
}

pub struct PuzzleEngine {
    config: EngineConfig,
    phase: Phase,
    /// Number of sessions started; seeds later sessions differently.
    sessions: u64,
}

impl PuzzleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            sessions: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::Idle => EngineState::Idle,
            Phase::Running(_) => EngineState::Running,
            Phase::GameOver(_) => EngineState::GameOver,
        }
    }

    /// True only while a session accepts input and ticks
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// Current session, running or finished
    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Running(m) | Phase::GameOver(m) => Some(&m.session),
        }
    }

    pub fn score(&self) -> Option<u32> {
        self.session().map(Session::score)
    }

    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        let mut frame = self.session()?.snapshot();
        frame.game_over = self.state() == EngineState::GameOver;
        Some(frame)
    }

    /// Attach a surface to `mount` and begin a fresh session.
    ///
    /// An existing session is stopped first. If no surface can be attached
    /// the engine stays idle and the error is returned to the caller.
    pub fn start(&mut self, mount: &mut dyn MountPoint) -> Result<(), StartError> {
        self.stop();

        let surface = mount.attach(SurfaceSize::BOARD).map_err(|err| {
            warn!("puzzle refused to start: {}", err);
            StartError::from(err)
        })?;

        let seed = self.config.seed.map(|s| s.wrapping_add(self.sessions));
        self.sessions += 1;

        let session = Session::new(self.config.drop_interval_ms, PieceSource::new(seed));
        let blocked = session.is_active_blocked();
        let mut mounted = Mounted {
            session,
            surface,
            frame: FrameSnapshot::default(),
        };

        info!(
            "puzzle session started (drop interval {} ms)",
            self.config.drop_interval_ms
        );

        if blocked {
            self.enter_game_over(mounted);
        } else {
            mounted.draw();
            self.phase = Phase::Running(mounted);
        }
        Ok(())
    }

    /// Halt ticking and release the surface. No-op when idle.
    pub fn stop(&mut self) {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Running(mut m) | Phase::GameOver(mut m) => {
                m.surface.release();
                info!("puzzle stopped with score {}", m.session.score());
            }
        }
    }

    /// Apply one player intent. Ignored unless running.
    pub fn handle_input(&mut self, intent: Intent) -> Option<Step> {
        let state = self.state();
        let Phase::Running(m) = &mut self.phase else {
            debug!("ignoring {} while {}", intent.as_str(), state.as_str());
            return None;
        };

        let step = m.session.apply(intent);
        if step.is_spawn_blocked() {
            self.finish();
        } else if step != Step::Blocked {
            m.draw();
        }
        Some(step)
    }

    /// Advance the drop clock by `elapsed_ms` and redraw.
    ///
    /// Returns the forced-descent outcome when one happened. After a
    /// spawn-blocked settle the engine is in game over and further ticks do
    /// nothing.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Step> {
        let Phase::Running(m) = &mut self.phase else {
            return None;
        };

        let step = m.session.advance(elapsed_ms);
        if step.is_some_and(|s| s.is_spawn_blocked()) {
            self.finish();
        } else {
            m.draw();
        }
        step
    }

    fn finish(&mut self) {
        if let Phase::Running(m) = mem::replace(&mut self.phase, Phase::Idle) {
            self.enter_game_over(m);
        }
    }

    fn enter_game_over(&mut self, mut m: Mounted) {
        info!("game over with score {}", m.session.score());
        m.show_game_over();
        self.phase = Phase::GameOver(m);
    }

    #[cfg(test)]
    fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.phase {
            Phase::Idle => None,
            Phase::Running(m) | Phase::GameOver(m) => Some(&mut m.session),
        }
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
