// SPDX-FileCopyrightText: 2026 peli contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-threaded frame loop shared by both demos.

use log::{debug, info, warn};
use sdl2::keyboard::Keycode;

use crate::error::GfxError;

/// Inputs the demos react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    Other,
}

/// Running flag. Goes false on quit and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    running: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self { running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application context driven by [`run`].
pub trait App {
    /// Drain every pending input event without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// React to a non-quit event.
    fn handle_event(&mut self, _event: &InputEvent) {}

    /// Draw and present the current state.
    fn draw_frame(&mut self) -> Result<(), GfxError>;
}

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub events: u64,
    pub draw_errors: u64,
}

/// Poll, update and draw until a quit event arrives.
///
/// The frame following the batch that contained the quit event is still
/// drawn. Draw failures are logged and the loop keeps going.
pub fn run<A: App + ?Sized>(app: &mut A) -> RunStats {
    let mut state = RunState::new();
    let mut stats = RunStats::default();

    while state.is_running() {
        for event in app.poll_events() {
            stats.events += 1;
            match event {
                InputEvent::Quit => {
                    debug!("Quit requested");
                    state.stop();
                }
                other => app.handle_event(&other),
            }
        }

        if let Err(e) = app.draw_frame() {
            stats.draw_errors += 1;
            if stats.draw_errors == 1 {
                warn!("{}", e);
            } else {
                debug!("{}", e);
            }
        }
        stats.frames += 1;
    }

    info!(
        "Run loop finished: {} frames, {} events, {} draw errors",
        stats.frames, stats.events, stats.draw_errors
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        batches: VecDeque<Vec<InputEvent>>,
        handled: Vec<InputEvent>,
        frames: u64,
        fail_draws: bool,
    }

    impl Scripted {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                batches: batches.into(),
                handled: Vec::new(),
                frames: 0,
                fail_draws: false,
            }
        }
    }

    impl App for Scripted {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.batches.pop_front().unwrap_or_default()
        }

        fn handle_event(&mut self, event: &InputEvent) {
            self.handled.push(*event);
        }

        fn draw_frame(&mut self) -> Result<(), GfxError> {
            self.frames += 1;
            if self.fail_draws {
                return Err(GfxError::Draw("surface lost".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_quit_only_draws_one_frame() {
        let mut app = Scripted::new(vec![vec![InputEvent::Quit]]);
        let stats = run(&mut app);
        assert_eq!(stats.frames, 1);
        assert_eq!(app.frames, 1);
        assert!(app.handled.is_empty());
    }

    #[test]
    fn test_empty_batches_keep_running() {
        let mut app = Scripted::new(vec![vec![], vec![], vec![InputEvent::Quit]]);
        let stats = run(&mut app);
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.events, 1);
    }

    #[test]
    fn test_events_after_quit_in_same_batch_still_handled() {
        let key = InputEvent::KeyDown(Keycode::RShift);
        let mut app = Scripted::new(vec![vec![key, InputEvent::Quit, key]]);
        run(&mut app);
        assert_eq!(app.handled, vec![key, key]);
    }

    #[test]
    fn test_draw_errors_do_not_stop_loop() {
        let mut app = Scripted::new(vec![vec![], vec![InputEvent::Quit]]);
        app.fail_draws = true;
        let stats = run(&mut app);
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.draw_errors, 2);
    }

    #[test]
    fn test_run_state_never_resets() {
        let mut state = RunState::new();
        assert!(state.is_running());
        state.stop();
        state.stop();
        assert!(!state.is_running());
    }
}
