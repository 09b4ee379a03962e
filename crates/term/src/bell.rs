//! Audio cue sink: terminal bell, gated by a presentation-owned mute flag.
//!
//! Cues are fire-and-forget; a failed write is silently dropped. The engine
//! never sees the mute state - it emits events unconditionally and this sink
//! decides whether they make a sound.

use std::io::{self, Write};

use tui_pairs_types::GameEvent;

pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Route an engine event to its cue. `Won` is a view transition, not a
    /// sound.
    pub fn handle(&self, event: GameEvent) {
        match event {
            GameEvent::Flip => self.flip(),
            GameEvent::Match => self.matched(),
            GameEvent::TurnSwitch => self.turn_switch(),
            GameEvent::Won => {}
        }
    }

    pub fn flip(&self) {
        self.ring();
    }

    pub fn matched(&self) {
        self.ring();
    }

    pub fn turn_switch(&self) {
        self.ring();
    }

    fn ring(&self) {
        if !self.enabled {
            return;
        }
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new(true)
    }
}
