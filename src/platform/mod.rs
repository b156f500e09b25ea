//! Platform abstraction layer
//!
//! Input arrives as one [`TickInput`] per simulation frame. A windowed
//! frontend would translate key state into it; headless runs use the
//! sources below.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Per-frame input provider
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed list of inputs, then requests quit
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames left before the script quits
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.frames.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

/// Demo mode for a fixed number of frames, then quit
#[derive(Debug, Clone)]
pub struct Autopilot {
    frames_left: u64,
}

impl Autopilot {
    pub fn new(frame_limit: u64) -> Self {
        Self {
            frames_left: frame_limit,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> TickInput {
        if self.frames_left == 0 {
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }
        self.frames_left -= 1;
        TickInput {
            autopilot: true,
            ..Default::default()
        }
    }
}
