//! Keyboard commands
//!
//! Key handlers never touch the world directly. They queue commands, and the
//! frame drains the queue at a single fixed point.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// `a`/`d`/`w`/`s`; every other key is ignored
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" => Some(Direction::Left),
            "d" => Some(Direction::Right),
            "w" => Some(Direction::Up),
            "s" => Some(Direction::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// One discrete hunter step
    Move(Direction),
}

/// FIFO of commands waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Queue the command for a key-down event. Returns false for unmapped keys.
    pub fn push_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.push(Command::Move(dir));
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending command in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}
