//! MAIN/SUB state machine shared by container pages.
//!
//! ```text
//!            click (has children)
//!   ┌──────┐ ───────────────────> ┌────────┐
//!   │ Main │                      │ Sub(i) │ ── select_next ──> Sub((i+1) % n)
//!   └──────┘ <─────────────────── └────────┘
//!            child click -> Pop
//! ```

use log::debug;

use super::{Navigation, Page, Peripherals};
use crate::error::Result;
use crate::power::PowerControl;
use crate::screen::Screen;

/// Whether a container shows itself or one of its children.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ContainerState {
    /// The container's own view.
    #[default]
    Main,
    /// Child at this index is active. Always a valid index.
    Sub(usize),
}

/// Fixed list of child pages plus the navigation state.
#[derive(Debug)]
pub struct Container {
    children: Vec<Page>,
    state: ContainerState,
}

impl Container {
    pub fn new(children: Vec<Page>) -> Self {
        Self {
            children,
            state: ContainerState::Main,
        }
    }

    #[inline]
    pub const fn state(&self) -> ContainerState { self.state }

    /// Index of the active child, `None` in [`ContainerState::Main`].
    #[inline]
    pub const fn active_index(&self) -> Option<usize> {
        match self.state {
            ContainerState::Main => None,
            ContainerState::Sub(index) => Some(index),
        }
    }

    pub fn active_child(&self) -> Option<&Page> { self.active_index().and_then(|i| self.children.get(i)) }

    /// Click on the container: open the first child from MAIN, otherwise
    /// forward to the active child and return to MAIN when it pops.
    pub fn click<S, P>(
        &mut self,
        peripherals: &mut Peripherals<S, P>,
    ) -> Result<()>
    where
        S: Screen,
        P: PowerControl,
    {
        match self.state {
            ContainerState::Main => {
                if let Some(first) = self.children.first() {
                    debug!("Opening {}", first.name());
                    self.state = ContainerState::Sub(0);
                }
            }
            ContainerState::Sub(index) => {
                let Some(child) = self.children.get_mut(index) else {
                    self.state = ContainerState::Main;
                    return Ok(());
                };
                if child.click(peripherals)? == Navigation::Pop {
                    debug!("Closing {}", child.name());
                    self.state = ContainerState::Main;
                }
            }
        }
        Ok(())
    }

    /// Move to the next child (wrapping). No effect in MAIN.
    ///
    /// Returns true if the selection moved.
    pub fn select_next(&mut self) -> bool {
        match self.state {
            ContainerState::Main => false,
            ContainerState::Sub(index) => {
                self.state = ContainerState::Sub((index + 1) % self.children.len());
                true
            }
        }
    }
}
