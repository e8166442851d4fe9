//! Top-level page carousel.
//!
//! The display has two inputs: the click button, handled by the current page,
//! and a page button that cycles the top-level pages:
//!
//! ```text
//! CurrentWeather -> MinMax -> Settings -> CurrentWeather
//! ```
//!
//! A page keeps its container state while another page is shown.

use log::info;

use crate::error::Result;
use crate::pages::{Page, Peripherals};
use crate::power::PowerControl;
use crate::screen::Screen;
use crate::weather::WeatherSnapshot;

/// Number of top-level pages.
pub const PAGE_COUNT: usize = 3;

/// Top-level pages and which one is shown.
#[derive(Debug)]
pub struct Menu {
    pages: [Page; PAGE_COUNT],
    current: usize,
}

impl Menu {
    /// Current weather, min/max forecast and settings, starting on current weather.
    pub fn new() -> Self {
        Self {
            pages: [Page::current_weather(), Page::min_max(), Page::settings()],
            current: 0,
        }
    }

    #[inline]
    pub const fn current_index(&self) -> usize { self.current }

    pub fn current(&self) -> &Page { &self.pages[self.current] }

    pub fn pages(&self) -> &[Page] { &self.pages }

    /// Redraw the current page.
    pub fn update<S, P>(
        &self,
        weather: &WeatherSnapshot,
        peripherals: &mut Peripherals<S, P>,
    ) -> Result<()>
    where
        S: Screen,
        P: PowerControl,
    {
        self.current().update(weather, peripherals)
    }

    /// Forward a click to the current page. There is no parent above the
    /// top level, so a pop from a top-level leaf has no effect.
    pub fn click<S, P>(
        &mut self,
        peripherals: &mut Peripherals<S, P>,
    ) -> Result<()>
    where
        S: Screen,
        P: PowerControl,
    {
        self.pages[self.current].click(peripherals)?;
        Ok(())
    }

    /// Cycle to the next top-level page.
    pub fn next_page(&mut self) {
        self.current = (self.current + 1) % PAGE_COUNT;
        info!("Page: {}", self.current().name());
    }

    /// Forward the selection control to the current page.
    pub fn select_next_child(&mut self) -> bool { self.pages[self.current].select_next_child() }
}

impl Default for Menu {
    fn default() -> Self { Self::new() }
}
