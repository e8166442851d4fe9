//! Page tree of the weather display.
//!
//! Pages form a shallow tree: three top-level pages, two of which are
//! containers with leaf children.
//!
//! ```text
//! CurrentWeather
//! MinMax ──────── MinMaxHours
//! Settings ─┬──── Shutdown
//!           ├──── Reboot
//!           └──── Back
//! ```
//!
//! `update` redraws whichever page is active; `click` is handled by the active
//! page. A clicked leaf answers with a [`Navigation`] directive, and a container
//! returns to its own view when its active child answers [`Navigation::Pop`].

mod container;
mod current_weather;
mod min_max;
mod settings;

use std::time::Duration;

pub use container::{Container, ContainerState};
use log::info;

use crate::config::LOADING_STEP;
use crate::error::Result;
use crate::icons::IconStore;
use crate::power::{PowerAction, PowerControl};
use crate::screen::Screen;
use crate::weather::WeatherSnapshot;

/// What a clicked page asks of its parent container.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Navigation {
    /// Keep this page active.
    Stay,
    /// Return the parent container to its own view.
    Pop,
}

/// Everything a page needs to draw and act, owned by the driver.
pub struct Peripherals<S, P> {
    pub screen: S,
    pub power: P,
    pub icons: IconStore,
    loading_step: Duration,
}

impl<S, P> Peripherals<S, P>
where
    S: Screen,
    P: PowerControl,
{
    pub fn new(
        screen: S,
        power: P,
        icons: IconStore,
    ) -> Self {
        Self {
            screen,
            power,
            icons,
            loading_step: LOADING_STEP,
        }
    }

    /// Override the pause between loading animation frames.
    #[must_use]
    pub fn with_loading_step(
        mut self,
        step: Duration,
    ) -> Self {
        self.loading_step = step;
        self
    }

    #[inline]
    pub const fn loading_step(&self) -> Duration { self.loading_step }
}

/// A page of the menu.
#[derive(Debug)]
pub enum Page {
    /// Outside/inside temperature and the current weather icon.
    CurrentWeather,
    /// Today's forecast minimum and maximum. Child: [`Page::MinMaxHours`].
    MinMax(Container),
    /// Times of today's forecast minimum and maximum.
    MinMaxHours,
    /// Cogwheel. Children: [`Page::Shutdown`], [`Page::Reboot`], [`Page::Back`].
    Settings(Container),
    Shutdown,
    Reboot,
    /// Leaves the settings menu.
    Back,
}

impl Page {
    pub const fn current_weather() -> Self { Self::CurrentWeather }

    pub fn min_max() -> Self { Self::MinMax(Container::new(vec![Self::MinMaxHours])) }

    pub fn settings() -> Self { Self::Settings(Container::new(vec![Self::Shutdown, Self::Reboot, Self::Back])) }

    /// Page name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentWeather => "CurrentWeather",
            Self::MinMax(_) => "MinMax",
            Self::MinMaxHours => "MinMaxHours",
            Self::Settings(_) => "Settings",
            Self::Shutdown => "Shutdown",
            Self::Reboot => "Reboot",
            Self::Back => "Back",
        }
    }

    /// Child pages and navigation state, for container pages.
    pub const fn container(&self) -> Option<&Container> {
        match self {
            Self::MinMax(container) | Self::Settings(container) => Some(container),
            _ => None,
        }
    }

    pub fn container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Self::MinMax(container) | Self::Settings(container) => Some(container),
            _ => None,
        }
    }

    /// Redraw the active page with current data.
    pub fn update<S, P>(
        &self,
        weather: &WeatherSnapshot,
        peripherals: &mut Peripherals<S, P>,
    ) -> Result<()>
    where
        S: Screen,
        P: PowerControl,
    {
        match self {
            Self::CurrentWeather => current_weather::update(weather, peripherals),
            Self::MinMax(container) => match container.active_child() {
                Some(child) => child.update(weather, peripherals),
                None => min_max::update_extrema(weather, &mut peripherals.screen),
            },
            Self::MinMaxHours => min_max::update_hours(weather, &mut peripherals.screen),
            Self::Settings(container) => match container.active_child() {
                Some(child) => child.update(weather, peripherals),
                None => settings::update_cog(peripherals),
            },
            Self::Shutdown => peripherals.screen.display_text(PowerAction::Shutdown.label()),
            Self::Reboot => peripherals.screen.display_text(PowerAction::Reboot.label()),
            Self::Back => peripherals.screen.display_text(settings::BACK_LABEL),
        }
    }

    /// Handle a press of the click button.
    pub fn click<S, P>(
        &mut self,
        peripherals: &mut Peripherals<S, P>,
    ) -> Result<Navigation>
    where
        S: Screen,
        P: PowerControl,
    {
        match self {
            Self::MinMax(container) | Self::Settings(container) => {
                container.click(peripherals)?;
                Ok(Navigation::Stay)
            }
            Self::CurrentWeather => {
                info!("CurrentWeather clicked");
                Ok(Navigation::Stay)
            }
            Self::MinMaxHours => {
                info!("MinMaxHours clicked");
                Ok(Navigation::Pop)
            }
            Self::Shutdown => settings::power_click(PowerAction::Shutdown, peripherals),
            Self::Reboot => settings::power_click(PowerAction::Reboot, peripherals),
            Self::Back => {
                info!("Back clicked");
                Ok(Navigation::Pop)
            }
        }
    }

    /// Handle the selection control: move to the next child of an open container.
    ///
    /// Returns true if the selection moved.
    pub fn select_next_child(&mut self) -> bool { self.container_mut().is_some_and(Container::select_next) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BrokenScreen, icon_dir, peripherals};
    use crate::{DryRunPower, Error};

    #[test]
    fn test_containers_start_in_main() {
        for page in [Page::min_max(), Page::settings()] {
            let container = page.container().unwrap();
            assert_eq!(container.state(), ContainerState::Main);
            assert!(container.active_child().is_none());
        }
    }

    #[test]
    fn test_leaves_have_no_container() {
        for page in [
            Page::CurrentWeather,
            Page::MinMaxHours,
            Page::Shutdown,
            Page::Reboot,
            Page::Back,
        ] {
            assert!(page.container().is_none(), "{} is a leaf", page.name());
        }
    }

    #[test]
    fn test_leaf_navigation_directives() {
        let dir = icon_dir(&[]);
        let mut hw = peripherals(&dir);
        assert_eq!(Page::CurrentWeather.click(&mut hw).unwrap(), Navigation::Stay);
        assert_eq!(Page::MinMaxHours.click(&mut hw).unwrap(), Navigation::Pop);
        assert_eq!(Page::Back.click(&mut hw).unwrap(), Navigation::Pop);
        assert_eq!(Page::Shutdown.click(&mut hw).unwrap(), Navigation::Stay);
        assert_eq!(Page::Reboot.click(&mut hw).unwrap(), Navigation::Stay);
    }

    #[test]
    fn test_select_next_child_on_leaf_is_noop() {
        assert!(!Page::CurrentWeather.select_next_child());
        assert!(!Page::Back.select_next_child());
    }

    #[test]
    fn test_display_errors_propagate() {
        let dir = icon_dir(&[]);
        let mut hw = Peripherals::new(BrokenScreen, DryRunPower::new(), IconStore::new(dir.path()));
        let err = Page::min_max().update(&WeatherSnapshot::default(), &mut hw).unwrap_err();
        assert!(matches!(err, Error::Display(_)));
    }
}
