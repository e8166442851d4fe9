//! Simulator window screen and power control.
//!
//! [`SimScreen`] pushes every primitive to the window immediately so the
//! blocking loading animation is visible frame by frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use weather_display::{Bitmap, DryRunPower, EgScreen, PowerAction, PowerControl, Screen, SystemPower};

/// Window-backed screen.
pub struct SimScreen {
    inner: EgScreen<SimulatorDisplay<Rgb565>>,
    window: Window,
}

impl SimScreen {
    pub fn new(
        display: SimulatorDisplay<Rgb565>,
        mut window: Window,
    ) -> Self {
        // The window only opens on its first update
        window.update(&display);
        Self {
            inner: EgScreen::new(display),
            window,
        }
    }

    /// Pending window events (keys, close button).
    pub fn events(&mut self) -> Vec<SimulatorEvent> { self.window.events().collect() }

    fn present(&mut self) { self.window.update(self.inner.target()); }
}

impl Screen for SimScreen {
    fn display(
        &mut self,
        outside: Option<&str>,
        inside: Option<&str>,
        icon: Option<&Bitmap>,
    ) -> weather_display::Result<()> {
        self.inner.display(outside, inside, icon)?;
        self.present();
        Ok(())
    }

    fn display_top_bottom(
        &mut self,
        top: &str,
        bottom: &str,
    ) -> weather_display::Result<()> {
        self.inner.display_top_bottom(top, bottom)?;
        self.present();
        Ok(())
    }

    fn display_bitmap(
        &mut self,
        bitmap: &Bitmap,
    ) -> weather_display::Result<()> {
        self.inner.display_bitmap(bitmap)?;
        self.present();
        Ok(())
    }

    fn display_text(
        &mut self,
        text: &str,
    ) -> weather_display::Result<()> {
        self.inner.display_text(text)?;
        self.present();
        Ok(())
    }
}

/// Dry run by default; runs the real host commands with `--live`.
pub enum SimPower {
    DryRun(DryRunPower),
    Live { system: SystemPower, performed: bool },
}

impl SimPower {
    pub fn new(live: bool) -> Self {
        if live {
            Self::Live {
                system: SystemPower,
                performed: false,
            }
        } else {
            Self::DryRun(DryRunPower::new())
        }
    }

    /// True once a shutdown or reboot went through.
    pub fn performed(&self) -> bool {
        match self {
            Self::DryRun(power) => !power.requested().is_empty(),
            Self::Live { performed, .. } => *performed,
        }
    }
}

impl PowerControl for SimPower {
    fn execute(
        &mut self,
        action: PowerAction,
    ) -> weather_display::Result<()> {
        match self {
            Self::DryRun(power) => power.execute(action),
            Self::Live { system, performed } => {
                system.execute(action)?;
                info!("{action:?} issued");
                *performed = true;
                Ok(())
            }
        }
    }
}
