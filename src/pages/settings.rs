//! Settings pages: cogwheel, shutdown, reboot and back.

use log::{info, warn};

use super::{Navigation, Peripherals};
use crate::animations::play_loading;
use crate::error::Result;
use crate::power::{PowerAction, PowerControl};
use crate::screen::Screen;

/// Label of the page leaving the settings menu.
pub(super) const BACK_LABEL: &str = "BACK";

/// Shown instead of the cogwheel when its bitmap is unavailable.
const SETTINGS_LABEL: &str = "SETTINGS";

/// Main view of the settings container.
pub(super) fn update_cog<S, P>(peripherals: &mut Peripherals<S, P>) -> Result<()>
where
    S: Screen,
    P: PowerControl,
{
    match peripherals.icons.cog() {
        Ok(cog) => peripherals.screen.display_bitmap(&cog),
        Err(e) if e.is_resource() => {
            warn!("Cogwheel unavailable: {e}");
            peripherals.screen.display_text(SETTINGS_LABEL)
        }
        Err(e) => Err(e),
    }
}

/// Loading dots, then the host power action. Does not return on real hardware
/// once the command succeeds.
pub(super) fn power_click<S, P>(
    action: PowerAction,
    peripherals: &mut Peripherals<S, P>,
) -> Result<Navigation>
where
    S: Screen,
    P: PowerControl,
{
    info!("{action:?} clicked");
    let step = peripherals.loading_step();
    play_loading(&mut peripherals.screen, step)?;
    peripherals.power.execute(action)?;
    Ok(Navigation::Stay)
}
