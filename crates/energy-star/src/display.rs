//! Enhanced-performance integrated display allowance, shared by the 6.0,
//! 7.0 and 8.0 revisions.

use energy_core::profile::Display;

/// Inputs to an integrated display allowance term: the EP factor, the
/// native resolution in megapixels, and the screen area in square inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAllowance {
    pub ep: f64,
    pub resolution: f64,
    pub area: f64,
}

impl DisplayAllowance {
    pub fn from_display(display: &Display) -> Self {
        let ep = if display.enhanced {
            if display.diagonal >= 27.0 {
                0.75
            } else {
                0.3
            }
        } else {
            0.0
        };
        DisplayAllowance {
            ep,
            resolution: display.megapixels(),
            area: display.area,
        }
    }
}
