//! Energy Star revision calculators.
//!
//! One module per revision of the specification. Each calculator borrows a
//! profile from `energy-core`, computes the measured metric (`E_TEC`,
//! `P_TEC`, per-mode power) and the matching maximum allowance, and leaves
//! comparison and report assembly to the caller.

pub mod display;
pub mod estar52;
pub mod estar60;
pub mod estar70;
pub mod estar80;

use energy_core::ComputerType;

/// Power supply efficiency tiers swept when a revision applies the PSU
/// allowance as a multiplicative factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsuTier {
    None,
    Lower,
    Higher,
}

impl PsuTier {
    pub const ALL: [PsuTier; 3] = [PsuTier::None, PsuTier::Lower, PsuTier::Higher];
}

/// Multiplicative PSU factor under Energy Star 6.0/7.0. Integrated desktops
/// get the larger high-tier bonus.
pub fn psu_factor(tier: PsuTier, computer_type: ComputerType) -> f64 {
    match tier {
        PsuTier::None => 1.0,
        PsuTier::Lower => 1.015,
        PsuTier::Higher => {
            if computer_type == ComputerType::IntegratedDesktop {
                1.04
            } else {
                1.03
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psu_factor_depends_on_computer_type() {
        assert_eq!(psu_factor(PsuTier::None, ComputerType::Desktop), 1.0);
        assert_eq!(psu_factor(PsuTier::Lower, ComputerType::Notebook), 1.015);
        assert_eq!(psu_factor(PsuTier::Higher, ComputerType::Desktop), 1.03);
        assert_eq!(
            psu_factor(PsuTier::Higher, ComputerType::IntegratedDesktop),
            1.04
        );
    }
}
