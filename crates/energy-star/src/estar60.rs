//! Energy Star 6.0 calculator.
//!
//! First revision with the four-mode TEC weights, the performance score
//! (cores times clock) driving the base allowance, per-bracket discrete
//! graphics adders, and allowance terms for integrated displays and
//! energy-efficient Ethernet.

use tracing::debug;

use energy_core::{
    ComputerProfile, ComputerType, GpuBracket, ServerProfile, ThinClientProfile,
    WorkstationProfile, HOURS_PER_YEAR,
};

use crate::display::DisplayAllowance;

pub struct EnergyStar60<'a> {
    profile: &'a ComputerProfile,
}

impl<'a> EnergyStar60<'a> {
    pub fn new(profile: &'a ComputerProfile) -> Self {
        EnergyStar60 { profile }
    }

    /// Equation 1: E_TEC in kWh/year.
    pub fn e_tec(&self) -> f64 {
        let p = &self.profile.power;
        let (t_off, t_sleep, t_long_idle, t_short_idle) = if self.profile.is_notebook() {
            (0.25, 0.35, 0.10, 0.30)
        } else {
            (0.45, 0.05, 0.15, 0.35)
        };
        (p.off * t_off + p.sleep * t_sleep + p.long_idle * t_long_idle
            + p.short_idle * t_short_idle)
            * HOURS_PER_YEAR
            / 1000.0
    }

    /// Equation 2: E_TEC_MAX for the given graphics bracket, before any
    /// PSU efficiency factor.
    pub fn e_tec_max(&self, bracket: GpuBracket) -> f64 {
        let p = self.profile;
        let score = p.performance();
        let notebook = p.is_notebook();

        let base = if notebook {
            if score <= 2.0 {
                14.0
            } else if score <= 5.2 {
                22.0
            } else if score <= 8.0 {
                24.0
            } else {
                28.0
            }
        } else if score <= 3.0 {
            69.0
        } else if p.graphics.is_discrete() {
            if score <= 9.0 {
                115.0
            } else {
                135.0
            }
        } else if score <= 6.0 {
            112.0
        } else if score <= 7.0 {
            120.0
        } else {
            135.0
        };

        let memory = 0.8 * p.memory_gb;

        let (graphics, switchable) = if p.graphics.is_switchable() {
            (0.0, if notebook { 0.0 } else { 0.5 * 36.0 })
        } else if p.graphics.is_discrete() {
            let adder = if notebook {
                match bracket {
                    GpuBracket::G1 => 14.0,
                    GpuBracket::G2 => 20.0,
                    GpuBracket::G3 => 26.0,
                    GpuBracket::G4 => 32.0,
                    GpuBracket::G5 => 42.0,
                    GpuBracket::G6 => 48.0,
                    GpuBracket::G7 => 60.0,
                }
            } else {
                match bracket {
                    GpuBracket::G1 => 36.0,
                    GpuBracket::G2 => 51.0,
                    GpuBracket::G3 => 64.0,
                    GpuBracket::G4 => 83.0,
                    GpuBracket::G5 => 105.0,
                    GpuBracket::G6 => 115.0,
                    GpuBracket::G7 => 130.0,
                }
            };
            (adder, 0.0)
        } else {
            (0.0, 0.0)
        };

        let eee = if notebook {
            HOURS_PER_YEAR / 1000.0 * 0.2 * (0.10 + 0.30) * f64::from(p.ethernet.gigabit)
        } else {
            HOURS_PER_YEAR / 1000.0 * 0.2 * (0.15 + 0.35) * f64::from(p.ethernet.gigabit)
        };

        let storage = if notebook {
            2.6 * f64::from(p.storage.additional())
        } else {
            26.0 * f64::from(p.storage.additional())
        };

        let int_display = match (p.computer_type, p.display.as_ref()) {
            (ComputerType::IntegratedDesktop, Some(d)) => {
                let a = DisplayAllowance::from_display(d);
                8.76 * 0.35 * (1.0 + a.ep) * (4.0 * a.resolution + 0.05 * a.area)
            }
            (ComputerType::Notebook, Some(d)) => {
                let a = DisplayAllowance::from_display(d);
                8.76 * 0.30 * (1.0 + a.ep) * (2.0 * a.resolution + 0.02 * a.area)
            }
            _ => 0.0,
        };

        debug!(
            base, memory, graphics, switchable, eee, storage, int_display,
            "E_TEC_MAX terms"
        );

        base + memory + graphics + switchable + eee + storage + int_display
    }
}

/// Equation 4: P_TEC for workstations, in watts.
pub fn workstation_p_tec(p: &WorkstationProfile) -> f64 {
    let (t_off, t_sleep, t_long_idle, t_short_idle) = (0.35, 0.10, 0.15, 0.40);
    p.power.off * t_off
        + p.power.sleep * t_sleep
        + p.power.long_idle * t_long_idle
        + p.power.short_idle * t_short_idle
}

/// Equation 5: P_TEC_MAX for workstations, with the EEE term weighted by
/// the non-off mode fractions.
pub fn workstation_p_tec_max(p: &WorkstationProfile) -> f64 {
    let p_eee = 0.2 * f64::from(p.ethernet.gigabit);
    0.28 * (p.max_power + f64::from(p.disk_count) * 5.0) + 8.76 * p_eee * (0.10 + 0.15 + 0.40)
}

/// Equation 6: P_OFF_MAX for small-scale servers.
pub fn server_off_max(wol: bool) -> f64 {
    1.0 + if wol { 0.4 } else { 0.0 }
}

/// Equation 7: P_IDLE_MAX for small-scale servers, with a storage adder
/// per additional drive.
pub fn server_idle_max(p: &ServerProfile) -> f64 {
    24.0 + 8.0 * f64::from(p.disk_count.saturating_sub(1))
}

/// Equation 1 weights applied to a thin client.
pub fn thin_client_e_tec(p: &ThinClientProfile) -> f64 {
    let power = &p.power;
    (power.off * 0.25 + power.sleep * 0.35 + power.long_idle * 0.10 + power.short_idle * 0.30)
        * HOURS_PER_YEAR
        / 1000.0
}

/// Equation 8: E_TEC_MAX for thin clients. Discrete graphics and WOL are
/// swept by the caller since the allowance depends on the shipping default.
pub fn thin_client_e_tec_max(p: &ThinClientProfile, discrete: bool, wol: bool) -> f64 {
    let base = 60.0;
    let graphics = if discrete { 36.0 } else { 0.0 };
    let wol_adder = if wol { 2.0 } else { 0.0 };
    let int_display = match p.display.as_ref() {
        Some(d) => {
            let a = DisplayAllowance::from_display(d);
            8.76 * 0.35 * (1.0 + a.ep) * (4.0 * a.resolution + 0.05 * a.area)
        }
        None => 0.0,
    };
    let eee = 8.76 * 0.2 * (0.15 + 0.35) * f64::from(p.ethernet.gigabit);
    base + graphics + wol_adder + int_display + eee
}
