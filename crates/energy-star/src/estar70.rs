//! Energy Star 7.0 calculator.
//!
//! Mostly the 6.0 structure with retuned notebook terms: the notebook base
//! drops sharply, the memory term gains a fixed offset, and the discrete
//! graphics adder becomes a continuous tanh curve over the declared frame
//! buffer bandwidth instead of a bracket table, so notebooks produce a
//! single allowance rather than one per bracket.

use tracing::debug;

use energy_core::{ComputerProfile, ComputerType, GpuBracket, HOURS_PER_YEAR};

use crate::display::DisplayAllowance;

pub struct EnergyStar70<'a> {
    profile: &'a ComputerProfile,
}

impl<'a> EnergyStar70<'a> {
    pub fn new(profile: &'a ComputerProfile) -> Self {
        EnergyStar70 { profile }
    }

    /// Equation 1: E_TEC in kWh/year.
    pub fn e_tec(&self) -> f64 {
        let p = &self.profile.power;
        let (t_off, t_sleep, t_long_idle, t_short_idle) = if self.profile.is_notebook() {
            (0.25, 0.35, 0.1, 0.3)
        } else {
            (0.45, 0.05, 0.15, 0.35)
        };
        (p.off * t_off + p.sleep * t_sleep + p.long_idle * t_long_idle
            + p.short_idle * t_short_idle)
            * HOURS_PER_YEAR
            / 1000.0
    }

    /// Equation 2 for desktops and integrated desktops: E_TEC_MAX for the
    /// given graphics bracket, before any PSU efficiency factor.
    pub fn e_tec_max(&self, bracket: GpuBracket) -> f64 {
        let p = self.profile;
        let score = p.performance();

        let base = if score <= 3.0 {
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
            (0.0, 0.5 * 36.0)
        } else if p.graphics.is_discrete() {
            let adder = match bracket {
                GpuBracket::G1 => 36.0,
                GpuBracket::G2 => 51.0,
                GpuBracket::G3 => 64.0,
                GpuBracket::G4 => 83.0,
                GpuBracket::G5 => 105.0,
                GpuBracket::G6 => 115.0,
                GpuBracket::G7 => 130.0,
            };
            (adder, 0.0)
        } else {
            (0.0, 0.0)
        };

        let eee = 8.76 * 0.2 * (0.15 + 0.35) * f64::from(p.ethernet.gigabit);
        let storage = 26.0 * f64::from(p.storage.additional());

        let int_display = match (p.computer_type, p.display.as_ref()) {
            (ComputerType::IntegratedDesktop, Some(d)) => {
                let a = DisplayAllowance::from_display(d);
                8.76 * 0.35 * (1.0 + a.ep) * (4.0 * a.resolution + 0.05 * a.area)
            }
            _ => 0.0,
        };

        debug!(
            base, memory, graphics, switchable, eee, storage, int_display,
            "E_TEC_MAX terms"
        );

        base + memory + graphics + switchable + eee + storage + int_display
    }

    /// Equation 2 for notebooks: a single E_TEC_MAX, using the declared
    /// frame buffer bandwidth for the graphics term.
    pub fn notebook_e_tec_max(&self) -> f64 {
        let p = self.profile;
        let score = p.performance();

        let base = if score <= 2.0 {
            6.5
        } else if score <= 8.0 {
            8.0
        } else {
            14.0
        };

        let memory = 2.4 + 0.294 * p.memory_gb;

        let graphics = if p.graphics.is_discrete() {
            let fb_bw = p.graphics.frame_buffer_bandwidth().unwrap_or(0.0);
            29.3 * (0.0038 * fb_bw - 0.137).tanh() + 13.4
        } else {
            0.0
        };

        let storage = 2.6 * f64::from(p.storage.additional());

        let int_display = match p.display.as_ref() {
            Some(d) => {
                let a = DisplayAllowance::from_display(d);
                8.76 * 0.30 * (1.0 + a.ep) * (0.43 * a.resolution + 0.0263 * a.area)
            }
            None => 0.0,
        };

        debug!(
            base, memory, graphics, storage, int_display,
            "E_TEC_MAX terms"
        );

        base + memory + graphics + storage + int_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use energy_core::profile::{Display, Ethernet, Graphics, PowerDraw, Storage};

    fn notebook(graphics: Graphics) -> ComputerProfile {
        ComputerProfile {
            computer_type: ComputerType::Notebook,
            cpu_cores: 2,
            cpu_clock: 2.0,
            memory_gb: 8.0,
            storage: Storage {
                count: 1,
                hdd_3_5: 0,
                hdd_2_5: 0,
                hybrid: 0,
                ssd: 1,
            },
            graphics,
            display: Some(Display {
                diagonal: 14.0,
                width: 1366,
                height: 768,
                area: 83.4,
                enhanced: false,
            }),
            ethernet: Ethernet {
                gigabit: 1,
                ten_gigabit: 0,
            },
            power: PowerDraw {
                off: 0.5,
                off_wol: 0.5,
                sleep: 1.0,
                sleep_wol: 1.0,
                long_idle: 6.0,
                short_idle: 10.0,
            },
            tv_tuner: false,
            discrete_audio: false,
        }
    }

    #[test]
    fn switchable_notebook_fixture() {
        let p = notebook(Graphics::Switchable);
        let calc = EnergyStar70::new(&p);
        assert!((calc.e_tec() - 35.697).abs() < 1e-9);
        let max = calc.notebook_e_tec_max();
        assert!((max - 19.7018).abs() < 1e-3);
        assert!(calc.e_tec() > max);
    }

    #[test]
    fn discrete_notebook_fixture() {
        let p = notebook(Graphics::Discrete {
            cards: 1,
            frame_buffer_bandwidth: Some(64.0),
        });
        let calc = EnergyStar70::new(&p);
        let max = calc.notebook_e_tec_max();
        assert!((max - 36.2018334752).abs() < 1e-3);
        assert!(calc.e_tec() <= max);
    }

    #[test]
    fn graphics_term_grows_with_bandwidth() {
        let narrow = notebook(Graphics::Discrete {
            cards: 1,
            frame_buffer_bandwidth: Some(16.0),
        });
        let wide = notebook(Graphics::Discrete {
            cards: 1,
            frame_buffer_bandwidth: Some(256.0),
        });
        let narrow_max = EnergyStar70::new(&narrow).notebook_e_tec_max();
        let wide_max = EnergyStar70::new(&wide).notebook_e_tec_max();
        assert!(wide_max > narrow_max);
    }

    #[test]
    fn integrated_desktop_includes_display_term() {
        let mut p = notebook(Graphics::Integrated);
        p.computer_type = ComputerType::IntegratedDesktop;
        let with_display = EnergyStar70::new(&p).e_tec_max(GpuBracket::G1);
        p.display = None;
        let without = EnergyStar70::new(&p).e_tec_max(GpuBracket::G1);
        let expected = 8.76 * 0.35 * (4.0 * (1366.0 * 768.0 / 1e6) + 0.05 * 83.4);
        assert!((with_display - without - expected).abs() < 1e-9);
    }

    #[test]
    fn desktop_bracket_table() {
        let mut p = notebook(Graphics::Discrete {
            cards: 1,
            frame_buffer_bandwidth: Some(96.0),
        });
        p.computer_type = ComputerType::Desktop;
        p.display = None;
        let calc = EnergyStar70::new(&p);
        assert!((calc.e_tec_max(GpuBracket::G7) - calc.e_tec_max(GpuBracket::G1) - 94.0).abs()
            < 1e-9);
    }
}
