//! Energy Star 8.0 (draft 2) calculator.
//!
//! The draft reworks most terms: the TEC weights shift toward sleep for
//! desktops, the base allowances shrink, storage is priced per technology
//! instead of per drive, Ethernet gains flat adders, the integrated
//! desktop display allowance becomes a piecewise area table, and desktops
//! may claim a full-network-proxy allowance on top of the PSU one.

use tracing::debug;

use energy_core::{ComputerProfile, ComputerType, HOURS_PER_YEAR};

use crate::display::DisplayAllowance;

/// PSU efficiency allowances swept for desktops.
pub const PSU_ALLOWANCES_DESKTOP: [f64; 3] = [0.0, 0.015, 0.03];
/// PSU efficiency allowances swept for integrated desktops.
pub const PSU_ALLOWANCES_INTEGRATED: [f64; 3] = [0.0, 0.015, 0.04];
/// Full-network-proxy allowances swept for desktops.
pub const PROXY_ALLOWANCES: [f64; 2] = [0.0, 0.12];

pub struct EnergyStar80<'a> {
    profile: &'a ComputerProfile,
}

impl<'a> EnergyStar80<'a> {
    pub fn new(profile: &'a ComputerProfile) -> Self {
        EnergyStar80 { profile }
    }

    /// Equation 1: E_TEC in kWh/year.
    pub fn e_tec(&self) -> f64 {
        let p = &self.profile.power;
        let (t_off, t_sleep, t_long_idle, t_short_idle) = if self.profile.is_notebook() {
            (0.25, 0.35, 0.1, 0.3)
        } else {
            (0.15, 0.45, 0.1, 0.3)
        };
        (p.off * t_off + p.sleep * t_sleep + p.long_idle * t_long_idle
            + p.short_idle * t_short_idle)
            * HOURS_PER_YEAR
            / 1000.0
    }

    /// Equation 2: E_TEC_MAX before the PSU/proxy allowance factors. The
    /// mobile workstation adder applies to notebooks only and is swept by
    /// the caller.
    pub fn e_tec_max(&self, mobile_workstation: bool) -> f64 {
        let p = self.profile;
        let score = p.performance();
        let notebook = p.is_notebook();

        let base = match p.computer_type {
            ComputerType::Desktop => {
                if p.graphics.is_discrete() {
                    if score <= 8.0 {
                        35.0
                    } else {
                        45.0
                    }
                } else if score <= 8.0 {
                    26.0
                } else {
                    46.0
                }
            }
            ComputerType::IntegratedDesktop => {
                if score <= 8.0 {
                    9.0
                } else {
                    27.0
                }
            }
            ComputerType::Notebook => {
                if score <= 2.0 {
                    6.5
                } else if score < 8.0 {
                    8.0
                } else {
                    14.0
                }
            }
        };

        let memory = if notebook {
            2.4 + 0.294 * p.memory_gb
        } else {
            1.7 + 0.24 * p.memory_gb
        };

        let (graphics, switchable) = if p.graphics.is_switchable() {
            (0.0, if notebook { 0.0 } else { 14.4 })
        } else if p.graphics.is_discrete() {
            let fb_bw = p.graphics.frame_buffer_bandwidth().unwrap_or(0.0);
            let curve = (0.0038 * fb_bw - 0.137).tanh();
            let adder = if notebook {
                29.3 * curve + 13.4
            } else {
                50.4 * curve + 23.0
            };
            (adder, 0.0)
        } else {
            (0.0, 0.0)
        };

        let ethernet = if notebook {
            0.0
        } else {
            let ten = if p.ethernet.ten_gigabit > 0 { 18.0 } else { 0.0 };
            let one = if p.ethernet.gigabit > 0 { 4.0 } else { 0.0 };
            ten + one
        };

        let storage = if p.storage.count > 1 {
            let s = &p.storage;
            if notebook {
                2.6 * f64::from(s.hdd_2_5 + s.hybrid + s.ssd)
            } else {
                16.5 * f64::from(s.hdd_3_5)
                    + 2.1 * f64::from(s.hdd_2_5)
                    + 0.8 * f64::from(s.hybrid)
                    + 0.4 * f64::from(s.ssd)
            }
        } else {
            0.0
        };

        let int_display = match (p.computer_type, p.display.as_ref()) {
            (ComputerType::IntegratedDesktop, Some(d)) => {
                let a = DisplayAllowance::from_display(d);
                integrated_desktop_display(&a)
            }
            (ComputerType::Notebook, Some(d)) => {
                let a = DisplayAllowance::from_display(d);
                8.76 * 0.30 * (1.0 + a.ep) * (0.43 * a.resolution + 0.0263 * a.area)
            }
            _ => 0.0,
        };

        let mobile = if notebook && mobile_workstation { 4.0 } else { 0.0 };

        debug!(
            base, memory, graphics, switchable, ethernet, storage, int_display, mobile,
            "E_TEC_MAX terms"
        );

        base + memory + graphics + switchable + ethernet + storage + int_display + mobile
    }
}

/// Integrated desktop display allowance, piecewise over screen area.
fn integrated_desktop_display(a: &DisplayAllowance) -> f64 {
    let r = a.resolution;
    let term = if a.area < 190.0 {
        3.43 * r + 0.148 * a.area + 1.30
    } else if a.area < 210.0 {
        3.43 * r + 0.018 * a.area + 26.1
    } else if a.area < 315.0 {
        3.43 * r + 0.078 * a.area + 13.2
    } else {
        3.43 * r + 0.156 * a.area - 11.3
    };
    term * (1.0 + a.ep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use energy_core::profile::{Display, Ethernet, Graphics, PowerDraw, Storage};

    fn base_profile(computer_type: ComputerType) -> ComputerProfile {
        ComputerProfile {
            computer_type,
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
            graphics: Graphics::Integrated,
            display: if computer_type == ComputerType::Desktop {
                None
            } else {
                Some(Display {
                    diagonal: 14.0,
                    width: 1366,
                    height: 768,
                    area: 83.4,
                    enhanced: false,
                })
            },
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
    fn desktop_weights_favor_sleep() {
        let p = base_profile(ComputerType::Desktop);
        let calc = EnergyStar80::new(&p);
        let expected = (0.5 * 0.15 + 1.0 * 0.45 + 6.0 * 0.1 + 10.0 * 0.3) * 8.76;
        assert!((calc.e_tec() - expected).abs() < 1e-9);
    }

    #[test]
    fn notebook_base_brackets() {
        let mut p = base_profile(ComputerType::Notebook);
        p.cpu_cores = 1;
        p.cpu_clock = 2.0;
        let low = EnergyStar80::new(&p).e_tec_max(false);
        p.cpu_cores = 2;
        let mid = EnergyStar80::new(&p).e_tec_max(false);
        assert!((mid - low - 1.5).abs() < 1e-9);
        // Exactly 8.0 falls in the top bracket under the draft.
        p.cpu_clock = 4.0;
        let high = EnergyStar80::new(&p).e_tec_max(false);
        assert!((high - mid - 6.0).abs() < 1e-9);
    }

    #[test]
    fn mobile_workstation_adder() {
        let p = base_profile(ComputerType::Notebook);
        let calc = EnergyStar80::new(&p);
        assert!((calc.e_tec_max(true) - calc.e_tec_max(false) - 4.0).abs() < 1e-9);
        // Desktops never get the adder.
        let p = base_profile(ComputerType::Desktop);
        let calc = EnergyStar80::new(&p);
        assert_eq!(calc.e_tec_max(true), calc.e_tec_max(false));
    }

    #[test]
    fn storage_priced_per_technology() {
        let mut p = base_profile(ComputerType::Desktop);
        p.storage = Storage {
            count: 3,
            hdd_3_5: 1,
            hdd_2_5: 0,
            hybrid: 0,
            ssd: 2,
        };
        let multi = EnergyStar80::new(&p).e_tec_max(false);
        p.storage = Storage {
            count: 1,
            hdd_3_5: 1,
            hdd_2_5: 0,
            hybrid: 0,
            ssd: 0,
        };
        let single = EnergyStar80::new(&p).e_tec_max(false);
        assert!((multi - single - (16.5 + 2.0 * 0.4)).abs() < 1e-9);
    }

    #[test]
    fn ethernet_adders_for_desktops_only() {
        let mut p = base_profile(ComputerType::Desktop);
        p.ethernet = Ethernet {
            gigabit: 0,
            ten_gigabit: 0,
        };
        let none = EnergyStar80::new(&p).e_tec_max(false);
        p.ethernet = Ethernet {
            gigabit: 2,
            ten_gigabit: 1,
        };
        let both = EnergyStar80::new(&p).e_tec_max(false);
        assert!((both - none - 22.0).abs() < 1e-9);

        let mut p = base_profile(ComputerType::Notebook);
        p.ethernet = Ethernet {
            gigabit: 2,
            ten_gigabit: 1,
        };
        let nb = EnergyStar80::new(&p).e_tec_max(false);
        p.ethernet = Ethernet {
            gigabit: 0,
            ten_gigabit: 0,
        };
        assert_eq!(EnergyStar80::new(&p).e_tec_max(false), nb);
    }

    #[test]
    fn integrated_desktop_display_table_is_piecewise() {
        let small = DisplayAllowance {
            ep: 0.0,
            resolution: 2.0736,
            area: 180.0,
        };
        let large = DisplayAllowance {
            ep: 0.0,
            resolution: 2.0736,
            area: 320.0,
        };
        let small_term = integrated_desktop_display(&small);
        let large_term = integrated_desktop_display(&large);
        assert!((small_term - (3.43 * 2.0736 + 0.148 * 180.0 + 1.30)).abs() < 1e-9);
        assert!((large_term - (3.43 * 2.0736 + 0.156 * 320.0 - 11.3)).abs() < 1e-9);
        // The EP bonus scales the whole term.
        let enhanced = DisplayAllowance { ep: 0.3, ..small };
        assert!((integrated_desktop_display(&enhanced) - small_term * 1.3).abs() < 1e-9);
    }
}
