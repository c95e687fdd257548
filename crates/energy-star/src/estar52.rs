//! Energy Star 5.2 calculator.
//!
//! The oldest supported revision: three-mode TEC weights for computers,
//! simple power ceilings for workstations, small-scale servers and thin
//! clients. The discrete graphics surcharge depends on a frame buffer
//! width the profile does not record, so computer allowances are computed
//! per width bracket and the caller decides how to present them.

use tracing::debug;

use energy_core::{
    Category, ComputerProfile, ComputerType, FrameBufferWidth, ServerProfile, ThinClientProfile,
    WorkstationProfile, HOURS_PER_YEAR,
};

pub struct EnergyStar52<'a> {
    profile: &'a ComputerProfile,
}

impl<'a> EnergyStar52<'a> {
    pub fn new(profile: &'a ComputerProfile) -> Self {
        EnergyStar52 { profile }
    }

    /// Equation 1: E_TEC for desktop, integrated desktop and notebook
    /// computers, in kWh/year.
    pub fn e_tec(&self) -> f64 {
        let p = &self.profile.power;
        let (t_off, t_sleep, t_idle) = if self.profile.is_notebook() {
            (0.6, 0.1, 0.3)
        } else {
            (0.55, 0.05, 0.4)
        };
        (p.off * t_off + p.sleep * t_sleep + p.short_idle * t_idle) * HOURS_PER_YEAR / 1000.0
    }

    /// Equation 2: E_TEC_MAX per qualifying category, assuming the given
    /// frame buffer width bracket.
    pub fn allowances(&self, width: FrameBufferWidth) -> Vec<(Category, f64)> {
        if self.profile.computer_type == ComputerType::Notebook {
            self.notebook_allowances(width)
        } else {
            self.desktop_allowances(width)
        }
    }

    fn desktop_allowances(&self, width: FrameBufferWidth) -> Vec<(Category, f64)> {
        let memory = self.profile.memory_gb;
        let disk = self.profile.storage.count;
        let storage = if disk > 1 { 25.0 * f64::from(disk - 1) } else { 0.0 };

        let mut result = Vec::new();
        for category in Category::DESKTOP {
            if !self.qualifies_desktop(category, width) {
                continue;
            }
            let base = match category {
                Category::A => 148.0,
                Category::B => 175.0,
                Category::C => 209.0,
                Category::D => 234.0,
            };
            let threshold = if category == Category::D { 4.0 } else { 2.0 };
            let mem = if memory > threshold {
                memory - threshold
            } else {
                0.0
            };
            let graphics = match category {
                Category::A | Category::B => {
                    if width.over_128() {
                        50.0
                    } else {
                        35.0
                    }
                }
                Category::C | Category::D => {
                    if width.over_128() {
                        50.0
                    } else {
                        0.0
                    }
                }
            };
            let max = base + mem + graphics + storage;
            debug!(
                category = %category,
                base, mem, graphics, storage, max, "E_TEC_MAX terms"
            );
            result.push((category, max));
        }
        result
    }

    fn notebook_allowances(&self, width: FrameBufferWidth) -> Vec<(Category, f64)> {
        let memory = self.profile.memory_gb;
        let disk = self.profile.storage.count;
        let mem = if memory > 4.0 { 0.4 * (memory - 4.0) } else { 0.0 };
        let storage = if disk > 1 { 3.0 * f64::from(disk - 1) } else { 0.0 };

        let mut result = Vec::new();
        for category in Category::NOTEBOOK {
            if !self.qualifies_notebook(category, width) {
                continue;
            }
            let base = match category {
                Category::A => 40.0,
                Category::B => 53.0,
                Category::C => 88.5,
                Category::D => continue,
            };
            let graphics = if category == Category::B && width.over_64() {
                3.0
            } else {
                0.0
            };
            let max = base + mem + graphics + storage;
            debug!(
                category = %category,
                base, mem, graphics, storage, max, "E_TEC_MAX terms"
            );
            result.push((category, max));
        }
        result
    }

    fn qualifies_desktop(&self, category: Category, width: FrameBufferWidth) -> bool {
        let core = self.profile.cpu_cores;
        let memory = self.profile.memory_gb;
        let discrete = self.profile.graphics.is_discrete();
        match category {
            Category::D => core >= 4 && (memory >= 4.0 || (discrete && width.over_128())),
            Category::C => core > 2 && (memory >= 2.0 || discrete),
            Category::B => core == 2 && memory >= 2.0,
            Category::A => true,
        }
    }

    fn qualifies_notebook(&self, category: Category, width: FrameBufferWidth) -> bool {
        let core = self.profile.cpu_cores;
        let memory = self.profile.memory_gb;
        let discrete = self.profile.graphics.is_discrete();
        match category {
            Category::C => core >= 2 && memory >= 2.0 && discrete && width.over_128(),
            Category::B => discrete,
            Category::A => true,
            Category::D => false,
        }
    }
}

/// Equation 3: P_TEC for workstations, in watts.
pub fn workstation_p_tec(p: &WorkstationProfile) -> f64 {
    let (t_off, t_sleep, t_idle) = (0.35, 0.10, 0.55);
    p.power.off * t_off + p.power.sleep * t_sleep + p.power.short_idle * t_idle
}

/// Equation 4: P_TEC_MAX for workstations.
pub fn workstation_p_tec_max(p: &WorkstationProfile) -> f64 {
    0.28 * (p.max_power + f64::from(p.disk_count) * 5.0)
}

/// Equation 5: category and P_OFF_MAX / P_IDLE_MAX for small-scale servers.
pub fn server_limits(p: &ServerProfile, wol: bool) -> (Category, f64, f64) {
    let off_max = 2.0 + if wol { 0.7 } else { 0.0 };
    if (p.cpu_cores > 1 || p.more_discrete) && p.memory_gb >= 1.0 {
        (Category::B, off_max, 65.0)
    } else {
        (Category::A, off_max, 50.0)
    }
}

/// Equations 6 and 7: P_OFF_MAX and P_SLEEP_MAX for thin clients share the
/// same base and WOL adder.
pub fn thin_client_off_max(wol: bool) -> f64 {
    2.0 + if wol { 0.7 } else { 0.0 }
}

pub fn thin_client_sleep_max(wol: bool) -> f64 {
    2.0 + if wol { 0.7 } else { 0.0 }
}

/// Idle ceiling for thin clients: category B with local media decode,
/// category A otherwise.
pub fn thin_client_idle_limit(p: &ThinClientProfile) -> (Category, f64) {
    if p.media_codec {
        (Category::B, 15.0)
    } else {
        (Category::A, 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use energy_core::profile::{Ethernet, Graphics, PowerDraw, Storage};

    fn notebook(cores: u32, clock: f64, memory: f64, graphics: Graphics) -> ComputerProfile {
        ComputerProfile {
            computer_type: ComputerType::Notebook,
            cpu_cores: cores,
            cpu_clock: clock,
            memory_gb: memory,
            storage: Storage {
                count: 1,
                hdd_3_5: 0,
                hdd_2_5: 0,
                hybrid: 0,
                ssd: 1,
            },
            graphics,
            display: None,
            ethernet: Ethernet {
                gigabit: 1,
                ten_gigabit: 0,
            },
            power: PowerDraw {
                off: 1.0,
                off_wol: 1.0,
                sleep: 1.7,
                sleep_wol: 1.7,
                long_idle: 8.0,
                short_idle: 10.0,
            },
            tv_tuner: false,
            discrete_audio: false,
        }
    }

    fn desktop(cores: u32, memory: f64, graphics: Graphics) -> ComputerProfile {
        ComputerProfile {
            computer_type: ComputerType::Desktop,
            cpu_cores: cores,
            cpu_clock: 3.0,
            memory_gb: memory,
            storage: Storage {
                count: 1,
                hdd_3_5: 1,
                hdd_2_5: 0,
                hybrid: 0,
                ssd: 0,
            },
            graphics,
            display: None,
            ethernet: Ethernet {
                gigabit: 1,
                ten_gigabit: 0,
            },
            power: PowerDraw {
                off: 1.0,
                off_wol: 1.0,
                sleep: 2.0,
                sleep_wol: 2.0,
                long_idle: 20.0,
                short_idle: 30.0,
            },
            tv_tuner: false,
            discrete_audio: false,
        }
    }

    #[test]
    fn integrated_notebook_e_tec_and_allowance() {
        let p = notebook(2, 2.0, 8.0, Graphics::Integrated);
        let calc = EnergyStar52::new(&p);
        assert!((calc.e_tec() - 33.0252).abs() < 1e-9);
        // Only category A qualifies without discrete graphics, and the
        // allowance does not depend on the width bracket.
        for width in [
            FrameBufferWidth::Under64,
            FrameBufferWidth::Between64And128,
            FrameBufferWidth::Over128,
        ] {
            assert_eq!(calc.allowances(width), vec![(Category::A, 41.6)]);
        }
    }

    #[test]
    fn discrete_notebook_allowances_follow_width() {
        let p = notebook(
            2,
            1.8,
            16.0,
            Graphics::Discrete {
                cards: 1,
                frame_buffer_bandwidth: None,
            },
        );
        let calc = EnergyStar52::new(&p);
        assert!((calc.e_tec() - 19.16688).abs() < 1e-9);

        let under = calc.allowances(FrameBufferWidth::Under64);
        assert_eq!(under, vec![(Category::A, 44.8), (Category::B, 57.8)]);

        let between = calc.allowances(FrameBufferWidth::Between64And128);
        assert_eq!(between, vec![(Category::A, 44.8), (Category::B, 60.8)]);

        // Over 128 bits category C qualifies as well.
        let over = calc.allowances(FrameBufferWidth::Over128);
        assert_eq!(
            over,
            vec![(Category::A, 44.8), (Category::B, 60.8), (Category::C, 93.3)]
        );
    }

    #[test]
    fn desktop_category_ladder() {
        let p = desktop(4, 4.0, Graphics::Integrated);
        let calc = EnergyStar52::new(&p);
        let under = calc.allowances(FrameBufferWidth::Under64);
        assert_eq!(
            under,
            vec![
                (Category::A, 185.0),
                (Category::C, 211.0),
                (Category::D, 234.0),
            ]
        );
        // Two cores drops C and D, keeps B.
        let p = desktop(2, 4.0, Graphics::Integrated);
        let calc = EnergyStar52::new(&p);
        let under = calc.allowances(FrameBufferWidth::Under64);
        assert_eq!(under, vec![(Category::A, 185.0), (Category::B, 212.0)]);
    }

    #[test]
    fn workstation_tec() {
        let p = WorkstationProfile {
            disk_count: 2,
            ethernet: Ethernet {
                gigabit: 0,
                ten_gigabit: 0,
            },
            power: PowerDraw {
                off: 2.0,
                off_wol: 2.0,
                sleep: 4.0,
                sleep_wol: 4.0,
                long_idle: 50.0,
                short_idle: 80.0,
            },
            max_power: 180.0,
        };
        assert!((workstation_p_tec(&p) - 45.1).abs() < 1e-9);
        assert!((workstation_p_tec_max(&p) - 53.2).abs() < 1e-9);
    }

    #[test]
    fn server_category_depends_on_cores_and_memory() {
        let mut p = ServerProfile {
            cpu_cores: 1,
            memory_gb: 4.0,
            disk_count: 1,
            more_discrete: false,
            ethernet: Ethernet {
                gigabit: 1,
                ten_gigabit: 0,
            },
            power: PowerDraw {
                off: 2.7,
                off_wol: 2.7,
                sleep: 0.0,
                sleep_wol: 0.0,
                long_idle: 0.0,
                short_idle: 65.0,
            },
        };
        assert_eq!(server_limits(&p, true), (Category::A, 2.7, 50.0));
        assert_eq!(server_limits(&p, false), (Category::A, 2.0, 50.0));
        p.cpu_cores = 2;
        assert_eq!(server_limits(&p, false), (Category::B, 2.0, 65.0));
        p.cpu_cores = 1;
        p.more_discrete = true;
        assert_eq!(server_limits(&p, false), (Category::B, 2.0, 65.0));
        p.memory_gb = 0.5;
        assert_eq!(server_limits(&p, false), (Category::A, 2.0, 50.0));
    }

    #[test]
    fn thin_client_ceilings() {
        assert_eq!(thin_client_off_max(false), 2.0);
        assert_eq!(thin_client_off_max(true), 2.7);
        assert_eq!(thin_client_sleep_max(true), 2.7);
        let p = ThinClientProfile {
            discrete_graphics: false,
            media_codec: true,
            display: None,
            ethernet: Ethernet {
                gigabit: 1,
                ten_gigabit: 0,
            },
            power: PowerDraw {
                off: 2.7,
                off_wol: 2.7,
                sleep: 2.7,
                sleep_wol: 2.7,
                long_idle: 15.0,
                short_idle: 15.0,
            },
        };
        assert_eq!(thin_client_idle_limit(&p), (Category::B, 15.0));
    }
}
