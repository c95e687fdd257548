//! ErP Lot 3 calculator, in its 1 July 2014 and 1 January 2016 revisions.
//!
//! Both revisions share the category ladder, the TEC weights, and the
//! memory/storage/tuner/audio adders; only the base and graphics tables
//! change. A standby gate runs first: a device whose sleep or off draw
//! exceeds the fixed ceilings is rejected before any category is scored.

use tracing::debug;

use energy_core::{
    Category, ComputerProfile, EnergyError, GpuBracket, Qualification, HOURS_PER_YEAR,
};

/// Which revision of the Lot 3 tables to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    Y2014,
    Y2016,
}

impl RuleSet {
    pub fn heading(&self) -> &'static str {
        match self {
            RuleSet::Y2014 => "ErP Lot 3 from 1 July 2014:",
            RuleSet::Y2016 => "ErP Lot 3 from 1 January 2016:",
        }
    }
}

/// High-bandwidth configurations fall outside the 2014 tables and must be
/// judged against the 2016 revision only.
pub fn special_case(profile: &ComputerProfile) -> bool {
    if profile.is_notebook() {
        profile.cpu_cores >= 4 && profile.memory_gb >= 16.0
    } else {
        profile.cpu_cores >= 6 && profile.memory_gb >= 16.0
    }
}

pub fn special_case_warning(profile: &ComputerProfile) -> &'static str {
    if profile.is_notebook() {
        "If discrete graphics card(s) providing total frame buffer bandwidths above 225 GB/s, \
         use the requirement from 1 January 2016 instead."
    } else {
        "If discrete graphics card(s) providing total frame buffer bandwidths above 320 GB/s and \
         a PSU with a rated output power of at least 1000W, \
         use the requirement from 1 January 2016 instead."
    }
}

/// A standby-gate rejection: `measured` exceeded `ceiling` for `metric`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandbyFailure {
    pub metric: &'static str,
    pub measured: f64,
    pub ceiling: f64,
}

pub struct ErpLot3<'a> {
    profile: &'a ComputerProfile,
    rules: RuleSet,
}

impl<'a> ErpLot3<'a> {
    pub fn new(profile: &'a ComputerProfile, rules: RuleSet) -> Self {
        ErpLot3 { profile, rules }
    }

    /// The S3/S4 precondition gate. Desktops carry the tight sleep
    /// ceilings; notebooks get the looser ones. The first ceiling
    /// exceeded wins.
    pub fn verify_standby(&self) -> Result<(), StandbyFailure> {
        let p = &self.profile.power;
        let (sleep_max, sleep_wol_max) = if self.profile.is_notebook() {
            (5.0, 5.7)
        } else {
            (3.0, 3.7)
        };
        let checks = [
            ("P_SLEEP", p.sleep, sleep_max),
            ("P_SLEEP_WOL", p.sleep_wol, sleep_wol_max),
            ("P_OFF", p.off, 1.0),
            ("P_OFF_WOL", p.off_wol, 1.7),
        ];
        for (metric, measured, ceiling) in checks {
            if measured > ceiling {
                return Err(StandbyFailure {
                    metric,
                    measured,
                    ceiling,
                });
            }
        }
        Ok(())
    }

    /// Whether the device qualifies for `category` under the Lot 3 ladder.
    /// `Conditional` means qualification depends on the discrete card
    /// reaching the G3-with-wide-data-path class or above.
    pub fn qualification(&self, category: Category) -> Result<Qualification, EnergyError> {
        let p = self.profile;
        let dgfx = p.graphics.discrete_cards();
        if p.is_notebook() {
            match category {
                Category::A => Ok(Qualification::Qualifies),
                Category::B => Ok(if dgfx >= 1 {
                    Qualification::Qualifies
                } else {
                    Qualification::DoesNotQualify
                }),
                Category::C => Ok(
                    if p.cpu_cores >= 2 && p.memory_gb >= 2.0 && dgfx >= 1 {
                        Qualification::Conditional
                    } else {
                        Qualification::DoesNotQualify
                    },
                ),
                Category::D => Err(EnergyError::InvalidCategory {
                    category: category.as_str(),
                    device: "Notebook",
                }),
            }
        } else {
            match category {
                Category::A => Ok(Qualification::Qualifies),
                Category::B => Ok(if p.cpu_cores >= 2 && p.memory_gb >= 2.0 {
                    Qualification::Qualifies
                } else {
                    Qualification::DoesNotQualify
                }),
                Category::C => Ok(
                    if p.cpu_cores >= 3 && (p.memory_gb >= 2.0 || dgfx >= 1) {
                        Qualification::Qualifies
                    } else {
                        Qualification::DoesNotQualify
                    },
                ),
                Category::D => Ok(if p.cpu_cores >= 4 {
                    if p.memory_gb >= 4.0 {
                        Qualification::Qualifies
                    } else if dgfx >= 1 {
                        Qualification::Conditional
                    } else {
                        Qualification::DoesNotQualify
                    }
                } else {
                    Qualification::DoesNotQualify
                }),
            }
        }
    }

    /// Categories the device is a candidate for, with how it qualifies.
    pub fn candidates(&self) -> Result<Vec<(Category, Qualification)>, EnergyError> {
        let ladder: &[Category] = if self.profile.is_notebook() {
            &Category::NOTEBOOK
        } else {
            &Category::DESKTOP
        };
        let mut out = Vec::new();
        for &category in ladder {
            let q = self.qualification(category)?;
            if q.is_candidate() {
                out.push((category, q));
            }
        }
        Ok(out)
    }

    fn weights(&self) -> (f64, f64, f64) {
        if self.profile.is_notebook() {
            (0.6, 0.1, 0.3)
        } else {
            (0.55, 0.05, 0.4)
        }
    }

    /// E_TEC in kWh/year, over off, sleep, and short idle.
    pub fn e_tec(&self) -> f64 {
        let p = &self.profile.power;
        let (t_off, t_sleep, t_idle) = self.weights();
        (t_off * p.off + t_sleep * p.sleep + t_idle * p.short_idle) * HOURS_PER_YEAR / 1000.0
    }

    /// E_TEC with the Wake-on-LAN readings substituted for off and sleep.
    pub fn e_tec_wol(&self) -> f64 {
        let p = &self.profile.power;
        let (t_off, t_sleep, t_idle) = self.weights();
        (t_off * p.off_wol + t_sleep * p.sleep_wol + t_idle * p.short_idle) * HOURS_PER_YEAR
            / 1000.0
    }

    /// E_TEC_MAX for `category`, with the graphics surcharge for `bracket`
    /// when a single discrete card is installed.
    pub fn e_tec_max(
        &self,
        category: Category,
        bracket: Option<GpuBracket>,
    ) -> Result<f64, EnergyError> {
        let base = self.tec_base(category)?;
        let memory = self.tec_memory(category);
        let storage = self.tec_storage();
        let tv_tuner = self.tec_tv_tuner();
        let audio = self.tec_audio();
        let graphics = match bracket {
            Some(b) => self.tec_graphics(b),
            None => 0.0,
        };
        debug!(
            base, memory, storage, tv_tuner, audio, graphics,
            "E_TEC_MAX terms"
        );
        Ok(base + memory + storage + tv_tuner + audio + graphics)
    }

    fn tec_base(&self, category: Category) -> Result<f64, EnergyError> {
        let notebook = self.profile.is_notebook();
        let value = match (self.rules, notebook, category) {
            (RuleSet::Y2014, true, Category::A) => 36.0,
            (RuleSet::Y2014, true, Category::B) => 48.0,
            (RuleSet::Y2014, true, Category::C) => 80.5,
            (RuleSet::Y2014, false, Category::A) => 133.0,
            (RuleSet::Y2014, false, Category::B) => 158.0,
            (RuleSet::Y2014, false, Category::C) => 188.0,
            (RuleSet::Y2014, false, Category::D) => 211.0,
            (RuleSet::Y2016, true, Category::A) => 27.0,
            (RuleSet::Y2016, true, Category::B) => 36.0,
            (RuleSet::Y2016, true, Category::C) => 60.5,
            (RuleSet::Y2016, false, Category::A) => 94.0,
            (RuleSet::Y2016, false, Category::B) => 112.0,
            (RuleSet::Y2016, false, Category::C) => 134.0,
            (RuleSet::Y2016, false, Category::D) => 150.0,
            (_, true, Category::D) => {
                return Err(EnergyError::InvalidCategory {
                    category: category.as_str(),
                    device: "Notebook",
                })
            }
        };
        Ok(value)
    }

    fn tec_graphics(&self, bracket: GpuBracket) -> f64 {
        let notebook = self.profile.is_notebook();
        let table: [f64; 7] = match (self.rules, notebook) {
            (RuleSet::Y2014, true) => [12.0, 20.0, 26.0, 37.0, 49.0, 61.0, 113.0],
            (RuleSet::Y2014, false) => [34.0, 54.0, 69.0, 100.0, 133.0, 166.0, 225.0],
            (RuleSet::Y2016, true) => [7.0, 11.0, 13.0, 20.0, 27.0, 33.0, 61.0],
            (RuleSet::Y2016, false) => [18.0, 30.0, 38.0, 54.0, 72.0, 90.0, 122.0],
        };
        table[bracket as usize]
    }

    fn tec_memory(&self, category: Category) -> f64 {
        let mem = self.profile.memory_gb;
        if self.profile.is_notebook() {
            if mem > 4.0 {
                0.4 * (mem - 4.0)
            } else {
                0.0
            }
        } else if category == Category::D {
            1.0 * (mem - 4.0)
        } else if mem > 2.0 {
            1.0 * (mem - 2.0)
        } else {
            0.0
        }
    }

    fn tec_storage(&self) -> f64 {
        let disks = self.profile.storage.count;
        if disks == 0 {
            return 0.0;
        }
        let per_drive = if self.profile.is_notebook() { 3.0 } else { 25.0 };
        per_drive * f64::from(disks - 1)
    }

    fn tec_tv_tuner(&self) -> f64 {
        if !self.profile.tv_tuner {
            0.0
        } else if self.profile.is_notebook() {
            2.1
        } else {
            15.0
        }
    }

    fn tec_audio(&self) -> f64 {
        if !self.profile.is_notebook() && self.profile.discrete_audio {
            15.0
        } else {
            0.0
        }
    }
}

/// Bracket labels as Lot 3 verdict lines spell them.
pub fn bracket_label(bracket: GpuBracket) -> &'static str {
    match bracket {
        GpuBracket::G1 => "G1 (FB_BW <= 16)",
        GpuBracket::G2 => "G2 (16 < FB_BW <= 32)",
        GpuBracket::G3 => "G3 (32 < FB_BW <= 64)",
        GpuBracket::G4 => "G4 (64 < FB_BW <= 96)",
        GpuBracket::G5 => "G5 (96 < FB_BW <= 128)",
        GpuBracket::G6 => "G6 (FB_BW > 128 (with FB Data Width < 192-bit))",
        GpuBracket::G7 => "G7 (FB_BW > 128 (with FB Data Width >= 192-bit))",
    }
}
