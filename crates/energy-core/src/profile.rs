//! Device profiles: the read-only facts each rule set evaluates.
//!
//! A profile is assembled once (from a [`crate::ProfileDocument`] or by a
//! hardware probe) and never mutated afterwards. Each product type carries
//! only the fields its rule sets consume.

use serde::{Deserialize, Serialize};

/// Measured power draw per mode, in watts. `off_wol` and `sleep_wol` default
/// to the plain readings when a profile does not measure them separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerDraw {
    pub off: f64,
    pub off_wol: f64,
    pub sleep: f64,
    pub sleep_wol: f64,
    pub long_idle: f64,
    pub short_idle: f64,
}

/// Installed storage, bucketed by media type. `count` is the total number
/// of drives; the buckets may not sum to it when the media type of some
/// drive is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    pub count: u32,
    pub hdd_3_5: u32,
    pub hdd_2_5: u32,
    pub hybrid: u32,
    pub ssd: u32,
}

impl Storage {
    pub fn additional(&self) -> u32 {
        self.count.saturating_sub(1)
    }
}

/// Graphics subsystem. A switchable configuration can fall back to its
/// integrated GPU and is scored separately from a plain discrete one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Graphics {
    Integrated,
    Switchable,
    Discrete {
        cards: u32,
        /// Frame buffer bandwidth in GB/s, when declared.
        frame_buffer_bandwidth: Option<f64>,
    },
}

impl Graphics {
    pub fn is_discrete(&self) -> bool {
        matches!(self, Graphics::Discrete { .. })
    }

    pub fn is_switchable(&self) -> bool {
        matches!(self, Graphics::Switchable)
    }

    pub fn discrete_cards(&self) -> u32 {
        match self {
            Graphics::Discrete { cards, .. } => *cards,
            _ => 0,
        }
    }

    pub fn frame_buffer_bandwidth(&self) -> Option<f64> {
        match self {
            Graphics::Discrete {
                frame_buffer_bandwidth,
                ..
            } => *frame_buffer_bandwidth,
            _ => None,
        }
    }
}

/// An integrated display panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Diagonal in inches.
    pub diagonal: f64,
    pub width: u32,
    pub height: u32,
    /// Viewable screen area in square inches.
    pub area: f64,
    pub enhanced: bool,
}

impl Display {
    /// Native resolution in megapixels.
    pub fn megapixels(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height) / 1_000_000.0
    }
}

/// Energy-efficient-Ethernet capable ports, by link speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ethernet {
    pub gigabit: u32,
    pub ten_gigabit: u32,
}

/// Product type 1 computer classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerType {
    Desktop,
    IntegratedDesktop,
    Notebook,
}

impl ComputerType {
    pub fn is_notebook(&self) -> bool {
        matches!(self, ComputerType::Notebook)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComputerType::Desktop => "Desktop",
            ComputerType::IntegratedDesktop => "Integrated Desktop",
            ComputerType::Notebook => "Notebook",
        }
    }
}

/// A desktop, integrated desktop, or notebook computer (product type 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputerProfile {
    pub computer_type: ComputerType,
    pub cpu_cores: u32,
    /// Base clock in GHz.
    pub cpu_clock: f64,
    /// Installed memory in GB.
    pub memory_gb: f64,
    pub storage: Storage,
    pub graphics: Graphics,
    pub display: Option<Display>,
    pub ethernet: Ethernet,
    pub power: PowerDraw,
    pub tv_tuner: bool,
    pub discrete_audio: bool,
}

impl ComputerProfile {
    /// Performance score: physical cores times base clock.
    pub fn performance(&self) -> f64 {
        f64::from(self.cpu_cores) * self.cpu_clock
    }

    pub fn is_notebook(&self) -> bool {
        self.computer_type.is_notebook()
    }
}

/// A workstation (product type 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkstationProfile {
    pub disk_count: u32,
    pub ethernet: Ethernet,
    pub power: PowerDraw,
    /// Maximum measured power in watts, from the benchmark run.
    pub max_power: f64,
}

/// A small-scale server (product type 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerProfile {
    pub cpu_cores: u32,
    pub memory_gb: f64,
    pub disk_count: u32,
    /// More than one discrete graphics device installed.
    pub more_discrete: bool,
    pub ethernet: Ethernet,
    pub power: PowerDraw,
}

/// A thin client (product type 4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinClientProfile {
    pub discrete_graphics: bool,
    /// Supports local multimedia decode (the relaxed idle allowance).
    pub media_codec: bool,
    pub display: Option<Display>,
    pub ethernet: Ethernet,
    pub power: PowerDraw,
}

/// A device under evaluation, tagged by product type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceProfile {
    Computer(ComputerProfile),
    Workstation(WorkstationProfile),
    Server(ServerProfile),
    ThinClient(ThinClientProfile),
}

impl DeviceProfile {
    pub fn product_type_name(&self) -> &'static str {
        match self {
            DeviceProfile::Computer(p) => p.computer_type.name(),
            DeviceProfile::Workstation(_) => "Workstation",
            DeviceProfile::Server(_) => "Small-scale Server",
            DeviceProfile::ThinClient(_) => "Thin Client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_is_cores_times_clock() {
        let p = ComputerProfile {
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
            graphics: Graphics::Integrated,
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
        };
        assert_eq!(p.performance(), 4.0);
        assert!(p.is_notebook());
    }

    #[test]
    fn storage_additional_drives() {
        let s = Storage {
            count: 0,
            hdd_3_5: 0,
            hdd_2_5: 0,
            hybrid: 0,
            ssd: 0,
        };
        assert_eq!(s.additional(), 0);
        let s = Storage { count: 3, ..s };
        assert_eq!(s.additional(), 2);
    }

    #[test]
    fn graphics_accessors() {
        let g = Graphics::Discrete {
            cards: 1,
            frame_buffer_bandwidth: Some(64.0),
        };
        assert!(g.is_discrete());
        assert_eq!(g.discrete_cards(), 1);
        assert_eq!(g.frame_buffer_bandwidth(), Some(64.0));
        assert!(!Graphics::Switchable.is_discrete());
        assert_eq!(Graphics::Integrated.discrete_cards(), 0);
    }

    #[test]
    fn display_megapixels() {
        let d = Display {
            diagonal: 14.0,
            width: 1366,
            height: 768,
            area: 83.4,
            enhanced: false,
        };
        assert!((d.megapixels() - 1.049088).abs() < 1e-9);
    }
}
