//! Persisted profile documents.
//!
//! A document is the flat key/value JSON form a profile is saved to and
//! loaded from. Keys are human-readable titles, every field except the
//! product type is optional, and [`ProfileDocument::build`] checks that the
//! fields the product type needs are actually present.

use serde::{Deserialize, Serialize};

use crate::error::EnergyError;
use crate::profile::{
    ComputerProfile, ComputerType, DeviceProfile, Display, Ethernet, Graphics, PowerDraw,
    ServerProfile, Storage, ThinClientProfile, WorkstationProfile,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(rename = "Product Type")]
    pub product_type: u32,
    #[serde(rename = "Computer Type", skip_serializing_if = "Option::is_none")]
    pub computer_type: Option<u32>,
    #[serde(rename = "CPU Cores", skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    #[serde(rename = "CPU Clock", skip_serializing_if = "Option::is_none")]
    pub cpu_clock: Option<f64>,
    #[serde(rename = "Memory Size", skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<f64>,
    #[serde(rename = "Disk Number", skip_serializing_if = "Option::is_none")]
    pub disk_number: Option<u32>,
    #[serde(rename = "3.5 inch HDD", skip_serializing_if = "Option::is_none")]
    pub hdd_3_5: Option<u32>,
    #[serde(rename = "2.5 inch HDD", skip_serializing_if = "Option::is_none")]
    pub hdd_2_5: Option<u32>,
    #[serde(rename = "Hybrid HDD/SSD", skip_serializing_if = "Option::is_none")]
    pub hybrid: Option<u32>,
    #[serde(rename = "SSD", skip_serializing_if = "Option::is_none")]
    pub ssd: Option<u32>,
    #[serde(rename = "Switchable Graphics", skip_serializing_if = "Option::is_none")]
    pub switchable_graphics: Option<bool>,
    #[serde(rename = "Discrete Graphics", skip_serializing_if = "Option::is_none")]
    pub discrete_graphics: Option<bool>,
    #[serde(rename = "Discrete Graphics Cards", skip_serializing_if = "Option::is_none")]
    pub discrete_graphics_cards: Option<u32>,
    #[serde(rename = "Frame Buffer Bandwidth", skip_serializing_if = "Option::is_none")]
    pub frame_buffer_bandwidth: Option<f64>,
    #[serde(rename = "TV Tuner", skip_serializing_if = "Option::is_none")]
    pub tv_tuner: Option<bool>,
    #[serde(rename = "Discrete Audio", skip_serializing_if = "Option::is_none")]
    pub discrete_audio: Option<bool>,
    #[serde(rename = "Display Diagonal", skip_serializing_if = "Option::is_none")]
    pub display_diagonal: Option<f64>,
    #[serde(rename = "Display Width", skip_serializing_if = "Option::is_none")]
    pub display_width: Option<u32>,
    #[serde(rename = "Display Height", skip_serializing_if = "Option::is_none")]
    pub display_height: Option<u32>,
    #[serde(rename = "Screen Area", skip_serializing_if = "Option::is_none")]
    pub screen_area: Option<f64>,
    #[serde(rename = "Enhanced Display", skip_serializing_if = "Option::is_none")]
    pub enhanced_display: Option<bool>,
    #[serde(rename = "Integrated Display", skip_serializing_if = "Option::is_none")]
    pub integrated_display: Option<bool>,
    #[serde(rename = "Gigabit Ethernet", skip_serializing_if = "Option::is_none")]
    pub gigabit_ethernet: Option<u32>,
    #[serde(rename = "10 Gigabit Ethernet", skip_serializing_if = "Option::is_none")]
    pub ten_gigabit_ethernet: Option<u32>,
    #[serde(rename = "Off Mode", skip_serializing_if = "Option::is_none")]
    pub off_mode: Option<f64>,
    #[serde(rename = "Off Mode with WOL", skip_serializing_if = "Option::is_none")]
    pub off_mode_wol: Option<f64>,
    #[serde(rename = "Sleep Mode", skip_serializing_if = "Option::is_none")]
    pub sleep_mode: Option<f64>,
    #[serde(rename = "Sleep Mode with WOL", skip_serializing_if = "Option::is_none")]
    pub sleep_mode_wol: Option<f64>,
    #[serde(rename = "Long Idle Mode", skip_serializing_if = "Option::is_none")]
    pub long_idle_mode: Option<f64>,
    #[serde(rename = "Short Idle Mode", skip_serializing_if = "Option::is_none")]
    pub short_idle_mode: Option<f64>,
    #[serde(rename = "Maximum Power", skip_serializing_if = "Option::is_none")]
    pub maximum_power: Option<f64>,
    #[serde(rename = "More Discrete Graphics", skip_serializing_if = "Option::is_none")]
    pub more_discrete_graphics: Option<bool>,
    #[serde(rename = "Media Codec", skip_serializing_if = "Option::is_none")]
    pub media_codec: Option<bool>,
}

fn require<T: Copy>(field: Option<T>, key: &'static str) -> Result<T, EnergyError> {
    field.ok_or(EnergyError::MissingField(key))
}

impl ProfileDocument {
    pub fn from_json(input: &str) -> Result<Self, EnergyError> {
        serde_json::from_str(input).map_err(|e| EnergyError::Document(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, EnergyError> {
        serde_json::to_string_pretty(self).map_err(|e| EnergyError::Document(e.to_string()))
    }

    /// Validate the document against its product type and assemble the
    /// typed profile.
    pub fn build(&self) -> Result<DeviceProfile, EnergyError> {
        tracing::debug!(product_type = self.product_type, "building profile");
        match self.product_type {
            1 => Ok(DeviceProfile::Computer(self.build_computer()?)),
            2 => Ok(DeviceProfile::Workstation(self.build_workstation()?)),
            3 => Ok(DeviceProfile::Server(self.build_server()?)),
            4 => Ok(DeviceProfile::ThinClient(self.build_thin_client()?)),
            other => Err(EnergyError::UnknownProductType(other)),
        }
    }

    fn build_computer(&self) -> Result<ComputerProfile, EnergyError> {
        let computer_type = match require(self.computer_type, "Computer Type")? {
            1 => ComputerType::Desktop,
            2 => ComputerType::IntegratedDesktop,
            3 => ComputerType::Notebook,
            other => return Err(EnergyError::UnknownComputerType(other)),
        };

        let graphics = if self.switchable_graphics.unwrap_or(false) {
            Graphics::Switchable
        } else {
            match self.discrete_graphics_cards.unwrap_or(0) {
                0 => Graphics::Integrated,
                cards => Graphics::Discrete {
                    cards,
                    frame_buffer_bandwidth: self.frame_buffer_bandwidth,
                },
            }
        };

        let display = if computer_type == ComputerType::Desktop {
            None
        } else {
            Some(self.build_display()?)
        };

        Ok(ComputerProfile {
            computer_type,
            cpu_cores: require(self.cpu_cores, "CPU Cores")?,
            cpu_clock: require(self.cpu_clock, "CPU Clock")?,
            memory_gb: require(self.memory_size, "Memory Size")?,
            storage: self.build_storage()?,
            graphics,
            display,
            ethernet: self.build_ethernet(),
            power: self.build_power()?,
            tv_tuner: self.tv_tuner.unwrap_or(false),
            discrete_audio: self.discrete_audio.unwrap_or(false),
        })
    }

    fn build_workstation(&self) -> Result<WorkstationProfile, EnergyError> {
        Ok(WorkstationProfile {
            disk_count: require(self.disk_number, "Disk Number")?,
            ethernet: self.build_ethernet(),
            power: self.build_power()?,
            max_power: require(self.maximum_power, "Maximum Power")?,
        })
    }

    fn build_server(&self) -> Result<ServerProfile, EnergyError> {
        // Servers measure only off and short idle.
        let off = require(self.off_mode, "Off Mode")?;
        Ok(ServerProfile {
            cpu_cores: require(self.cpu_cores, "CPU Cores")?,
            memory_gb: require(self.memory_size, "Memory Size")?,
            disk_count: require(self.disk_number, "Disk Number")?,
            more_discrete: self.more_discrete_graphics.unwrap_or(false),
            ethernet: self.build_ethernet(),
            power: PowerDraw {
                off,
                off_wol: self.off_mode_wol.unwrap_or(off),
                sleep: self.sleep_mode.unwrap_or(0.0),
                sleep_wol: self.sleep_mode_wol.unwrap_or(0.0),
                long_idle: self.long_idle_mode.unwrap_or(0.0),
                short_idle: require(self.short_idle_mode, "Short Idle Mode")?,
            },
        })
    }

    fn build_thin_client(&self) -> Result<ThinClientProfile, EnergyError> {
        let display = if self.integrated_display.unwrap_or(false) {
            Some(self.build_display()?)
        } else {
            None
        };
        Ok(ThinClientProfile {
            discrete_graphics: self.discrete_graphics.unwrap_or(false),
            media_codec: self.media_codec.unwrap_or(false),
            display,
            ethernet: self.build_ethernet(),
            power: self.build_power()?,
        })
    }

    fn build_display(&self) -> Result<Display, EnergyError> {
        Ok(Display {
            diagonal: require(self.display_diagonal, "Display Diagonal")?,
            width: require(self.display_width, "Display Width")?,
            height: require(self.display_height, "Display Height")?,
            area: require(self.screen_area, "Screen Area")?,
            enhanced: self.enhanced_display.unwrap_or(false),
        })
    }

    fn build_storage(&self) -> Result<Storage, EnergyError> {
        Ok(Storage {
            count: require(self.disk_number, "Disk Number")?,
            hdd_3_5: self.hdd_3_5.unwrap_or(0),
            hdd_2_5: self.hdd_2_5.unwrap_or(0),
            hybrid: self.hybrid.unwrap_or(0),
            ssd: self.ssd.unwrap_or(0),
        })
    }

    fn build_ethernet(&self) -> Ethernet {
        Ethernet {
            gigabit: self.gigabit_ethernet.unwrap_or(0),
            ten_gigabit: self.ten_gigabit_ethernet.unwrap_or(0),
        }
    }

    fn build_power(&self) -> Result<PowerDraw, EnergyError> {
        let off = require(self.off_mode, "Off Mode")?;
        let sleep = require(self.sleep_mode, "Sleep Mode")?;
        Ok(PowerDraw {
            off,
            off_wol: self.off_mode_wol.unwrap_or(off),
            sleep,
            sleep_wol: self.sleep_mode_wol.unwrap_or(sleep),
            long_idle: require(self.long_idle_mode, "Long Idle Mode")?,
            short_idle: require(self.short_idle_mode, "Short Idle Mode")?,
        })
    }
}

impl From<&DeviceProfile> for ProfileDocument {
    fn from(profile: &DeviceProfile) -> Self {
        let mut doc = ProfileDocument::default();
        match profile {
            DeviceProfile::Computer(p) => {
                doc.product_type = 1;
                doc.computer_type = Some(match p.computer_type {
                    ComputerType::Desktop => 1,
                    ComputerType::IntegratedDesktop => 2,
                    ComputerType::Notebook => 3,
                });
                doc.cpu_cores = Some(p.cpu_cores);
                doc.cpu_clock = Some(p.cpu_clock);
                doc.memory_size = Some(p.memory_gb);
                doc.disk_number = Some(p.storage.count);
                doc.hdd_3_5 = Some(p.storage.hdd_3_5);
                doc.hdd_2_5 = Some(p.storage.hdd_2_5);
                doc.hybrid = Some(p.storage.hybrid);
                doc.ssd = Some(p.storage.ssd);
                doc.switchable_graphics = Some(p.graphics.is_switchable());
                doc.discrete_graphics = Some(p.graphics.is_discrete());
                doc.discrete_graphics_cards = Some(p.graphics.discrete_cards());
                doc.frame_buffer_bandwidth = p.graphics.frame_buffer_bandwidth();
                doc.tv_tuner = Some(p.tv_tuner);
                doc.discrete_audio = Some(p.discrete_audio);
                doc.set_display(p.display.as_ref());
                doc.set_ethernet(p.ethernet);
                doc.set_power(p.power);
            }
            DeviceProfile::Workstation(p) => {
                doc.product_type = 2;
                doc.disk_number = Some(p.disk_count);
                doc.maximum_power = Some(p.max_power);
                doc.set_ethernet(p.ethernet);
                doc.set_power(p.power);
            }
            DeviceProfile::Server(p) => {
                doc.product_type = 3;
                doc.cpu_cores = Some(p.cpu_cores);
                doc.memory_size = Some(p.memory_gb);
                doc.disk_number = Some(p.disk_count);
                doc.more_discrete_graphics = Some(p.more_discrete);
                doc.set_ethernet(p.ethernet);
                doc.set_power(p.power);
            }
            DeviceProfile::ThinClient(p) => {
                doc.product_type = 4;
                doc.discrete_graphics = Some(p.discrete_graphics);
                doc.media_codec = Some(p.media_codec);
                doc.integrated_display = Some(p.display.is_some());
                doc.set_display(p.display.as_ref());
                doc.set_ethernet(p.ethernet);
                doc.set_power(p.power);
            }
        }
        doc
    }
}

impl ProfileDocument {
    fn set_display(&mut self, display: Option<&Display>) {
        if let Some(d) = display {
            self.display_diagonal = Some(d.diagonal);
            self.display_width = Some(d.width);
            self.display_height = Some(d.height);
            self.screen_area = Some(d.area);
            self.enhanced_display = Some(d.enhanced);
        }
    }

    fn set_ethernet(&mut self, ethernet: Ethernet) {
        self.gigabit_ethernet = Some(ethernet.gigabit);
        self.ten_gigabit_ethernet = Some(ethernet.ten_gigabit);
    }

    fn set_power(&mut self, power: PowerDraw) {
        self.off_mode = Some(power.off);
        self.off_mode_wol = Some(power.off_wol);
        self.sleep_mode = Some(power.sleep);
        self.sleep_mode_wol = Some(power.sleep_wol);
        self.long_idle_mode = Some(power.long_idle);
        self.short_idle_mode = Some(power.short_idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTEBOOK_JSON: &str = r#"{
        "Product Type": 1,
        "Computer Type": 3,
        "CPU Clock": 2.0,
        "CPU Cores": 2,
        "Discrete Audio": false,
        "Discrete Graphics": false,
        "Discrete Graphics Cards": 0,
        "Switchable Graphics": false,
        "Disk Number": 1,
        "SSD": 1,
        "Display Diagonal": 14,
        "Display Height": 768,
        "Display Width": 1366,
        "Screen Area": 83.4,
        "Enhanced Display": false,
        "Gigabit Ethernet": 1,
        "10 Gigabit Ethernet": 0,
        "Memory Size": 8,
        "TV Tuner": false,
        "Off Mode": 1.0,
        "Off Mode with WOL": 1.0,
        "Sleep Mode": 1.7,
        "Sleep Mode with WOL": 1.7,
        "Long Idle Mode": 8.0,
        "Short Idle Mode": 10.0
    }"#;

    #[test]
    fn notebook_document_builds() {
        let doc = ProfileDocument::from_json(NOTEBOOK_JSON).unwrap();
        let profile = doc.build().unwrap();
        let p = match profile {
            DeviceProfile::Computer(p) => p,
            other => panic!("unexpected profile {:?}", other),
        };
        assert_eq!(p.computer_type, ComputerType::Notebook);
        assert_eq!(p.cpu_cores, 2);
        assert_eq!(p.memory_gb, 8.0);
        assert_eq!(p.graphics, Graphics::Integrated);
        assert_eq!(p.storage.ssd, 1);
        let d = p.display.unwrap();
        assert_eq!(d.width, 1366);
        assert_eq!(d.area, 83.4);
        assert_eq!(p.power.sleep_wol, 1.7);
    }

    #[test]
    fn wol_readings_default_to_plain_readings() {
        let mut doc = ProfileDocument::from_json(NOTEBOOK_JSON).unwrap();
        doc.off_mode_wol = None;
        doc.sleep_mode_wol = None;
        let p = match doc.build().unwrap() {
            DeviceProfile::Computer(p) => p,
            other => panic!("unexpected profile {:?}", other),
        };
        assert_eq!(p.power.off_wol, p.power.off);
        assert_eq!(p.power.sleep_wol, p.power.sleep);
    }

    #[test]
    fn missing_field_is_reported_by_key() {
        let mut doc = ProfileDocument::from_json(NOTEBOOK_JSON).unwrap();
        doc.memory_size = None;
        assert_eq!(
            doc.build().unwrap_err(),
            EnergyError::MissingField("Memory Size")
        );
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        let doc = ProfileDocument {
            product_type: 9,
            ..ProfileDocument::default()
        };
        assert_eq!(doc.build().unwrap_err(), EnergyError::UnknownProductType(9));
    }

    #[test]
    fn export_round_trips_through_json() {
        let doc = ProfileDocument::from_json(NOTEBOOK_JSON).unwrap();
        let profile = doc.build().unwrap();
        let exported = ProfileDocument::from(&profile);
        let json = exported.to_json().unwrap();
        let rebuilt = ProfileDocument::from_json(&json).unwrap().build().unwrap();
        assert_eq!(rebuilt, profile);
    }

    #[test]
    fn thin_client_without_display_builds() {
        let doc = ProfileDocument {
            product_type: 4,
            integrated_display: Some(false),
            media_codec: Some(true),
            off_mode: Some(2.7),
            sleep_mode: Some(2.7),
            long_idle_mode: Some(15.0),
            short_idle_mode: Some(15.0),
            gigabit_ethernet: Some(1),
            ..ProfileDocument::default()
        };
        let p = match doc.build().unwrap() {
            DeviceProfile::ThinClient(p) => p,
            other => panic!("unexpected profile {:?}", other),
        };
        assert!(p.display.is_none());
        assert!(p.media_codec);
    }
}
