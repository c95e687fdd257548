//! Best-effort hardware probing.
//!
//! Fills the fields of a [`ProfileDocument`] that the running system can
//! answer for itself: CPU topology, memory size, disk count, and Ethernet
//! ports. Power draws require a meter and stay unset, as do the product
//! and computer types, which the operator must confirm.

use std::fs;
use std::path::Path;

use sysinfo::{Disks, System};
use tracing::debug;

use energy_core::ProfileDocument;

/// Probe the local machine into a partial profile document. Fields the
/// probe cannot answer are left unset.
pub fn probe() -> ProfileDocument {
    let mut doc = ProfileDocument {
        product_type: 1,
        ..ProfileDocument::default()
    };

    let sys = System::new_all();

    if let Some(cores) = sys.physical_core_count() {
        doc.cpu_cores = Some(cores as u32);
    }
    if let Some(cpu) = sys.cpus().first() {
        // sysinfo reports MHz.
        doc.cpu_clock = Some(cpu.frequency() as f64 / 1000.0);
    }
    doc.memory_size = Some(sys.total_memory() as f64 / f64::from(1 << 30));

    let disks = Disks::new_with_refreshed_list();
    doc.disk_number = Some(disks.list().len() as u32);

    let (gigabit, ten_gigabit) = ethernet_ports(Path::new("/sys/class/net"));
    doc.gigabit_ethernet = Some(gigabit);
    doc.ten_gigabit_ethernet = Some(ten_gigabit);

    doc.computer_type = Some(if has_battery() { 3 } else { 1 });

    debug!(
        cores = ?doc.cpu_cores,
        clock = ?doc.cpu_clock,
        memory = ?doc.memory_size,
        disks = ?doc.disk_number,
        "probed"
    );
    doc
}

/// Count wired ports by their reported link speed. Interfaces that are
/// down report -1 and are skipped, as are virtual devices without a
/// speed attribute.
fn ethernet_ports(net: &Path) -> (u32, u32) {
    let mut gigabit = 0;
    let mut ten_gigabit = 0;
    let entries = match fs::read_dir(net) {
        Ok(entries) => entries,
        Err(_) => return (0, 0),
    };
    for entry in entries.flatten() {
        let speed_path = entry.path().join("speed");
        let Ok(raw) = fs::read_to_string(&speed_path) else {
            continue;
        };
        match raw.trim().parse::<i64>() {
            Ok(10000) => ten_gigabit += 1,
            Ok(1000) => gigabit += 1,
            Ok(speed) => debug!(device = ?entry.file_name(), speed, "skipped port"),
            Err(_) => {}
        }
    }
    (gigabit, ten_gigabit)
}

fn has_battery() -> bool {
    let entries = match fs::read_dir("/sys/class/power_supply") {
        Ok(entries) => entries,
        Err(_) => return false,
    };
    entries
        .flatten()
        .any(|e| e.file_name().to_string_lossy().starts_with("BAT"))
}
