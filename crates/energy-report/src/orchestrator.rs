//! Runs every rule set that applies to a device and assembles the report.
//!
//! Product type 1 computers get the full battery: Energy Star 5.2 through
//! the 8.0 draft, then ErP Lot 3 in both revisions and Lot 26. Workstations
//! and servers are covered by Energy Star 5.2 and 6.0 only, thin clients by
//! 5.2 and the thin-client equations of 6.0.

use tracing::debug;

use energy_core::{
    ComputerProfile, ComputerType, DeviceProfile, EnergyError, FrameBufferWidth, GpuBracket,
    Qualification, ServerProfile, ThinClientProfile, WorkstationProfile,
};
use energy_erp::{lot26, special_case, special_case_warning, ErpLot26, ErpLot3, RuleSet};
use energy_star::estar52::{self, EnergyStar52};
use energy_star::estar60::{self, EnergyStar60};
use energy_star::estar70::EnergyStar70;
use energy_star::estar80::{
    EnergyStar80, PROXY_ALLOWANCES, PSU_ALLOWANCES_DESKTOP, PSU_ALLOWANCES_INTEGRATED,
};
use energy_star::{psu_factor, PsuTier};

use crate::report::{MetricCheck, Report};

/// Evaluate every rule set that applies to the device.
pub fn evaluate(device: &DeviceProfile) -> Result<Report, EnergyError> {
    let mut report = Report::new();
    match device {
        DeviceProfile::Computer(p) => {
            computer_estar52(&mut report, p);
            computer_estar60(&mut report, p);
            computer_estar70(&mut report, p);
            computer_estar80(&mut report, p);
            erp_lot3(&mut report, p)?;
            erp_lot26(&mut report, p);
        }
        DeviceProfile::Workstation(p) => {
            workstation(&mut report, p);
        }
        DeviceProfile::Server(p) => {
            server(&mut report, p);
        }
        DeviceProfile::ThinClient(p) => {
            thin_client(&mut report, p);
        }
    }
    Ok(report)
}

fn psu_note(tier: PsuTier) -> &'static str {
    match tier {
        PsuTier::None => {
            "If power supplies do not meet the requirements of Power Supply Efficiency Allowance,"
        }
        PsuTier::Lower => "If power supplies meet lower efficiency requirements,",
        PsuTier::Higher => "If power supplies meet higher efficiency requirements,",
    }
}

fn wol_note(wol: bool) -> &'static str {
    if wol {
        "If Wake-On-LAN (WOL) is enabled by default upon shipment."
    } else {
        "If Wake-On-LAN (WOL) is disabled by default upon shipment."
    }
}

fn computer_estar52(report: &mut Report, p: &ComputerProfile) {
    report.heading("Energy Star 5:");
    let calc = EnergyStar52::new(p);
    let e_tec = calc.e_tec();

    let under_64 = calc.allowances(FrameBufferWidth::Under64);
    let between = calc.allowances(FrameBufferWidth::Between64And128);
    let over_128 = calc.allowances(FrameBufferWidth::Over128);
    debug!(?under_64, ?between, ?over_128, "allowances per width");

    let push_rows = |report: &mut Report, indent: usize, rows: &[(energy_core::Category, f64)]| {
        for &(category, max) in rows {
            report.check(
                indent,
                Some(format!("Category {}", category)),
                None,
                vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
            );
        }
    };

    // The width brackets frequently agree; collapse them to one section
    // when both the categories and the allowances match.
    if under_64 == between && between == over_128 {
        push_rows(report, 2, &under_64);
    } else if p.is_notebook() {
        report.note(2, "If GPU Frame Buffer Width <= 64 bits,");
        push_rows(report, 4, &under_64);
        report.note(2, "If 64 bits < GPU Frame Buffer Width <= 128 bits,");
        push_rows(report, 4, &between);
        report.note(2, "If GPU Frame Buffer Width > 128 bits,");
        push_rows(report, 4, &over_128);
    } else {
        report.note(2, "If GPU Frame Buffer Width <= 128 bits,");
        push_rows(report, 4, &between);
        report.note(2, "If GPU Frame Buffer Width > 128 bits,");
        push_rows(report, 4, &over_128);
    }
}

fn computer_estar60(report: &mut Report, p: &ComputerProfile) {
    report.heading("Energy Star 6:");
    let calc = EnergyStar60::new(p);
    let e_tec = calc.e_tec();

    for tier in PsuTier::ALL {
        report.note(2, psu_note(tier));
        let factor = psu_factor(tier, p.computer_type);
        if p.graphics.is_discrete() {
            for bracket in GpuBracket::ALL {
                let max = calc.e_tec_max(bracket) * factor;
                report.check(
                    4,
                    None,
                    Some(bracket.label().to_string()),
                    vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
                );
            }
        } else {
            let max = calc.e_tec_max(GpuBracket::G1) * factor;
            report.check(
                4,
                None,
                None,
                vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
            );
        }
    }
}

fn computer_estar70(report: &mut Report, p: &ComputerProfile) {
    report.heading("Energy Star 7:");
    let calc = EnergyStar70::new(p);
    let e_tec = calc.e_tec();

    if p.is_notebook() {
        let max = calc.notebook_e_tec_max();
        report.check(
            4,
            None,
            None,
            vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
        );
        return;
    }

    for tier in PsuTier::ALL {
        report.note(2, psu_note(tier));
        let factor = psu_factor(tier, p.computer_type);
        if p.graphics.is_discrete() {
            for bracket in GpuBracket::ALL {
                let max = calc.e_tec_max(bracket) * factor;
                report.check(
                    4,
                    None,
                    Some(bracket.label().to_string()),
                    vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
                );
            }
        } else {
            let max = calc.e_tec_max(GpuBracket::G1) * factor;
            report.check(
                4,
                None,
                None,
                vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
            );
        }
    }
}

fn computer_estar80(report: &mut Report, p: &ComputerProfile) {
    report.heading("Energy Star 8 draft 2:");
    let calc = EnergyStar80::new(p);
    let e_tec = calc.e_tec();

    match p.computer_type {
        ComputerType::Desktop => {
            let base_max = calc.e_tec_max(false);
            for proxy in PROXY_ALLOWANCES {
                if proxy == 0.0 {
                    report.note(
                        2,
                        "If the desktop computer doesn't implement a full capability - \
                         full network proxy solution,",
                    );
                } else {
                    report.note(
                        2,
                        "If the desktop computer implements a full capability - \
                         full network proxy solution,",
                    );
                }
                for (tier, psu) in PsuTier::ALL.into_iter().zip(PSU_ALLOWANCES_DESKTOP) {
                    report.note(3, psu_note(tier));
                    let max = base_max * (1.0 + psu + proxy);
                    report.check(
                        5,
                        None,
                        None,
                        vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
                    );
                }
            }
        }
        ComputerType::IntegratedDesktop => {
            let base_max = calc.e_tec_max(false);
            for (tier, psu) in PsuTier::ALL.into_iter().zip(PSU_ALLOWANCES_INTEGRATED) {
                report.note(2, psu_note(tier));
                let max = base_max * (1.0 + psu);
                report.check(
                    4,
                    None,
                    None,
                    vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
                );
            }
        }
        ComputerType::Notebook => {
            report.note(
                2,
                "If the system doesn't meet the full Mobile Workstation definition,",
            );
            report.check(
                4,
                None,
                None,
                vec![MetricCheck::new(
                    "E_TEC",
                    "E_TEC_MAX",
                    e_tec,
                    calc.e_tec_max(false),
                )],
            );
            report.note(
                2,
                "If the system meets the full Mobile Workstation definition,",
            );
            report.check(
                4,
                None,
                None,
                vec![MetricCheck::new(
                    "E_TEC",
                    "E_TEC_MAX",
                    e_tec,
                    calc.e_tec_max(true),
                )],
            );
        }
    }
}

fn erp_lot3(report: &mut Report, p: &ComputerProfile) -> Result<(), EnergyError> {
    report.heading(RuleSet::Y2014.heading());
    // A high-bandwidth configuration falls outside the 2014 tables; only
    // the 2016 revision applies to it.
    if special_case(p) {
        report.warning(special_case_warning(p));
    } else {
        erp_lot3_revision(report, p, RuleSet::Y2014)?;
    }
    report.heading(RuleSet::Y2016.heading());
    erp_lot3_revision(report, p, RuleSet::Y2016)?;
    Ok(())
}

fn erp_lot3_revision(
    report: &mut Report,
    p: &ComputerProfile,
    rules: RuleSet,
) -> Result<(), EnergyError> {
    let calc = ErpLot3::new(p, rules);
    if let Err(gate) = calc.verify_standby() {
        report.failure(
            6,
            format!(
                "Fail because {} ({:?}) > {:?}",
                gate.metric, gate.measured, gate.ceiling
            ),
        );
        return Ok(());
    }

    let e_tec = calc.e_tec();
    let e_tec_wol = calc.e_tec_wol();
    for (category, qualification) in calc.candidates()? {
        match qualification {
            Qualification::Qualifies => {
                report.note(2, format!("Category {}:", category));
            }
            Qualification::Conditional => {
                report.note(
                    2,
                    format!(
                        "Category {} if a discrete graphics card (dGfx) meeting the G3 \
                         (with FB Data Width > 128-bit), G4, G5, G6 or G7 classification:",
                        category
                    ),
                );
            }
            Qualification::DoesNotQualify => continue,
        }

        match p.graphics.discrete_cards() {
            0 => {
                let max = calc.e_tec_max(category, None)?;
                report.check(6, None, None, lot3_checks(e_tec, e_tec_wol, max));
            }
            1 => {
                for bracket in GpuBracket::ALL {
                    let max = calc.e_tec_max(category, Some(bracket))?;
                    report.check(
                        6,
                        None,
                        Some(energy_erp::lot3::bracket_label(bracket).to_string()),
                        lot3_checks(e_tec, e_tec_wol, max),
                    );
                }
            }
            _ => {
                report.note(
                    4,
                    "No console output because of more than one discrete graphics card.",
                );
            }
        }
    }
    Ok(())
}

fn lot3_checks(e_tec: f64, e_tec_wol: f64, max: f64) -> Vec<MetricCheck> {
    vec![
        MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max),
        MetricCheck::new("E_TEC_WOL", "E_TEC_MAX", e_tec_wol, max),
    ]
}

fn erp_lot26(report: &mut Report, p: &ComputerProfile) {
    report.heading(lot26::HEADING);
    let calc = ErpLot26::new(&p.power);
    let failures = calc.failures();
    if failures.is_empty() {
        report.note(
            2,
            format!(
                "Pass. P_SLEEP_WOL ({:?}) <= {:?} and P_OFF_WOL ({:?}) <= {:?}",
                calc.sleep_wol(),
                lot26::SLEEP_WOL_MAX,
                calc.off_wol(),
                lot26::OFF_WOL_MAX
            ),
        );
    } else {
        for gate in failures {
            report.failure(
                2,
                format!(
                    "Failed. {} ({:?}) > {:?}",
                    gate.metric, gate.measured, gate.ceiling
                ),
            );
        }
    }
}

fn workstation(report: &mut Report, p: &WorkstationProfile) {
    report.heading("Energy Star 5.2:");
    report.check(
        2,
        None,
        None,
        vec![MetricCheck::new(
            "P_TEC",
            "P_TEC_MAX",
            estar52::workstation_p_tec(p),
            estar52::workstation_p_tec_max(p),
        )],
    );

    report.heading("Energy Star 6.0:");
    report.check(
        2,
        None,
        None,
        vec![MetricCheck::new(
            "P_TEC",
            "P_TEC_MAX",
            estar60::workstation_p_tec(p),
            estar60::workstation_p_tec_max(p),
        )],
    );
}

fn server(report: &mut Report, p: &ServerProfile) {
    report.heading("Energy Star 5.2:");
    for wol in [true, false] {
        let (category, off_max, idle_max) = estar52::server_limits(p, wol);
        report.note(2, wol_note(wol));
        report.check(
            4,
            Some(format!("Category {}", category)),
            None,
            vec![
                MetricCheck::new("P_OFF", "P_OFF_MAX", p.power.off, off_max),
                MetricCheck::new("P_IDLE", "P_IDLE_MAX", p.power.short_idle, idle_max),
            ],
        );
    }

    report.heading("Energy Star 6.0:");
    for wol in [true, false] {
        report.note(2, wol_note(wol));
        report.check(
            4,
            None,
            None,
            vec![
                MetricCheck::new("P_OFF", "P_OFF_MAX", p.power.off, estar60::server_off_max(wol)),
                MetricCheck::new(
                    "P_IDLE",
                    "P_IDLE_MAX",
                    p.power.short_idle,
                    estar60::server_idle_max(p),
                ),
            ],
        );
    }
}

fn thin_client(report: &mut Report, p: &ThinClientProfile) {
    report.heading("Energy Star 5.2:");
    let (category, idle_max) = estar52::thin_client_idle_limit(p);
    for wol in [true, false] {
        report.note(2, wol_note(wol));
        report.note(4, format!("Category {}:", category));
        report.check(
            6,
            None,
            None,
            vec![
                MetricCheck::new("P_OFF", "P_OFF_MAX", p.power.off, estar52::thin_client_off_max(wol)),
                MetricCheck::new(
                    "P_SLEEP",
                    "P_SLEEP_MAX",
                    p.power.sleep,
                    estar52::thin_client_sleep_max(wol),
                ),
                MetricCheck::new("P_IDLE", "P_IDLE_MAX", p.power.short_idle, idle_max),
            ],
        );
    }

    report.heading("Energy Star 6.0:");
    let e_tec = estar60::thin_client_e_tec(p);
    for discrete in [true, false] {
        for wol in [true, false] {
            let graphics = if discrete {
                "it has Discrete Graphics enabled"
            } else {
                "it doesn't have Discrete Graphics enabled"
            };
            let lan = if wol {
                "Wake-On-LAN (WOL) is enabled"
            } else {
                "Wake-On-LAN (WOL) is disabled"
            };
            report.note(
                2,
                format!("If {} and {} by default upon shipment,", graphics, lan),
            );
            let max = estar60::thin_client_e_tec_max(p, discrete, wol);
            report.check(
                4,
                None,
                None,
                vec![MetricCheck::new("E_TEC", "E_TEC_MAX", e_tec, max)],
            );
        }
    }
}
