//! ErP Lot 26 (networked standby) calculator, Tier 3 ceilings.

use energy_core::profile::PowerDraw;

use crate::StandbyFailure;

pub const HEADING: &str = "ErP Lot 26 Tier 3 (1 Jan 2019):";

/// Tier 3 allows at most 2.0 W asleep and 0.5 W off, both with
/// Wake-on-LAN armed.
pub const SLEEP_WOL_MAX: f64 = 2.0;
pub const OFF_WOL_MAX: f64 = 0.5;

pub struct ErpLot26<'a> {
    power: &'a PowerDraw,
}

impl<'a> ErpLot26<'a> {
    pub fn new(power: &'a PowerDraw) -> Self {
        ErpLot26 { power }
    }

    /// Every ceiling the device exceeds. Empty means a pass.
    pub fn failures(&self) -> Vec<StandbyFailure> {
        let mut out = Vec::new();
        if self.power.sleep_wol > SLEEP_WOL_MAX {
            out.push(StandbyFailure {
                metric: "P_SLEEP_WOL",
                measured: self.power.sleep_wol,
                ceiling: SLEEP_WOL_MAX,
            });
        }
        if self.power.off_wol > OFF_WOL_MAX {
            out.push(StandbyFailure {
                metric: "P_OFF_WOL",
                measured: self.power.off_wol,
                ceiling: OFF_WOL_MAX,
            });
        }
        out
    }

    pub fn sleep_wol(&self) -> f64 {
        self.power.sleep_wol
    }

    pub fn off_wol(&self) -> f64 {
        self.power.off_wol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(sleep_wol: f64, off_wol: f64) -> PowerDraw {
        PowerDraw {
            off: off_wol,
            off_wol,
            sleep: sleep_wol,
            sleep_wol,
            long_idle: 6.0,
            short_idle: 10.0,
        }
    }

    #[test]
    fn within_ceilings_passes() {
        let p = draw(1.5, 0.3);
        assert!(ErpLot26::new(&p).failures().is_empty());
    }

    #[test]
    fn sleep_ceiling_exceeded() {
        let p = draw(2.5, 0.3);
        let failures = ErpLot26::new(&p).failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].metric, "P_SLEEP_WOL");
        assert_eq!(failures[0].ceiling, 2.0);
    }

    #[test]
    fn both_ceilings_exceeded() {
        let p = draw(2.5, 0.6);
        let failures = ErpLot26::new(&p).failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[1].metric, "P_OFF_WOL");
    }

    #[test]
    fn ceilings_are_exclusive() {
        let p = draw(2.0, 0.5);
        assert!(ErpLot26::new(&p).failures().is_empty());
    }
}
