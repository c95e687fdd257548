//! Built-in test profiles with documented expected outcomes.

pub struct Fixture {
    pub note: &'static str,
    pub json: &'static str,
}

/// The built-in profile for `--test <n>`, 1 through 6.
pub fn fixture(n: u8) -> Option<Fixture> {
    let fixture = match n {
        1 => Fixture {
            note: "# Test case from Notebooks of Energy Star 5.2 & 6.0\n\
                   # E_TEC: 33.03 kWh/year, E_TEC_MAX: 41.6 kWh/year, PASS for 5.2\n\
                   # E_TEC: 40.7 kWh/year, E_TEC_MAX: 39.0 kWh/year, FAIL for 6.0",
            json: r#"{
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
            }"#,
        },
        2 => Fixture {
            note: "# Test case from Notebooks of Energy Star 7.0\n\
                   # E_TEC: 35.7 kWh/year, E_TEC_MAX: 19.7 kWh/year, FAIL for 7.0",
            json: r#"{
                "Product Type": 1,
                "Computer Type": 3,
                "CPU Clock": 2.0,
                "CPU Cores": 2,
                "Discrete Audio": false,
                "Discrete Graphics": false,
                "Discrete Graphics Cards": 0,
                "Switchable Graphics": true,
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
                "Off Mode": 0.5,
                "Off Mode with WOL": 0.5,
                "Sleep Mode": 1.0,
                "Sleep Mode with WOL": 1.0,
                "Long Idle Mode": 6.0,
                "Short Idle Mode": 10.0
            }"#,
        },
        3 => Fixture {
            note: "# Test case from Workstations of Energy Star 5.2\n\
                   # P_TEC: 45.1 W, P_MAX: 53.2 W, PASS for 5.2",
            json: r#"{
                "Product Type": 2,
                "Disk Number": 2,
                "SSD": 2,
                "Gigabit Ethernet": 0,
                "10 Gigabit Ethernet": 0,
                "Off Mode": 2.0,
                "Sleep Mode": 4.0,
                "Long Idle Mode": 50.0,
                "Short Idle Mode": 80.0,
                "Maximum Power": 180.0
            }"#,
        },
        4 => Fixture {
            note: "# Test case from Small-scale Servers of Energy Star 5.2",
            json: r#"{
                "Product Type": 3,
                "Memory Size": 4,
                "CPU Clock": 2.0,
                "CPU Cores": 1,
                "More Discrete Graphics": false,
                "Gigabit Ethernet": 1,
                "10 Gigabit Ethernet": 0,
                "Disk Number": 1,
                "Off Mode": 2.7,
                "Short Idle Mode": 65.0
            }"#,
        },
        5 => Fixture {
            note: "# Test case from Thin Clients of Energy Star 5.2",
            json: r#"{
                "Product Type": 4,
                "Integrated Display": true,
                "Display Width": 1366,
                "Display Height": 768,
                "Display Diagonal": 14,
                "Screen Area": 83.4,
                "Enhanced Display": true,
                "Discrete Graphics": false,
                "Off Mode": 2.7,
                "Sleep Mode": 2.7,
                "Long Idle Mode": 15.0,
                "Short Idle Mode": 15.0,
                "Gigabit Ethernet": 1,
                "10 Gigabit Ethernet": 0,
                "Media Codec": true
            }"#,
        },
        6 => Fixture {
            note: "# Test case for Notebooks with discrete graphics of Energy Star 7.0\n\
                   # E_TEC: 35.697, E_TEC_MAX: 36.2018334752, PASS for 7.0",
            json: r#"{
                "Product Type": 1,
                "Computer Type": 3,
                "CPU Clock": 2.0,
                "CPU Cores": 2,
                "Discrete Audio": false,
                "Discrete Graphics": true,
                "Discrete Graphics Cards": 1,
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
                "Off Mode": 0.5,
                "Off Mode with WOL": 0.5,
                "Sleep Mode": 1.0,
                "Sleep Mode with WOL": 1.0,
                "Long Idle Mode": 6.0,
                "Frame Buffer Bandwidth": 64.0,
                "Short Idle Mode": 10.0
            }"#,
        },
        _ => return None,
    };
    Some(fixture)
}
