use serde::Serialize;

/// An enrolled student and the MAC address of their beacon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: &'static str,
    pub roll_number: &'static str,
    pub department: &'static str,
    pub year: i32,
    pub beacon_mac: &'static str,
}

/// Registered students, in declaration order.
pub const ROSTER: [Student; 2] = [
    Student {
        id: 1,
        name: "Mathumitha R",
        roll_number: "310622205081",
        department: "IT-B",
        year: 4,
        beacon_mac: "0E:A5:25:A0:00:16",
    },
    Student {
        id: 2,
        name: "Lipsa Sahoo",
        roll_number: "310622205075",
        department: "IT-B",
        year: 4,
        beacon_mac: "0E:A5:25:A0:00:13",
    },
];
