//! Bin status breakdown for the donut widget.

use serde::Serialize;

/// One slice of the bin status donut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSlice {
    pub name: &'static str,
    /// Number of bins in this status class.
    pub value: u32,
    pub color: &'static str,
}

/// Fleet status snapshot shown on the overview page.
pub const SAMPLE_STATUS: [StatusSlice; 3] = [
    StatusSlice {
        name: "Critical",
        value: 12,
        color: "#ef4444",
    },
    StatusSlice {
        name: "Warning",
        value: 18,
        color: "#f59e0b",
    },
    StatusSlice {
        name: "Normal",
        value: 35,
        color: "#10b981",
    },
];

/// Total bin count across all slices.
pub fn total_bins(slices: &[StatusSlice]) -> u32 {
    slices.iter().map(|slice| slice.value).sum()
}

/// A slice's share of the fleet as a whole-number percentage, for tooltips.
pub fn slice_percentage(slices: &[StatusSlice], slice: &StatusSlice) -> u32 {
    let total = total_bins(slices);
    if total == 0 {
        return 0;
    }
    (f64::from(slice.value) / f64::from(total) * 100.0).round() as u32
}
