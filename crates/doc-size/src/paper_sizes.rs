//! Named paper size presets
//!
//! Every entry stores the size in the units the standard defines it in
//! (millimetres for ISO and photographic sizes, inches for North American
//! sizes), always portrait: the first dimension is the shorter one.

use crate::types::Units;

/// Canonical size of a paper preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperSizeEntry {
    pub units: Units,
    pub dimensions: [f64; 2],
}

const fn mm(width: f64, height: f64) -> PaperSizeEntry {
    PaperSizeEntry {
        units: Units::Mm,
        dimensions: [width, height],
    }
}

const fn inches(width: f64, height: f64) -> PaperSizeEntry {
    PaperSizeEntry {
        units: Units::In,
        dimensions: [width, height],
    }
}

static PAPER_SIZES: &[(&str, PaperSizeEntry)] = &[
    // =========================================================================
    // Common
    // =========================================================================
    ("postcard", mm(101.6, 152.4)),
    ("poster-small", mm(280.0, 430.0)),
    ("poster", mm(460.0, 610.0)),
    ("poster-large", mm(610.0, 910.0)),
    ("business-card", mm(50.8, 88.9)),
    // =========================================================================
    // Photographic prints
    // =========================================================================
    ("2r", mm(64.0, 89.0)),
    ("3r", mm(89.0, 127.0)),
    ("4r", mm(102.0, 152.0)),
    ("5r", mm(127.0, 178.0)),
    ("6r", mm(152.0, 203.0)),
    ("8r", mm(203.0, 254.0)),
    ("10r", mm(254.0, 305.0)),
    ("11r", mm(279.0, 356.0)),
    ("12r", mm(305.0, 381.0)),
    // =========================================================================
    // ISO 216 A series
    // =========================================================================
    ("a0", mm(841.0, 1189.0)),
    ("a1", mm(594.0, 841.0)),
    ("a2", mm(420.0, 594.0)),
    ("a3", mm(297.0, 420.0)),
    ("a4", mm(210.0, 297.0)),
    ("a5", mm(148.0, 210.0)),
    ("a6", mm(105.0, 148.0)),
    ("a7", mm(74.0, 105.0)),
    ("a8", mm(52.0, 74.0)),
    ("a9", mm(37.0, 52.0)),
    ("a10", mm(26.0, 37.0)),
    ("4a0", mm(1682.0, 2378.0)),
    ("2a0", mm(1189.0, 1682.0)),
    // =========================================================================
    // ISO 216 B series
    // =========================================================================
    ("b0", mm(1000.0, 1414.0)),
    ("b1", mm(707.0, 1000.0)),
    ("b2", mm(500.0, 707.0)),
    ("b3", mm(353.0, 500.0)),
    ("b4", mm(250.0, 353.0)),
    ("b5", mm(176.0, 250.0)),
    ("b6", mm(125.0, 176.0)),
    ("b7", mm(88.0, 125.0)),
    ("b8", mm(62.0, 88.0)),
    ("b9", mm(44.0, 62.0)),
    ("b10", mm(31.0, 44.0)),
    // =========================================================================
    // ISO 269 C series (envelopes)
    // =========================================================================
    ("c0", mm(917.0, 1297.0)),
    ("c1", mm(648.0, 917.0)),
    ("c2", mm(458.0, 648.0)),
    ("c3", mm(324.0, 458.0)),
    ("c4", mm(229.0, 324.0)),
    ("c5", mm(162.0, 229.0)),
    ("c6", mm(114.0, 162.0)),
    ("c7", mm(81.0, 114.0)),
    ("c8", mm(57.0, 81.0)),
    ("c9", mm(40.0, 57.0)),
    ("c10", mm(28.0, 40.0)),
    // =========================================================================
    // Raw and supplementary raw formats
    // =========================================================================
    ("ra0", mm(860.0, 1220.0)),
    ("ra1", mm(610.0, 860.0)),
    ("ra2", mm(430.0, 610.0)),
    ("ra3", mm(305.0, 430.0)),
    ("ra4", mm(215.0, 305.0)),
    ("sra0", mm(900.0, 1280.0)),
    ("sra1", mm(640.0, 900.0)),
    ("sra2", mm(450.0, 640.0)),
    ("sra3", mm(320.0, 450.0)),
    ("sra4", mm(225.0, 320.0)),
    // =========================================================================
    // North American
    // =========================================================================
    ("half-letter", inches(5.5, 8.5)),
    ("letter", inches(8.5, 11.0)),
    ("legal", inches(8.5, 14.0)),
    ("junior-legal", inches(5.0, 8.0)),
    ("ledger", inches(11.0, 17.0)),
    ("tabloid", inches(11.0, 17.0)),
    ("government-letter", inches(8.0, 10.5)),
];

/// Look up a preset by name, ignoring case
pub fn lookup(key: &str) -> Option<&'static PaperSizeEntry> {
    let key = key.to_lowercase();
    PAPER_SIZES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, entry)| entry)
}

/// All presets in table order
pub fn presets() -> impl Iterator<Item = (&'static str, &'static PaperSizeEntry)> {
    PAPER_SIZES.iter().map(|(name, entry)| (*name, entry))
}
