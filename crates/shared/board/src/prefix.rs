use limitup_core::{BoardCategory, InstrumentId};
use limitup_ports::BoardClassifier;

/// STAR market (Shanghai science and technology innovation board)
pub const STAR_PREFIXES: [&str; 2] = ["688", "689"];

/// ChiNext (Shenzhen growth enterprise board)
pub const CHINEXT_PREFIXES: [&str; 1] = ["300"];

/// NEEQ / Beijing stock exchange
pub const NEEQ_PREFIXES: [&str; 15] = [
    "430", "831", "832", "833", "834", "835", "836", "837", "838", "839", "870", "871", "872",
    "873", "874",
];

/// Fixed-table A-share board classifier
///
/// Prefixes are checked in order:
/// 1. STAR (`688`, `689`)
/// 2. ChiNext (`300`)
/// 3. NEEQ (`430`, `831`-`839`, `870`-`874`)
/// 4. anything else is main board
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixBoardClassifier;

impl PrefixBoardClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl BoardClassifier for PrefixBoardClassifier {
    fn name(&self) -> &str {
        "prefix"
    }

    fn classify(&self, instrument: &InstrumentId) -> BoardCategory {
        if instrument.has_prefix(&STAR_PREFIXES) {
            BoardCategory::Star
        } else if instrument.has_prefix(&CHINEXT_PREFIXES) {
            BoardCategory::Chinext
        } else if instrument.has_prefix(&NEEQ_PREFIXES) {
            BoardCategory::Neeq
        } else {
            BoardCategory::Main
        }
    }
}
