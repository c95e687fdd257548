//! Performance categories and graphics brackets shared by the rule sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance tier within a rule set. Desktop-class ladders run A..D,
/// notebook ladders A..C. Tiers are cumulative: a device qualifying for a
/// higher tier also qualifies for every tier below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    /// The desktop-class ladder, least to most capable.
    pub const DESKTOP: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

    /// The notebook ladder.
    pub const NOTEBOOK: [Category; 3] = [Category::A, Category::B, Category::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a category qualification check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    Qualifies,
    /// Qualifies only under a graphics condition the caller has not fixed
    /// (a discrete card in the wide-frame-buffer brackets).
    Conditional,
    DoesNotQualify,
}

impl Qualification {
    pub fn is_candidate(&self) -> bool {
        !matches!(self, Qualification::DoesNotQualify)
    }
}

/// Discrete-GPU frame buffer bandwidth bracket (GB/s), G1 low to G7 high.
/// G6 and G7 share the >128 GB/s range and differ only by frame buffer data
/// width, which is a declared parameter rather than a derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GpuBracket {
    G1,
    G2,
    G3,
    G4,
    G5,
    G6,
    G7,
}

impl GpuBracket {
    pub const ALL: [GpuBracket; 7] = [
        GpuBracket::G1,
        GpuBracket::G2,
        GpuBracket::G3,
        GpuBracket::G4,
        GpuBracket::G5,
        GpuBracket::G6,
        GpuBracket::G7,
    ];

    /// Bracket for a declared bandwidth. Cannot distinguish G7 from G6
    /// (that needs the data width), so >128 GB/s reports G6.
    pub fn from_bandwidth(fb_bw: f64) -> GpuBracket {
        if fb_bw <= 16.0 {
            GpuBracket::G1
        } else if fb_bw <= 32.0 {
            GpuBracket::G2
        } else if fb_bw <= 64.0 {
            GpuBracket::G3
        } else if fb_bw <= 96.0 {
            GpuBracket::G4
        } else if fb_bw <= 128.0 {
            GpuBracket::G5
        } else {
            GpuBracket::G6
        }
    }

    /// Report label with the bandwidth range spelled out.
    pub fn label(&self) -> &'static str {
        match self {
            GpuBracket::G1 => "G1 (FB_BW <= 16)",
            GpuBracket::G2 => "G2 (16 < FB_BW <= 32)",
            GpuBracket::G3 => "G3 (32 < FB_BW <= 64)",
            GpuBracket::G4 => "G4 (64 < FB_BW <= 96)",
            GpuBracket::G5 => "G5 (96 < FB_BW <= 128)",
            GpuBracket::G6 => "G6 (FB_BW > 128; Frame Buffer Data Width < 192 bits)",
            GpuBracket::G7 => "G7 (FB_BW > 128; Frame Buffer Data Width >= 192 bits)",
        }
    }
}

impl fmt::Display for GpuBracket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Frame buffer width bracket used by the Energy Star 5.2 category rules,
/// where qualification may hinge on an unresolved width condition and each
/// bracket is evaluated separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameBufferWidth {
    Under64,
    Between64And128,
    Over128,
}

impl FrameBufferWidth {
    pub fn over_64(&self) -> bool {
        !matches!(self, FrameBufferWidth::Under64)
    }

    pub fn over_128(&self) -> bool {
        matches!(self, FrameBufferWidth::Over128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ladder_is_ordered() {
        assert!(Category::A < Category::B);
        assert!(Category::C < Category::D);
        assert_eq!(Category::DESKTOP.len(), 4);
        assert_eq!(Category::NOTEBOOK.len(), 3);
    }

    #[test]
    fn bracket_from_bandwidth() {
        assert_eq!(GpuBracket::from_bandwidth(0.0), GpuBracket::G1);
        assert_eq!(GpuBracket::from_bandwidth(16.0), GpuBracket::G1);
        assert_eq!(GpuBracket::from_bandwidth(16.1), GpuBracket::G2);
        assert_eq!(GpuBracket::from_bandwidth(64.0), GpuBracket::G3);
        assert_eq!(GpuBracket::from_bandwidth(128.0), GpuBracket::G5);
        assert_eq!(GpuBracket::from_bandwidth(300.0), GpuBracket::G6);
    }

    #[test]
    fn width_flags() {
        assert!(!FrameBufferWidth::Under64.over_64());
        assert!(FrameBufferWidth::Between64And128.over_64());
        assert!(!FrameBufferWidth::Between64And128.over_128());
        assert!(FrameBufferWidth::Over128.over_128());
    }
}
