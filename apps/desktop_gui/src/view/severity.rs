use egui::Color32;

pub const SEVERITY_MIN: u8 = 1;
pub const SEVERITY_MAX: u8 = 10;

/// Four-step color scale for the severity slider, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityBand {
    Mild,
    Moderate,
    High,
    Severe,
}

impl SeverityBand {
    /// Inclusive lower bounds at 4, 6 and 8, checked from the top down.
    pub fn for_level(level: i64) -> Self {
        if level >= 8 {
            SeverityBand::Severe
        } else if level >= 6 {
            SeverityBand::High
        } else if level >= 4 {
            SeverityBand::Moderate
        } else {
            SeverityBand::Mild
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            SeverityBand::Severe => Color32::from_rgb(0xef, 0x44, 0x44),
            SeverityBand::High => Color32::from_rgb(0xf5, 0x9e, 0x0b),
            SeverityBand::Moderate => Color32::from_rgb(0xea, 0xb3, 0x08),
            SeverityBand::Mild => Color32::from_rgb(0x10, 0xb9, 0x81),
        }
    }
}

/// The numeric readout paired with the severity slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityLabel {
    pub text: String,
    pub band: SeverityBand,
}

impl SeverityLabel {
    pub fn color(&self) -> Color32 {
        self.band.color()
    }
}

pub fn severity_label(level: u8) -> SeverityLabel {
    SeverityLabel {
        text: level.to_string(),
        band: SeverityBand::for_level(i64::from(level)),
    }
}
