//! Attendance and marks records with the derived metrics shown on the
//! dashboard, attendance and marks screens.

use eduflow_core::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub subject: String,
    pub total_classes: u32,
    pub attended_classes: u32,
}

impl AttendanceRecord {
    /// Per-subject attendance, rounded to the nearest whole percent.
    pub fn percentage(&self) -> u32 {
        rounded_percent(self.attended_classes.into(), self.total_classes.into())
    }
}

/// Overall attendance across `records`, rounded to the nearest whole percent.
///
/// Returns 0 when no classes were held.
pub fn overall_attendance(records: &[AttendanceRecord]) -> u32 {
    let total: u64 = records.iter().map(|r| u64::from(r.total_classes)).sum();
    let attended: u64 = records.iter().map(|r| u64::from(r.attended_classes)).sum();
    rounded_percent(attended, total)
}

fn rounded_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 * 100.0 / whole as f64).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl AttendanceStatus {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            85.. => Self::Excellent,
            75..=84 => Self::Good,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::from_hex(0x10B981),
            Self::Good => Color::from_hex(0xF59E0B),
            Self::NeedsImprovement => Color::from_hex(0xEF4444),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub subject: String,
    pub exam_type: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
}

impl MarkRecord {
    pub fn grade(&self) -> Grade {
        Grade::from_marks(self.marks_obtained, self.total_marks)
    }
}

/// Letter grade bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    F,
}

/// Badge styling used next to a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Primary,
    Warning,
    Error,
}

impl Grade {
    /// Grade for `marks` out of `total`. A non-positive total grades as F.
    pub fn from_marks(marks: f64, total: f64) -> Self {
        if total <= 0.0 {
            return Self::F;
        }
        let percentage = marks * 100.0 / total;
        match percentage {
            p if p >= 90.0 => Self::APlus,
            p if p >= 80.0 => Self::A,
            p if p >= 70.0 => Self::BPlus,
            p if p >= 60.0 => Self::B,
            p if p >= 50.0 => Self::C,
            _ => Self::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::F => "F",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::APlus | Self::A => BadgeVariant::Success,
            Self::BPlus | Self::B => BadgeVariant::Primary,
            Self::C => BadgeVariant::Warning,
            Self::F => BadgeVariant::Error,
        }
    }
}

/// Grade point average on a 10-point scale, rounded to one decimal.
///
/// Returns 0.0 when there is nothing to average.
pub fn gpa(records: &[MarkRecord]) -> f64 {
    let obtained: f64 = records.iter().map(|r| r.marks_obtained).sum();
    let possible: f64 = records.iter().map(|r| r.total_marks).sum();
    if possible <= 0.0 {
        return 0.0;
    }
    (obtained * 100.0 / possible).round() / 10.0
}

/// `92.0%` style percentage label.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Shorten `text` to `length` characters, appending `...` when cut.
pub fn truncate(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
