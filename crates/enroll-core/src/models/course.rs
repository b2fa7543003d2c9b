use serde::{Deserialize, Serialize};

/// A weekly session slot for a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(day: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            day: day.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

/// A course offered for registration.
///
/// Field names serialize in camelCase so catalog files written for the web
/// front end load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub professor: String,
    pub branch: String,
    pub semester: u32,
    pub fee: f64,
    pub credits: u32,
    pub enrolled_students: u32,
    pub max_students: u32,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl Course {
    /// Whether every seat is taken. A course with zero capacity is always full.
    pub fn is_full(&self) -> bool {
        self.enrolled_students >= self.max_students
    }

    pub fn sessions_per_week(&self) -> usize {
        self.time_slots.len()
    }

    /// Fee rendered as rupees with en-US digit grouping, e.g. `₹45,000`
    pub fn formatted_fee(&self) -> String {
        format!("₹{}", format_grouped(self.fee))
    }
}

/// Format a non-negative amount with thousands separators and at most three
/// fraction digits, dropping trailing zeros (`1234.5` -> `1,234.5`).
pub fn format_grouped(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let negative = amount < 0.0;
    let scaled = (amount.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let frac = scaled % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac > 0 {
        let frac_str = format!("{:03}", frac);
        grouped.push('.');
        grouped.push_str(frac_str.trim_end_matches('0'));
    }

    if negative && scaled > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
