use super::models::BinaryGroup;

/// Bars below this magnitude render without a percentage label; sub-0.5%
/// text is unreadable at chart size.
pub const MIN_LABEL_VALUE: f64 = 0.005;

pub const THRESHOLD_LABEL: &str = "threshold";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarGroup {
    Older,
    EqualOrYounger,
    Threshold,
}

/// The side with the larger aggregate probability; ties go to `Older`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Older,
    EqualOrYounger,
}

/// One row of the tug-of-war chart. `value` is the negated probability for
/// older bars and exactly 0 for the synthetic threshold divider.
#[derive(Debug, Clone, PartialEq)]
pub struct DivergingBar {
    pub label: String,
    pub value: f64,
    pub group: BarGroup,
}

impl DivergingBar {
    /// Whole-percent text, or `None` when the bar is too small to label.
    pub fn percent_text(&self) -> Option<String> {
        if self.value.abs() < MIN_LABEL_VALUE {
            None
        } else {
            Some(format!("{:.0}%", self.value.abs() * 100.0))
        }
    }
}

#[derive(Debug, Clone)]
pub struct DivergingDataset {
    pub bars: Vec<DivergingBar>,
    /// Max probability across both groups; both directions share this scale.
    pub domain: f64,
    pub winner: Winner,
}

/// Builds the mirrored dataset: older bars reversed and negated so the
/// largest sits nearest the divider, then the threshold row, then the younger
/// bars in server order.
pub fn build_diverging(older: &BinaryGroup, younger: &BinaryGroup) -> DivergingDataset {
    let domain = older
        .items
        .iter()
        .chain(&younger.items)
        .map(|item| item.probability)
        .fold(0.0, f64::max);

    let mut bars = Vec::with_capacity(older.items.len() + younger.items.len() + 1);

    for item in older.items.iter().rev() {
        bars.push(DivergingBar {
            label: item.label.clone(),
            value: -item.probability,
            group: BarGroup::Older,
        });
    }

    bars.push(DivergingBar {
        label: THRESHOLD_LABEL.to_string(),
        value: 0.0,
        group: BarGroup::Threshold,
    });

    for item in &younger.items {
        bars.push(DivergingBar {
            label: item.label.clone(),
            value: item.probability,
            group: BarGroup::EqualOrYounger,
        });
    }

    let winner = if older.total_probability >= younger.total_probability {
        Winner::Older
    } else {
        Winner::EqualOrYounger
    };

    DivergingDataset { bars, domain, winner }
}
