use crate::alerts::range::Range;

/// A reportable move of the sampled value away from its baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub old: f64,
    pub new: f64,
}

/// Tracks the baseline across iterations.
///
/// The baseline is the last value that was either reported or established as a
/// fresh reference point. Sub-threshold drifts never move it, so a slow creep
/// is reported once its total distance exceeds the threshold.
#[derive(Debug, Clone)]
pub struct ChangeDetector {
    range: Range,
    threshold: f64,
    last_value: Option<f64>,
}

impl ChangeDetector {
    pub fn new(range: Range, threshold: f64) -> Self {
        Self {
            range,
            threshold,
            last_value: None,
        }
    }

    pub fn baseline(&self) -> Option<f64> {
        self.last_value
    }

    /// Feed one successfully obtained sample through the state machine.
    pub fn observe(&mut self, value: f64) -> Option<Change> {
        if !self.range.contains(value) {
            // Out of range drops history, even for a single noisy reading.
            self.last_value = None;
            return None;
        }

        match self.last_value {
            None => {
                self.last_value = Some(value);
                None
            }
            Some(baseline) if (value - baseline).abs() > self.threshold => {
                self.last_value = Some(value);
                Some(Change {
                    old: baseline,
                    new: value,
                })
            }
            Some(_) => None,
        }
    }
}
