/// Digits-only text input. Rejection happens at the handler level: a
/// keystroke or paste that would make the value non-numeric or exceed the
/// upper bound is dropped and the field keeps its last valid text. The lower
/// bound is checked at `parsed` time, since a partial entry like "0" may be
/// on its way to "05".
#[derive(Debug, Clone)]
pub struct NumericField {
    value: String,
    min: u64,
    max: u64,
}

impl NumericField {
    pub fn new(min: u64, max: u64) -> Self {
        NumericField {
            value: String::new(),
            min,
            max,
        }
    }

    /// Class duration, minutes.
    pub fn duration() -> Self {
        NumericField::new(0, 1440)
    }

    /// Whole-baht price; no decimal component is accepted at all.
    pub fn price() -> Self {
        NumericField::new(0, 9_999_999)
    }

    pub fn max_students() -> Self {
        NumericField::new(1, 99)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// One keystroke. Returns whether it was accepted.
    pub fn type_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        let mut candidate = self.value.clone();
        candidate.push(c);
        self.try_replace(candidate)
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Wholesale replacement (paste, programmatic set). All-or-nothing: an
    /// invalid candidate leaves the previous value in place.
    pub fn set(&mut self, raw: &str) -> bool {
        if raw.is_empty() {
            self.value.clear();
            return true;
        }
        self.try_replace(raw.to_owned())
    }

    /// Blur keeps an empty field empty; it is never coerced to "0".
    pub fn blur(&mut self) {
        if self.value.is_empty() {
            return;
        }
        // drop redundant leading zeros, "007" displays as "7"
        let trimmed = self.value.trim_start_matches('0');
        self.value = if trimmed.is_empty() {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        };
    }

    /// The bounded numeric value, `None` while empty or below the minimum.
    pub fn parsed(&self) -> Option<u64> {
        let n: u64 = self.value.parse().ok()?;
        (n >= self.min && n <= self.max).then_some(n)
    }

    fn try_replace(&mut self, candidate: String) -> bool {
        let ok = candidate.chars().all(|c| c.is_ascii_digit())
            && candidate.parse::<u64>().is_ok_and(|n| n <= self.max);
        if ok {
            self.value = candidate;
        }
        ok
    }
}
