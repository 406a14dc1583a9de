use shared::protocol::{ReferenceData, ScenarioInput};

/// Raw control values of the scenario form. Numeric fields stay as the text
/// the operator typed; parsing happens only when a submission is collected.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub disaster_type: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub severity_level: u8,
    pub affected_population: String,
    pub economic_loss: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            disaster_type: String::new(),
            location: String::new(),
            latitude: "0.0".into(),
            longitude: "0.0".into(),
            severity_level: 5,
            affected_population: "10000".into(),
            economic_loss: "1000000".into(),
        }
    }
}

impl FormState {
    /// Builds the request payload from the current control values. No range
    /// checks: unparseable numbers become `None` and are sent as-is.
    pub fn collect(&self) -> ScenarioInput {
        ScenarioInput {
            disaster_type: self.disaster_type.clone(),
            location: self.location.clone(),
            latitude: parse_float_prefix(&self.latitude),
            longitude: parse_float_prefix(&self.longitude),
            severity_level: Some(i64::from(self.severity_level)),
            affected_population: parse_int_prefix(&self.affected_population),
            economic_loss: parse_float_prefix(&self.economic_loss),
        }
    }

    /// Keeps each selection valid against freshly loaded options, falling
    /// back to the first option the way a native select does.
    pub fn sync_selections(&mut self, reference: &ReferenceData) {
        sync_selection(&mut self.disaster_type, &reference.disaster_types);
        sync_selection(&mut self.location, &reference.locations);
    }
}

fn sync_selection(selected: &mut String, options: &[String]) {
    if options.iter().any(|option| option == selected) {
        return;
    }
    *selected = options.first().cloned().unwrap_or_default();
}

/// Integer from the leading digits of `text` (optional sign, surrounding
/// junk ignored), or `None` when there are no leading digits.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Decimal number from the longest numeric prefix of `text`, or `None`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digit_run = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_run(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().ok()
}

#[cfg(test)]
#[path = "../tests/form_tests.rs"]
mod tests;
