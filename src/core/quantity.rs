/// Smallest quantity a product page accepts.
pub const MIN_QUANTITY: u32 = 1;

/// Direction of a quantity button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increase,
    Decrease,
}

/// Parse a quantity input. Anything unparsable or below 1 becomes 1;
/// digit strings too large for `u32` saturate.
pub fn normalize_quantity(raw: &str) -> u32 {
    let digits = raw.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return MIN_QUANTITY;
    }
    // Only overflow can fail once the input is all digits.
    digits.parse::<u32>().map_or(u32::MAX, |n| n.max(MIN_QUANTITY))
}

/// Apply a +/- button press; decreasing never goes below 1.
pub fn step_quantity(current: u32, step: Step) -> u32 {
    match step {
        Step::Increase => current.saturating_add(1).max(MIN_QUANTITY),
        Step::Decrease => current.saturating_sub(1).max(MIN_QUANTITY),
    }
}
