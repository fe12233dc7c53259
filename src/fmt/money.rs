//! Cost components come out of the calculator as plain amounts; this
//! renders them for terminal output. The engine itself never formats
//! currency.

/// Two-decimal dollar display.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
