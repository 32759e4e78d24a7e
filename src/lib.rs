use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Default calculation parameters
pub mod defaults {
    /// Target tip rate used to compute the standard recommended bill.
    pub const PREFERRED_TIP_RATE: f64 = 0.18;
    /// Granularity at which candidate totals are enumerated.
    pub const BILL_INCREMENT: f64 = 0.50;
}

/// One candidate outcome: the entered bill plus one possible post-tip total.
///
/// The tip amount and percentage are derived on access so they can never go
/// stale relative to the two base fields.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundedBill {
    pub bill_total_without_tip: f64,
    pub bill_total_with_tip: f64,
}

impl RoundedBill {
    pub fn new(bill_total_without_tip: f64, bill_total_with_tip: f64) -> Self {
        Self {
            bill_total_without_tip,
            bill_total_with_tip,
        }
    }

    pub fn tip_amount(&self) -> f64 {
        self.bill_total_with_tip - self.bill_total_without_tip
    }

    /// Tip as a fraction of the pre-tip total. NaN when the pre-tip total is 0.
    pub fn tip_percentage(&self) -> f64 {
        self.tip_amount() / (self.bill_total_with_tip - self.tip_amount())
    }
}

/// Round a dollar amount to integer cents.
///
/// All equality decisions (standard-bill membership, preferred selection)
/// and the sort order run on cents rather than raw floats, so amounts that
/// differ only by accumulated binary rounding error compare equal.
#[inline]
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// The recommended bill at the preferred tip rate.
pub fn standard_bill(bill_total: f64, tip_rate: f64) -> RoundedBill {
    RoundedBill::new(bill_total, bill_total * (1.0 + tip_rate))
}

/// Produce the ordered list of candidate post-tip totals for a bill.
///
/// Candidates are enumerated at `increment` steps from `bill_total` up to
/// (exclusive) twice the bill. The standard bill at `tip_rate` is appended
/// when no enumerated candidate already matches it at cent precision, so the
/// recommendation is always selectable. The result is sorted ascending by
/// post-tip total; a non-finite or non-positive bill yields an empty list.
pub fn generate_bill_increments(bill_total: f64, tip_rate: f64, increment: f64) -> Vec<RoundedBill> {
    let mut increments: Vec<RoundedBill> = Vec::new();

    if !bill_total.is_finite() || bill_total <= 0.0 {
        debug!("No candidates for bill total {}", bill_total);
        return increments;
    }

    // k * increment rather than repeated addition keeps every candidate on
    // the exact k-th step of the grid.
    let mut k = 0.0_f64;
    loop {
        let total = bill_total + k * increment;
        if total >= bill_total * 2.0 {
            break;
        }
        increments.push(RoundedBill::new(bill_total, total));
        k += 1.0;
    }

    let standard = standard_bill(bill_total, tip_rate);
    let standard_cents = to_cents(standard.bill_total_with_tip);
    if !increments
        .iter()
        .any(|bill| to_cents(bill.bill_total_with_tip) == standard_cents)
    {
        increments.push(standard);
    }

    // Stable sort: equal sums keep insertion order, nothing is deduplicated.
    increments.sort_by_key(|bill| to_cents(bill.bill_total_with_tip));

    debug!(
        "Generated {} candidates for bill total {} (standard {})",
        increments.len(),
        bill_total,
        standard.bill_total_with_tip
    );

    increments
}

/// Pick the candidate to pre-select: the one matching the standard total at
/// cent precision if present, otherwise the smallest candidate, otherwise
/// nothing.
pub fn preferred_selection(increments: &[RoundedBill], standard_total: f64) -> Option<usize> {
    let standard_cents = to_cents(standard_total);
    increments
        .iter()
        .position(|bill| to_cents(bill.bill_total_with_tip) == standard_cents)
        .or_else(|| if increments.is_empty() { None } else { Some(0) })
}

/// Split a total evenly across the table.
pub fn per_person_share(total: f64, person_count: usize) -> f64 {
    total / person_count.max(1) as f64
}

/// Shape of an acceptable bill total: digits with up to two fraction digits.
///
/// Doubles as the browser-side `pattern` attribute, which anchors
/// implicitly; the parser compiles the same constant with explicit anchors,
/// so the two surfaces cannot drift apart.
pub const BILL_INPUT_PATTERN: &str = r"[0-9]+([.][0-9]{1,2})?";

static BILL_TOTAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:{})$", BILL_INPUT_PATTERN)).unwrap());

/// Bill-input parsing error types for better error handling
#[derive(Debug, PartialEq, Eq)]
pub enum BillParseError {
    EmptyInput,
    InvalidFormat(String),
}

impl fmt::Display for BillParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillParseError::EmptyInput => write!(f, "Bill total cannot be empty"),
            BillParseError::InvalidFormat(input) => write!(
                f,
                "Invalid bill total: '{}', expected a number with up to 2 decimals",
                input
            ),
        }
    }
}

impl std::error::Error for BillParseError {}

/// Parse a bill total from free-text input.
///
/// Accepts plain decimal numbers with at most two fraction digits, e.g.
/// "50", "33.33", "7.5". Anything else is rejected; callers that want the
/// original page behavior map the error to NaN, which flows through the
/// generator as an empty candidate list.
pub fn parse_bill_total(input: &str) -> Result<f64, BillParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BillParseError::EmptyInput);
    }
    if !BILL_TOTAL_REGEX.is_match(trimmed) {
        return Err(BillParseError::InvalidFormat(trimmed.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| BillParseError::InvalidFormat(trimmed.to_string()))
}

/// Format a dollar amount as fixed en-US currency, e.g. `$1,234.50`.
/// Non-finite amounts render as the neutral `$0.00`.
pub fn format_usd(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, rem)
}

/// Format a rate as a percentage with one fraction digit, e.g. `18.0%`.
/// Non-finite rates render as `0.0%`.
pub fn format_percent(rate: f64) -> String {
    let rate = if rate.is_finite() { rate } else { 0.0 };
    format!("{:.1}%", rate * 100.0)
}
