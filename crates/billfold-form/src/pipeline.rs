//! The bill form's derivation pipeline.
//!
//! Wraps the pure discount engine in the state machine the interactive
//! form needs. The form holds a snapshot of raw text inputs; every
//! change is followed by a call to [`DiscountForm::recompute`], which
//! re-derives the missing amount (or reports why it cannot). There is
//! no caching and no shared state — recomputation is a cheap pure
//! function over the snapshot, safe to run on every keystroke.

use billfold_core::daycount;
use billfold_core::discount::{DiscountResult, DiscountTerms};
use billfold_core::types::{Currency, CurrencyAmount, Date, DiscountRate};

use crate::limits::FieldLimits;
use crate::parse;

/// Which amount the user supplies and which one is derived.
///
/// Both variants dispatch to the same engine; the mode only decides the
/// direction and where the currency of the derived amount comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionMode {
    /// The user enters the net amount; the gross (face) amount is
    /// derived. Used when issuing a bill in a given currency.
    NetToGross {
        /// Currency the bill is denominated in.
        currency: Currency,
    },
    /// The gross amount is fixed (the face value of an existing bill);
    /// the net amount is derived. Used when quoting a purchase.
    GrossToNet {
        /// The bill's face value.
        gross: CurrencyAmount,
    },
}

/// Outcome of one recomputation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// Some input is empty, malformed or out of range. The derived
    /// amount is undefined — render a placeholder, not a zero.
    Incomplete,
    /// All inputs are valid but the Act/360 divisor is exactly zero,
    /// so no gross amount exists for these terms. Net→gross only.
    Singular,
    /// All inputs are valid and the derived amount is defined.
    Ready(DiscountResult),
}

impl Derivation {
    /// Returns `true` if a full result is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Derivation::Ready(_))
    }

    /// Returns the result, if any.
    #[must_use]
    pub fn result(&self) -> Option<&DiscountResult> {
        match self {
            Derivation::Ready(result) => Some(result),
            _ => None,
        }
    }
}

/// Input snapshot of an interactive discount form.
///
/// The form owns raw text exactly as typed. Parsing and validation
/// happen inside [`recompute`](DiscountForm::recompute), never in the
/// setters, so a half-typed field simply leaves the derivation
/// incomplete until it becomes well-formed.
#[derive(Debug, Clone)]
pub struct DiscountForm {
    mode: ConversionMode,
    limits: FieldLimits,
    days_text: String,
    rate_text: String,
    amount_text: String,
    /// Last date pair the day-count field was seeded from.
    seeded: Option<(Date, Date)>,
}

impl DiscountForm {
    /// Creates an empty form with the default field limits.
    #[must_use]
    pub fn new(mode: ConversionMode) -> Self {
        Self::with_limits(mode, FieldLimits::default())
    }

    /// Creates an empty form with custom field limits.
    #[must_use]
    pub fn with_limits(mode: ConversionMode, limits: FieldLimits) -> Self {
        Self {
            mode,
            limits,
            days_text: String::new(),
            rate_text: String::new(),
            amount_text: String::new(),
            seeded: None,
        }
    }

    /// Returns the conversion mode.
    #[must_use]
    pub fn mode(&self) -> &ConversionMode {
        &self.mode
    }

    /// Returns the raw day-count text.
    #[must_use]
    pub fn days_text(&self) -> &str {
        &self.days_text
    }

    /// Returns the raw rate text (a percentage).
    #[must_use]
    pub fn rate_text(&self) -> &str {
        &self.rate_text
    }

    /// Returns the raw amount text.
    #[must_use]
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// Sets the raw day-count text.
    pub fn set_days_text(&mut self, text: impl Into<String>) {
        self.days_text = text.into();
    }

    /// Sets the raw rate text, as a percentage (e.g. `"4.5"`).
    pub fn set_rate_text(&mut self, text: impl Into<String>) {
        self.rate_text = text.into();
    }

    /// Sets the raw amount text.
    ///
    /// The net amount in net→gross mode; ignored by the derivation in
    /// gross→net mode, where the known amount is fixed by the mode.
    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
    }

    /// Seeds the day-count field from the bill's issue and maturity
    /// dates.
    ///
    /// Seeding happens once per distinct date pair: the first call for
    /// a pair overwrites the day-count text, repeat calls for the same
    /// pair leave the user's edits alone. The dates and the field are
    /// not kept in lockstep afterward.
    pub fn seed_day_count(&mut self, issue: Date, maturity: Date) {
        if self.seeded == Some((issue, maturity)) {
            return;
        }
        let days = daycount::days_between(issue, maturity);
        log::debug!("seeding day count {days} from {issue}..{maturity}");
        self.days_text = days.to_string();
        self.seeded = Some((issue, maturity));
    }

    /// Re-derives the missing amount from the current input snapshot.
    ///
    /// Pure and idempotent; call after every input change. The result
    /// is [`Derivation::Ready`] only when every field parses, passes
    /// the field limits, and the engine produces a defined amount.
    #[must_use]
    pub fn recompute(&self) -> Derivation {
        let Some(days) = parse::parse_days(&self.days_text) else {
            return Derivation::Incomplete;
        };
        if !self.limits.days_ok(days) {
            return Derivation::Incomplete;
        }

        let Some(percent) = parse::parse_percentage(&self.rate_text) else {
            return Derivation::Incomplete;
        };
        if !self.limits.rate_percent_ok(percent) {
            return Derivation::Incomplete;
        }

        let rate = DiscountRate::from_percentage(percent);
        let terms = DiscountTerms::new(rate, days);

        let derivation = match &self.mode {
            ConversionMode::NetToGross { currency } => {
                let Some(value) = parse::parse_decimal(&self.amount_text) else {
                    return Derivation::Incomplete;
                };
                let net = CurrencyAmount::new(value, currency.clone());
                match terms.gross_from_net(&net) {
                    Some(gross) => Derivation::Ready(DiscountResult {
                        days,
                        rate,
                        net,
                        gross,
                    }),
                    None => Derivation::Singular,
                }
            }
            ConversionMode::GrossToNet { gross } => {
                let net = terms.net_from_gross(gross);
                Derivation::Ready(DiscountResult {
                    days,
                    rate,
                    net,
                    gross: gross.clone(),
                })
            }
        };

        log::trace!(
            "recompute days={days} rate={rate} -> {}",
            match &derivation {
                Derivation::Incomplete => "incomplete",
                Derivation::Singular => "singular",
                Derivation::Ready(_) => "ready",
            }
        );
        derivation
    }

    /// Submits the form: `Some` only when the derivation is ready.
    ///
    /// The returned tuple is what the caller hands to its submission
    /// callback (display, or an on-chain signing flow upstream).
    #[must_use]
    pub fn submit(&self) -> Option<DiscountResult> {
        match self.recompute() {
            Derivation::Ready(result) => Some(result),
            Derivation::Incomplete | Derivation::Singular => None,
        }
    }
}
