//! Product form validation.
//!
//! Every field is checked and every failing field is reported. Checks on the
//! same field cascade: the first failure stops the remaining checks for that
//! field, so `"abc"` as a price never also reports `PriceNotGreaterThanZero`.
//!
//! The engine only emits [`ValidationErrorCode`]s. Turning a code into text is
//! a lookup on [`ValidationErrorCode::key`] done by whoever renders the form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::aggregates::{ProductInput, ValidProduct};

/// A single business-rule violation on a submitted product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorCode {
    MissingName,
    MissingPrice,
    PriceNotANumber,
    PriceNotGreaterThanZero,
    #[serde(alias = "MissingQuantity")]
    MissingStock,
    StockNotAnInteger,
    StockNotGreaterThanZero,
}

impl ValidationErrorCode {
    pub const ALL: [ValidationErrorCode; 7] = [
        Self::MissingName,
        Self::MissingPrice,
        Self::PriceNotANumber,
        Self::PriceNotGreaterThanZero,
        Self::MissingStock,
        Self::StockNotAnInteger,
        Self::StockNotGreaterThanZero,
    ];

    /// Localization key. Stable: downstream message tables are keyed on it.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MissingName => "MissingName",
            Self::MissingPrice => "MissingPrice",
            Self::PriceNotANumber => "PriceNotANumber",
            Self::PriceNotGreaterThanZero => "PriceNotGreaterThanZero",
            Self::MissingStock => "MissingStock",
            Self::StockNotAnInteger => "StockNotAnInteger",
            Self::StockNotGreaterThanZero => "StockNotGreaterThanZero",
        }
    }

    /// Form field the code belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingPrice | Self::PriceNotANumber | Self::PriceNotGreaterThanZero => "price",
            Self::MissingStock | Self::StockNotAnInteger | Self::StockNotGreaterThanZero => "stock",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ValidationErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MissingQuantity" => Ok(Self::MissingStock),
            other => Self::ALL
                .into_iter()
                .find(|code| code.key() == other)
                .ok_or_else(|| UnknownErrorCode(other.to_string())),
        }
    }
}

/// Ordered set of codes, in the order the checks ran (name, price, stock).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductErrors(Vec<ValidationErrorCode>);

impl ProductErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, code: ValidationErrorCode) {
        if !self.0.contains(&code) {
            self.0.push(code);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, code: ValidationErrorCode) -> bool {
        self.0.contains(&code)
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationErrorCode> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[ValidationErrorCode] {
        &self.0
    }
}

impl FromIterator<ValidationErrorCode> for ProductErrors {
    fn from_iter<I: IntoIterator<Item = ValidationErrorCode>>(iter: I) -> Self {
        let mut errors = Self::new();
        for code in iter {
            errors.push(code);
        }
        errors
    }
}

impl IntoIterator for ProductErrors {
    type Item = ValidationErrorCode;
    type IntoIter = std::vec::IntoIter<ValidationErrorCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ProductErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(code.key())?;
        }
        Ok(())
    }
}

/// Field-keyed errors for form renderers built on `validator`.
impl From<&ProductErrors> for validator::ValidationErrors {
    fn from(errors: &ProductErrors) -> Self {
        let mut out = validator::ValidationErrors::new();
        for code in errors.iter() {
            out.add(code.field(), validator::ValidationError::new(code.key()));
        }
        out
    }
}

struct IntegerRule {
    missing: ValidationErrorCode,
    not_integer: ValidationErrorCode,
    not_positive: ValidationErrorCode,
}

const PRICE: IntegerRule = IntegerRule {
    missing: ValidationErrorCode::MissingPrice,
    not_integer: ValidationErrorCode::PriceNotANumber,
    not_positive: ValidationErrorCode::PriceNotGreaterThanZero,
};

const STOCK: IntegerRule = IntegerRule {
    missing: ValidationErrorCode::MissingStock,
    not_integer: ValidationErrorCode::StockNotAnInteger,
    not_positive: ValidationErrorCode::StockNotGreaterThanZero,
};

impl IntegerRule {
    fn check(&self, raw: &str) -> Result<i32, ValidationErrorCode> {
        if is_blank(raw) {
            return Err(self.missing);
        }
        let value = parse_integer(raw).ok_or(self.not_integer)?;
        if value <= 0 {
            return Err(self.not_positive);
        }
        Ok(value)
    }
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Integer-only grammar: optional sign, ASCII digits, 32-bit range.
/// Fractions (`"10.5"`) and group separators (`"1,000"`) are rejected.
pub fn parse_integer(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Validates `input` and returns every violated code. Empty means acceptable.
pub fn validate(input: &ProductInput) -> ProductErrors {
    validate_product(input).err().unwrap_or_default()
}

/// Validates `input` and, when it is acceptable, returns it with price and
/// stock already parsed.
pub fn validate_product(input: &ProductInput) -> Result<ValidProduct, ProductErrors> {
    let mut errors = ProductErrors::new();

    if is_blank(&input.name) {
        errors.push(ValidationErrorCode::MissingName);
    }
    let price = PRICE.check(&input.price).map_err(|code| errors.push(code));
    let stock = STOCK.check(&input.stock).map_err(|code| errors.push(code));

    match (price, stock) {
        (Ok(price), Ok(stock)) if errors.is_empty() => Ok(ValidProduct {
            id: input.id,
            name: input.name.clone(),
            description: input.description.clone(),
            details: input.details.clone(),
            price,
            stock,
        }),
        _ => Err(errors),
    }
}
