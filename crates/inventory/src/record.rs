use serde::{Deserialize, Serialize};

use shoestock_core::{DomainError, DomainResult, Entity, ProductCode};

/// One inventory line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShoeRecord")]
pub struct ShoeRecord {
    country: String,
    code: ProductCode,
    product: String,
    /// Unit cost in whole currency units.
    cost: u64,
    quantity: u64,
}

impl ShoeRecord {
    /// Build a record from already-typed values.
    ///
    /// Text fields are trimmed and must be writable back to the inventory file.
    pub fn new(
        country: impl AsRef<str>,
        code: ProductCode,
        product: impl AsRef<str>,
        cost: u64,
        quantity: u64,
    ) -> DomainResult<Self> {
        Ok(Self {
            country: parse_text("country", country.as_ref())?,
            code,
            product: parse_text("product", product.as_ref())?,
            cost,
            quantity,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Stock value: cost × quantity (saturating).
    pub fn value(&self) -> u64 {
        self.cost.saturating_mul(self.quantity)
    }

    /// Increase quantity by `amount` units. Returns the new quantity.
    pub(crate) fn top_up(&mut self, amount: u64) -> DomainResult<u64> {
        if amount == 0 {
            return Err(DomainError::invalid_field(
                "amount",
                "restock amount must be at least 1",
            ));
        }
        self.quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            DomainError::invalid_field("amount", "resulting quantity is too large")
        })?;
        Ok(self.quantity)
    }
}

/// Deserialized shape of [`ShoeRecord`], checked by [`ShoeRecord::new`].
#[derive(Deserialize)]
struct RawShoeRecord {
    country: String,
    code: ProductCode,
    product: String,
    cost: u64,
    quantity: u64,
}

impl TryFrom<RawShoeRecord> for ShoeRecord {
    type Error = DomainError;

    fn try_from(raw: RawShoeRecord) -> Result<Self, Self::Error> {
        ShoeRecord::new(raw.country, raw.code, raw.product, raw.cost, raw.quantity)
    }
}

impl Entity for ShoeRecord {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// Raw, unvalidated input for a new record (as typed at the terminal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewShoe {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: String,
    pub quantity: String,
}

impl NewShoe {
    /// Validate every field and build a record.
    ///
    /// Order: text fields, code, cost, quantity. Uniqueness is checked by the
    /// inventory, not here.
    pub fn validate(&self) -> DomainResult<ShoeRecord> {
        let country = parse_text("country", &self.country)?;
        let product = parse_text("product", &self.product)?;
        let code = ProductCode::parse(&self.code)?;
        let cost = parse_count("cost", &self.cost)?;
        let quantity = parse_count("quantity", &self.quantity)?;
        ShoeRecord::new(country, code, product, cost, quantity)
    }
}

/// Parse a non-negative whole number (digits only, surrounding whitespace allowed).
pub fn parse_count(field: &'static str, raw: &str) -> DomainResult<u64> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_field(
            field,
            format!("must be a non-negative whole number, got '{digits}'"),
        ));
    }
    digits
        .parse::<u64>()
        .map_err(|_| DomainError::invalid_field(field, format!("'{digits}' is too large")))
}

fn parse_text(field: &'static str, raw: &str) -> DomainResult<String> {
    let text = raw.trim();
    if text.contains([',', '\n', '\r']) {
        return Err(DomainError::invalid_field(
            field,
            "cannot contain commas or line breaks",
        ));
    }
    Ok(text.to_string())
}
