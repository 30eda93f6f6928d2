use core::str::FromStr;

use serde::{Deserialize, Serialize};

use autoshop_core::{DomainError, DomainResult, Entity, PartId};

/// Part category (closed set; add a variant to extend it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Engine,
    Body,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Engine, Category::Body];

    /// Label shown in listings, e.g. `[Engine]`.
    pub fn display_label(&self) -> &'static str {
        match self {
            Category::Engine => "Engine",
            Category::Body => "Body",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.display_label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted:?}")))
    }
}

/// Unit price of a part.
///
/// Always finite and non-negative once constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A stocked part. Identity is the part number; everything else may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    category: Category,
    unit_price: UnitPrice,
    quantity: u32,
}

impl Part {
    pub(crate) fn new(
        id: PartId,
        name: String,
        category: Category,
        unit_price: UnitPrice,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name,
            category,
            unit_price,
            quantity,
        }
    }

    pub fn id_typed(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Remove `qty` units if that many are on hand; otherwise leave the record as is.
    pub(crate) fn sell(&mut self, qty: u32) -> DomainResult<()> {
        if qty > self.quantity {
            return Err(DomainError::insufficient_stock(self.id, qty, self.quantity));
        }
        self.quantity -= qty;
        Ok(())
    }

    pub(crate) fn restock(&mut self, qty: u32) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(qty)
            .ok_or_else(|| DomainError::validation("quantity would overflow"))?;
        Ok(())
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}

impl core::fmt::Display for Part {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] Part#{} | {} | ${} | Qty: {}",
            self.category.display_label(),
            self.id,
            self.name,
            self.unit_price,
            self.quantity
        )
    }
}
