//! In-memory parts ledger.

use tracing::{debug, warn};

use autoshop_core::{DomainError, DomainResult, PartId, PartIdSequence, find_by_id, find_by_id_mut};

use crate::part::{Category, Part, UnitPrice};

/// Parts the inventory program starts with: name, category, unit price, quantity.
pub const SAMPLE_CATALOGUE: [(&str, Category, f64, u32); 3] = [
    ("Spark Plug", Category::Engine, 15.5, 30),
    ("Door Handle", Category::Body, 12.0, 20),
    ("forged piston", Category::Engine, 190.0, 40),
];

/// Ordered collection of part records.
///
/// The ledger owns its records and the id sequence that numbers them. Records are
/// kept in insertion order and are never removed.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    parts: Vec<Part>,
    ids: PartIdSequence,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger preloaded with [`SAMPLE_CATALOGUE`] (ids 1000..=1002).
    pub fn with_sample_catalogue() -> DomainResult<Self> {
        let mut ledger = Self::new();
        for (name, category, price, quantity) in SAMPLE_CATALOGUE {
            ledger.add_part(name, category, UnitPrice::new(price)?, quantity)?;
        }
        Ok(ledger)
    }

    /// Append a new record and return its freshly assigned id.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        category: Category,
        unit_price: UnitPrice,
        quantity: u32,
    ) -> DomainResult<PartId> {
        let id = self
            .ids
            .next_id()
            .ok_or_else(|| DomainError::validation("part number space exhausted"))?;
        let part = Part::new(id, name.into(), category, unit_price, quantity);
        debug!(part_id = %id, name = part.name(), %category, quantity, "part added");
        self.parts.push(part);
        Ok(id)
    }

    /// Sell `qty` units of a part.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id and with
    /// [`DomainError::InsufficientStock`] when fewer than `qty` units are on hand; the
    /// record is untouched in both cases.
    pub fn sell_stock(&mut self, id: PartId, qty: u32) -> DomainResult<&Part> {
        let part = self.find_mut(id)?;
        if let Err(err) = part.sell(qty) {
            warn!(part_id = %id, requested = qty, available = part.quantity(), "sale rejected");
            return Err(err);
        }
        debug!(part_id = %id, qty, quantity = part.quantity(), "stock sold");
        Ok(&*part)
    }

    /// Add `qty` units to a part. No upper bound beyond `u32` overflow.
    pub fn add_stock(&mut self, id: PartId, qty: u32) -> DomainResult<&Part> {
        let part = self.find_mut(id)?;
        part.restock(qty)?;
        debug!(part_id = %id, qty, quantity = part.quantity(), "stock added");
        Ok(&*part)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Part] {
        &self.parts
    }

    pub fn get(&self, id: PartId) -> Option<&Part> {
        find_by_id(&self.parts, id)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn find_mut(&mut self, id: PartId) -> DomainResult<&mut Part> {
        match find_by_id_mut(&mut self.parts, id) {
            Some(part) => Ok(part),
            None => {
                warn!(part_id = %id, "part not found");
                Err(DomainError::not_found(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoshop_core::Entity;
    use proptest::prelude::*;

    fn price(value: f64) -> UnitPrice {
        UnitPrice::new(value).unwrap()
    }

    fn ledger_with(quantity: u32) -> (InventoryLedger, PartId) {
        let mut ledger = InventoryLedger::new();
        let id = ledger
            .add_part("Brake Pad", Category::Body, price(42.0), quantity)
            .unwrap();
        (ledger, id)
    }

    #[test]
    fn add_part_assigns_sequential_ids_from_1000() {
        let mut ledger = InventoryLedger::new();
        let a = ledger.add_part("A", Category::Engine, price(1.0), 1).unwrap();
        let b = ledger.add_part("B", Category::Body, price(2.0), 2).unwrap();
        assert_eq!(a, PartId::from(1000));
        assert_eq!(b, PartId::from(1001));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn separate_ledgers_number_independently() {
        let (_, first) = ledger_with(1);
        let (_, second) = ledger_with(1);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_catalogue_matches_startup_stock() {
        let ledger = InventoryLedger::with_sample_catalogue().unwrap();
        let lines: Vec<String> = ledger.list_all().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "[Engine] Part#1000 | Spark Plug | $15.5 | Qty: 30",
                "[Body] Part#1001 | Door Handle | $12 | Qty: 20",
                "[Engine] Part#1002 | forged piston | $190 | Qty: 40",
            ]
        );
    }

    #[test]
    fn get_looks_up_by_part_number() {
        let ledger = InventoryLedger::with_sample_catalogue().unwrap();
        let part = ledger.get(PartId::from(1001)).unwrap();
        assert_eq!(part.name(), "Door Handle");
        assert_eq!(Entity::id(part), part.id_typed());
        assert!(ledger.get(PartId::from(999)).is_none());
    }

    #[test]
    fn sell_stock_decrements_when_sufficient() {
        let (mut ledger, id) = ledger_with(10);
        let part = ledger.sell_stock(id, 4).unwrap();
        assert_eq!(part.quantity(), 6);
        assert_eq!(part.name(), "Brake Pad");

        ledger.sell_stock(id, 6).unwrap();
        assert_eq!(ledger.get(id).unwrap().quantity(), 0);
    }

    #[test]
    fn sell_stock_reports_insufficient_and_keeps_quantity() {
        let (mut ledger, id) = ledger_with(2);
        let err = ledger.sell_stock(id, 3).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock(id, 3, 2));
        assert_eq!(ledger.get(id).unwrap().quantity(), 2);
    }

    #[test]
    fn unknown_id_is_not_found_for_both_mutations() {
        let (mut ledger, _) = ledger_with(2);
        let missing = PartId::from(4242);
        assert_eq!(ledger.sell_stock(missing, 1).unwrap_err(), DomainError::not_found(missing));
        assert_eq!(ledger.add_stock(missing, 1).unwrap_err(), DomainError::not_found(missing));
        assert_eq!(ledger.list_all()[0].quantity(), 2);
    }

    #[test]
    fn add_stock_has_no_upper_bound_below_overflow() {
        let (mut ledger, id) = ledger_with(0);
        assert_eq!(ledger.add_stock(id, 1_000_000).unwrap().quantity(), 1_000_000);
        assert_eq!(ledger.add_stock(id, 0).unwrap().quantity(), 1_000_000);
    }

    #[test]
    fn list_all_is_stable_without_mutation() {
        let ledger = InventoryLedger::with_sample_catalogue().unwrap();
        assert_eq!(ledger.list_all(), ledger.list_all());
        assert_eq!(ledger.list_all().to_vec(), ledger.list_all().to_vec());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Sell(usize, u32),
        Restock(usize, u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..8, 0u32..60).prop_map(|(i, q)| Op::Sell(i, q)),
            (0usize..8, 0u32..60).prop_map(|(i, q)| Op::Restock(i, q)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: ids are unique, strictly increasing and start at 1000.
        #[test]
        fn ids_are_unique_and_increasing(quantities in prop::collection::vec(0u32..100, 1..50)) {
            let mut ledger = InventoryLedger::new();
            let ids: Vec<PartId> = quantities
                .iter()
                .map(|q| ledger.add_part("p", Category::Engine, price(1.0), *q).unwrap())
                .collect();

            prop_assert_eq!(ids[0], PartId::FIRST);
            for pair in ids.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        /// Property: a sale succeeds iff qty <= quantity and subtracts exactly qty;
        /// a restock on an existing id adds exactly qty; a missing id changes nothing.
        #[test]
        fn quantities_follow_stock_rules(
            initial in prop::collection::vec(0u32..50, 1..5),
            ops in prop::collection::vec(op_strategy(), 0..40)
        ) {
            let mut ledger = InventoryLedger::new();
            let ids: Vec<PartId> = initial
                .iter()
                .map(|q| ledger.add_part("p", Category::Body, price(3.0), *q).unwrap())
                .collect();
            let mut model: Vec<u32> = initial.clone();

            for op in ops {
                match op {
                    Op::Sell(i, qty) => {
                        match ids.get(i) {
                            Some(id) => {
                                let result = ledger.sell_stock(*id, qty);
                                if qty <= model[i] {
                                    prop_assert!(result.is_ok());
                                    model[i] -= qty;
                                } else {
                                    prop_assert_eq!(
                                        result.unwrap_err(),
                                        DomainError::insufficient_stock(*id, qty, model[i])
                                    );
                                }
                            }
                            None => {
                                let before = ledger.list_all().to_vec();
                                let missing = PartId::from(9000 + i as u32);
                                prop_assert!(ledger.sell_stock(missing, qty).unwrap_err().is_not_found());
                                prop_assert_eq!(ledger.list_all(), before.as_slice());
                            }
                        }
                    }
                    Op::Restock(i, qty) => match ids.get(i) {
                        Some(id) => {
                            prop_assert!(ledger.add_stock(*id, qty).is_ok());
                            model[i] += qty;
                        }
                        None => {
                            let before = ledger.list_all().to_vec();
                            let missing = PartId::from(9000 + i as u32);
                            prop_assert!(ledger.add_stock(missing, qty).unwrap_err().is_not_found());
                            prop_assert_eq!(ledger.list_all(), before.as_slice());
                        }
                    },
                }

                let actual: Vec<u32> = ledger.list_all().iter().map(Part::quantity).collect();
                prop_assert_eq!(&actual, &model);
            }
        }
    }
}
