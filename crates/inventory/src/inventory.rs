use shoestock_core::{DomainError, DomainResult, Entity, ProductCode, ValueObject};

use crate::record::{NewShoe, ShoeRecord};

/// Summary of total inventory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryValuationSummary {
    pub total_items: usize,
    pub total_quantity: u64,
    pub total_value: u64,
}

impl ValueObject for InventoryValuationSummary {}

/// In-memory record list, in load/insertion order.
///
/// Pure domain state: no IO. Persistence is layered on top by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<ShoeRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append an already-built record, enforcing code uniqueness.
    pub fn insert(&mut self, record: ShoeRecord) -> DomainResult<&ShoeRecord> {
        if self.position(record.id()).is_some() {
            return Err(DomainError::duplicate_code(record.code().as_str()));
        }
        tracing::debug!(code = %record.code(), "record inserted");
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Validate raw input and append it. No mutation on failure.
    pub fn add(&mut self, input: &NewShoe) -> DomainResult<&ShoeRecord> {
        let record = input.validate()?;
        self.insert(record)
    }

    /// Case-insensitive exact match on code.
    pub fn find_by_code(&self, code: &str) -> DomainResult<&ShoeRecord> {
        self.records
            .iter()
            .find(|r| r.code().matches(code))
            .ok_or_else(|| DomainError::not_found(code.trim()))
    }

    /// Record with the lowest quantity; the first one wins on ties.
    pub fn lowest_quantity(&self) -> DomainResult<&ShoeRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.quantity() < best.quantity() { r } else { best })
            .ok_or(DomainError::EmptyInventory)
    }

    /// Record with the highest quantity; the first one wins on ties.
    pub fn highest_quantity(&self) -> DomainResult<&ShoeRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.quantity() > best.quantity() { r } else { best })
            .ok_or(DomainError::EmptyInventory)
    }

    /// Add `amount` units to the record identified by `code`.
    pub fn restock(&mut self, code: &ProductCode, amount: u64) -> DomainResult<&ShoeRecord> {
        let idx = self
            .position(code)
            .ok_or_else(|| DomainError::not_found(code.as_str()))?;
        let record = &mut self.records[idx];
        let new_quantity = record.top_up(amount)?;
        tracing::info!(code = %record.code(), amount, new_quantity, "record restocked");
        Ok(&self.records[idx])
    }

    /// `(code, cost × quantity)` per record, in list order.
    ///
    /// Lazy and recomputed from current state on every call.
    pub fn value_per_item(&self) -> impl Iterator<Item = (&ProductCode, u64)> + '_ {
        self.records.iter().map(|r| (r.code(), r.value()))
    }

    pub fn valuation(&self) -> InventoryValuationSummary {
        self.records
            .iter()
            .fold(InventoryValuationSummary::default(), |acc, r| {
                InventoryValuationSummary {
                    total_items: acc.total_items + 1,
                    total_quantity: acc.total_quantity.saturating_add(r.quantity()),
                    total_value: acc.total_value.saturating_add(r.value()),
                }
            })
    }

    fn position(&self, code: &ProductCode) -> Option<usize> {
        self.records.iter().position(|r| r.is_identified_by(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe(code: &str, cost: u64, quantity: u64) -> ShoeRecord {
        ShoeRecord::new("USA", ProductCode::parse(code).unwrap(), "Shoe", cost, quantity).unwrap()
    }

    fn inventory_of(records: Vec<ShoeRecord>) -> Inventory {
        let mut inventory = Inventory::new();
        for r in records {
            inventory.insert(r).unwrap();
        }
        inventory
    }

    fn nike_input() -> NewShoe {
        NewShoe {
            country: "USA".to_string(),
            code: "SKU123".to_string(),
            product: "Nike Air".to_string(),
            cost: "120".to_string(),
            quantity: "50".to_string(),
        }
    }

    #[test]
    fn add_then_find_by_code_returns_record() {
        let mut inventory = Inventory::new();
        inventory.add(&nike_input()).unwrap();

        let found = inventory.find_by_code("SKU123").unwrap();
        assert_eq!(found.product(), "Nike Air");
        assert_eq!(found.quantity(), 50);
    }

    #[test]
    fn add_rejects_code_differing_only_in_case() {
        let mut inventory = Inventory::new();
        inventory.add(&nike_input()).unwrap();
        let before = inventory.clone();

        let dup = NewShoe {
            code: "sku123".to_string(),
            ..nike_input()
        };
        let err = inventory.add(&dup).unwrap_err();
        assert_eq!(err, DomainError::DuplicateCode("sku123".to_string()));
        assert_eq!(inventory, before);
    }

    #[test]
    fn add_invalid_field_leaves_state_unchanged() {
        let mut inventory = Inventory::new();
        let bad = NewShoe {
            cost: "abc".to_string(),
            ..nike_input()
        };
        assert!(matches!(
            inventory.add(&bad),
            Err(DomainError::InvalidField { field: "cost", .. })
        ));
        assert!(inventory.is_empty());
    }

    #[test]
    fn empty_store_scenario_add_list_value() {
        let mut inventory = Inventory::new();
        inventory.add(&nike_input()).unwrap();

        let list = inventory.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].country(), "USA");
        assert_eq!(list[0].code().as_str(), "SKU123");
        assert_eq!(list[0].product(), "Nike Air");
        assert_eq!(list[0].cost(), 120);
        assert_eq!(list[0].quantity(), 50);

        let values: Vec<_> = inventory
            .value_per_item()
            .map(|(code, value)| (code.as_str().to_string(), value))
            .collect();
        assert_eq!(values, vec![("SKU123".to_string(), 6000)]);
    }

    #[test]
    fn find_by_code_is_case_insensitive_and_reports_miss() {
        let inventory = inventory_of(vec![shoe("SKU456", 10, 1)]);
        assert!(inventory.find_by_code("sku456").is_ok());
        assert_eq!(
            inventory.find_by_code("missing").unwrap_err(),
            DomainError::NotFound("missing".to_string())
        );
    }

    #[test]
    fn lowest_and_highest_quantity() {
        let inventory = inventory_of(vec![shoe("A", 1, 5), shoe("B", 1, 2), shoe("C", 1, 8)]);
        assert_eq!(inventory.lowest_quantity().unwrap().code().as_str(), "B");
        assert_eq!(inventory.highest_quantity().unwrap().code().as_str(), "C");
    }

    #[test]
    fn ties_break_on_first_occurrence() {
        let inventory = inventory_of(vec![shoe("A", 1, 3), shoe("B", 1, 3), shoe("C", 1, 3)]);
        assert_eq!(inventory.lowest_quantity().unwrap().code().as_str(), "A");
        assert_eq!(inventory.highest_quantity().unwrap().code().as_str(), "A");
    }

    #[test]
    fn lowest_and_highest_fail_when_empty() {
        let inventory = Inventory::new();
        assert_eq!(inventory.lowest_quantity().unwrap_err(), DomainError::EmptyInventory);
        assert_eq!(inventory.highest_quantity().unwrap_err(), DomainError::EmptyInventory);
    }

    #[test]
    fn restock_targets_lowest_and_leaves_others() {
        let mut inventory = inventory_of(vec![shoe("SKU123", 120, 50), shoe("SKU456", 80, 30)]);
        let target = inventory.lowest_quantity().unwrap().code().clone();
        assert_eq!(target.as_str(), "SKU456");

        let updated = inventory.restock(&target, 50).unwrap();
        assert_eq!(updated.quantity(), 80);
        assert_eq!(inventory.find_by_code("SKU456").unwrap().quantity(), 80);
        assert_eq!(inventory.find_by_code("SKU123").unwrap().quantity(), 50);
    }

    #[test]
    fn restock_zero_is_rejected() {
        let mut inventory = inventory_of(vec![shoe("A", 1, 5)]);
        let code = ProductCode::parse("a").unwrap();
        assert!(matches!(
            inventory.restock(&code, 0),
            Err(DomainError::InvalidField { field: "amount", .. })
        ));
        assert_eq!(inventory.list()[0].quantity(), 5);
    }

    #[test]
    fn restock_unknown_code_is_not_found() {
        let mut inventory = inventory_of(vec![shoe("A", 1, 5)]);
        let code = ProductCode::parse("Z").unwrap();
        assert_eq!(
            inventory.restock(&code, 5).unwrap_err(),
            DomainError::NotFound("Z".to_string())
        );
    }

    #[test]
    fn value_per_item_reflects_current_state() {
        let mut inventory = inventory_of(vec![shoe("A", 10, 1)]);
        let first: Vec<u64> = inventory.value_per_item().map(|(_, v)| v).collect();
        inventory.restock(&ProductCode::parse("A").unwrap(), 4).unwrap();
        let second: Vec<u64> = inventory.value_per_item().map(|(_, v)| v).collect();
        assert_eq!(first, vec![10]);
        assert_eq!(second, vec![50]);
    }

    #[test]
    fn valuation_sums_items() {
        let inventory = inventory_of(vec![shoe("A", 10, 2), shoe("B", 5, 4)]);
        assert_eq!(
            inventory.valuation(),
            InventoryValuationSummary {
                total_items: 2,
                total_quantity: 6,
                total_value: 40,
            }
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: lowest/highest match a linear scan with first-occurrence tie-break.
            #[test]
            fn extremes_match_linear_scan(quantities in prop::collection::vec(0u64..20, 1..30)) {
                let records = quantities
                    .iter()
                    .enumerate()
                    .map(|(i, q)| shoe(&format!("C{i}"), 1, *q))
                    .collect::<Vec<_>>();
                let inventory = inventory_of(records);

                let min = *quantities.iter().min().unwrap();
                let max = *quantities.iter().max().unwrap();
                let min_idx = quantities.iter().position(|q| *q == min).unwrap();
                let max_idx = quantities.iter().position(|q| *q == max).unwrap();

                let expected_min = format!("C{min_idx}");
                let expected_max = format!("C{max_idx}");
                prop_assert_eq!(inventory.lowest_quantity().unwrap().code().as_str(), expected_min.as_str());
                prop_assert_eq!(inventory.highest_quantity().unwrap().code().as_str(), expected_max.as_str());
            }
        }
    }
}
