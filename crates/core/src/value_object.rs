//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `ProductCode("SKU123")` is a value object (and equals `ProductCode("sku123")`)
/// - `ShoeRecord { code, quantity, .. }` is an entity identified by its code
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Valuation {
///     code: ProductCode,
///     value: u64,
/// }
///
/// impl ValueObject for Valuation {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
