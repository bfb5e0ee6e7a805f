//! Value object trait: equality by value, not identity.
//!
//! Nothing on an invoice has identity of its own. Amounts, rates and line
//! items are all values: two of them with the same fields are the same thing.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Rupiah(Decimal);
///
/// impl ValueObject for Rupiah {}
///
/// assert_eq!(Rupiah::from(1_000), Rupiah::from(1_000));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
