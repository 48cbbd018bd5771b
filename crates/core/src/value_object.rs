//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Two value objects holding the same attribute values are interchangeable.
/// A storage accumulator is one: a unit with capacity 100 and balance 40
/// behaves exactly like any other unit with capacity 100 and balance 40.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
