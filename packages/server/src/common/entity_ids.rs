//! Typed ID definitions for the rental domain.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for House entities.
pub struct House;

/// Marker type for Flat entities (units inside a house).
pub struct Flat;

/// Marker type for Subscription entities.
pub struct Subscription;

/// Marker type for authenticated users (clients and moderators).
pub struct User;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type HouseId = Id<House>;

pub type FlatId = Id<Flat>;

pub type SubscriptionId = Id<Subscription>;

/// Identity handed over by the role gate; also recorded as a flat's moderator.
pub type UserId = Id<User>;
