//! fuzzyset - Fuzzy Set Theory
//!
//! A Rust implementation of fuzzy sets over discrete universes of discourse:
//! elements carry a graded degree of membership in [0, 1] instead of a
//! binary in/out flag.
//!
//! # Architecture
//!
//! Two layers compose the crate:
//!
//! - [`membership`] - the membership function catalogue: pure, closed-form
//!   shape generators ([`MembershipFunction`]) and the [`Membership`]
//!   capability trait that also admits plain closures
//! - [`set`] - the fuzzy set engine: the [`Set`] value type with checked
//!   [`Grade`]s and the standard algebra over stored grades
//!
//! # Features
//!
//! - Explicit (elements + grades) and sampled (universe + function)
//!   construction, with crisp and empty shorthands
//! - Complement, max-union, min-intersection over stored grades
//! - Alpha-cut family: alpha-cut, strong alpha-cut, support, core
//! - Crispness/emptiness predicates, containment-style and structural
//!   equality, grade-weighted centroid
//! - Canonical `{g1/e1, g2/e2, ...}` rendering, ascending by element
//! - Typed construction failures ([`FuzzyError`]) instead of panics;
//!   grades are validated, never clamped
//!
//! # Example
//!
//! ```rust
//! use fuzzyset::{MembershipFunction, Set};
//!
//! let universe: Vec<f64> = (0..=10).map(f64::from).collect();
//!
//! let warm = Set::from_membership(&universe, &MembershipFunction::Gaussian(5.0, 2.0)).unwrap();
//! let hot = Set::from_membership(&universe, &MembershipFunction::Sigmoid(2.0, 7.0)).unwrap();
//!
//! let either = warm.union(&hot);
//! assert_eq!(either.grade(5.0).value(), 1.0);
//! assert_eq!(either.core(), Set::crisp(&[5.0]));
//! ```

pub mod error;
pub mod membership;
pub mod set;

// Re-export error types
pub use crate::error::{ErrorCode, ErrorContext, FuzzyError, FuzzyResult};

// Re-export the membership function catalogue
pub use crate::membership::{Membership, MembershipFunction};

// Re-export set types
pub use crate::set::{Grade, Set};
