//! Fuzzy Set Engine
//!
//! The [`Set`] abstraction: a finite, ordered mapping from elements of a
//! discrete universe to degrees of membership, with the standard fuzzy-set
//! algebra on top:
//! - Explicit and sampled construction, plus crisp/empty shorthands
//! - Complement, max-union, min-intersection
//! - The alpha-cut family (alpha-cut, strong alpha-cut, support, core)
//! - Crispness/emptiness predicates and containment-style equality
//! - Centroid reduction and the canonical `{g/e, ...}` string form
//!
//! A set is self-contained once built: the algebra reads only the stored
//! grades, never the membership function that produced them, so sets from
//! either constructor compose symmetrically.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::Membership;

// ============================================================================
// Grade
// ============================================================================

/// A degree of membership, guaranteed to lie in the closed interval [0, 1].
///
/// Construction via [`Grade::new`] is the single validation point: values
/// outside the interval (including NaN) are rejected, never clamped. The
/// pointwise operations are closed over valid grades and therefore total.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Grade(f64);

impl Grade {
    /// No membership
    pub const ZERO: Grade = Grade(0.0);
    /// Full membership
    pub const ONE: Grade = Grade(1.0);

    /// Validate a raw value into a grade
    pub fn new(value: f64) -> FuzzyResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Grade(value))
        } else {
            Err(FuzzyError::invalid_grade(value))
        }
    }

    /// Get the raw value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Fuzzy negation: 1 − g
    pub fn complement(self) -> Grade {
        Grade(1.0 - self.0)
    }

    /// Pointwise minimum (the standard intersection t-norm)
    pub fn min(self, other: Grade) -> Grade {
        Grade(self.0.min(other.0))
    }

    /// Pointwise maximum (the standard union t-conorm)
    pub fn max(self, other: Grade) -> Grade {
        Grade(self.0.max(other.0))
    }

    /// Check whether this grade is classical membership (exactly 0 or 1)
    pub fn is_crisp(self) -> bool {
        self.0 == 0.0 || self.0 == 1.0
    }

    /// Check for exactly no membership
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Check for exactly full membership
    pub fn is_full(self) -> bool {
        self.0 == 1.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Set
// ============================================================================

/// A fuzzy set over a discrete universe of discourse.
///
/// Stored as an association list sorted by element, which keeps lookups at
/// O(log n) and makes ascending iteration — the canonical order for
/// [`Set::elements`], [`Set::grades`], and the string form — free.
///
/// Structural `==` compares element/grade pairs exactly in both directions;
/// for the one-directional containment check of the original algebra see
/// [`Set::is_equal`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Set {
    data: Vec<(f64, Grade)>,
}

impl Set {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a set from parallel element and grade sequences.
    ///
    /// Fails with `LengthMismatch` when the sequences differ in length and
    /// with `InvalidGrade` when any grade falls outside [0, 1]; either
    /// failure aborts the whole construction. A repeated element overwrites
    /// the grade recorded for it earlier (last write wins).
    pub fn new(elements: &[f64], grades: &[f64]) -> FuzzyResult<Self> {
        if elements.len() != grades.len() {
            return Err(FuzzyError::length_mismatch(elements.len(), grades.len()));
        }

        let mut set = Set::empty();
        for (&element, &grade) in elements.iter().zip(grades.iter()) {
            set.insert(element, grade)?;
        }
        Ok(set)
    }

    /// Build a set by sampling a membership function over a universe.
    ///
    /// Fails with `InvalidGrade` when a sample falls outside [0, 1]; this is
    /// where a malformed membership function is caught.
    pub fn from_membership(universe: &[f64], membership: &impl Membership) -> FuzzyResult<Self> {
        let mut set = Set::empty();
        for &element in universe {
            set.insert(element, membership.evaluate(element))?;
        }
        Ok(set)
    }

    /// Build the crisp set over a universe: every element at full membership
    pub fn crisp(universe: &[f64]) -> Self {
        let mut set = Set::empty();
        for &element in universe {
            set.insert_grade(element, Grade::ONE);
        }
        set
    }

    /// The set with no elements
    pub fn empty() -> Self {
        Set::default()
    }

    /// Insert an element, overwriting its grade if already present.
    ///
    /// The grade is validated exactly as at construction; a rejected grade
    /// leaves the set unchanged.
    pub fn insert(&mut self, element: f64, grade: f64) -> FuzzyResult<()> {
        let grade = Grade::new(grade)?;
        self.insert_grade(element, grade);
        Ok(())
    }

    fn insert_grade(&mut self, element: f64, grade: Grade) {
        match self.position(element) {
            Ok(i) => self.data[i].1 = grade,
            Err(i) => self.data.insert(i, (element, grade)),
        }
    }

    fn position(&self, element: f64) -> Result<usize, usize> {
        self.data.binary_search_by(|(stored, _)| stored.total_cmp(&element))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get the grade of an element.
    ///
    /// An absent element is not a member, which is by definition grade 0 —
    /// never an error.
    pub fn grade(&self, element: f64) -> Grade {
        match self.position(element) {
            Ok(i) => self.data[i].1,
            Err(_) => Grade::ZERO,
        }
    }

    /// Elements in ascending numeric order
    pub fn elements(&self) -> Vec<f64> {
        self.data.iter().map(|&(element, _)| element).collect()
    }

    /// Grades in the order of [`Set::elements`]
    pub fn grades(&self) -> Vec<Grade> {
        self.data.iter().map(|&(_, grade)| grade).collect()
    }

    /// Iterate over (element, grade) pairs in ascending element order
    pub fn iter(&self) -> impl Iterator<Item = (f64, Grade)> + '_ {
        self.data.iter().copied()
    }

    /// Number of stored elements (including those at grade 0)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    // ========================================================================
    // Algebra
    // ========================================================================

    /// The complement set: same elements, each grade negated to 1 − g
    pub fn complement(&self) -> Set {
        Set {
            data: self.data.iter().map(|&(x, g)| (x, g.complement())).collect(),
        }
    }

    /// Max-union over the union of both element sets.
    ///
    /// Shared elements take the larger grade; exclusive elements keep their
    /// own. Symmetric in its arguments.
    pub fn union(&self, other: &Set) -> Set {
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        let (mut i, mut j) = (0, 0);

        while i < self.data.len() && j < other.data.len() {
            let (x, g) = self.data[i];
            let (y, h) = other.data[j];
            match x.total_cmp(&y) {
                Ordering::Less => {
                    data.push((x, g));
                    i += 1;
                }
                Ordering::Greater => {
                    data.push((y, h));
                    j += 1;
                }
                Ordering::Equal => {
                    data.push((x, g.max(h)));
                    i += 1;
                    j += 1;
                }
            }
        }
        data.extend_from_slice(&self.data[i..]);
        data.extend_from_slice(&other.data[j..]);

        Set { data }
    }

    /// Min-intersection over the elements present in *both* sets.
    ///
    /// Elements present in only one input are absent from the result, not
    /// carried at grade 0. Symmetric in its arguments.
    pub fn intersection(&self, other: &Set) -> Set {
        let mut data = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.data.len() && j < other.data.len() {
            let (x, g) = self.data[i];
            let (y, h) = other.data[j];
            match x.total_cmp(&y) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    data.push((x, g.min(h)));
                    i += 1;
                    j += 1;
                }
            }
        }

        Set { data }
    }

    // ========================================================================
    // Alpha-cut family
    // ========================================================================

    /// The crisp set of elements whose grade is at least `alpha`
    pub fn alpha_cut(&self, alpha: f64) -> Set {
        self.cut(|g| g.value() >= alpha)
    }

    /// The crisp set of elements whose grade strictly exceeds `alpha`
    pub fn strong_alpha_cut(&self, alpha: f64) -> Set {
        self.cut(|g| g.value() > alpha)
    }

    /// The crisp set of elements with any membership at all (grade > 0)
    pub fn support(&self) -> Set {
        self.strong_alpha_cut(0.0)
    }

    /// The crisp set of elements with full membership (grade exactly 1)
    pub fn core(&self) -> Set {
        self.cut(Grade::is_full)
    }

    fn cut(&self, keep: impl Fn(Grade) -> bool) -> Set {
        Set {
            data: self
                .data
                .iter()
                .filter(|&&(_, g)| keep(g))
                .map(|&(x, _)| (x, Grade::ONE))
                .collect(),
        }
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Check whether every stored grade is exactly 0 or 1.
    ///
    /// The zero-element set is vacuously crisp.
    pub fn is_crisp(&self) -> bool {
        self.data.iter().all(|&(_, g)| g.is_crisp())
    }

    /// Check whether every stored grade is exactly 0.
    ///
    /// A set may list elements and still be empty by membership; the
    /// zero-element set is vacuously empty as well.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&(_, g)| g.is_zero())
    }

    /// Containment-style equality: every element of `self` carries the same
    /// grade in `other`.
    ///
    /// This check is one-directional — `other` may store additional
    /// elements without affecting the result, so `a.is_equal(b)` and
    /// `b.is_equal(a)` can disagree. Use `==` for symmetric structural
    /// equality.
    pub fn is_equal(&self, other: &Set) -> bool {
        self.data.iter().all(|&(x, g)| other.grade(x) == g)
    }

    // ========================================================================
    // Reduction
    // ========================================================================

    /// The grade-weighted centroid ∑(x·g(x)) / ∑(g(x)).
    ///
    /// Fails with `UndefinedCentroid` when the total grade mass is zero
    /// (including the zero-element set), which would otherwise divide by
    /// zero.
    pub fn centroid(&self) -> FuzzyResult<f64> {
        let mut moment = 0.0;
        let mut mass = 0.0;

        for &(x, g) in &self.data {
            moment += x * g.value();
            mass += g.value();
        }

        if mass == 0.0 {
            return Err(FuzzyError::undefined_centroid());
        }
        Ok(moment / mass)
    }
}

/// Canonical form `{g1/e1, g2/e2, ...}`, ascending by element; the
/// zero-element set renders as `{}`.
impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (element, grade)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}/{}", grade, element)?;
        }
        write!(f, "}}")
    }
}

// ============================================================================
// Tests
// ============================================================================
