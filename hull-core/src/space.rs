//! Space descriptors for observations and actions.
use crate::error::HullError;
use ndarray::ArrayD;

/// A bounded numeric range of a fixed shape.
///
/// `low` and `high` give the elementwise bounds and share one shape, which is
/// also the shape of every observation or action described by the space.
/// The bounds are assumed to satisfy `low[i] <= high[i]`; this is not
/// enforced here.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: ArrayD<f32>,
    high: ArrayD<f32>,
}

impl BoxSpace {
    /// Creates a box with the given elementwise bounds.
    pub fn new(low: ArrayD<f32>, high: ArrayD<f32>) -> Result<Self, HullError> {
        if low.shape() != high.shape() {
            return Err(HullError::ShapeMismatch {
                expected: low.shape().to_vec(),
                actual: high.shape().to_vec(),
            });
        }
        Ok(Self { low, high })
    }

    /// The shape shared by the bounds and by every value in the space.
    pub fn shape(&self) -> &[usize] {
        self.low.shape()
    }

    /// The number of elements of a value in the space.
    pub fn len(&self) -> usize {
        self.low.len()
    }

    /// `true` if values in the space have no elements.
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// The elementwise lower bound.
    pub fn low(&self) -> &ArrayD<f32> {
        &self.low
    }

    /// The elementwise upper bound.
    pub fn high(&self) -> &ArrayD<f32> {
        &self.high
    }
}

/// The kinds of spaces an environment can expose.
#[derive(Clone, Debug, PartialEq)]
pub enum Space {
    /// A bounded numeric range, see [`BoxSpace`].
    Box(BoxSpace),

    /// A categorical space with the given number of choices.
    Discrete(usize),
}

impl Space {
    /// Returns the box descriptor of this space.
    ///
    /// Wrappers that only operate on bounded numeric spaces use this to
    /// reject other space kinds at construction time.
    pub fn as_box(&self) -> Result<&BoxSpace, HullError> {
        match self {
            Space::Box(b) => Ok(b),
            Space::Discrete(_) => Err(HullError::TypeMismatch("Discrete".to_string())),
        }
    }
}
