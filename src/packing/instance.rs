//! Bin-packing problem constants.

use thiserror::Error;

/// An instance that no chromosome could ever decode into a feasible
/// packing. Fatal: the run aborts before any generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("instance has no objects")]
    NoObjects,

    #[error("box capacity ({0}) must be positive")]
    NonPositiveCapacity(f64),

    #[error("object {object} has non-positive weight ({weight})")]
    NonPositiveWeight { object: usize, weight: f64 },

    #[error("object {object} (weight {weight}) can never fit in a box of capacity {capacity}")]
    ObjectTooHeavy {
        object: usize,
        weight: f64,
        capacity: f64,
    },
}

/// Problem constants: object weights and the uniform box capacity.
///
/// Read-only after construction and shared by every decoding, across
/// all islands and threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    weights: Vec<f64>,
    capacity: f64,
}

impl Instance {
    /// Builds an instance, rejecting anything a decoder could never
    /// pack: empty object lists, non-positive weights or capacity, and
    /// objects heavier than an empty box.
    pub fn new(weights: Vec<f64>, capacity: f64) -> Result<Self, InstanceError> {
        if weights.is_empty() {
            return Err(InstanceError::NoObjects);
        }
        if capacity <= 0.0 {
            return Err(InstanceError::NonPositiveCapacity(capacity));
        }
        for (object, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                return Err(InstanceError::NonPositiveWeight { object, weight });
            }
            if weight > capacity {
                return Err(InstanceError::ObjectTooHeavy {
                    object,
                    weight,
                    capacity,
                });
            }
        }
        Ok(Self { weights, capacity })
    }

    /// Number of objects to pack.
    pub fn num_objects(&self) -> usize {
        self.weights.len()
    }

    /// Weight of one object.
    pub fn weight(&self, object: usize) -> f64 {
        self.weights[object]
    }

    /// Uniform capacity of every box.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of all object weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}
