//! Incremental assembly of a packing plan.

use super::instance::Instance;

/// One open box: the objects placed in it and its remaining capacity.
#[derive(Debug, Clone)]
struct PackedBox {
    objects: Vec<usize>,
    free: f64,
}

/// A packing plan under construction: box id → placed objects, with
/// per-box remaining capacity.
///
/// Box ids are allocated sequentially from zero and never reused. All
/// mutation funnels through [`add_object`](PackingSolution::add_object),
/// which rejects anything that would overflow a box, so a solution can
/// never hold a capacity violation.
///
/// A solution lives only for the decoding that builds it; it is scored
/// and dropped, never carried across generations.
#[derive(Debug, Clone)]
pub struct PackingSolution<'a> {
    instance: &'a Instance,
    boxes: Vec<PackedBox>,
}

impl<'a> PackingSolution<'a> {
    /// An empty plan with no open boxes.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            boxes: Vec::new(),
        }
    }

    /// Opens a new empty box and returns its id.
    pub fn create_box(&mut self) -> usize {
        self.boxes.push(PackedBox {
            objects: Vec::new(),
            free: self.instance.capacity(),
        });
        self.boxes.len() - 1
    }

    /// Places an object into a box.
    ///
    /// Returns `false`, leaving the plan untouched, if the box does not
    /// exist or lacks capacity for the object's weight. Otherwise
    /// records the assignment and shrinks the box's free capacity.
    pub fn add_object(&mut self, object: usize, box_id: usize) -> bool {
        let weight = self.instance.weight(object);
        if !self.has_space(box_id, weight) {
            return false;
        }
        let packed = &mut self.boxes[box_id];
        packed.objects.push(object);
        packed.free -= weight;
        true
    }

    /// Whether a box exists and can still take `weight`.
    pub fn has_space(&self, box_id: usize, weight: f64) -> bool {
        self.boxes
            .get(box_id)
            .is_some_and(|packed| packed.free >= weight)
    }

    /// Remaining capacity of a box, `None` for an unknown id.
    pub fn free_space(&self, box_id: usize) -> Option<f64> {
        self.boxes.get(box_id).map(|packed| packed.free)
    }

    /// Number of boxes opened so far.
    pub fn boxes_used(&self) -> usize {
        self.boxes.len()
    }

    /// Objects placed in a box, in placement order.
    pub fn box_objects(&self, box_id: usize) -> &[usize] {
        &self.boxes[box_id].objects
    }

    /// Filled fraction of a box, in (0, 1] for a non-empty box.
    pub fn fill_fraction(&self, box_id: usize) -> f64 {
        let packed = &self.boxes[box_id];
        (self.instance.capacity() - packed.free) / self.instance.capacity()
    }

    /// Open boxes whose free capacity is at least `weight`.
    pub fn boxes_with_space(&self, weight: f64) -> impl Iterator<Item = usize> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter(move |(_, packed)| packed.free >= weight)
            .map(|(id, _)| id)
    }
}
