//! "2N" random-key decoder for bin packing.
//!
//! A chromosome carries two keys per object. The first `N` keys are
//! sort keys: objects are offered to boxes in ascending-key order, so
//! the search can discover good packing orders instead of hard-coding
//! one. The second `N` keys are placement bias: each object's key is
//! range-bucketed into one of a small closed set of placement rules.
//! Identical chromosomes always decode to identical packings.

use super::fitness::FitnessFunction;
use super::instance::Instance;
use super::solution::PackingSolution;
use crate::brkga::Decoder;

/// Placement rule selected by an object's bias key.
///
/// The key's `[0, 1)` range is split into equal thirds, one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlacementRule {
    /// Lowest-id open box with enough remaining capacity.
    FirstFit,
    /// Open box with the least remaining capacity that still fits.
    BestFit,
    /// Start a new box regardless of open ones.
    OpenNew,
}

impl PlacementRule {
    fn from_key(key: f64) -> Self {
        if key < 1.0 / 3.0 {
            PlacementRule::FirstFit
        } else if key < 2.0 / 3.0 {
            PlacementRule::BestFit
        } else {
            PlacementRule::OpenNew
        }
    }
}

/// Decodes `2N`-key chromosomes into packings of one [`Instance`].
pub struct BinPackingDecoder {
    instance: Instance,
    fitness: FitnessFunction,
}

impl BinPackingDecoder {
    pub fn new(instance: Instance, fitness: FitnessFunction) -> Self {
        Self { instance, fitness }
    }

    /// The instance being packed.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Required chromosome length: two keys per object.
    pub fn chromosome_length(&self) -> usize {
        2 * self.instance.num_objects()
    }

    /// Decodes a chromosome into a complete packing plan.
    ///
    /// Greedy in sort-key order: each object tries the box its
    /// placement rule selects; when the rule yields no usable box (or
    /// the placement is rejected), a new box is opened for it. For a
    /// validated instance every object is always placed.
    ///
    /// # Panics
    /// Panics if `keys.len()` differs from
    /// [`chromosome_length`](Self::chromosome_length).
    pub fn decode_solution(&self, keys: &[f64]) -> PackingSolution<'_> {
        let n = self.instance.num_objects();
        assert_eq!(keys.len(), 2 * n, "chromosome must carry two keys per object");

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            keys[a]
                .partial_cmp(&keys[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut solution = PackingSolution::new(&self.instance);
        for &object in &order {
            let weight = self.instance.weight(object);
            let candidate = match PlacementRule::from_key(keys[n + object]) {
                PlacementRule::FirstFit => solution.boxes_with_space(weight).next(),
                PlacementRule::BestFit => solution.boxes_with_space(weight).min_by(|&a, &b| {
                    solution
                        .free_space(a)
                        .partial_cmp(&solution.free_space(b))
                        .unwrap_or(std::cmp::Ordering::Equal)
                }),
                PlacementRule::OpenNew => None,
            };

            let placed = match candidate {
                Some(box_id) => solution.add_object(object, box_id),
                None => false,
            };
            if !placed {
                let box_id = solution.create_box();
                let placed = solution.add_object(object, box_id);
                debug_assert!(placed, "object must fit an empty box of a valid instance");
            }
        }
        solution
    }

    /// Boxes used by the packing a chromosome decodes to.
    pub fn boxes_used(&self, keys: &[f64]) -> usize {
        self.decode_solution(keys).boxes_used()
    }
}

impl Decoder for BinPackingDecoder {
    fn decode(&self, keys: &[f64]) -> f64 {
        self.fitness.score(&self.decode_solution(keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decoder(weights: Vec<f64>, capacity: f64) -> BinPackingDecoder {
        let instance = Instance::new(weights, capacity).expect("valid instance");
        BinPackingDecoder::new(instance, FitnessFunction::Falkenauer)
    }

    fn box_contents(solution: &PackingSolution<'_>) -> Vec<Vec<usize>> {
        (0..solution.boxes_used())
            .map(|b| solution.box_objects(b).to_vec())
            .collect()
    }

    #[test]
    fn test_rule_bucketing() {
        assert_eq!(PlacementRule::from_key(0.0), PlacementRule::FirstFit);
        assert_eq!(PlacementRule::from_key(0.33), PlacementRule::FirstFit);
        assert_eq!(PlacementRule::from_key(0.34), PlacementRule::BestFit);
        assert_eq!(PlacementRule::from_key(0.66), PlacementRule::BestFit);
        assert_eq!(PlacementRule::from_key(0.67), PlacementRule::OpenNew);
        assert_eq!(PlacementRule::from_key(0.999), PlacementRule::OpenNew);
    }

    #[test]
    fn test_first_fit_scenario() {
        // Sort keys order the objects as weights [8, 4, 4, 1]; every
        // placement key selects first-fit. A first-fit pass in that
        // order packs into two boxes: {8, 1} and {4, 4}.
        let decoder = decoder(vec![4.0, 8.0, 1.0, 4.0], 10.0);
        let keys = vec![
            0.2, 0.1, 0.9, 0.3, // sort keys: order 1, 0, 3, 2
            0.1, 0.1, 0.1, 0.1, // placement bias: first-fit
        ];
        let solution = decoder.decode_solution(&keys);

        assert_eq!(solution.boxes_used(), 2);
        assert_eq!(box_contents(&solution), vec![vec![1, 2], vec![0, 3]]);
    }

    #[test]
    fn test_best_fit_picks_tightest_box() {
        // After objects 0 (weight 5) and 1 (weight 7) open boxes with
        // free 5 and 3, object 2 (weight 3) lands in the tighter box
        // under best-fit but in the first box under first-fit.
        let weights = vec![5.0, 7.0, 3.0];
        let sort_keys = [0.1, 0.2, 0.3];

        let best_fit = decoder(weights.clone(), 10.0);
        let keys: Vec<f64> = sort_keys.iter().copied().chain([0.1, 0.1, 0.5]).collect();
        let solution = best_fit.decode_solution(&keys);
        assert_eq!(box_contents(&solution), vec![vec![0], vec![1, 2]]);

        let first_fit = decoder(weights, 10.0);
        let keys: Vec<f64> = sort_keys.iter().copied().chain([0.1, 0.1, 0.1]).collect();
        let solution = first_fit.decode_solution(&keys);
        assert_eq!(box_contents(&solution), vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_open_new_rule_always_opens() {
        let decoder = decoder(vec![2.0, 2.0], 10.0);
        let keys = vec![0.1, 0.2, 0.9, 0.9];
        let solution = decoder.decode_solution(&keys);
        assert_eq!(solution.boxes_used(), 2);
    }

    #[test]
    fn test_fitness_decreases_with_fewer_boxes() {
        let decoder = decoder(vec![5.0, 5.0, 5.0, 5.0], 10.0);
        // First-fit everywhere: two full boxes.
        let packed = vec![0.1, 0.2, 0.3, 0.4, 0.1, 0.1, 0.1, 0.1];
        // Fresh box for every object: four half-full boxes.
        let scattered = vec![0.1, 0.2, 0.3, 0.4, 0.9, 0.9, 0.9, 0.9];
        assert!(decoder.decode(&packed) < decoder.decode(&scattered));
    }

    #[test]
    #[should_panic(expected = "two keys per object")]
    fn test_wrong_chromosome_length_panics() {
        decoder(vec![1.0, 2.0], 10.0).decode_solution(&[0.5, 0.5, 0.5]);
    }

    fn instance_and_keys() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1usize..16).prop_flat_map(|n| {
            (
                proptest::collection::vec(1.0..=10.0f64, n),
                proptest::collection::vec(0.0..1.0f64, 2 * n),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_capacity_never_exceeded((weights, keys) in instance_and_keys()) {
            let decoder = decoder(weights.clone(), 10.0);
            let solution = decoder.decode_solution(&keys);
            for b in 0..solution.boxes_used() {
                let load: f64 = solution.box_objects(b).iter().map(|&o| weights[o]).sum();
                prop_assert!(load <= 10.0 + 1e-9);
            }
        }

        #[test]
        fn prop_every_object_packed_exactly_once((weights, keys) in instance_and_keys()) {
            let decoder = decoder(weights.clone(), 10.0);
            let solution = decoder.decode_solution(&keys);
            let mut seen: Vec<usize> = (0..solution.boxes_used())
                .flat_map(|b| solution.box_objects(b).iter().copied())
                .collect();
            seen.sort_unstable();
            let all: Vec<usize> = (0..weights.len()).collect();
            prop_assert_eq!(seen, all);
        }

        #[test]
        fn prop_decoding_is_deterministic((weights, keys) in instance_and_keys()) {
            let decoder = decoder(weights, 10.0);
            let first = decoder.decode_solution(&keys);
            let second = decoder.decode_solution(&keys);
            prop_assert_eq!(box_contents(&first), box_contents(&second));
            prop_assert_eq!(decoder.decode(&keys), decoder.decode(&keys));
        }
    }
}
