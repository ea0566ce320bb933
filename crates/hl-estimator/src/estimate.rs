//! The heat-loss calculation and its aggregation over a project tree.

use crate::results::{ProjectResult, RoomResult};
use hl_core::{Real, INDOOR_REFERENCE_TEMP_C};
use hl_model::{ProjectTree, RoomAreas};

// Empirical per-surface weights: relative heat-transfer susceptibility
// of each envelope surface type. Not calibrated to a physical unit
// system.
const W_OUTER_WALL: Real = 0.3;
const W_ROOF: Real = 0.2;
const W_WINDOW: Real = 0.5;
const W_OUTER_DOOR: Real = 0.4;
const W_TO_UNHEATED: Real = 0.1;

/// Weighted sum of a room's exterior-facing surface areas.
///
/// Roof windows and outer windows share one weight, so their areas are
/// summed before weighting.
pub fn envelope_loss_coefficient(areas: &RoomAreas) -> Real {
    areas.outer_wall_area * W_OUTER_WALL
        + areas.roof_area * W_ROOF
        + (areas.roof_window_area + areas.outer_window_area) * W_WINDOW
        + areas.outer_door_area * W_OUTER_DOOR
        + areas.ceiling_to_unheated_area * W_TO_UNHEATED
        + areas.floor_to_unheated_area * W_TO_UNHEATED
        + areas.wall_to_unheated_area * W_TO_UNHEATED
}

/// Steady-state heat loss of one room against a design outdoor
/// temperature.
///
/// Total over all finite inputs: negative areas and out-of-range
/// temperatures are taken as authoritative here, and a
/// `norm_outside_temp` above [`INDOOR_REFERENCE_TEMP_C`] yields a
/// negative result. Input checking belongs to the upstream validation
/// layer.
pub fn compute_room_heat_loss(areas: &RoomAreas, norm_outside_temp: Real) -> Real {
    envelope_loss_coefficient(areas) * (INDOOR_REFERENCE_TEMP_C - norm_outside_temp)
}

/// Per-room heat loss for every room in the tree, plus the project total.
///
/// Traversal is building → floor → room in the tree's own order (creation
/// order when the tree came from a `HierarchyReader`), and the output
/// sequence carries that grouping as a contract. An empty tree yields an
/// empty sequence and a total of zero.
pub fn compute_project_results(tree: &ProjectTree) -> ProjectResult {
    let mut results = Vec::with_capacity(tree.room_count());
    for tb in &tree.buildings {
        for tf in &tb.floors {
            for room in &tf.rooms {
                results.push(RoomResult {
                    building: tb.building.name.clone(),
                    floor: tf.floor.name.clone(),
                    room: room.name.clone(),
                    heat_loss: compute_room_heat_loss(&room.areas, tb.building.norm_outside_temp),
                });
            }
        }
    }
    let total_heat_loss = results.iter().map(|r| r.heat_loss).sum();
    ProjectResult {
        results,
        total_heat_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::{nearly_equal, Tolerances};
    use hl_model::{MemoryStore, ProjectTree, RoomAreas};
    use proptest::prelude::*;

    fn reference_room() -> RoomAreas {
        RoomAreas {
            outer_wall_area: 20.0,
            outer_window_area: 5.0,
            outer_door_area: 2.0,
            ..RoomAreas::default()
        }
    }

    #[test]
    fn reference_room_at_minus_twelve() {
        let areas = reference_room();
        assert_eq!(envelope_loss_coefficient(&areas), 9.3);
        assert_eq!(compute_room_heat_loss(&areas, -12.0), 297.6);
    }

    #[test]
    fn zero_areas_mean_zero_loss_at_any_temperature() {
        let areas = RoomAreas::default();
        for temp in [-40.0, -12.0, 0.0, 20.0, 35.0] {
            assert_eq!(compute_room_heat_loss(&areas, temp), 0.0);
        }
    }

    #[test]
    fn outdoor_above_indoor_reference_goes_negative() {
        let loss = compute_room_heat_loss(&reference_room(), 30.0);
        assert!(loss < 0.0);
        assert_eq!(loss, 9.3 * -10.0);
    }

    #[test]
    fn empty_tree_totals_zero() {
        let result = compute_project_results(&ProjectTree::default());
        assert!(result.is_empty());
        assert_eq!(result.total_heat_loss, 0.0);
    }

    #[test]
    fn single_room_project_matches_room_result() {
        let mut store = MemoryStore::new();
        let user = store.create_user("alice").unwrap();
        let project = store.create_project("Reference", user).unwrap();
        let b = store.create_building("House", "Berlin", -12.0, project).unwrap();
        let f = store.create_floor("Ground", b).unwrap();
        store.create_room("Living room", reference_room(), f).unwrap();

        let result = compute_project_results(&ProjectTree::collect(&store, project));
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].heat_loss, 297.6);
        assert_eq!(result.total_heat_loss, 297.6);
        assert_eq!(result.results[0].building, "House");
        assert_eq!(result.results[0].floor, "Ground");
        assert_eq!(result.results[0].room, "Living room");
    }

    #[test]
    fn results_grouped_by_creation_order_not_name() {
        let mut store = MemoryStore::new();
        let user = store.create_user("alice").unwrap();
        let project = store.create_project("Two houses", user).unwrap();
        // B1 created first but named to sort last alphabetically
        let b1 = store.create_building("Zulu", "Berlin", -10.0, project).unwrap();
        let f1 = store.create_floor("Ground", b1).unwrap();
        store.create_room("R1", reference_room(), f1).unwrap();
        let b2 = store.create_building("Alpha", "Hamburg", -10.0, project).unwrap();
        let f2 = store.create_floor("Ground", b2).unwrap();
        store.create_room("R2", reference_room(), f2).unwrap();

        let result = compute_project_results(&ProjectTree::collect(&store, project));
        let order: Vec<_> = result.results.iter().map(|r| r.building.as_str()).collect();
        assert_eq!(order, ["Zulu", "Alpha"]);
    }

    #[test]
    fn total_is_sum_of_members() {
        let mut store = MemoryStore::new();
        let user = store.create_user("alice").unwrap();
        let project = store.create_project("Sum", user).unwrap();
        let b = store.create_building("House", "Berlin", -12.0, project).unwrap();
        let f = store.create_floor("Ground", b).unwrap();
        // rational inputs: the sum must be exact, not approximate
        for i in 0..5 {
            let areas = RoomAreas {
                outer_wall_area: i as f64,
                roof_area: 2.0 * i as f64,
                ..RoomAreas::default()
            };
            store.create_room(&format!("R{i}"), areas, f).unwrap();
        }

        let result = compute_project_results(&ProjectTree::collect(&store, project));
        let sum: f64 = result.results.iter().map(|r| r.heat_loss).sum();
        assert_eq!(result.total_heat_loss, sum);
    }

    fn finite_area() -> impl Strategy<Value = f64> {
        0.0..1000.0f64
    }

    /// All-zero areas except one field set to `value`.
    fn single_field(slot: usize, value: f64) -> RoomAreas {
        let mut areas = RoomAreas::default();
        match slot {
            0 => areas.outer_wall_area = value,
            1 => areas.roof_area = value,
            2 => areas.roof_window_area = value,
            3 => areas.outer_window_area = value,
            4 => areas.outer_door_area = value,
            5 => areas.ceiling_to_unheated_area = value,
            6 => areas.floor_to_unheated_area = value,
            7 => areas.wall_to_unheated_area = value,
            _ => unreachable!(),
        }
        areas
    }

    proptest! {
        /// Scaling one area field scales its contribution linearly.
        #[test]
        fn linear_in_each_area_field(
            base in finite_area(),
            k in 0.0..16.0f64,
            temp in -40.0..19.0f64,
        ) {
            let tol = Tolerances::default();
            let weights = [0.3, 0.2, 0.5, 0.5, 0.4, 0.1, 0.1, 0.1];
            for (slot, weight) in weights.iter().enumerate() {
                let scaled = compute_room_heat_loss(&single_field(slot, base * k), temp);
                let expected = base * k * weight * (20.0 - temp);
                prop_assert!(nearly_equal(scaled, expected, tol));
            }
        }

        /// Doubling (20 - norm_outside_temp) doubles the result.
        #[test]
        fn affine_in_temperature_differential(
            wall in finite_area(),
            window in finite_area(),
            dt in 0.1..60.0f64,
        ) {
            let areas = RoomAreas {
                outer_wall_area: wall,
                outer_window_area: window,
                ..RoomAreas::default()
            };
            let tol = Tolerances::default();
            let at = |differential: f64| {
                compute_room_heat_loss(&areas, 20.0 - differential)
            };
            prop_assert!(nearly_equal(at(2.0 * dt), 2.0 * at(dt), tol));
            prop_assert!(nearly_equal(at(0.0), 0.0, tol));
        }
    }
}
