use ndarray::Array2;
use std::collections::VecDeque;

use crate::*;

/// Bechtel's Board Benchmark Value: the minimum number of left clicks needed to
/// reveal every safe cell.
///
/// Each connected region of zero cells costs one click (which also opens the
/// numbered border around it). Every numbered cell not on such a border costs one
/// more.
pub fn three_bv(layout: &MineLayout) -> u32 {
    let dims = layout.size().to_nd_index();
    let mut covered: Array2<bool> = Array2::default(dims);
    let is_blank = |coords: Coord2| {
        !layout.contains_mine(coords) && layout.adjacent_mine_count(coords) == 0
    };

    let mut clicks = 0;
    for coords in layout.iter_coords() {
        if covered[coords.to_nd_index()] || !is_blank(coords) {
            continue;
        }

        clicks += 1;
        covered[coords.to_nd_index()] = true;
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in layout.iter_neighbors(visit_coords) {
                if covered[pos.to_nd_index()] || layout.contains_mine(pos) {
                    continue;
                }
                covered[pos.to_nd_index()] = true;
                if is_blank(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
        log::trace!("Blank region from {:?} counted, clicks so far: {}", coords, clicks);
    }

    let isolated = layout
        .iter_coords()
        .filter(|&coords| !layout.contains_mine(coords) && !covered[coords.to_nd_index()])
        .count() as u32;

    clicks + isolated
}

/// Speed score: 3BV per second, times 100, rounded.
///
/// Elapsed time is floored at one millisecond.
pub fn speed_score(three_bv: u32, elapsed_millis: i64) -> u32 {
    let secs = elapsed_millis.max(1) as f64 / 1000.0;
    (f64::from(three_bv) / secs * 100.0).round() as u32
}
