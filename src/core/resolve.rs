//! Match resolver - group detection, removal, and gravity compaction
//!
//! Detection is a breadth-first flood fill over 4-connected same-colored
//! neighbors with one global visited set, so the whole scan is linear in
//! board area no matter how many groups exist. Every connected component is
//! discovered exactly once; groups reaching [`MATCH_MIN`] cells contribute
//! all of their positions to the result.

use arrayvec::ArrayVec;

use crate::core::board::{Board, BOARD_CELLS};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MATCH_MIN};

/// Matched positions, at most one entry per cell
pub type MatchSet = ArrayVec<(i8, i8), BOARD_CELLS>;

/// 4-directional adjacency (no diagonals)
const NEIGHBORS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline(always)]
fn visited_index(x: i8, y: i8) -> usize {
    (y as usize) * (BOARD_WIDTH as usize) + (x as usize)
}

/// Find every position belonging to a same-colored 4-connected group of
/// [`MATCH_MIN`] or more cells. The result is a set union over all qualifying
/// groups; discovery order does not affect membership.
pub fn find_matches(board: &Board) -> MatchSet {
    let mut matched = MatchSet::new();
    let mut visited = [false; BOARD_CELLS];
    let mut frontier: ArrayVec<(i8, i8), BOARD_CELLS> = ArrayVec::new();
    let mut component: ArrayVec<(i8, i8), BOARD_CELLS> = ArrayVec::new();

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if visited[visited_index(x, y)] {
                continue;
            }
            let Some(Some(color)) = board.get(x, y) else {
                continue;
            };

            // Flood fill one component; visited marks keep components disjoint
            frontier.clear();
            component.clear();
            visited[visited_index(x, y)] = true;
            frontier.push((x, y));
            component.push((x, y));

            while let Some((cx, cy)) = frontier.pop() {
                for (dx, dy) in NEIGHBORS {
                    let nx = cx + dx;
                    let ny = cy + dy;
                    if !board.is_in_bounds(nx, ny) || visited[visited_index(nx, ny)] {
                        continue;
                    }
                    if board.get(nx, ny) == Some(Some(color)) {
                        visited[visited_index(nx, ny)] = true;
                        frontier.push((nx, ny));
                        component.push((nx, ny));
                    }
                }
            }

            if component.len() >= MATCH_MIN {
                for &pos in &component {
                    matched.push(pos);
                }
            }
        }
    }

    matched
}

/// Empty exactly the given positions. Returns how many cells actually held a
/// token; everything outside the match set is left untouched.
pub fn remove_matches(board: &mut Board, matches: &[(i8, i8)]) -> usize {
    let mut removed = 0;
    for &(x, y) in matches {
        if board.is_occupied(x, y) {
            board.set(x, y, None);
            removed += 1;
        }
    }
    removed
}

/// Compact every column downward (toward the highest row index), preserving
/// the relative vertical order of surviving tokens. Idempotent.
pub fn apply_gravity(board: &mut Board) {
    for x in 0..BOARD_WIDTH as i8 {
        // Two-pointer compaction, scanning and writing bottom to top
        let mut write_y = BOARD_HEIGHT as i8 - 1;
        for y in (0..BOARD_HEIGHT as i8).rev() {
            if let Some(Some(color)) = board.get(x, y) {
                if write_y != y {
                    board.set(x, write_y, Some(color));
                    board.set(x, y, None);
                }
                write_y -= 1;
            }
        }
    }
}
