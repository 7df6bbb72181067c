use gridstar_core::{GridMap, Point};

use crate::distance::manhattan;
use crate::node::{Frontier, SearchNode};
use crate::path::{Path, Search, SearchStats};

/// Cost of one orthogonal step.
const STEP_COST: i32 = 1;

/// A* shortest-path search on a [`GridMap`].
///
/// Moves are 4-directional with unit cost and the heuristic is Manhattan
/// distance, so returned paths are optimal. The finder holds no state: every
/// query allocates its own node array, sized to the map, and drops it on
/// return. A shared `&GridMap` can therefore be searched from several
/// threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> Self {
        Self
    }

    /// Compute the shortest path from `start` to `goal`.
    ///
    /// Returns the full path (including both endpoints) or `None` if either
    /// endpoint is a wall or out of bounds, or if the goal is unreachable.
    pub fn find_path(&self, map: &GridMap, start: Point, goal: Point) -> Option<Path> {
        self.search(map, start, goal).path
    }

    /// Like [`find_path`](PathFinder::find_path), also reporting search
    /// counters.
    pub fn search(&self, map: &GridMap, start: Point, goal: Point) -> Search {
        let (Some(start_idx), Some(goal_idx)) = (map.index(start), map.index(goal)) else {
            log::trace!("astar: endpoint out of bounds, start={start} goal={goal}");
            return Search::miss(SearchStats::default());
        };
        if map.is_wall_at(start_idx) || map.is_wall_at(goal_idx) {
            log::trace!("astar: endpoint blocked, start={start} goal={goal}");
            return Search::miss(SearchStats::default());
        }

        if start == goal {
            return Search {
                path: Some(Path::new(vec![start], 0)),
                stats: SearchStats::default(),
            };
        }

        let search = run(map, start_idx, goal_idx);
        match &search.path {
            Some(path) => log::debug!(
                "astar: {start} -> {goal} cost={} expanded={} pushed={} stale={}",
                path.cost(),
                search.stats.expanded,
                search.stats.pushed,
                search.stats.stale,
            ),
            None => log::debug!(
                "astar: {start} -> {goal} unreachable expanded={} pushed={}",
                search.stats.expanded,
                search.stats.pushed,
            ),
        }
        search
    }
}

/// Shorthand for `PathFinder::new().find_path(map, start, goal)`.
pub fn find_path(map: &GridMap, start: Point, goal: Point) -> Option<Path> {
    PathFinder::new().find_path(map, start, goal)
}

/// The search proper, from one flat index to another. Both endpoints must
/// be passable.
fn run(map: &GridMap, start_idx: usize, goal_idx: usize) -> Search {
    let len = map.len();
    let mut nodes = vec![SearchNode::default(); len];
    let mut closed = vec![false; len];
    let mut open = Frontier::new();
    let mut stats = SearchStats::default();
    let start = map.point(start_idx);
    let goal = map.point(goal_idx);

    {
        let node = &mut nodes[start_idx];
        node.g = 0;
        node.h = manhattan(start, goal);
        node.parent = None;
    }
    open.push(start_idx, nodes[start_idx].f());

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Superseded by a cheaper entry that was expanded earlier.
        if closed[ci] {
            stats.stale += 1;
            continue;
        }
        // `g` only ever drops, so the live entry is the one with the lowest f.
        debug_assert_eq!(current.f, nodes[ci].f());

        if ci == goal_idx {
            break 'search true;
        }

        closed[ci] = true;
        stats.expanded += 1;

        let current_g = nodes[ci].g;
        let current_point = map.point(ci);

        for np in current_point.neighbors_4() {
            // Off-grid neighbours have no index and count as walls.
            let Some(ni) = map.index(np) else {
                continue;
            };
            if map.is_wall_at(ni) || closed[ni] {
                continue;
            }

            let tentative_g = current_g + STEP_COST;
            let n = &mut nodes[ni];
            if tentative_g >= n.g {
                continue;
            }
            if !n.is_visited() {
                n.h = manhattan(np, goal);
            }
            n.g = tentative_g;
            n.parent = Some(ci);

            open.push(ni, n.f());
        }
    };

    stats.pushed = open.pushed();
    stats.max_frontier = open.high_water();

    if !found {
        return Search::miss(stats);
    }

    Search {
        path: Some(reconstruct(map, &nodes, goal_idx)),
        stats,
    }
}

/// Follow parent links back from the goal, then reverse.
fn reconstruct(map: &GridMap, nodes: &[SearchNode], goal_idx: usize) -> Path {
    let mut points = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        points.push(map.point(i));
        ci = nodes[i].parent;
    }
    points.reverse();
    Path::new(points, nodes[goal_idx].g)
}
