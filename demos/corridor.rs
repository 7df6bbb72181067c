//! Corridor demo: a vertical wall with a single gap.
//!
//! Run with `RUST_LOG=debug cargo run --bin corridor` to see search counters.

use gridstar_core::{GridMap, Point};
use gridstar_paths::{Path, PathFinder};

const WIDTH: i32 = 10;
const HEIGHT: i32 = 7;
const WALL_X: i32 = 4;
const GAP: Point = Point::new(WALL_X, 3);

fn report(path: Option<&Path>) {
    match path {
        Some(path) => {
            println!("Path found! length = {}", path.len());
            let cells: Vec<String> = path.points().iter().map(Point::to_string).collect();
            println!("{}", cells.join(" -> "));
        }
        None => println!("No path."),
    }
}

fn main() {
    env_logger::init();

    let mut map = GridMap::new(WIDTH, HEIGHT);
    for y in 1..=5 {
        map.set_wall(Point::new(WALL_X, y), true);
    }
    map.set_wall(GAP, false);

    let start = Point::new(1, 3);
    let goal = Point::new(8, 3);
    let finder = PathFinder::new();

    let search = finder.search(&map, start, goal);
    log::info!("with gap: {:?}", search.stats);
    report(search.path.as_ref());

    // Close the gap and block the top and bottom rows as well.
    map.set_wall(GAP, true);
    map.set_wall(Point::new(WALL_X, 0), true);
    map.set_wall(Point::new(WALL_X, HEIGHT - 1), true);

    let search = finder.search(&map, start, goal);
    log::info!("solid wall: {:?}", search.stats);
    report(search.path.as_ref());
}
