use csv::ReaderBuilder;
use grid_util::point::Point;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;
use walkdir::WalkDir;

#[allow(unused)]
#[derive(Debug, Deserialize)]
pub struct Scenario {
    id: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    distance: f64,
}

/// A map as read from disk: row-major tile bytes, see the MovingAI map format.
#[derive(Clone, Debug)]
pub struct MapData {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<u8>,
}

fn parse_map(map_str: &str) -> MapData {
    let mut lines = map_str.lines();
    let mut width = 0;
    let mut height = 0;
    for line in lines.by_ref() {
        let line = line.trim();
        if line == "map" {
            break;
        }
        if let Some((key, value)) = line.split_once(' ') {
            let parse = || value.trim().parse::<usize>().expect("Could not parse value");
            match key {
                "width" => width = parse(),
                "height" => height = parse(),
                _ => {}
            }
        }
    }
    let mut tiles = Vec::with_capacity(width * height);
    for row in lines.take(height) {
        let bytes = row.trim_end().as_bytes();
        assert!(bytes.len() >= width, "Map row is shorter than the map width");
        tiles.extend_from_slice(&bytes[..width]);
    }
    assert_eq!(tiles.len(), width * height, "Map has fewer rows than its height");
    MapData {
        width,
        height,
        tiles,
    }
}

fn load_benchmark(name: &str) -> (MapData, Vec<(Point, Point, f64)>) {
    let map_str = fs::read_to_string(Path::new(&format!("./maps/{}.map", name)))
        .expect("Could not read map file");

    let file = File::open(Path::new(&format!("./scenarios/{}.map.scen", name)))
        .expect("Could not open scenario file");

    let reader = io::BufReader::new(file);
    let mut lines = reader.lines();

    // Skip the version line
    lines.next();

    let remaining_data = lines
        .collect::<Result<Vec<_>, _>>()
        .expect("Could not read scenario file")
        .join("\n");

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    let mut data_array: Vec<(Point, Point, f64)> = Vec::new();

    for result in csv_reader.deserialize() {
        let record: Scenario = result.expect("Could not parse scenario record");
        let start = Point::new(record.x1 as i32, record.y1 as i32);
        let goal = Point::new(record.x2 as i32, record.y2 as i32);
        data_array.push((start, goal, record.distance));
    }

    (parse_map(&map_str), data_array)
}

/// Names of all maps below `maps/`, relative to it and without extension, e.g. `test/marsh`.
pub fn get_benchmark_names() -> Vec<String> {
    let root = Path::new("maps/");
    let root = root
        .canonicalize()
        .expect("Failed to canonicalize root path");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).into_iter() {
        let path_str = entry.expect("Could not get dir entry");
        let rel_path = path_str
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of the maps directory");
        if rel_path.components().count() >= 2 {
            if let Some((name, _)) = rel_path.to_str().and_then(|p| p.split_once('.')) {
                names.push(name.to_owned());
            }
        }
    }
    names.sort();
    names
}

/// Loads a map together with its scenarios as `(start, goal, optimal distance)` triples.
pub fn get_benchmark(name: String) -> (MapData, Vec<(Point, Point, f64)>) {
    let benchmark_names = get_benchmark_names();
    if benchmark_names.contains(&name) {
        load_benchmark(name.as_str())
    } else {
        panic!("Could not load benchmark {}!", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_in_any_order() {
        let map = parse_map("type octile\nwidth 3\nheight 2\nmap\n.@.\nWW.\n");
        assert_eq!(map.width, 3);
        assert_eq!(map.height, 2);
        assert_eq!(map.tiles, b".@.WW.".to_vec());
    }
}
