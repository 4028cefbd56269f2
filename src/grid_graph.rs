use crate::cell::{Cell, CellKind, Edge};
use crate::error::{PlanError, PlanResult};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the four axis-aligned neighbours in the order they are examined: left, right, up,
/// down.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// [GridGraph] owns the cell array of a rectangular grid together with its adjacency lists. Edges
/// are directed, connect 4-neighbours that are both not [CellKind::Wall] and carry the traversal
/// weight of their destination. In addition connected components are tracked using a
/// [UnionFind] structure so that unreachable goals can be detected without flood-filling.
///
/// The graph is only obtainable fully built: the constructors assign every kind, then compute
/// adjacency and components exactly once. It is never mutated afterwards, so any number of
/// queries may share a `&GridGraph`.
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    adjacency: Vec<SmallVec<[Edge; N_SMALLVEC_SIZE]>>,
    components: UnionFind<usize>,
}

impl GridGraph {
    /// Builds a graph, taking the kind of each cell from `kind_of(index)`.
    pub fn new<F>(width: usize, height: usize, kind_of: F) -> GridGraph
    where
        F: Fn(usize) -> CellKind,
    {
        let len = width * height;
        let cells = (0..len)
            .map(|index| Cell {
                index,
                kind: kind_of(index),
            })
            .collect();
        let mut graph = GridGraph {
            width,
            height,
            cells,
            adjacency: Vec::new(),
            components: UnionFind::new(len),
        };
        graph.compute_adjacency();
        graph.generate_components();
        info!(
            "Built {}x{} grid graph with {} walkable cells in {} components",
            width,
            height,
            graph.walkable_cells().count(),
            graph.component_count()
        );
        graph
    }

    /// Builds a graph from a table of kinds indexed by cell. Cells past the end of the table are
    /// [CellKind::Ground].
    pub fn from_kinds(width: usize, height: usize, kinds: &[CellKind]) -> GridGraph {
        GridGraph::new(width, height, |ix| kinds.get(ix).copied().unwrap_or_default())
    }

    /// Builds a graph from row-major MovingAI tile bytes, see [CellKind::from_tile].
    pub fn from_tiles(width: usize, height: usize, tiles: &[u8]) -> GridGraph {
        GridGraph::new(width, height, |ix| {
            tiles
                .get(ix)
                .map(|&t| CellKind::from_tile(t))
                .unwrap_or_default()
        })
    }

    fn compute_adjacency(&mut self) {
        let mut adjacency = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            let mut edges = SmallVec::new();
            if !cell.kind.is_wall() {
                let p = self.point_of(cell.index);
                for (dx, dy) in NEUMANN_OFFSETS {
                    let Some(n_ix) = self.coord_to_index(Point::new(p.x + dx, p.y + dy)) else {
                        continue;
                    };
                    if let Some(weight) = self.cells[n_ix].kind.weight() {
                        edges.push(Edge { to: n_ix, weight });
                    }
                }
            }
            adjacency.push(edges);
        }
        self.adjacency = adjacency;
    }

    /// Links every cell to the cells it has edges to. Edge existence is symmetric, so these are
    /// exactly the sets of mutually reachable cells.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.cells.len());
        for (ix, edges) in self.adjacency.iter().enumerate() {
            for edge in edges {
                components.union(ix, edge.to);
            }
        }
        self.components = components;
    }

    fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn index_in_bounds(&self, index: usize) -> bool {
        index < self.cells.len()
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    /// Rejects indices outside `[0, width * height)`.
    pub fn check_index(&self, index: usize) -> PlanResult<()> {
        if self.index_in_bounds(index) {
            Ok(())
        } else {
            Err(PlanError::InvalidIndex {
                index,
                len: self.len(),
            })
        }
    }
    pub fn index_to_coord(&self, index: usize) -> Option<Point> {
        self.index_in_bounds(index).then(|| self.point_of(index))
    }
    pub fn coord_to_index(&self, point: Point) -> Option<usize> {
        self.point_in_bounds(point)
            .then(|| point.x as usize + self.width * point.y as usize)
    }
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
    pub fn kind(&self, index: usize) -> Option<CellKind> {
        self.cells.get(index).map(|c| c.kind)
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    /// Outgoing edges of a cell; empty for walls and out of bounds indices.
    pub fn neighbours(&self, index: usize) -> &[Edge] {
        self.adjacency.get(index).map_or(&[], |edges| edges.as_slice())
    }
    /// Weight of the edge from `from` to `to`, [None] if the cells are not joined.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<u32> {
        self.neighbours(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }
    /// Sum of the edge weights along a path of adjacent cells.
    pub fn path_cost(&self, path: &[usize]) -> u32 {
        path.iter()
            .tuple_windows()
            .filter_map(|(&a, &b)| self.edge_weight(a, b))
            .sum()
    }
    /// All cells that are not walls.
    pub fn walkable_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|c| !c.kind.is_wall())
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, index: usize) -> Option<usize> {
        self.index_in_bounds(index)
            .then(|| self.components.find(index))
    }
    pub fn component_count(&self) -> usize {
        self.walkable_cells()
            .filter(|c| self.components.find(c.index) == c.index)
            .count()
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: usize, goal: usize) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component. Walls only reach themselves.
    pub fn unreachable(&self, start: usize, goal: usize) -> bool {
        if self.index_in_bounds(start) && self.index_in_bounds(goal) {
            !self.components.equiv(start, goal)
        } else {
            true
        }
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row.iter().map(|c| c.kind.to_tile()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from_rows(rows: &[&str]) -> GridGraph {
        let tiles = rows.concat().into_bytes();
        GridGraph::from_tiles(rows[0].len(), rows.len(), &tiles)
    }

    #[test]
    fn coordinate_round_trip() {
        let graph = GridGraph::new(4, 3, |_| CellKind::Ground);
        for ix in 0..graph.len() {
            let p = graph.index_to_coord(ix).unwrap();
            assert_eq!(graph.coord_to_index(p), Some(ix));
        }
        assert_eq!(graph.index_to_coord(5), Some(Point::new(1, 1)));
        assert_eq!(graph.coord_to_index(Point::new(3, 2)), Some(11));
        assert_eq!(graph.index_to_coord(12), None);
        assert_eq!(graph.coord_to_index(Point::new(4, 0)), None);
        assert_eq!(graph.coord_to_index(Point::new(0, -1)), None);
    }

    #[test]
    fn adjacency_skips_walls() {
        // .#.
        // W..
        let graph = graph_from_rows(&[".#.", "W.."]);
        assert_eq!(graph.neighbours(0), &[Edge { to: 3, weight: 5 }]);
        assert!(graph.neighbours(1).is_empty());
        assert_eq!(graph.neighbours(3), &[Edge { to: 4, weight: 1 }, Edge { to: 0, weight: 1 }]);
        assert_eq!(
            graph.neighbours(4),
            &[
                Edge { to: 3, weight: 5 },
                Edge { to: 5, weight: 1 }
            ]
        );
        assert!(graph.neighbours(100).is_empty());
    }

    #[test]
    fn edges_are_asymmetric_in_weight() {
        let graph = graph_from_rows(&[".^"]);
        assert_eq!(graph.neighbours(0), &[Edge { to: 1, weight: 10 }]);
        assert_eq!(graph.neighbours(1), &[Edge { to: 0, weight: 1 }]);
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // .#.
        // .#.
        let graph = graph_from_rows(&[".#.", ".#."]);
        assert!(graph.reachable(0, 3));
        assert!(graph.reachable(2, 5));
        assert!(graph.unreachable(0, 2));
        assert!(graph.unreachable(0, 1));
        assert!(graph.unreachable(0, 6));
        assert_eq!(graph.component_count(), 2);
        assert_eq!(graph.walkable_cells().count(), 4);
    }

    #[test]
    fn from_kinds_defaults_to_ground() {
        let graph = GridGraph::from_kinds(2, 2, &[CellKind::Wall]);
        assert_eq!(graph.kind(0), Some(CellKind::Wall));
        assert_eq!(graph.kind(3), Some(CellKind::Ground));
        assert_eq!(graph.kind(4), None);
        assert_eq!(
            graph.check_index(4),
            Err(PlanError::InvalidIndex { index: 4, len: 4 })
        );
    }

    #[test]
    fn path_cost_sums_entered_cells() {
        // .W^
        let graph = graph_from_rows(&[".W^"]);
        assert_eq!(graph.path_cost(&[0, 1, 2]), 15);
        assert_eq!(graph.path_cost(&[2, 1, 0]), 6);
        assert_eq!(graph.path_cost(&[0]), 0);
        assert_eq!(graph.edge_weight(0, 2), None);
    }

    #[test]
    fn display_prints_tiles() {
        let graph = graph_from_rows(&[".#", "W^"]);
        assert_eq!(graph.to_string(), ".#\nW^\n");
    }
}
