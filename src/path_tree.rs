/// Entry of a shortest-path tree: the cumulative weight from the source and the predecessor on
/// the best known path, [None] for the source itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathElement {
    pub weight: u32,
    pub parent: Option<usize>,
}

/// Shortest-path tree rooted at a single source, one entry per cell. Cells that the search never
/// reached hold [None], which keeps them apart from the zero-cost source. A result only describes
/// paths from [source](Self::source) and has to be recomputed when the source moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    source: usize,
    elements: Vec<Option<PathElement>>,
}

impl PathResult {
    /// A tree in which only `source` is reached.
    pub(crate) fn rooted(source: usize, len: usize) -> PathResult {
        let mut elements = vec![None; len];
        elements[source] = Some(PathElement {
            weight: 0,
            parent: None,
        });
        PathResult { source, elements }
    }

    pub(crate) fn set(&mut self, index: usize, element: PathElement) {
        self.elements[index] = Some(element);
    }

    pub fn source(&self) -> usize {
        self.source
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn element(&self, index: usize) -> Option<&PathElement> {
        self.elements.get(index).and_then(Option::as_ref)
    }
    pub fn is_reached(&self, index: usize) -> bool {
        self.element(index).is_some()
    }
    pub fn cumulative_weight(&self, index: usize) -> Option<u32> {
        self.element(index).map(|e| e.weight)
    }
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.element(index).and_then(|e| e.parent)
    }
    pub fn reached_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }
    /// See [reconstruct_path].
    pub fn path_to(&self, destination: usize) -> Vec<usize> {
        reconstruct_path(self, destination)
    }
}

/// Walks the predecessor links from `destination` back to the root of the tree and returns the
/// visited cells in source to destination order.
///
/// A result of length one means either that `destination` is the source or that it was not
/// reached; callers must tell the two apart before acting on the path. An out of bounds
/// destination yields an empty path.
pub fn reconstruct_path(result: &PathResult, destination: usize) -> Vec<usize> {
    if destination >= result.len() {
        return Vec::new();
    }
    let mut path: Vec<usize> =
        std::iter::successors(Some(destination), |&ix| result.parent(ix)).collect();
    path.reverse();
    path
}
