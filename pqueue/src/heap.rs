// index arithmetic for a 0-indexed binary heap laid out in a slice of `len` nodes

enum HeapDir {
    Left,
    Right,
}

pub fn root() -> usize {
    0
}

pub fn parent(node: usize) -> Option<usize> {
    if node == root() {
        None
    } else {
        Some((node - 1) / 2)
    }
}

fn child(node: usize, dir: HeapDir, len: usize) -> Option<usize> {
    let child = match dir {
        HeapDir::Left => 2 * node + 1,
        HeapDir::Right => 2 * node + 2,
    };
    if child < len {
        Some(child)
    } else {
        None
    }
}

pub fn children(node: usize, len: usize) -> (Option<usize>, Option<usize>) {
    (
        child(node, HeapDir::Left, len),
        child(node, HeapDir::Right, len),
    )
}
