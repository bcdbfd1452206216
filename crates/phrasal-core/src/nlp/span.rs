use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Smallest and largest descendant position of `position`, excluding the
/// node itself.
///
/// The returned range only approximates phrase boundaries: it assumes arcs
/// do not cross, which holds for most but not all parses. This is the hot
/// path of phrase extraction.
pub fn subtree_span(children: &[Vec<usize>], position: usize) -> Result<(usize, usize)> {
    let descendants = descendants(children, position, |_| true);

    match (descendants.iter().min(), descendants.iter().max()) {
        (Some(&left), Some(&right)) => Ok((left, right)),
        _ => Err(Error::EmptySubtree { position }),
    }
}

/// `position` and all of its descendants, sorted ascending.
pub fn subtree_positions(children: &[Vec<usize>], position: usize) -> Vec<usize> {
    with_root(position, descendants(children, position, |_| true))
}

/// Like [`subtree_positions`], but only walks through nodes in `members`
/// (sorted ascending). A descendant reachable only via a non-member is left
/// out.
pub fn subtree_positions_within(
    children: &[Vec<usize>],
    position: usize,
    members: &[usize],
) -> Vec<usize> {
    let found = descendants(children, position, |child| {
        members.binary_search(&child).is_ok()
    });
    with_root(position, found)
}

fn with_root(position: usize, mut positions: Vec<usize>) -> Vec<usize> {
    positions.push(position);
    positions.sort_unstable();
    positions.dedup();
    positions
}

fn descendants(
    children: &[Vec<usize>],
    position: usize,
    include: impl Fn(usize) -> bool,
) -> Vec<usize> {
    let mut visited = vec![false; children.len()];
    if let Some(seen) = visited.get_mut(position) {
        *seen = true;
    }

    let mut found = Vec::new();
    let mut queue = VecDeque::from([position]);

    while let Some(head) = queue.pop_front() {
        for &child in children.get(head).map_or(&[][..], Vec::as_slice) {
            // Malformed input can contain cycles or dangling positions
            if visited.get(child).copied().unwrap_or(true) || !include(child) {
                continue;
            }
            visited[child] = true;
            found.push(child);
            queue.push_back(child);
        }
    }

    found
}
