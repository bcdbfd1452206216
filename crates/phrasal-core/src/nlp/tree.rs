use std::collections::HashMap;

use super::token::Token;
use crate::error::{Error, Result};

/// Adjacency view of one sentence's dependency parse.
///
/// Positions are offsets into the sentence's token slice, not token `index`
/// values. Built in a single pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeIndex {
    children: Vec<Vec<usize>>,
    dep2positions: HashMap<String, Vec<usize>>,
    parents: Vec<Option<usize>>,
}

impl TreeIndex {
    /// Heads that name an index outside the sentence are skipped rather than
    /// rejected; upstream parsers emit those at sentence boundaries.
    pub fn build(tokens: &[Token]) -> Result<Self> {
        let mut index_to_position: HashMap<i64, usize> = HashMap::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            if let Some(index) = token.index {
                if let Some(first) = index_to_position.insert(index, position) {
                    return Err(Error::DuplicateIndex {
                        index,
                        first,
                        second: position,
                    });
                }
            }
        }

        let mut children = vec![Vec::new(); tokens.len()];
        let mut dep2positions: HashMap<String, Vec<usize>> = HashMap::new();
        let mut parents = vec![None; tokens.len()];

        for (position, token) in tokens.iter().enumerate() {
            let head_position = token
                .dependency_head_index
                .and_then(|head| index_to_position.get(&head).copied())
                // spaCy-style roots name themselves as head
                .filter(|&head_position| head_position != position);

            if let Some(head_position) = head_position {
                children[head_position].push(position);
                parents[position] = Some(head_position);
            }

            let label = token.dependency_type.clone().unwrap_or_default();
            dep2positions.entry(label).or_default().push(position);
        }

        Ok(Self {
            children,
            dep2positions,
            parents,
        })
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Vec<usize>] {
        &self.children
    }

    pub fn children_of(&self, position: usize) -> &[usize] {
        self.children.get(position).map_or(&[], Vec::as_slice)
    }

    /// Position of the in-sentence head, if any.
    pub fn parent_of(&self, position: usize) -> Option<usize> {
        self.parents.get(position).copied().flatten()
    }

    /// Positions carrying `label`, in sentence order.
    pub fn positions_for(&self, label: &str) -> &[usize] {
        self.dep2positions.get(label).map_or(&[], Vec::as_slice)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.dep2positions.keys().map(String::as_str)
    }

    /// Positions with no head inside the sentence.
    pub fn roots(&self) -> Vec<usize> {
        self.parents
            .iter()
            .enumerate()
            .filter(|(_, parent)| parent.is_none())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn root(&self) -> Result<usize> {
        match self.roots().as_slice() {
            [root] => Ok(*root),
            positions => Err(Error::MissingOrMultipleRoots {
                positions: positions.to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::fixtures::cat_in_a_hat;

    #[test]
    fn test_build_children_and_labels() {
        let index = TreeIndex::build(&cat_in_a_hat()).unwrap();

        assert_eq!(index.len(), 7);
        assert_eq!(index.children_of(1), &[0, 3]);
        assert_eq!(index.children_of(3), &[2, 4]);
        assert_eq!(index.children_of(4), &[6]);
        assert_eq!(index.children_of(6), &[5]);
        assert!(index.children_of(0).is_empty());
        assert_eq!(index.parent_of(5), Some(6));
        assert_eq!(index.parent_of(1), None);
        assert_eq!(index.positions_for("det"), &[2, 5]);
        assert_eq!(index.positions_for("root"), &[1]);
        assert!(index.positions_for("appos").is_empty());
    }

    #[test]
    fn test_single_root() {
        let index = TreeIndex::build(&cat_in_a_hat()).unwrap();
        assert_eq!(index.root().unwrap(), 1);
    }

    #[test]
    fn test_head_outside_sentence_is_skipped() {
        let tokens = vec![
            Token::new("Yes").with_index(10).with_dependency(Some(3), "intj"),
            Token::new("go").with_index(11).with_dependency(None, "root"),
        ];

        let index = TreeIndex::build(&tokens).unwrap();

        assert!(index.children_of(0).is_empty());
        assert!(index.children_of(1).is_empty());
        assert_eq!(index.roots(), vec![0, 1]);
        assert!(matches!(
            index.root(),
            Err(Error::MissingOrMultipleRoots { positions }) if positions == vec![0, 1]
        ));
    }

    #[test]
    fn test_non_contiguous_unsorted_indices() {
        let tokens = vec![
            Token::new("dogs").with_index(42).with_dependency(Some(40), "nsubj"),
            Token::new("bark").with_index(40).with_dependency(None, "root"),
        ];

        let index = TreeIndex::build(&tokens).unwrap();

        assert_eq!(index.children_of(1), &[0]);
        assert_eq!(index.root().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let tokens = vec![
            Token::new("a").with_index(0).with_dependency(None, "root"),
            Token::new("b").with_index(0).with_dependency(Some(0), "dep"),
        ];

        assert!(matches!(
            TreeIndex::build(&tokens),
            Err(Error::DuplicateIndex { index: 0, first: 0, second: 1 })
        ));
    }

    #[test]
    fn test_cycle_without_root_is_reported() {
        let tokens = vec![
            Token::new("a").with_index(0).with_dependency(Some(1), "dep"),
            Token::new("b").with_index(1).with_dependency(Some(0), "dep"),
        ];

        let index = TreeIndex::build(&tokens).unwrap();

        assert!(matches!(
            index.root(),
            Err(Error::MissingOrMultipleRoots { positions }) if positions.is_empty()
        ));
    }
}
