use super::token::{PosTag, Token};
use crate::error::{Error, Result};

/// Splits a leading determiner off a phrase.
///
/// The detached determiner is returned as a copy explicitly marked as not
/// being an entity; the input is left untouched.
#[must_use]
pub fn detach_determiner(tokens: &[Token]) -> (Option<Token>, &[Token]) {
    match tokens.split_first() {
        Some((first, rest)) if first.has_pos(PosTag::Det) => {
            let mut det = first.clone();
            det.is_entity = Some(false);
            det.entity_type = Some(String::new());
            (Some(det), rest)
        }
        _ => (None, tokens),
    }
}

/// The token whose head is not another member of `tokens`.
///
/// When several qualify the first one wins, matching how multi-headed spans
/// (e.g. an entity straddling two subtrees) have always been merged.
pub fn find_subtree_root(tokens: &[Token]) -> Result<&Token> {
    tokens
        .iter()
        .enumerate()
        .find(|(position, token)| {
            !tokens.iter().enumerate().any(|(other, candidate)| {
                other != *position
                    && candidate.index.is_some()
                    && candidate.index == token.dependency_head_index
            })
        })
        .map(|(_, token)| token)
        .ok_or_else(|| Error::NoRootFound {
            indices: tokens.iter().map(|t| t.index).collect(),
        })
}

/// Collapses a phrase into a single token.
///
/// Returns up to two tokens: a detached determiner (only when `merge_det` is
/// false and the phrase starts with one) followed by the merged remainder.
/// Part of speech and entity annotations come from the last token, which is
/// usually the head noun; position and dependency come from the subtree root.
pub fn merge_tokens(tokens: &[Token], merge_det: bool, word_join_char: &str) -> Result<Vec<Token>> {
    let mut merged = Vec::with_capacity(2);

    let remaining = if merge_det {
        tokens
    } else {
        let (det, rest) = detach_determiner(tokens);
        merged.extend(det);
        rest
    };

    let Some(last) = remaining.last() else {
        return Ok(merged);
    };
    let root = find_subtree_root(remaining)?;

    let text = remaining
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(word_join_char);

    let lemma = if remaining.iter().all(|t| t.lemma.is_none()) {
        None
    } else {
        Some(
            remaining
                .iter()
                .map(|t| t.lemma.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(word_join_char),
        )
    };

    merged.push(Token {
        text,
        pos: last.pos,
        lemma,
        is_entity: last.is_entity,
        entity_type: last.entity_type.clone(),
        is_stop: all_flagged(remaining, |t| t.is_stop),
        index: root.index,
        dependency_head_index: root.dependency_head_index,
        dependency_type: root.dependency_type.clone(),
        is_hashtag: all_flagged(remaining, |t| t.is_hashtag),
        is_mention: all_flagged(remaining, |t| t.is_mention),
        is_url: all_flagged(remaining, |t| t.is_url),
    });

    Ok(merged)
}

fn all_flagged(tokens: &[Token], flag: impl Fn(&Token) -> Option<bool>) -> Option<bool> {
    if tokens.iter().all(|t| flag(t).is_none()) {
        return None;
    }
    Some(tokens.iter().all(|t| flag(t) == Some(true)))
}
