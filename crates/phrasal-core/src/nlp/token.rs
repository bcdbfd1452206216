use serde::{Deserialize, Serialize};

/// Universal Dependencies part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    Space,
    #[serde(other)]
    X,
}

impl PosTag {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::Space => "SPACE",
            Self::X => "X",
        }
    }

    #[must_use]
    pub fn is_verbal(&self) -> bool {
        matches!(self, Self::Verb | Self::Aux)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PosTag {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADJ" => Ok(Self::Adj),
            "ADP" => Ok(Self::Adp),
            "ADV" => Ok(Self::Adv),
            "AUX" => Ok(Self::Aux),
            "CCONJ" => Ok(Self::Cconj),
            "DET" => Ok(Self::Det),
            "INTJ" => Ok(Self::Intj),
            "NOUN" => Ok(Self::Noun),
            "NUM" => Ok(Self::Num),
            "PART" => Ok(Self::Part),
            "PRON" => Ok(Self::Pron),
            "PROPN" => Ok(Self::Propn),
            "PUNCT" => Ok(Self::Punct),
            "SCONJ" => Ok(Self::Sconj),
            "SYM" => Ok(Self::Sym),
            "VERB" => Ok(Self::Verb),
            "SPACE" => Ok(Self::Space),
            "X" => Ok(Self::X),
            _ => Err(crate::Error::InvalidPosTag(s.to_string())),
        }
    }
}

/// A single annotated word as produced by an upstream tagger and parser.
///
/// `index` identifies the token within its sentence and is what
/// `dependency_head_index` refers to. A token whose head is absent, or names an
/// index outside the sentence, is a root candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_entity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stop: Option<bool>,
    #[serde(default, alias = "ix", skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(
        default,
        alias = "dependency_head_ix",
        skip_serializing_if = "Option::is_none"
    )]
    pub dependency_head_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hashtag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mention: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_url: Option<bool>,
}

impl Token {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pos(mut self, pos: PosTag) -> Self {
        self.pos = Some(pos);
        self
    }

    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    #[must_use]
    pub fn with_entity(mut self, is_entity: bool, entity_type: impl Into<String>) -> Self {
        self.is_entity = Some(is_entity);
        self.entity_type = Some(entity_type.into());
        self
    }

    #[must_use]
    pub fn with_stop(mut self, is_stop: bool) -> Self {
        self.is_stop = Some(is_stop);
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: i64) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the head index and relation label in one step.
    #[must_use]
    pub fn with_dependency(mut self, head_index: Option<i64>, dependency_type: &str) -> Self {
        self.dependency_head_index = head_index;
        self.dependency_type = Some(dependency_type.to_string());
        self
    }

    #[must_use]
    pub fn with_social_flags(mut self, is_hashtag: bool, is_mention: bool, is_url: bool) -> Self {
        self.is_hashtag = Some(is_hashtag);
        self.is_mention = Some(is_mention);
        self.is_url = Some(is_url);
        self
    }

    pub fn has_pos(&self, pos: PosTag) -> bool {
        self.pos == Some(pos)
    }

    pub fn has_dependency_type(&self, dependency_type: &str) -> bool {
        self.dependency_type.as_deref() == Some(dependency_type)
    }

    pub fn is_entity(&self) -> bool {
        self.is_entity.unwrap_or(false)
    }

    pub fn is_hashtag(&self) -> bool {
        self.is_hashtag.unwrap_or(false)
    }

    pub fn is_mention(&self) -> bool {
        self.is_mention.unwrap_or(false)
    }

    pub fn is_url(&self) -> bool {
        self.is_url.unwrap_or(false)
    }

    /// Number of characters in the token text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Splits the text on `split_on`, producing one token per piece.
    ///
    /// Produced tokens never carry an `index`, since assigning one would
    /// require renumbering the rest of the sentence. Annotations other than the
    /// text are copied only when `copy_meta_attrs` is set.
    #[must_use]
    pub fn split(&self, split_on: &str, copy_meta_attrs: bool) -> Vec<Self> {
        if split_on.is_empty() || !self.text.contains(split_on) {
            return vec![self.clone()];
        }

        self.text
            .split(split_on)
            .map(|piece| {
                if copy_meta_attrs {
                    Self {
                        text: piece.to_string(),
                        index: None,
                        ..self.clone()
                    }
                } else {
                    Self::new(piece)
                }
            })
            .collect()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
