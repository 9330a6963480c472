use std::collections::BTreeMap;

/// One node of the normalized policy tree.
///
/// The loader produces this from the XML export; every lookup the engine does goes
/// through [`ConfigNode::resolve`], which is total: a missing key, an out-of-range index
/// or descending into a scalar all yield `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigNode {
    Scalar(String),
    Mapping(BTreeMap<String, ConfigNode>),
    Sequence(Vec<ConfigNode>),
}

impl Default for ConfigNode {
    fn default() -> Self {
        ConfigNode::Mapping(BTreeMap::new())
    }
}

impl ConfigNode {
    pub fn scalar<S: Into<String>>(value: S) -> Self {
        ConfigNode::Scalar(value.into())
    }

    /// Build a mapping from `(key, node)` pairs.
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigNode)>,
        K: Into<String>,
    {
        ConfigNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Single step lookup.
    ///
    /// On a sequence, a numeric key indexes it. Any other key only descends when the
    /// sequence holds exactly one element, so a singular field serialized as a
    /// one-element list reads the same as the bare element.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Mapping(map) => map.get(key),
            ConfigNode::Sequence(items) => match key.parse::<usize>() {
                Ok(index) => items.get(index),
                Err(_) => match items.as_slice() {
                    [only] => only.get(key),
                    _ => None,
                },
            },
            ConfigNode::Scalar(_) => None,
        }
    }

    /// Resolve a key path. Never panics.
    pub fn resolve(&self, path: &[&str]) -> Option<&ConfigNode> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Trimmed text of a scalar node.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ConfigNode::Scalar(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// View of a repeatable field: a sequence yields its elements, anything else
    /// yields itself as a one-element slice.
    pub fn items(&self) -> &[ConfigNode] {
        match self {
            ConfigNode::Sequence(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Number of direct children (mapping entries or sequence elements). Scalars have none.
    pub fn len(&self) -> usize {
        match self {
            ConfigNode::Mapping(map) => map.len(),
            ConfigNode::Sequence(items) => items.len(),
            ConfigNode::Scalar(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ConfigNode::Scalar(s) => s.trim().is_empty(),
            ConfigNode::Mapping(map) => map.is_empty(),
            ConfigNode::Sequence(items) => items.is_empty(),
        }
    }

    /// All keys and scalar values of the subtree, space separated, in key order.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            ConfigNode::Scalar(s) => push_word(out, s),
            ConfigNode::Mapping(map) => {
                for (key, value) in map {
                    push_word(out, key);
                    value.flatten_into(out);
                }
            }
            ConfigNode::Sequence(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    /// Insert `value` at a `/`-separated path, creating intermediate mappings.
    ///
    /// Intermediate nodes that are not mappings are replaced.
    pub fn set_path(&mut self, path: &str, value: ConfigNode) {
        let keys: Vec<&str> = path.split('/').filter(|k| !k.is_empty()).collect();
        *self = std::mem::take(self).with_path(&keys, value);
    }

    fn with_path(self, keys: &[&str], value: ConfigNode) -> ConfigNode {
        let Some((first, rest)) = keys.split_first() else {
            return value;
        };
        let mut map = match self {
            ConfigNode::Mapping(map) => map,
            _ => BTreeMap::new(),
        };
        let child = map.remove(*first).unwrap_or_default();
        map.insert(first.to_string(), child.with_path(rest, value));
        ConfigNode::Mapping(map)
    }
}

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

impl From<&str> for ConfigNode {
    fn from(value: &str) -> Self {
        ConfigNode::Scalar(value.to_string())
    }
}

impl From<String> for ConfigNode {
    fn from(value: String) -> Self {
        ConfigNode::Scalar(value)
    }
}

impl From<Vec<ConfigNode>> for ConfigNode {
    fn from(value: Vec<ConfigNode>) -> Self {
        ConfigNode::Sequence(value)
    }
}
