use crate::model::ConfigNode;

/// Build a mapping tree from `("a/b/c", value)` pairs.
pub fn tree_with(entries: &[(&str, &str)]) -> ConfigNode {
    let mut node = ConfigNode::default();
    for (path, value) in entries {
        node.set_path(path, ConfigNode::scalar(*value));
    }
    node
}

/// An agent subtree (`config/agent`).
pub fn agent_with(entries: &[(&str, &str)]) -> ConfigNode {
    tree_with(entries)
}

/// A settings container (`Signature/Object/config`).
pub fn config_with(entries: &[(&str, &str)]) -> ConfigNode {
    tree_with(entries)
}

/// A full document tree with the given paths placed under `Signature/Object/config`.
pub fn document(entries: &[(&str, &str)]) -> ConfigNode {
    let mut root = ConfigNode::default();
    root.set_path("Signature/Object/config", tree_with(entries));
    root
}

/// Attach a sequence of file exclusion records at `config/exclusions/info/item`.
pub fn with_file_exclusions(mut root: ConfigNode, records: &[&str]) -> ConfigNode {
    let items = records.iter().map(|r| ConfigNode::scalar(*r)).collect();
    root.set_path(
        "Signature/Object/config/exclusions/info/item",
        ConfigNode::Sequence(items),
    );
    root
}

/// Header block with a name, uuid and update timestamp.
pub fn janus_entries(updated_ms: &str) -> Vec<(&'static str, String)> {
    vec![
        ("janus/policy/name", "Audit Test".to_string()),
        ("janus/policy/uuid", "00000000-0000-0000-0000-000000000001".to_string()),
        ("janus/policy/serial_number", "7".to_string()),
        ("janus/policy/updated", updated_ms.to_string()),
        ("janus/business/uuid", "b0000000-0000-0000-0000-000000000002".to_string()),
    ]
}

pub fn with_entries(mut root: ConfigNode, prefix: &str, entries: &[(&str, String)]) -> ConfigNode {
    for (path, value) in entries {
        root.set_path(&format!("{prefix}/{path}"), ConfigNode::scalar(value.as_str()));
    }
    root
}
