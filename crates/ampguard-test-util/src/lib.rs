//! Shared test utilities for the ampguard workspace.
//!
//! This crate exists because `xtask` and the CLI integration tests both need
//! [`normalize_nondeterministic`] and the [`PolicyXml`] builder outside of any
//! single crate's `#[cfg(test)]` module.

use serde_json::Value;

const LAST_CHANGE_RULE: &str = "header.last_change";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` when the root
///    object looks like a report envelope (`schema`, `tool`, `status`, `findings`).
/// 2. **Recursive**: `started_at`, `finished_at` and `elapsed_secs` are replaced at
///    any depth.
/// 3. **Findings**: the staleness finding embeds the elapsed time in its message, so
///    its `message` and `fingerprint` are replaced too.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("status")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
        if is_envelope && let Some(Value::Array(findings)) = obj.get_mut("findings") {
            for finding in findings.iter_mut().filter_map(Value::as_object_mut) {
                if finding.get("rule_id").and_then(Value::as_str) == Some(LAST_CHANGE_RULE) {
                    finding.insert(
                        "message".to_string(),
                        Value::String("Last policy change: __ELAPSED__ ago".to_string()),
                    );
                    if finding.contains_key("fingerprint") {
                        finding.insert(
                            "fingerprint".to_string(),
                            Value::String("__FINGERPRINT__".to_string()),
                        );
                    }
                }
            }
        }
    }
    normalize_recursive(&mut value);
    value
}

fn normalize_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("elapsed_secs") {
                map.insert("elapsed_secs".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_recursive(val);
            }
        }
        _ => {}
    }
}

/// Builder for policy export documents in the `ns0:`-prefixed shape the management
/// console produces.
#[derive(Clone, Debug, Default)]
pub struct PolicyXml {
    config: Element,
    has_config: bool,
}

#[derive(Clone, Debug, Default)]
struct Element {
    children: Vec<(String, Element)>,
    text: Option<String>,
}

impl Element {
    fn child(&mut self, key: &str) -> &mut Element {
        let index = match self.children.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.children.push((key.to_string(), Element::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    fn at(&mut self, path: &str) -> &mut Element {
        path.split('/')
            .filter(|k| !k.is_empty())
            .fold(self, |node, key| node.child(key))
    }

    fn append(&mut self, parent: &str, key: &str, value: &str) {
        let parent = self.at(parent);
        parent.children.push((
            key.to_string(),
            Element {
                children: Vec::new(),
                text: Some(value.to_string()),
            },
        ));
    }

    fn write(&self, name: &str, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        if self.children.is_empty() {
            match &self.text {
                Some(text) => out.push_str(&format!(
                    "{indent}<ns0:{name}>{}</ns0:{name}>\n",
                    escape(text)
                )),
                None => out.push_str(&format!("{indent}<ns0:{name} />\n")),
            }
            return;
        }
        out.push_str(&format!("{indent}<ns0:{name}>\n"));
        for (key, child) in &self.children {
            child.write(key, depth + 1, out);
        }
        out.push_str(&format!("{indent}</ns0:{name}>\n"));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl PolicyXml {
    /// A document with an (empty) settings container.
    pub fn new() -> Self {
        Self {
            config: Element::default(),
            has_config: true,
        }
    }

    /// A document whose `Object` carries no settings container at all.
    pub fn without_config() -> Self {
        Self {
            config: Element::default(),
            has_config: false,
        }
    }

    pub fn header(mut self, name: &str, uuid: &str, serial: &str, updated_ms: &str) -> Self {
        self.config.at("janus/policy/name").text = Some(name.to_string());
        self.config.at("janus/policy/uuid").text = Some(uuid.to_string());
        self.config.at("janus/policy/serial_number").text = Some(serial.to_string());
        self.config.at("janus/policy/updated").text = Some(updated_ms.to_string());
        self.config.at("janus/business/uuid").text = Some(format!("business-{uuid}"));
        self
    }

    /// Pipe-delimited file exclusion record, e.g. `1|0|0|CSIDL_WINDOWS|%5CTemp|1|`.
    pub fn file_exclusion(mut self, record: &str) -> Self {
        self.config.append("exclusions/info", "item", record);
        self
    }

    pub fn cert_issuer_exclusion(mut self, name: &str) -> Self {
        self.config.append("exclusions/certissuer", "name", name);
        self
    }

    pub fn process_exclusion(mut self, item: &str) -> Self {
        self.config.append("exclusions/process", "item", item);
        self
    }

    /// Set a value under `config/agent`, e.g. `agent("apde/enable", "0")`.
    pub fn agent(mut self, path: &str, value: &str) -> Self {
        self.config.at(&format!("agent/{path}")).text = Some(value.to_string());
        self
    }

    /// Set a value anywhere under `config`, e.g. `config("ui/notification/verbose", "1")`.
    pub fn config(mut self, path: &str, value: &str) -> Self {
        self.config.at(path).text = Some(value.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(
            "<ns0:Signature xmlns:ns0=\"http://www.w3.org/2000/09/xmldsig#\">\n  <ns0:Object Id=\"policy\">\n",
        );
        if self.has_config {
            self.config.write("config", 2, &mut out);
        } else {
            out.push_str("    <ns0:network />\n");
        }
        out.push_str("  </ns0:Object>\n</ns0:Signature>\n");
        out
    }
}
