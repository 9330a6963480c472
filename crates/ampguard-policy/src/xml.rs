use ampguard_domain::ConfigNode;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;

/// Parent/child element pairs that always load as sequences, even with one child.
const REPEATABLE: &[(&str, &str)] = &[("info", "item"), ("process", "item"), ("certissuer", "name")];

pub const TEXT_KEY: &str = "#text";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },
    #[error("document has no root element")]
    Empty,
    #[error("element <{0}> is not closed")]
    Unclosed(String),
    #[error("unexpected second root element <{0}>")]
    MultipleRoots(String),
}

struct Frame {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, ConfigNode)>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>, position: u64) -> Result<Self, LoadError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| xml_error(position, e))?;
            if attr.key.as_ref().starts_with(b"xmlns") {
                continue;
            }
            let key = local(attr.key.local_name().as_ref());
            let value = attr.unescape_value().map_err(|e| xml_error(position, e))?;
            attributes.push((format!("@{key}"), value.trim().to_string()));
        }
        Ok(Self {
            name: local(start.local_name().as_ref()),
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn close(self) -> (String, ConfigNode) {
        let Frame {
            name,
            attributes,
            children,
            text,
        } = self;
        let text = text.trim().to_string();

        if children.is_empty() && attributes.is_empty() {
            return (name, ConfigNode::Scalar(text));
        }

        let mut grouped: BTreeMap<String, Vec<ConfigNode>> = BTreeMap::new();
        for (child, node) in children {
            grouped.entry(child).or_default().push(node);
        }

        let mut map: BTreeMap<String, ConfigNode> = grouped
            .into_iter()
            .map(|(child, mut nodes)| {
                let node = if nodes.len() == 1 && !is_repeatable(&name, &child) {
                    nodes.remove(0)
                } else {
                    ConfigNode::Sequence(nodes)
                };
                (child, node)
            })
            .collect();
        for (key, value) in attributes {
            map.entry(key).or_insert(ConfigNode::Scalar(value));
        }
        if !text.is_empty() {
            map.insert(TEXT_KEY.to_string(), ConfigNode::Scalar(text));
        }
        (name, ConfigNode::Mapping(map))
    }
}

fn is_repeatable(parent: &str, child: &str) -> bool {
    REPEATABLE.iter().any(|(p, c)| *p == parent && *c == child)
}

fn local(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn xml_error(position: u64, err: impl std::fmt::Display) -> LoadError {
    LoadError::Xml {
        position,
        message: err.to_string(),
    }
}

/// Parse a policy export into a tree rooted at a one-entry mapping `{root_name: root}`.
///
/// Namespace prefixes are dropped, so `ns0:Signature` loads as `Signature`.
pub fn parse_policy_xml(text: &str) -> Result<ConfigNode, LoadError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, ConfigNode)> = None;
    let mut elements = 0usize;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| xml_error(position, e))?;
        match event {
            Event::Start(start) => {
                elements += 1;
                stack.push(Frame::open(&start, position)?);
            }
            Event::Empty(start) => {
                elements += 1;
                let closed = Frame::open(&start, position)?.close();
                attach(&mut stack, &mut root, closed)?;
            }
            Event::End(_) => {
                let Some(frame) = stack.pop() else {
                    return Err(xml_error(position, "unmatched end tag"));
                };
                attach(&mut stack, &mut root, frame.close())?;
            }
            Event::Text(t) => {
                if let Some(frame) = stack.last_mut() {
                    let unescaped = t.unescape().map_err(|e| xml_error(position, e))?;
                    frame.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(LoadError::Unclosed(open.name));
    }
    let (name, node) = root.ok_or(LoadError::Empty)?;
    tracing::debug!(root = %name, elements, "parsed policy document");
    Ok(ConfigNode::Mapping(BTreeMap::from([(name, node)])))
}

fn attach(
    stack: &mut [Frame],
    root: &mut Option<(String, ConfigNode)>,
    closed: (String, ConfigNode),
) -> Result<(), LoadError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(closed),
        None if root.is_none() => *root = Some(closed),
        None => return Err(LoadError::MultipleRoots(closed.0)),
    }
    Ok(())
}
