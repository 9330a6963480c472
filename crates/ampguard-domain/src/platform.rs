//! Platform classification.
//!
//! Policy exports do not say which operating system they target. The only reliable hint
//! is the shape of the default exclusions: macOS policies exclude `/Library/...` and
//! Spotlight paths, Windows policies exclude `CSIDL_WINDOWS` folders. Everything else
//! (Linux, network-device policies) falls through to Linux.

use crate::model::ConfigNode;
use ampguard_types::Platform;

const MAC_SIGNATURES: &[&str] = &["Spotlight", "Library"];
const WINDOWS_SIGNATURES: &[&str] = &["CSIDL_WINDOWS"];

/// Best-effort platform guess. Mac signatures win over Windows ones; no match means Linux.
///
/// The exclusions subtree is inspected when it exists and is non-empty; otherwise the
/// agent settings subtree is used.
pub fn classify(exclusions: Option<&ConfigNode>, agent: Option<&ConfigNode>) -> Platform {
    let subject = exclusions.filter(|node| !node.is_empty()).or(agent);
    let Some(node) = subject else {
        return Platform::Linux;
    };

    let text = node.flatten_text();
    if contains_any(&text, MAC_SIGNATURES) {
        Platform::Mac
    } else if contains_any(&text, WINDOWS_SIGNATURES) {
        Platform::Windows
    } else {
        Platform::Linux
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exclusions_with(item: &str) -> ConfigNode {
        let mut node = ConfigNode::default();
        node.set_path("info/item", ConfigNode::Sequence(vec![item.into()]));
        node
    }

    #[test]
    fn library_path_is_mac() {
        let node = exclusions_with("1|0|0||%2FLibrary%2FApplication%20Support|1|");
        assert_eq!(classify(Some(&node), None), Platform::Mac);
    }

    #[test]
    fn spotlight_is_mac() {
        let node = exclusions_with("1|0|0||%2F.Spotlight-V100|1|");
        assert_eq!(classify(Some(&node), None), Platform::Mac);
    }

    #[test]
    fn csidl_is_windows() {
        let node = exclusions_with("1|0|0|CSIDL_WINDOWS|%5CSystem32%5Cspool|1|");
        assert_eq!(classify(Some(&node), None), Platform::Windows);
    }

    #[test]
    fn mac_wins_over_windows() {
        let mut node = exclusions_with("1|0|0|CSIDL_WINDOWS|x|1|");
        node.set_path("process/item", "%2FLibrary%2Fthing".into());
        assert_eq!(classify(Some(&node), None), Platform::Mac);
    }

    #[test]
    fn no_signature_falls_back_to_linux() {
        let node = exclusions_with("1|0|0||%2Fvar%2Flog|1|");
        assert_eq!(classify(Some(&node), None), Platform::Linux);
        assert_eq!(classify(None, None), Platform::Linux);
    }

    #[test]
    fn empty_exclusions_fall_back_to_agent_subtree() {
        let empty = ConfigNode::scalar("");
        let mut agent = ConfigNode::default();
        agent.set_path("scansettings/paths", "CSIDL_WINDOWS".into());
        assert_eq!(classify(Some(&empty), Some(&agent)), Platform::Windows);
        assert_eq!(classify(None, Some(&agent)), Platform::Windows);
    }
}
