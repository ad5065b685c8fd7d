//! Declarative style table and layout parameters for the rendering surface.

use super::model::{ElementGroup, GraphElement};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

/// Style properties keyed by property name (`line-color`, `shape`, ...).
pub type StyleProperties = Map<String, Value>;

/// A style selector: a whole group, or a group filtered on one data attribute.
///
/// Textual form follows the usual graph-library syntax: `node`, `edge`,
/// `node[type="server"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selector {
    Group(ElementGroup),
    Attr {
        group: ElementGroup,
        key: String,
        value: String,
    },
}

impl Selector {
    pub fn attr(group: ElementGroup, key: &str, value: &str) -> Self {
        Selector::Attr {
            group,
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn matches(&self, element: &GraphElement) -> bool {
        match self {
            Selector::Group(group) => element.group() == *group,
            Selector::Attr { group, key, value } => {
                element.group() == *group && element.attr(key) == Some(value.as_str())
            }
        }
    }
}

fn group_name(group: ElementGroup) -> &'static str {
    match group {
        ElementGroup::Nodes => "node",
        ElementGroup::Edges => "edge",
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Group(group) => f.write_str(group_name(*group)),
            Selector::Attr { group, key, value } => {
                write!(f, "{}[{}=\"{}\"]", group_name(*group), key, value)
            }
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, filter) = match s.find('[') {
            Some(idx) => (&s[..idx], Some(&s[idx..])),
            None => (s, None),
        };

        let group = match head {
            "node" => ElementGroup::Nodes,
            "edge" => ElementGroup::Edges,
            other => return Err(format!("Invalid selector group: {}", other)),
        };

        let Some(filter) = filter else {
            return Ok(Selector::Group(group));
        };

        let inner = filter
            .strip_prefix('[')
            .and_then(|f| f.strip_suffix(']'))
            .ok_or_else(|| format!("Invalid selector filter: {}", filter))?;
        let (key, value) = inner
            .split_once('=')
            .ok_or_else(|| format!("Selector filter must be key=\"value\": {}", inner))?;
        let value = value
            .trim()
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .ok_or_else(|| format!("Selector value must be quoted: {}", value))?;

        Ok(Selector::Attr {
            group,
            key: key.trim().to_string(),
            value: value.to_string(),
        })
    }
}

impl TryFrom<String> for Selector {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

/// One entry of the style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: Selector,
    pub style: StyleProperties,
}

impl StyleRule {
    fn new(selector: Selector, style: Value) -> Self {
        let style = match style {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { selector, style }
    }
}

/// Parameters of the force-directed layout run after each rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub name: String,
    pub padding: u32,
    pub node_repulsion: u32,
    pub ideal_edge_length: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            name: "cose".to_string(),
            padding: 50,
            node_repulsion: 8000,
            ideal_edge_length: 100,
        }
    }
}

/// Visual theme the surface is mounted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub style: Vec<StyleRule>,
    pub layout: LayoutOptions,
    pub wheel_sensitivity: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// The workboard theme: servers as blue rectangles, switches as green
    /// diamonds, grey bezier edges turning green when active.
    pub fn standard() -> Self {
        Self {
            style: vec![
                StyleRule::new(
                    Selector::Group(ElementGroup::Nodes),
                    json!({
                        "label": "data(label)",
                        "text-valign": "center",
                        "text-halign": "center",
                        "font-size": "12px",
                        "color": "#374151",
                        "text-wrap": "wrap",
                        "text-max-width": "80px",
                        "background-color": "#fff",
                        "border-width": 2,
                        "border-color": "#d1d5db",
                        "width": 40,
                        "height": 40
                    }),
                ),
                StyleRule::new(
                    Selector::attr(ElementGroup::Nodes, "type", "server"),
                    json!({
                        "shape": "rectangle",
                        "border-color": "#3b82f6",
                        "background-color": "#eff6ff"
                    }),
                ),
                StyleRule::new(
                    Selector::attr(ElementGroup::Nodes, "type", "switch"),
                    json!({
                        "shape": "diamond",
                        "border-color": "#10b981",
                        "background-color": "#ecfdf5"
                    }),
                ),
                StyleRule::new(
                    Selector::Group(ElementGroup::Edges),
                    json!({
                        "width": 2,
                        "line-color": "#9ca3af",
                        "target-arrow-color": "#9ca3af",
                        "target-arrow-shape": "triangle",
                        "curve-style": "bezier"
                    }),
                ),
                StyleRule::new(
                    Selector::attr(ElementGroup::Edges, "status", "active"),
                    json!({
                        "line-color": "#10b981",
                        "target-arrow-color": "#10b981"
                    }),
                ),
            ],
            layout: LayoutOptions::default(),
            wheel_sensitivity: 0.2,
        }
    }

    /// Effective style of `element`: every matching rule applied in table order,
    /// later rules overriding earlier ones property by property.
    pub fn resolve(&self, element: &GraphElement) -> StyleProperties {
        let mut resolved = Map::new();
        for rule in self.style.iter().filter(|r| r.selector.matches(element)) {
            for (key, value) in &rule.style {
                resolved.insert(key.clone(), value.clone());
            }
        }
        resolved
    }
}
