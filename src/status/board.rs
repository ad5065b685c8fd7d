//! Indicator sinks and the in-memory [`IndicatorBoard`].

use serde::Serialize;
use std::collections::BTreeMap;

/// Writable set of indicator widgets addressed by id.
///
/// Writing to an unknown id creates the widget.
pub trait IndicatorSink: Send + Sync + 'static {
    fn set_width(&mut self, id: &str, width: &str);

    /// Replace the widget's whole class list.
    fn set_class(&mut self, id: &str, class: &str);

    fn set_text(&mut self, id: &str, text: &str);

    fn set_visible(&mut self, id: &str, visible: bool);

    /// Current widget state for dashboard subscribers, if the sink can report it.
    fn export(&self) -> Option<serde_json::Value> {
        None
    }
}

/// State of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub visible: bool,
}

impl Default for Widget {
    fn default() -> Self {
        Self {
            width: None,
            class: None,
            text: None,
            visible: true,
        }
    }
}

/// In-memory indicator widgets, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IndicatorBoard {
    widgets: BTreeMap<String, Widget>,
}

impl IndicatorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn widgets(&self) -> impl Iterator<Item = (&str, &Widget)> {
        self.widgets.iter().map(|(id, w)| (id.as_str(), w))
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn entry(&mut self, id: &str) -> &mut Widget {
        self.widgets.entry(id.to_string()).or_default()
    }
}

impl IndicatorSink for IndicatorBoard {
    fn set_width(&mut self, id: &str, width: &str) {
        self.entry(id).width = Some(width.to_string());
    }

    fn set_class(&mut self, id: &str, class: &str) {
        self.entry(id).class = Some(class.to_string());
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.entry(id).text = Some(text.to_string());
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        self.entry(id).visible = visible;
    }

    fn export(&self) -> Option<serde_json::Value> {
        serde_json::to_value(self).ok()
    }
}
