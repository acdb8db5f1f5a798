/// One completion item offered to the host's editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Text shown in the completion menu.
    pub label: String,
    /// Short kind label (`kw`, `fn`, `agg`, `win`).
    pub type_label: String,
    /// Text inserted when the completion is accepted.
    pub value: String,
    /// Relative ordering weight; higher sorts earlier in the host's menu.
    pub priority: u32,
    /// Optional qualifier (e.g. the schema a relation lives in).
    pub context: Option<String>,
}

impl Completion {
    /// Completion with no context qualifier.
    pub fn new(
        label: impl Into<String>,
        type_label: impl Into<String>,
        value: impl Into<String>,
        priority: u32,
    ) -> Self {
        Self {
            label: label.into(),
            type_label: type_label.into(),
            value: value.into(),
            priority,
            context: None,
        }
    }
}
