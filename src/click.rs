/// Outcome of activating an interactive widget on a page.
///
/// Dispatch is a plain `match` — no visitor indirection:
///
/// ```rust
/// use pagescan::ClickResult;
///
/// fn describe(result: &ClickResult) -> String {
///     match result {
///         ClickResult::Text(contents) => format!("text field: {contents}"),
///         ClickResult::Choice(options) => format!("{} options", options.len()),
///         ClickResult::Signature => "signature field".to_string(),
///     }
/// }
///
/// assert_eq!(describe(&ClickResult::Signature), "signature field");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickResult {
    /// A text field; carries its current contents.
    Text(String),

    /// A choice field; carries the selectable options.
    Choice(Vec<String>),

    /// A signature field. Verification is the document engine's business.
    Signature,
}

impl ClickResult {
    /// Whether activating this widget opens an editor (text and choice
    /// fields do; signature fields only verify).
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Choice(_))
    }
}
