/// A single validated entry from the input document.
///
/// `operator` is kept as written; whether it names a supported operation is
/// decided at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub name: String,
    pub operator: String,
    pub value1: f64,
    /// Zero for unary operators.
    pub value2: f64,
}
