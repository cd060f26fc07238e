/// Errors produced while normalizing a wire record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("record text has {fields} fields, at least 4 are required: {text:?}")]
    Unrepresentable { fields: usize, text: String },
}
