use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Process,
    Confirm,
    Cancel,
}

/// One batch row: a lifecycle operation on the payment labelled `id`.
///
/// `id` is a label chosen by the author of the batch. It only means something
/// within one run; the stored payment is keyed by its generated reference.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Instruction {
    pub action: Action,
    pub id: u32,
    /// Kept as text so the builder can report unparsable amounts itself.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub method: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
