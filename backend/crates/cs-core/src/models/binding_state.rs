use serde::{Deserialize, Serialize};

/// Whether a device's identity has completed its one-time name binding.
///
/// `Unbound -> Bound` happens exactly once, on a successful bind or import.
/// There is no client-side transition back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BindingState {
    #[default]
    Unbound,
    Bound,
}

impl BindingState {
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unbound => "unbound",
            Self::Bound => "bound",
        }
    }
}
