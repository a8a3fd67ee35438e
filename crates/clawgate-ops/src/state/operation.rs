//! Operation State
//!
//! Root state owned by the store: three slices that change independently.

use super::{AbortConfirmState, LoadingState, SuccessState};

/// Root state of the operation store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationState {
    pub loading: LoadingState,
    pub success: SuccessState,
    pub abort_confirm: AbortConfirmState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let state = OperationState::default();
        assert!(!state.loading.visible);
        assert!(!state.success.visible);
        assert!(!state.abort_confirm.visible);
    }
}
