pub mod abort_confirm_view_model;
pub mod loading_overlay_view_model;
pub mod success_popup_view_model;

pub use abort_confirm_view_model::AbortConfirmViewModel;
pub use loading_overlay_view_model::LoadingOverlayViewModel;
pub use success_popup_view_model::{NextStepRow, SuccessPopupViewModel};
