pub mod approval_preview;
pub mod leave_form;
pub mod list;
