pub mod binding;
pub mod field_errors;
pub mod multi_select;

pub use binding::{FormBinding, FormBindingHandle, GlobalFormState, SignalFormState};
pub use field_errors::FieldErrors;
pub use multi_select::MultiSelectField;
