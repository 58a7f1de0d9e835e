mod option;
mod value;

pub use option::{load_options, FieldNames, OptionList, OptionRecord};
pub use value::FieldValue;
