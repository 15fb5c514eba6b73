mod checks;
mod errors;
mod types;

pub use checks::{
    assert_session_does_not_have, assert_session_does_not_have_values, assert_session_has,
    assert_session_has_values,
};
pub use errors::AssertionFailure;
pub use types::SessionBinding;
