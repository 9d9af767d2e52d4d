use shared::wheel_session::{MessageKind, ResultMessage};
use yew::prelude::*;

/// Message line under the login form. Holds either an error or a greeting,
/// never both.
#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
}

impl FormState {
    pub fn message(&self) -> Option<ResultMessage> {
        if !self.error.is_empty() {
            Some(ResultMessage::new(self.error.clone(), MessageKind::Error))
        } else if !self.success.is_empty() {
            Some(ResultMessage::new(self.success.clone(), MessageKind::Success))
        } else {
            None
        }
    }
}

/// Backs the line under the login form. `FormView` emits the validator's
/// copy through `handle_error` and the greeting through `handle_success`,
/// then renders whatever [`FormState::message`] returns with its kind styling.
#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
        })
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        handle_success,
        handle_error,
    }
}
