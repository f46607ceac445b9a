//! Transient notification component.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 4_000;

/// Kind of notification.
#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A message shown in a toast.
#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    /// A success notification.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    /// An error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Properties for Toast component.
#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_dismiss: Callback<()>,
}

/// Toast component. Auto-dismisses after a few seconds; a new message resets
/// the timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |_| {
            let timeout = Timeout::new(TOAST_MS, move || on_dismiss.emit(()));
            move || drop(timeout)
        });
    }

    let class = match props.message.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    html! {
        <div {class}>{ &props.message.text }</div>
    }
}
