//! Loading spinner component

use crate::config::UiConfig;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let text = props
        .text
        .clone()
        .unwrap_or_else(|| UiConfig::DEFAULT_LOADING_MESSAGE.to_string());

    html! {
        <div class="text-center p-4">
            <div class="spinner-border text-primary mb-3" role="status"></div>
            <p class="text-muted small mb-0">{text}</p>
        </div>
    }
}
