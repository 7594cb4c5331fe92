//! Inline spinner shown inside submit buttons while a request is in flight

use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <span class="inline-flex items-center">
            <span class="inline-block animate-spin rounded-full h-6 w-6 border-4 border-t-white border-r-white border-b-white border-l-transparent"></span>
        </span>
    }
}
