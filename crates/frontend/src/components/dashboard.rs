//! Post-login dashboard: workspace creation and logout

use crate::components::Spinner;
use crate::context::{use_portal, use_view};
use portal_core::{RouterAction, WorkspaceForm};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const WORKSPACE_CREATED: &str = "Workspace created successfully!";

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let portal = use_portal();
    let view = use_view();
    let form = use_state(WorkspaceForm::default);
    let error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_name(input.value());
            form.set(next);
        })
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_description(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let portal = portal.clone();
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            error.set(None);

            let portal = portal.clone();
            let form = form.clone();
            let error = error.clone();
            let loading = loading.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let mut submitted = (*form).clone();
                let set_loading = move |on: bool| loading.set(on);
                match portal
                    .controller()
                    .submit_workspace(&mut submitted, set_loading)
                    .await
                {
                    Ok(_) => {
                        form.set(submitted);
                        notify(WORKSPACE_CREATED);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_logout = {
        let portal = portal.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            portal.controller().logout();
            view.dispatch(RouterAction::SignedOut);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <nav class="bg-white shadow-sm">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex justify-between items-center">
                    <h1 class="text-xl font-semibold text-gray-900">{"Dashboard"}</h1>
                    <button
                        onclick={on_logout}
                        class="text-gray-600 hover:text-gray-900 font-medium"
                    >
                        {"Logout"}
                    </button>
                </div>
            </nav>

            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="bg-white rounded-lg shadow-sm p-6">
                    <h2 class="text-2xl font-semibold text-gray-900 mb-6">{"Welcome to Your Dashboard"}</h2>

                    <form onsubmit={on_submit} class="space-y-4">
                        if let Some(message) = (*error).as_ref() {
                            <div class="p-3 bg-red-100 text-red-700 rounded-lg">{message}</div>
                        }

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Workspace Name"}</label>
                            <input
                                type="text"
                                value={form.name().to_string()}
                                oninput={on_name_input}
                                class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                                required=true
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                            <textarea
                                value={form.description().to_string()}
                                oninput={on_description_input}
                                rows="3"
                                class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                                required=true
                            />
                        </div>

                        <button
                            type="submit"
                            disabled={*loading}
                            class="flex items-center justify-center gap-2 px-6 py-3 bg-purple-600 hover:bg-purple-700 disabled:opacity-50 text-white rounded-lg font-medium transition-colors"
                        >
                            if *loading {
                                <Spinner />
                            } else {
                                {"+ Create Workspace"}
                            }
                        </button>
                    </form>
                </div>
            </main>
        </div>
    }
}
