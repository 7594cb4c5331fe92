//! Login / register overlay

use crate::components::Spinner;
use crate::context::{use_portal, use_view};
use portal_core::{AuthForm, AuthMode, AuthOutcome, RouterAction};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AuthModalProps {
    pub on_close: Callback<()>,
}

fn field_setter(
    form: &UseStateHandle<AuthForm>,
    apply: fn(&mut AuthForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let portal = use_portal();
    let view = use_view();
    let form = use_state(AuthForm::default);
    let error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);

    let on_name_input = field_setter(&form, |form, value| form.set_name(value));
    let on_email_input = field_setter(&form, |form, value| form.set_email(value));
    let on_password_input = field_setter(&form, |form, value| form.set_password(value));

    let on_toggle_mode = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.toggle_mode();
            form.set(next);
        })
    };

    let on_submit = {
        let portal = portal.clone();
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        let view = view.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            error.set(None);

            let portal = portal.clone();
            let submitted = (*form).clone();
            let error = error.clone();
            let loading = loading.clone();
            let view = view.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let set_loading = move |on: bool| loading.set(on);
                match portal.controller().submit_auth(&submitted, set_loading).await {
                    Ok(AuthOutcome::SignedIn) => view.dispatch(RouterAction::SignedIn),
                    // Server said yes without a full token pair; stay put, say nothing
                    Ok(AuthOutcome::Incomplete) => {}
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close_button = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let is_login = form.mode() == AuthMode::Login;

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4" onclick={on_backdrop}>
            <div class="relative bg-white rounded-2xl shadow-xl p-8 max-w-md w-full" onclick={keep_open}>
                <button
                    onclick={on_close_button}
                    class="absolute right-4 top-4 text-gray-500 hover:text-gray-700"
                    aria-label="Close"
                >
                    {"✕"}
                </button>

                <h2 class="text-3xl font-bold text-gray-900 mb-6">
                    { if is_login { "Welcome Back" } else { "Create Account" } }
                </h2>

                if let Some(message) = (*error).as_ref() {
                    <div class="mb-4 p-3 bg-red-100 text-red-700 rounded-lg">{message}</div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    if !is_login {
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Name"}</label>
                            <input
                                type="text"
                                value={form.name().to_string()}
                                oninput={on_name_input}
                                placeholder="John Doe"
                                class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                                required=true
                            />
                        </div>
                    }

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input
                            type="email"
                            value={form.email().to_string()}
                            oninput={on_email_input}
                            placeholder="you@example.com"
                            class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                            required=true
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            type="password"
                            value={form.password().to_string()}
                            oninput={on_password_input}
                            placeholder="••••••••"
                            class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent"
                            required=true
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*loading}
                        class="w-full flex items-center justify-center px-6 py-3 bg-purple-600 hover:bg-purple-700 disabled:opacity-50 text-white rounded-lg font-medium transition-colors"
                    >
                        if *loading {
                            <Spinner />
                        } else if is_login {
                            {"Sign In"}
                        } else {
                            {"Create Account"}
                        }
                    </button>
                </form>

                <div class="mt-4 text-center">
                    <button
                        onclick={on_toggle_mode}
                        class="text-purple-600 hover:text-purple-700 text-sm font-medium"
                    >
                        { if is_login { "Don't have an account? Sign up" } else { "Already have an account? Sign in" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
