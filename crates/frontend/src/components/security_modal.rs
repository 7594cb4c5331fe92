//! Security features overlay opened from the landing page

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SecurityModalProps {
    pub on_close: Callback<()>,
}

const FEATURES: [(&str, &str); 3] = [
    (
        "End-to-End Encryption",
        "Your data is encrypted at rest and in transit using industry-standard AES-256 encryption.",
    ),
    (
        "Regular Security Audits",
        "We conduct regular penetration testing and security audits to ensure your data remains protected.",
    ),
    (
        "Advanced Access Control",
        "Role-based access control and multi-factor authentication ensure only authorized users can access sensitive data.",
    ),
];

#[function_component(SecurityModal)]
pub fn security_modal(props: &SecurityModalProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4">
            <div class="relative bg-white rounded-2xl shadow-xl p-8 max-w-lg w-full">
                <button
                    onclick={on_close.clone()}
                    class="absolute right-4 top-4 text-gray-500 hover:text-gray-700"
                    aria-label="Close"
                >
                    {"✕"}
                </button>
                <h2 class="text-3xl font-bold text-gray-900 mb-6">{"Our Security Features"}</h2>
                <div class="space-y-6">
                    { for FEATURES.iter().map(|(title, body)| html! {
                        <div class="flex items-start gap-4">
                            <div class="bg-purple-100 p-2 rounded-lg text-purple-600">{"🔒"}</div>
                            <div>
                                <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                                <p class="text-gray-600">{*body}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <button
                    onclick={on_close}
                    class="mt-8 w-full px-6 py-3 bg-purple-600 hover:bg-purple-700 text-white rounded-lg font-medium transition-colors"
                >
                    {"Got it"}
                </button>
            </div>
        </div>
    }
}
