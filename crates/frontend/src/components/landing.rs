use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LandingProps {
    pub on_show_auth: Callback<()>,
    pub on_show_security: Callback<()>,
}

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Lightning Fast",
        "Experience blazing fast performance with our optimized solutions.",
    ),
    (
        "🛡",
        "Secure by Design",
        "Your data is protected with enterprise-grade security measures.",
    ),
    (
        "♥",
        "Built with Love",
        "Crafted with attention to detail and passion for excellence.",
    ),
];

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let on_show_auth = props.on_show_auth.reform(|_: MouseEvent| ());
    let on_show_security = props.on_show_security.reform(|_: MouseEvent| ());
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <>
            <header class="relative h-screen flex items-center justify-center bg-gradient-to-br from-indigo-500 to-purple-600">
                <div class="absolute inset-0">
                    <img
                        src="https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80"
                        alt="Background"
                        class="w-full h-full object-cover opacity-20"
                    />
                </div>
                <div class="relative z-10 text-center px-4 sm:px-6 lg:px-8">
                    <h1 class="text-5xl sm:text-6xl font-bold text-white mb-6">
                        {"Innovate. Create. Succeed."}
                    </h1>
                    <p class="text-xl sm:text-2xl text-white/90 mb-8 max-w-3xl mx-auto">
                        {"Transform your ideas into reality with our cutting-edge solutions and expert team."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            onclick={on_show_auth.clone()}
                            class="px-8 py-3 bg-white text-purple-700 rounded-lg font-semibold hover:bg-gray-100 transition-colors"
                        >
                            {"Get Started →"}
                        </button>
                        <button
                            onclick={on_show_security}
                            class="px-8 py-3 border-2 border-white text-white rounded-lg font-semibold hover:bg-white/10 transition-colors"
                        >
                            {"Learn More"}
                        </button>
                    </div>
                </div>
            </header>

            <section class="py-20 px-4 bg-gray-50">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-4xl font-bold text-center text-gray-900 mb-16">{"Why Choose Us"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                        { for HIGHLIGHTS.iter().map(|(icon, title, body)| html! {
                            <div class="text-center">
                                <div class="mx-auto mb-6 flex h-16 w-16 items-center justify-center rounded-full bg-purple-100 text-2xl text-purple-600">
                                    {*icon}
                                </div>
                                <h3 class="text-xl font-semibold mb-4">{*title}</h3>
                                <p class="text-gray-600">{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-white">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-4xl font-bold text-gray-900 mb-8">{"Ready to Get Started?"}</h2>
                    <p class="text-xl text-gray-600 mb-10">
                        {"Join thousands of satisfied customers who trust our solutions."}
                    </p>
                    <button
                        onclick={on_show_auth}
                        class="px-8 py-3 bg-purple-600 hover:bg-purple-700 text-white rounded-lg font-semibold transition-colors"
                    >
                        {"Contact Us Today"}
                    </button>
                </div>
            </section>

            <footer class="bg-gray-900 text-white py-12 px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{"Company Name"}</h3>
                        <p class="text-gray-400 max-w-md">
                            {"Creating innovative solutions for tomorrow's challenges."}
                        </p>
                    </div>
                    <div class="flex justify-start md:justify-end items-center gap-6 text-gray-400">
                        <a href="#" class="hover:text-white">{"GitHub"}</a>
                        <a href="#" class="hover:text-white">{"Twitter"}</a>
                        <a href="#" class="hover:text-white">{"LinkedIn"}</a>
                    </div>
                </div>
                <div class="max-w-6xl mx-auto mt-8 pt-8 border-t border-gray-800 text-center text-gray-400">
                    <p>{format!("© {year} Company Name. All rights reserved.")}</p>
                </div>
            </footer>
        </>
    }
}
