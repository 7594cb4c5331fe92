use portal_frontend::{App, logging};

fn main() {
    logging::init_logging();
    yew::Renderer::<App>::new().render();
}
