use crate::app::App;

mod app;
mod components;
mod console_log;

fn main() {
    console_log::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
