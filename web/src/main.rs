use ui::LandingApp;

fn main() {
    dioxus::launch(LandingApp);
}
