use yew::prelude::*;
use web_sys::MouseEvent;
use shared::catalog;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    /// "Book a session" jumps to the trainer list
    pub on_explore: Callback<()>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let on_explore = {
        let on_explore = props.on_explore.clone();
        Callback::from(move |_: MouseEvent| on_explore.emit(()))
    };

    html! {
        <section id="home" class="hero-section">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"Your "}<span class="accent">{"Wellness Journey"}</span><br />{"Starts at Home"}
                    </h1>
                    <p class="hero-lead">
                        {"Certified yoga and wellness trainers who come to you. Book a personal session in minutes."}
                    </p>
                    <ul class="hero-benefits">
                        {for catalog::HERO_BENEFITS.iter().map(|benefit| html! {
                            <li key={*benefit}>{"✓ "}{*benefit}</li>
                        })}
                    </ul>
                    <div class="hero-actions">
                        <button class="button button-primary" onclick={on_explore}>{"Book a Session"}</button>
                        <a class="button button-outline" href="#services">{"View Programs"}</a>
                    </div>
                    <div class="hero-stats">
                        <div><strong>{"2500+"}</strong><span>{"Happy Clients"}</span></div>
                        <div><strong>{"4.9"}</strong><span>{"Average Rating"}</span></div>
                        <div><strong>{"50+"}</strong><span>{"Expert Trainers"}</span></div>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="live-card">
                        <span class="live-dot"></span>
                        <div>
                            <p class="live-title">{"Live Session"}</p>
                            <p class="live-meta">{"24 people joined"}</p>
                        </div>
                    </div>
                    <div class="rate-card">
                        <strong>{"98%"}</strong>
                        <span>{"Success Rate"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
