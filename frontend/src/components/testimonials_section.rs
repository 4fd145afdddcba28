use yew::prelude::*;
use web_sys::{MouseEvent, TouchEvent};
use crate::hooks::use_testimonial_carousel::{use_testimonial_carousel, CarouselAction};
use crate::services::AppServices;
use shared::catalog;

#[derive(Properties, PartialEq)]
pub struct TestimonialsSectionProps {
    pub services: AppServices,
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsSectionProps) -> Html {
    let config = &props.services.config;
    let carousel = use_testimonial_carousel(
        catalog::TESTIMONIALS.len(),
        config.carousel_autoplay_ms,
        config.swipe_threshold_px,
    );

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let on_touch_start = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                carousel.dispatch(CarouselAction::TouchStart(x));
            }
        })
    };

    let on_touch_move = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                carousel.dispatch(CarouselAction::TouchMove(x));
            }
        })
    };

    let on_touch_end = {
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| carousel.dispatch(CarouselAction::TouchEnd))
    };

    let index = carousel.carousel.index();
    let Some(current) = catalog::TESTIMONIALS.get(index) else {
        return html! {};
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Real People, "}<span class="accent">{"Real Results"}</span></h2>
                </div>

                <div class="stats-bar">
                    {for catalog::TESTIMONIAL_STATS.iter().map(|stat| html! {
                        <div key={stat.label}><strong>{stat.value}</strong><span>{stat.label}</span></div>
                    })}
                </div>

                <div
                    class="testimonial-card"
                    ontouchstart={on_touch_start}
                    ontouchmove={on_touch_move}
                    ontouchend={on_touch_end}
                >
                    <div class="testimonial-person">
                        <img src={current.image} alt={current.name} loading="lazy" />
                        <div>
                            <h3>{current.name}</h3>
                            <p>{format!("{}, {} · {}", current.age, current.profession, current.location)}</p>
                            <p class="stars">{("★".repeat(current.rating as usize))}</p>
                        </div>
                    </div>

                    <div class="testimonial-story">
                        <span class="story-label">{"Success Story"}</span>
                        <h4>{current.title}</h4>
                        <blockquote>{current.testimonial}</blockquote>
                        <ul class="feature-list">
                            {for current.results.iter().map(|result| html! { <li key={*result}>{"✓ "}{*result}</li> })}
                        </ul>
                        <div class="transformation">
                            <h5>{"Transformation"}</h5>
                            <p><strong>{"Before: "}</strong>{current.before}</p>
                            <p><strong>{"After: "}</strong>{current.after}</p>
                            <p class="program">{format!("{} · {}", current.program, current.duration)}</p>
                        </div>
                    </div>
                </div>

                <div class="carousel-controls">
                    <button class="carousel-arrow" onclick={on_previous} aria-label="Previous story">{"‹"}</button>
                    <div class="carousel-dots">
                        {for (0..carousel.carousel.len()).map(|i| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)))
                            };
                            html! {
                                <button
                                    key={i}
                                    class={classes!("carousel-dot", (i == index).then_some("active"))}
                                    {onclick}
                                    aria-label={format!("Story {}", i + 1)}
                                />
                            }
                        })}
                    </div>
                    <button class="carousel-arrow" onclick={on_next} aria-label="Next story">{"›"}</button>
                </div>
                <p class="swipe-hint">{"← Swipe to see more stories →"}</p>
            </div>
        </section>
    }
}
