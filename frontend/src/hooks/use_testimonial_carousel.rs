use std::rc::Rc;

use backend::{Carousel, Swipe};
use gloo::timers::callback::Interval;
use yew::prelude::*;

pub enum CarouselAction {
    Tick,
    Next,
    Previous,
    GoTo(usize),
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
}

#[derive(Clone, PartialEq)]
pub struct CarouselState {
    pub carousel: Carousel,
    pub last_swipe: Option<Swipe>,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.carousel.clone();
        let mut last_swipe = self.last_swipe;
        match action {
            CarouselAction::Tick => {
                if !carousel.tick() {
                    return self;
                }
            }
            CarouselAction::Next => carousel.next(),
            CarouselAction::Previous => carousel.previous(),
            CarouselAction::GoTo(index) => carousel.go_to(index),
            CarouselAction::TouchStart(x) => carousel.touch_start(x),
            CarouselAction::TouchMove(x) => carousel.touch_move(x),
            CarouselAction::TouchEnd => last_swipe = carousel.touch_end(),
        }
        Rc::new(Self { carousel, last_swipe })
    }
}

/// Carousel over `len` items that autoplays every `autoplay_ms` until navigated by hand
#[hook]
pub fn use_testimonial_carousel(len: usize, autoplay_ms: u32, swipe_threshold: f64) -> UseReducerHandle<CarouselState> {
    let state = use_reducer(move || CarouselState {
        carousel: Carousel::new(len, swipe_threshold),
        last_swipe: None,
    });

    let autoplaying = state.carousel.is_autoplaying();
    use_effect_with(autoplaying, {
        let dispatcher = state.dispatcher();
        move |autoplaying| {
            let interval = autoplaying.then(|| {
                Interval::new(autoplay_ms, move || dispatcher.dispatch(CarouselAction::Tick))
            });
            // dropping the interval cancels it
            move || drop(interval)
        }
    });

    state
}
