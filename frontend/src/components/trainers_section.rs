use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{catalog, Trainer};

#[derive(Properties, PartialEq)]
pub struct TrainersSectionProps {
    pub on_book: Callback<Trainer>,
}

/// Next expanded card after clicking the details toggle of `clicked`: at most one card is
/// open, and clicking the open one closes it.
pub fn toggle_expanded(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(TrainersSection)]
pub fn trainers_section(props: &TrainersSectionProps) -> Html {
    let expanded = use_state(|| Option::<u32>::None);

    html! {
        <section id="trainers" class="trainers-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Meet Our "}<span class="accent">{"Expert Trainers"}</span></h2>
                    <p>{"Certified professionals who bring the studio to your home."}</p>
                </div>

                <div class="card-grid">
                    {for catalog::TRAINERS.iter().map(|trainer| {
                        let is_expanded = *expanded == Some(trainer.id);

                        let on_toggle = {
                            let expanded = expanded.clone();
                            let id = trainer.id;
                            Callback::from(move |_: MouseEvent| expanded.set(toggle_expanded(*expanded, id)))
                        };

                        let on_book = {
                            let on_book = props.on_book.clone();
                            let trainer = trainer.clone();
                            Callback::from(move |_: MouseEvent| on_book.emit(trainer.clone()))
                        };

                        html! {
                            <div key={trainer.id} class="trainer-card">
                                <img src={trainer.image} alt={trainer.name} loading="lazy" />
                                <div class="trainer-body">
                                    <h3>{trainer.name}</h3>
                                    <p class="trainer-title">{trainer.title}</p>
                                    <p class="trainer-specialization">{trainer.specialization}</p>
                                    <div class="trainer-meta">
                                        <span>{format!("★ {:.1} ({} reviews)", trainer.rating, trainer.reviews)}</span>
                                        <span>{trainer.experience}</span>
                                        <span>{trainer.location}</span>
                                    </div>
                                    <div class="trainer-stats">
                                        <div><strong>{trainer.sessions}</strong><span>{"Sessions"}</span></div>
                                        <div><strong>{trainer.success_rate}</strong><span>{"Success Rate"}</span></div>
                                    </div>

                                    <button class="link-button" onclick={on_toggle}>
                                        {if is_expanded { "Less Details" } else { "View Details" }}
                                    </button>

                                    if is_expanded {
                                        <div class="trainer-details">
                                            <p>{trainer.bio}</p>
                                            <h4>{"Certifications"}</h4>
                                            <ul>
                                                {for trainer.certifications.iter().map(|c| html! { <li key={*c}>{*c}</li> })}
                                            </ul>
                                            <p>{format!("Languages: {}", trainer.languages.join(", "))}</p>
                                            <p>{format!("Availability: {}", trainer.availability)}</p>
                                        </div>
                                    }

                                    <div class="trainer-footer">
                                        <span class="price">{trainer.price}<small>{"/session"}</small></span>
                                        <button class="button button-primary" onclick={on_book}>{"Book Session"}</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                </div>

                <div class="help-box">
                    <h3>{"Need Help Choosing?"}</h3>
                    <p>{"Tell us your goals and we will match you with the right trainer."}</p>
                    <a class="button button-outline" href="#contact">{"Talk to Us"}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_expanded_at_a_time() {
        let open = toggle_expanded(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_expanded(open, 3), Some(3));
        assert_eq!(toggle_expanded(Some(3), 3), None);
    }
}
