use yew::prelude::*;
use shared::catalog;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Choose Your "}<span class="accent">{"Wellness Program"}</span></h2>
                    <p>{"Programs designed around your goals, delivered by certified trainers."}</p>
                </div>
                <div class="card-grid">
                    {for catalog::SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="service-card">
                            <img src={service.image} alt={service.title} loading="lazy" />
                            <div class="service-body">
                                <div class="service-meta">
                                    <span>{format!("★ {:.1}", service.rating)}</span>
                                    <span>{service.sessions}</span>
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="feature-list">
                                    {for service.features.iter().map(|feature| html! {
                                        <li key={*feature}>{"✓ "}{*feature}</li>
                                    })}
                                </ul>
                                <div class="service-footer">
                                    <span class="price">{service.price}</span>
                                    <span class="duration">{service.duration}</span>
                                </div>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
