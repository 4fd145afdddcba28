use yew::prelude::*;
use shared::catalog;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"About "}<span class="accent">{"Svasthify"}</span></h2>
                    <p>
                        {"We bring certified yoga and wellness professionals to your home, blending traditional practice with modern coaching."}
                    </p>
                </div>

                <div class="stats-bar">
                    {for catalog::ABOUT_STATS.iter().map(|stat| html! {
                        <div key={stat.label}><strong>{stat.value}</strong><span>{stat.label}</span></div>
                    })}
                </div>

                <div class="card-grid team-grid">
                    {for catalog::TEAM_MEMBERS.iter().map(|member| html! {
                        <div key={member.id} class="team-card">
                            <h3>{member.name}</h3>
                            <p class="team-role">{member.role}</p>
                            <p class="team-specialization">{member.specialization}</p>
                            <p>{member.bio}</p>
                            <ul class="feature-list">
                                {for member.achievements.iter().map(|a| html! { <li key={*a}>{*a}</li> })}
                            </ul>
                            <a href={format!("mailto:{}", member.email)}>{member.email}</a>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
