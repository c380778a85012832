use crate::components::PhoneFrame;
use crate::content::{SKILLS, SOCIAL_PLATFORMS, TESTIMONIALS};
use leptos::*;

#[component]
pub fn InfoPage() -> impl IntoView {
    view! {
        <PhoneFrame title="Info">
            <section class="info-section">
                <h2>"Skills"</h2>
                <dl class="skills">
                    {SKILLS
                        .iter()
                        .map(|(category, skills)| view! {
                            <dt class="skill-category">{*category}</dt>
                            <dd>
                                <ul class="skill-list">
                                    {skills.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
                                </ul>
                            </dd>
                        })
                        .collect_view()}
                </dl>
            </section>

            <section class="info-section">
                <h2>"Testimonials"</h2>
                {TESTIMONIALS
                    .iter()
                    .map(|t| view! {
                        <blockquote class="testimonial">
                            <p class="testimonial-quote">{t.quote}</p>
                            <footer class="testimonial-author">
                                <img src=t.image alt=t.name width="40" height="40" class="testimonial-avatar"/>
                                <span class="testimonial-name">{t.name}</span>
                                {(!t.designation.is_empty())
                                    .then(|| view! { <span class="testimonial-role">{t.designation}</span> })}
                            </footer>
                        </blockquote>
                    })
                    .collect_view()}
            </section>

            <section class="info-section">
                <h2>"Socials"</h2>
                <ul class="socials">
                    {SOCIAL_PLATFORMS
                        .iter()
                        .map(|s| view! {
                            <li>
                                <a href=s.href target="_blank" rel="noopener" title=s.title>
                                    <span class="social-glyph">{s.glyph}</span>
                                    <span class="social-title">{s.title}</span>
                                </a>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </PhoneFrame>
    }
}
