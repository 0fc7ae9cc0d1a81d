use log::warn;
use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::inquiry_form::InquiryFormView;
use crate::components::nav::Nav;
use crate::components::scroll_top::ScrollTopButton;
use crate::config::{OFFICE_HOURS, PRACTICE};
use crate::dom;
use crate::hooks::reveal::use_reveal;
use crate::hooks::viewport::use_viewport;
use crate::state::reveal::RevealState;

fn reveal_class(reveal: &RevealState, region: &str) -> Classes {
    classes!("reveal", reveal.is_revealed(region).then(|| "revealed"))
}

struct Service {
    title: &'static str,
    image: &'static str,
    body: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Anxiety & Stress Management",
        image: "https://images.pexels.com/photos/3759657/pexels-photo-3759657.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        body: "Learn effective coping strategies and mindfulness techniques to manage anxiety, reduce stress, and regain control over your thoughts and emotions.",
    },
    Service {
        title: "Relationship Counseling",
        image: "https://images.pexels.com/photos/1024993/pexels-photo-1024993.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        body: "Strengthen communication, rebuild trust, and deepen intimacy in your relationships through evidence-based therapeutic approaches.",
    },
    Service {
        title: "Trauma Recovery",
        image: "https://images.pexels.com/photos/3760263/pexels-photo-3760263.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        body: "Heal from past traumatic experiences in a safe, supportive environment using evidence-based approaches at your own pace.",
    },
];

const HIGHLIGHTS: [&str; 4] = [
    "8+ years of experience",
    "500+ client sessions",
    "In-person & virtual sessions",
    "Evidence-based approaches",
];

#[function_component(Home)]
pub fn home() -> Html {
    let viewport = use_viewport();
    let reveal = use_reveal();

    let schedule = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_into_view("contact") {
            warn!("Could not scroll to contact section: {}", e);
        }
    });

    html! {
        <div class="home-page">
            <style>{HOME_STYLES}</style>

            <Nav background_active={viewport.nav_background_active()} />
            <ScrollTopButton visible={viewport.past_threshold()} />

            <section id="home" class="hero">
                <div class="hero-backdrop"></div>
                <div
                    class="hero-content"
                    style={format!("transform: translateY({}px);", viewport.parallax_offset())}
                >
                    <div data-reveal="hero" class={reveal_class(&reveal, "hero")}>
                        <h1>{"Find Your Path to"}</h1>
                        <p class="hero-subtitle">
                            {format!("{}, {}", PRACTICE.name, PRACTICE.credentials)}
                        </p>
                        <p class="hero-tagline">{"Compassionate, evidence-based therapy in Los Angeles"}</p>
                        <button class="hero-cta" onclick={schedule}>{"Schedule Free Consultation"}</button>
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div data-reveal="about" class={classes!("about-grid", reveal_class(&reveal, "about"))}>
                    <div class="about-text">
                        <h3>{format!("About {}", PRACTICE.name)}</h3>
                        <p>
                            {"Dr. Serena Blake is a licensed clinical psychologist (PsyD) based in Los Angeles, CA, with eight years of experience and over 500 client sessions. She blends evidence-based approaches, like cognitive-behavioral therapy and mindfulness, with compassionate, personalized care."}
                        </p>
                        <p>
                            {"Whether you meet in her Maplewood Drive office or connect virtually via Zoom, Dr. Blake is committed to creating a safe, supportive space for you to overcome anxiety, strengthen relationships, and heal from trauma."}
                        </p>
                        <ul class="highlights">
                            { for HIGHLIGHTS.iter().map(|item| html! { <li>{"✓ "}{*item}</li> }) }
                        </ul>
                    </div>
                    <img src="/image.png" alt={PRACTICE.name} class="about-image" loading="lazy" />
                </div>
            </section>

            <section id="services" class="services">
                <div data-reveal="services-header" class={reveal_class(&reveal, "services-header")}>
                    <h2>{"Specialized Therapeutic Services"}</h2>
                    <p class="section-subtitle">{"Evidence-based approaches tailored to your unique needs and goals"}</p>
                </div>
                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let region = format!("service-{}", index);
                        html! {
                            <div data-reveal={region.clone()} class={classes!("service-card", reveal_class(&reveal, &region))}>
                                <img src={service.image} alt={service.title} loading="lazy" />
                                <h4>{service.title}</h4>
                                <p>{service.body}</p>
                            </div>
                        }
                    }) }
                </div>

                <div data-reveal="office-hours" class={classes!("office-hours", reveal_class(&reveal, "office-hours"))}>
                    <h3>{"Office Hours & Availability"}</h3>
                    <div class="hours-grid">
                        { for OFFICE_HOURS.iter().map(|slot| html! {
                            <div class="hours-card">
                                <h4>{format!("{} Sessions", slot.kind)}</h4>
                                <p>{slot.days}</p>
                                <p>{slot.hours}</p>
                            </div>
                        }) }
                    </div>
                    <p class="hours-note">{PRACTICE.address()}</p>
                    <p class="hours-note">{"Secure Zoom video sessions"}</p>
                </div>
            </section>

            <section id="faq" class="faq">
                <div data-reveal="faq" class={reveal_class(&reveal, "faq")}>
                    <h2>{"Frequently Asked Questions"}</h2>
                    <Faq />
                    <p class="faq-followup"><strong>{"Still have questions?"}</strong></p>
                    <p class="faq-followup">
                        {"Contact me at "}
                        <a href={PRACTICE.mailto()}>{PRACTICE.email}</a>
                        {" or "}
                        <a href={PRACTICE.phone_href}>{PRACTICE.phone_display}</a>
                    </p>
                </div>
            </section>

            <section id="contact" class="contact">
                <div data-reveal="contact-header" class={reveal_class(&reveal, "contact-header")}>
                    <h2>{"Get in Touch"}</h2>
                    <p class="section-subtitle">{"Ready to begin your journey? Let's schedule your free consultation"}</p>
                </div>
                <div class="contact-grid">
                    <div data-reveal="contact-info" class={classes!("contact-info", reveal_class(&reveal, "contact-info"))}>
                        <h3>{"Contact Information"}</h3>
                        <p>{"📍 "}{PRACTICE.address()}</p>
                        <p>{"📞 "}<a href={PRACTICE.phone_href}>{PRACTICE.phone_display}</a></p>
                        <p>{"✉️ "}<a href={PRACTICE.mailto()}>{PRACTICE.email}</a></p>
                        { for OFFICE_HOURS.iter().map(|slot| html! {
                            <p>{"🕒 "}{format!("{}: {}, {}", slot.kind, slot.days, slot.hours)}</p>
                        }) }
                        <div class="consultation-note">
                            <h4>{"Free Consultation"}</h4>
                            <p>{"Not sure if therapy is right for you? Schedule a complimentary 15-minute consultation to discuss your needs and learn more about my approach."}</p>
                        </div>
                    </div>
                    <div data-reveal="contact-form" class={classes!("contact-form", reveal_class(&reveal, "contact-form"))}>
                        <InquiryFormView />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-grid">
                    <div>
                        <h4>{PRACTICE.name}</h4>
                        <p>{"Licensed Clinical Psychologist providing compassionate, evidence-based therapy in Los Angeles and virtually."}</p>
                        <p>{PRACTICE.credentials}</p>
                        <p>{PRACTICE.license}</p>
                    </div>
                    <div>
                        <h5>{"Contact Info"}</h5>
                        <p>{PRACTICE.phone_display}</p>
                        <p>{PRACTICE.email}</p>
                        <p>{PRACTICE.street}<br />{PRACTICE.city}</p>
                    </div>
                    <div>
                        <h5>{"Office Hours"}</h5>
                        { for OFFICE_HOURS.iter().map(|slot| html! {
                            <>
                                <p class="footer-label">{slot.kind}</p>
                                <p>{format!("{}: {}", slot.short_days, slot.short_hours)}</p>
                            </>
                        }) }
                    </div>
                </div>
                <p class="copyright">{format!("© 2025 {} Psychology. All rights reserved.", PRACTICE.name)}</p>
            </footer>
        </div>
    }
}

const HOME_STYLES: &str = r#"
    .home-page {
        min-height: 100vh;
        background: #ffffff;
        color: #1f2937;
        overflow-x: hidden;
        font-family: var(--font-inter), sans-serif;
    }
    .home-page h1, .home-page h2, .home-page h3, .home-page h4 {
        font-family: var(--font-playfair), serif;
        font-weight: 400;
    }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        background: #ffffff;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        font-family: var(--font-playfair), serif;
        font-size: 1.25rem;
        color: #111827;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link, .mobile-link {
        color: #374151;
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-link:hover, .mobile-link:hover {
        color: #0d9488;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        display: none;
        background: #ffffff;
        border-top: 1px solid #e5e7eb;
        padding: 0.5rem 1rem 0.75rem;
    }
    .mobile-link {
        display: block;
        padding: 0.5rem 0.75rem;
    }

    .scroll-top {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        z-index: 50;
        background: #0d9488;
        color: #ffffff;
        border: none;
        border-radius: 9999px;
        width: 3rem;
        height: 3rem;
        font-size: 1.5rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
        transition: transform 0.3s ease;
    }
    .scroll-top:hover {
        transform: scale(1.1);
    }

    .reveal {
        opacity: 0;
        transform: translateY(2rem);
        transition: opacity 1s ease-out, transform 1s ease-out;
    }
    .reveal.revealed {
        animation: fadeInUp 0.8s ease-out forwards;
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(2rem); }
        to { opacity: 1; transform: translateY(0); }
    }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(135deg, #f0fdfa, #ffffff, #eff6ff);
        overflow: hidden;
    }
    .hero-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, rgba(45, 212, 191, 0.1), rgba(96, 165, 250, 0.1));
    }
    .hero-content {
        position: relative;
        z-index: 10;
        text-align: center;
        max-width: 56rem;
        padding: 5rem 1rem 0;
    }
    .hero-content h1 {
        font-size: clamp(2rem, 6vw, 4.5rem);
        color: #1f2937;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle, .hero-tagline {
        font-size: 1.125rem;
        color: #4b5563;
    }
    .hero-cta, .submit-button {
        margin-top: 2rem;
        background: #0d9488;
        color: #ffffff;
        border: none;
        border-radius: 9999px;
        padding: 1rem 2rem;
        font-size: 1rem;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .hero-cta:hover, .submit-button:hover {
        background: #0f766e;
    }

    .about, .services, .faq, .contact {
        padding: 5rem 1rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .about-grid, .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .about-image {
        width: 100%;
        border-radius: 1rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }
    .highlights {
        list-style: none;
        padding: 0;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem;
        color: #0f766e;
    }

    .section-subtitle {
        color: #6b7280;
        font-size: 1.125rem;
        text-align: center;
        margin-bottom: 3rem;
    }
    .services h2, .faq h2, .contact h2 {
        text-align: center;
        font-size: 2.5rem;
    }
    .service-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card {
        background: #ffffff;
        border-radius: 1rem;
        overflow: hidden;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
        padding-bottom: 1.5rem;
    }
    .service-card img {
        width: 100%;
        height: 12rem;
        object-fit: cover;
    }
    .service-card h4, .service-card p {
        padding: 0 1.5rem;
    }
    .office-hours {
        margin-top: 4rem;
        text-align: center;
    }
    .hours-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
    }
    .hours-card {
        background: #f0fdfa;
        border-radius: 1rem;
        padding: 1.5rem;
    }
    .hours-note {
        color: #6b7280;
    }

    .faq-list {
        max-width: 48rem;
        margin: 2rem auto;
    }
    .faq-item {
        border-bottom: 1px solid #e5e7eb;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        background: none;
        border: none;
        padding: 1.25rem 0;
        font-size: 1.125rem;
        text-align: left;
        cursor: pointer;
        color: #1f2937;
    }
    .faq-item.open .faq-question {
        color: #0d9488;
    }
    .faq-answer {
        color: #4b5563;
        line-height: 1.7;
        padding-bottom: 1.25rem;
    }
    .faq-followup {
        text-align: center;
    }
    .faq-followup a, .contact-info a {
        color: #0d9488;
    }

    .contact-grid {
        align-items: start;
    }
    .consultation-note {
        margin-top: 2rem;
        background: #f0fdfa;
        border-radius: 1rem;
        padding: 1.5rem;
    }
    .contact-form {
        background: #ffffff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.1);
    }
    .form-group {
        margin-bottom: 1.5rem;
    }
    .form-group label {
        display: block;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .form-input {
        width: 100%;
        box-sizing: border-box;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        padding: 0.75rem;
        font-size: 1rem;
    }
    .form-input:focus {
        outline: none;
        border-color: #14b8a6;
    }
    .input-error {
        border-color: #ef4444;
        outline-color: #ef4444;
    }
    .field-error {
        color: #ef4444;
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }
    .form-group.consent {
        display: flex;
        gap: 0.75rem;
        align-items: flex-start;
    }
    .form-group.consent label {
        font-weight: 400;
        font-size: 0.875rem;
        color: #4b5563;
    }
    .submit-button {
        width: 100%;
        margin-top: 0.5rem;
    }
    .form-success {
        text-align: center;
        padding: 2rem 0;
    }
    .success-icon {
        font-size: 3rem;
        color: #0d9488;
    }

    .footer {
        background: #111827;
        color: #d1d5db;
        padding: 3rem 1rem 2rem;
    }
    .footer-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .footer h4, .footer h5 {
        color: #ffffff;
    }
    .footer-label {
        color: #5eead4;
        margin-bottom: 0;
    }
    .copyright {
        text-align: center;
        border-top: 1px solid #374151;
        margin-top: 2rem;
        padding-top: 1.5rem;
        font-size: 0.875rem;
    }

    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .mobile-menu {
            display: block;
        }
        .about-grid, .contact-grid, .service-grid, .hours-grid, .footer-grid {
            grid-template-columns: 1fr;
        }
        .contact-form {
            padding: 1.5rem;
        }
    }
"#;
