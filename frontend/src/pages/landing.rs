use chrono::Datelike;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::booking::{BookingFields, BrowserTimer, PendingSubmission};
use crate::components::benefit_item::BenefitItem;
use crate::components::fallback_image::FallbackImage;
use crate::components::icon::IconView;
use crate::components::nav_link::NavLink;
use crate::components::process_step::ProcessStepCard;
use crate::components::service_card::ServiceCard;
use crate::content::{self, Icon};
use crate::state::{self, FormEvent, FormStatus};

#[function_component(Landing)]
pub fn landing() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let form_status = use_state(FormStatus::default);
    let active_faq = use_state(|| None::<usize>);
    let pending = use_mut_ref(|| PendingSubmission::new(BrowserTimer));
    let fields = use_memo(|_| BookingFields::default(), ());

    // Header styling follows the window scroll offset
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    is_scrolled.set(state::is_scrolled(window.scroll_y().unwrap_or(0.0)));

                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(state::is_scrolled(offset));
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Failed to detach scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    // No state update may fire after the page is gone
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().cancel();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state::toggle_menu(*menu_open);
            debug!("Mobile menu open: {}", next);
            menu_open.set(next);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(state::close_menu());
        })
    };

    let onsubmit = {
        let form_status = form_status.clone();
        let pending = pending.clone();
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = fields.read();
            let status_setter = form_status.setter();
            let next = pending.borrow_mut().submit(*form_status, &payload, move |status| {
                info!("Booking request delivered");
                status_setter.set(status);
            });
            if next != *form_status {
                info!("Booking request from {} ({})", payload.name, payload.email);
                form_status.set(next);
            }
        })
    };

    let send_another = {
        let form_status = form_status.clone();
        Callback::from(move |_: MouseEvent| {
            form_status.set((*form_status).apply(FormEvent::Reset));
        })
    };

    let faq_items = content::FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| {
        let is_open = *active_faq == Some(i);
        let onclick = {
            let active_faq = active_faq.clone();
            Callback::from(move |_: MouseEvent| {
                let next = state::toggle_faq(*active_faq, i);
                debug!("FAQ open entry: {:?}", next);
                active_faq.set(next);
            })
        };
        html! {
            <div class={classes!("faq-item", is_open.then(|| "open"))}>
                <button class="faq-question" type="button" {onclick}>
                    <span class="question-text">{entry.question}</span>
                    <IconView icon={Icon::Plus} class={classes!("faq-toggle")} />
                </button>
                {
                    if is_open {
                        html! {
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    });

    let booking_panel = if *form_status == FormStatus::Success {
        html! {
            <div class="booking-success">
                <div class="success-icon">
                    <IconView icon={Icon::CheckCircle} />
                </div>
                <h3>{"Request Received!"}</h3>
                <p>{"Thank you for your interest in TerraVent. One of our soil experts will contact you within 24 hours."}</p>
                <button type="button" class="send-another" onclick={send_another}>
                    {"Send another request"}
                </button>
            </div>
        }
    } else {
        html! {
            <form class="booking-form" {onsubmit}>
                <h3>{"Request a Consultation"}</h3>
                <div class="form-row">
                    <div class="form-field">
                        <label>{"Full Name"}</label>
                        <input ref={fields.name.clone()} type="text" required=true placeholder="John Doe" />
                    </div>
                    <div class="form-field">
                        <label>{"Phone Number"}</label>
                        <input ref={fields.phone.clone()} type="tel" required=true placeholder="+46 00 000 00 00" />
                    </div>
                </div>
                <div class="form-field">
                    <label>{"Email Address"}</label>
                    <input ref={fields.email.clone()} type="email" required=true placeholder="john@farm.se" />
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>{"Farm Location"}</label>
                        <input ref={fields.location.clone()} type="text" placeholder="City / Region" />
                    </div>
                    <div class="form-field">
                        <label>{"Approx. Hectares"}</label>
                        <input ref={fields.hectares.clone()} type="number" min="0" placeholder="e.g. 50" />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-field">
                        <label>{"Main Soil Concern"}</label>
                        <select ref={fields.issue.clone()}>
                            { for content::SOIL_CONCERNS.iter().map(|c| html! { <option>{*c}</option> }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label>{"Preferred Contact"}</label>
                        <select ref={fields.contact_method.clone()}>
                            { for content::CONTACT_METHODS.iter().map(|m| html! { <option>{*m}</option> }) }
                        </select>
                    </div>
                </div>
                <button
                    type="submit"
                    class={classes!("submit-button", form_status.submit_disabled().then(|| "sending"))}
                    disabled={form_status.submit_disabled()}
                >
                    {form_status.submit_label()}
                </button>
                <p class="form-note">{"By submitting, you agree to our privacy policy and terms of service."}</p>
            </form>
        }
    };

    html! {
        <div class="landing-page">
            <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
                <div class="header-content">
                    <a href="#" class="brand">
                        <span class="brand-mark"><IconView icon={Icon::Leaf} /></span>
                        <span class="brand-name">{content::BRAND}</span>
                    </a>

                    <nav class="desktop-nav">
                        { for content::NAV_LINKS.iter().map(|link| html! {
                            <NavLink label={link.label} href={link.href} />
                        }) }
                        <NavLink
                            label="Book a consultation"
                            href={content::BOOKING_HREF}
                            class={classes!("nav-cta")}
                        />
                    </nav>

                    <button class="burger-menu" type="button" aria-label="Toggle menu" onclick={toggle_menu}>
                        <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>

                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                { for content::NAV_LINKS.iter().map(|link| html! {
                                    <NavLink label={link.label} href={link.href} on_click={close_menu.clone()} />
                                }) }
                                <NavLink
                                    label="Book a consultation"
                                    href={content::BOOKING_HREF}
                                    on_click={close_menu.clone()}
                                    class={classes!("mobile-cta")}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>

            { hero_section() }
            { problem_section() }
            { solution_section() }
            { services_section() }
            { process_section() }
            { benefits_section() }
            { about_section() }
            { partners_section() }

            <section id="booking" class="booking-section">
                <div class="booking-card">
                    <div class="booking-info">
                        <h2>{"Ready to restore your land?"}</h2>
                        <p class="lead">
                            {"Book a free initial consultation today. We'll discuss your soil concerns and show you how PSF can transform your fields."}
                        </p>
                        <div class="contact-lines">
                            <div class="contact-line">
                                <div class="contact-icon"><IconView icon={Icon::Phone} /></div>
                                <div>
                                    <p class="contact-label">{"Call us directly"}</p>
                                    <p class="contact-value">{content::PHONE}</p>
                                </div>
                            </div>
                            <div class="contact-line">
                                <div class="contact-icon"><IconView icon={Icon::Mail} /></div>
                                <div>
                                    <p class="contact-label">{"Email inquiries"}</p>
                                    <p class="contact-value">{content::CONTACT_EMAIL}</p>
                                </div>
                            </div>
                        </div>
                        <p class="service-area">{content::SERVICE_AREA}</p>
                    </div>
                    <div class="booking-panel">
                        { booking_panel }
                    </div>
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for faq_items }
                </div>
            </section>

            { footer() }

            <div class="mobile-booking-cta">
                <a href={content::BOOKING_HREF}>
                    <IconView icon={Icon::Calendar} />
                    {"Book Consultation"}
                </a>
            </div>

            <style>{STYLES}</style>
        </div>
    }
}

fn hero_section() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <IconView icon={Icon::Zap} />
                        <span>{"Sustainable Soil Restoration in Sweden"}</span>
                    </div>
                    <h1>
                        {"Compacted soil reduces drainage and yield."}
                        <span class="hero-accent">{"Give it a breath of fresh air."}</span>
                    </h1>
                    <p class="lead">
                        {content::HERO_LEAD}
                    </p>
                    <div class="hero-actions">
                        <a href={content::BOOKING_HREF} class="button-primary">
                            {"Book a consultation"}
                            <IconView icon={Icon::ArrowRight} />
                        </a>
                        <a href="#process" class="button-secondary">{"See how it works"}</a>
                    </div>
                </div>
                <div class="hero-media">
                    <div class="hero-photo">
                        <FallbackImage image={content::HERO_IMAGE} />
                    </div>
                    <div class="hero-stat">
                        <div class="stat-icon"><IconView icon={Icon::BarChart} /></div>
                        <div>
                            <p class="stat-title">{"11.5% Average Yield Loss"}</p>
                            <p class="stat-text">{"Recover lost profits by treating soil compaction."}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn problem_section() -> Html {
    html! {
        <section class="problem-section">
            <div class="section-intro">
                <h2>{"The Hidden Cost of Compaction"}</h2>
                <p class="lead">{"Compacted soil is like a sponge that's been squeezed tight. It stops the essential flow of nutrients, air, and water that your crops depend on."}</p>
            </div>
            <div class="problem-grid">
                { for content::PROBLEMS.iter().map(|problem| html! {
                    <div class="problem-item">
                        <div class="problem-icon"><IconView icon={problem.icon} /></div>
                        <h3>{problem.title}</h3>
                        <p>{problem.text}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn solution_section() -> Html {
    html! {
        <section id="process" class="solution-section">
            <div class="solution-watermark"><IconView icon={Icon::Leaf} /></div>
            <div class="solution-grid">
                <div>
                    <h2>{"Pneumatic Soil Fracturing (PSF): The Solution"}</h2>
                    <p class="lead">
                        {"We use high-pressure air injection to physically break apart deep compacted layers. This creates a network of fissures that instantly restores drainage and allows roots to dive deep."}
                    </p>
                    <ul class="psf-points">
                        { for content::PSF_POINTS.iter().map(|point| html! {
                            <li>
                                <IconView icon={Icon::CheckCircle} />
                                <span>{*point}</span>
                            </li>
                        }) }
                    </ul>
                    <blockquote class="solution-quote">
                        {"\"Proven globally, now adapted for the unique soil conditions of Sweden. TerraVent brings world-class technology to your local farm.\""}
                    </blockquote>
                </div>
                <div class="solution-photos">
                    <FallbackImage image={content::MACHINERY_IMAGE} class={classes!("offset")} />
                    <FallbackImage image={content::ANALYSIS_IMAGE} />
                </div>
            </div>
        </section>
    }
}

fn services_section() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="services-header">
                <div>
                    <h2>{"Our Core Services"}</h2>
                    <p class="lead">{"Comprehensive soil health management designed specifically for small and medium-sized farms."}</p>
                </div>
                <a href={content::BOOKING_HREF} class="text-link">
                    {"View all service details"}
                    <IconView icon={Icon::ArrowRight} />
                </a>
            </div>
            <div class="services-grid">
                { for content::SERVICES.iter().map(|service| html! {
                    <ServiceCard
                        title={service.title}
                        description={service.description}
                        icon={service.icon}
                        tag={service.tag.map(AttrValue::from)}
                    />
                }) }
            </div>
        </section>
    }
}

fn process_section() -> Html {
    html! {
        <section class="steps-section">
            <h2>{"The Five-Step Process"}</h2>
            <div class="steps-grid">
                <div class="steps-line"></div>
                { for content::PROCESS_STEPS.iter().map(|step| html! {
                    <ProcessStepCard
                        number={step.number}
                        title={step.title}
                        description={step.description}
                        icon={step.icon}
                    />
                }) }
            </div>
        </section>
    }
}

fn benefits_section() -> Html {
    html! {
        <section id="benefits" class="benefits-section">
            <div class="benefits-media">
                <FallbackImage image={content::HARVEST_IMAGE} />
            </div>
            <div>
                <h2>{"Why Thousands of Hectares Trust PSF"}</h2>
                <div class="benefit-list">
                    { for content::BENEFITS.iter().map(|benefit| html! {
                        <BenefitItem title={benefit.title} text={benefit.text} />
                    }) }
                </div>
            </div>
        </section>
    }
}

fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="section-intro">
                <h2>{"The TerraVent Difference"}</h2>
                <p class="lead">{"We aren't just a machinery service. We are your partners in soil health."}</p>
            </div>
            <div class="about-grid">
                <div class="about-card">
                    <h3><IconView icon={Icon::ShieldCheck} />{"First Mover in Sweden"}</h3>
                    <p>{"We are the first to bring professional PSF services to the Swedish market, backed by years of success with this technology in the UK and Germany."}</p>
                </div>
                <div class="about-card">
                    <h3><IconView icon={Icon::BarChart} />{"Evidence-Driven"}</h3>
                    <p>{"Our approach is scientific. We measure, treat, and monitor. You'll see the data behind every decision we make on your land."}</p>
                </div>
            </div>
            <div class="mission-card">
                <div class="mission-watermark"><IconView icon={Icon::Wind} /></div>
                <h3>{"Our Mission"}</h3>
                <p>
                    {"Based in Borås, TerraVent was founded to enhance soil quality and farm profitability throughout Southern Sweden. We believe that sustainable agriculture starts with healthy soil, and our mission is to make advanced soil restoration accessible to every farm, regardless of their capital budget."}
                </p>
                <div class="values-grid">
                    { for content::VALUES.iter().map(|value| html! {
                        <div>
                            <p class="value-label">{value.label}</p>
                            <p class="value-sub">{value.sub}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn partners_section() -> Html {
    html! {
        <section class="partners-section">
            <p class="partners-title">{"Our Technology Partners & Suppliers"}</p>
            <div class="partners-row">
                { for content::PARTNERS.iter().map(|partner| html! {
                    <span class="partner-name">{*partner}</span>
                }) }
            </div>
        </section>
    }
}

fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <IconView icon={Icon::Leaf} />
                        <span>{content::BRAND}</span>
                    </div>
                    <p>{"Sustainable soil restoration service based in Borås, Sweden. Empowering farmers with next-gen technology."}</p>
                    <div class="social-row">
                        { for (0..3).map(|_| html! { <div class="social-dot"><div></div></div> }) }
                    </div>
                </div>
                <div>
                    <h4>{"Navigation"}</h4>
                    <ul>
                        <li><a href="#services">{"Services"}</a></li>
                        <li><a href="#process">{"How it works"}</a></li>
                        <li><a href="#benefits">{"Results"}</a></li>
                        <li><a href="#about">{"About Us"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Support"}</h4>
                    <ul>
                        <li><a href="#faq">{"FAQ"}</a></li>
                        <li><a href={content::BOOKING_HREF}>{"Book Consultation"}</a></li>
                        <li><a href="#">{"Privacy Policy"}</a></li>
                        <li><a href="#">{"Terms of Service"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul class="footer-contact">
                        <li><IconView icon={Icon::MapPin} /><span>{content::ADDRESS}</span></li>
                        <li><IconView icon={Icon::Phone} /><span>{content::PHONE}</span></li>
                        <li><IconView icon={Icon::Mail} /><span>{content::INFO_EMAIL}</span></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} TerraVent AB. All rights reserved. Registered in Borås, Sweden.", year)}</p>
            </div>
        </footer>
    }
}

const STYLES: &str = r#"
* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: #f8fafc;
    color: #0f172a;
}

.landing-page { overflow-x: hidden; min-height: 100vh; }
.landing-page h2 { font-size: 2.25rem; margin: 0 0 1.5rem; }
.landing-page section { padding: 6rem 1.5rem; }
.lead { font-size: 1.2rem; color: #475569; line-height: 1.7; }

.icon { width: 24px; height: 24px; flex-shrink: 0; }

.site-header {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 1.25rem 0;
    background: transparent;
    transition: all 0.3s ease;
}

.site-header.scrolled {
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    padding: 0.75rem 0;
}

.header-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.brand { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; }
.brand-mark {
    width: 40px;
    height: 40px;
    background: #059669;
    color: white;
    border-radius: 0.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.brand-name { font-size: 1.5rem; font-weight: 700; color: #0f172a; }
.brand:hover .brand-name { color: #047857; }

.desktop-nav { display: flex; align-items: center; gap: 2rem; }
.nav-link { color: #475569; font-weight: 500; text-decoration: none; transition: color 0.2s; }
.nav-link:hover { color: #047857; }

.nav-cta, .mobile-cta, .button-primary, .submit-button {
    background: #059669;
    color: white;
    text-decoration: none;
    font-weight: 600;
    border: none;
    cursor: pointer;
    transition: all 0.2s;
}
.nav-cta { padding: 0.6rem 1.5rem; border-radius: 999px; }
.nav-cta:hover, .button-primary:hover, .submit-button:hover { background: #047857; }

.burger-menu { display: none; background: none; border: none; padding: 0.5rem; cursor: pointer; }

.mobile-menu {
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    background: white;
    border-top: 1px solid #f1f5f9;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    animation: slideDown 0.3s ease-out;
}
.mobile-cta { padding: 0.75rem; border-radius: 0.75rem; text-align: center; font-weight: 700; }

@keyframes slideDown {
    from { transform: translateY(-10px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}

.hero { position: relative; padding-top: 12rem !important; padding-bottom: 8rem !important; }
.hero-backdrop {
    position: absolute;
    top: 0;
    right: 0;
    z-index: -1;
    width: 50%;
    height: 100%;
    background: rgba(236, 253, 245, 0.5);
    border-bottom-left-radius: 200px;
}
.hero-grid, .solution-grid, .benefits-section {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: #d1fae5;
    color: #065f46;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    font-size: 0.875rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.hero-badge .icon { width: 16px; height: 16px; }
.hero h1 { font-size: 4rem; line-height: 1.1; margin: 0 0 2rem; }
.hero-accent { display: block; margin-top: 0.5rem; color: #047857; font-style: italic; }
.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
.button-primary, .button-secondary {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 0.75rem;
    font-size: 1.1rem;
    font-weight: 700;
}
.button-secondary {
    background: white;
    border: 2px solid #e2e8f0;
    color: #334155;
    text-decoration: none;
}
.hero-media { position: relative; }
.hero-photo { border-radius: 1.5rem; overflow: hidden; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
.hero-photo img { width: 100%; height: auto; display: block; object-fit: cover; }
.hero-stat {
    position: absolute;
    bottom: -1.5rem;
    left: -1.5rem;
    background: white;
    padding: 1.5rem;
    border-radius: 1rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    display: flex;
    align-items: center;
    gap: 1rem;
    max-width: 20rem;
}
.stat-icon { background: #d1fae5; color: #059669; padding: 0.75rem; border-radius: 999px; display: flex; }
.stat-title { font-weight: 700; margin: 0; }
.stat-text { font-size: 0.875rem; color: #64748b; margin: 0.25rem 0 0; }

.section-intro { max-width: 48rem; margin: 0 auto 4rem; text-align: center; }
.problem-section { background: white; }
.problem-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 3rem;
    text-align: center;
}
.problem-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto 1.5rem;
    background: #fef2f2;
    color: #dc2626;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: transform 0.2s;
}
.problem-item:hover .problem-icon { transform: scale(1.1); }
.problem-item p { color: #475569; line-height: 1.7; }

.solution-section { background: #0f172a; color: white; position: relative; overflow: hidden; }
.solution-section .lead { color: #cbd5e1; }
.solution-watermark { position: absolute; top: 0; right: 0; opacity: 0.1; pointer-events: none; }
.solution-watermark .icon { width: 24rem; height: 24rem; }
.psf-points { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1.5rem; }
.psf-points li { display: flex; gap: 1rem; align-items: flex-start; color: #e2e8f0; }
.psf-points .icon { color: #34d399; }
.solution-quote {
    margin: 3rem 0 0;
    background: rgba(6, 78, 59, 0.4);
    border: 1px solid #065f46;
    padding: 1.5rem;
    border-radius: 1rem;
    font-style: italic;
    color: #a7f3d0;
}
.solution-photos { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.solution-photos img { width: 100%; border-radius: 1rem; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3); }
.solution-photos img.offset { margin-top: 3rem; }

.services-header {
    max-width: 1200px;
    margin: 0 auto 4rem;
    display: flex;
    justify-content: space-between;
    align-items: flex-end;
    gap: 1.5rem;
}
.text-link { color: #047857; font-weight: 700; display: flex; align-items: center; gap: 0.5rem; text-decoration: none; }
.services-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}
.service-card {
    position: relative;
    background: white;
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid #f1f5f9;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.2s;
    overflow: hidden;
}
.service-card:hover { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
.service-tag {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: #d1fae5;
    color: #065f46;
    font-size: 0.75rem;
    font-weight: 700;
    padding: 0.25rem 0.5rem;
    border-radius: 999px;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}
.service-icon {
    width: 56px;
    height: 56px;
    background: #ecfdf5;
    color: #059669;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    transition: transform 0.2s;
}
.service-card:hover .service-icon { transform: scale(1.1); }
.service-card p { color: #475569; line-height: 1.7; }

.steps-section {
    background: rgba(236, 253, 245, 0.3);
    border-top: 1px solid #d1fae5;
    border-bottom: 1px solid #d1fae5;
    text-align: center;
}
.steps-grid {
    position: relative;
    max-width: 1200px;
    margin: 4rem auto 0;
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 2rem;
}
.steps-line { position: absolute; top: 32px; left: 0; width: 100%; height: 2px; background: #a7f3d0; }
.process-step { display: flex; flex-direction: column; align-items: center; padding: 1rem; }
.step-badge-wrap { position: relative; margin-bottom: 1.5rem; }
.step-icon {
    position: relative;
    z-index: 1;
    width: 64px;
    height: 64px;
    background: white;
    border: 2px solid #10b981;
    color: #059669;
    border-radius: 999px;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.step-number {
    position: absolute;
    z-index: 2;
    top: -0.5rem;
    right: -0.5rem;
    width: 32px;
    height: 32px;
    background: #059669;
    color: white;
    border-radius: 999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    font-size: 0.875rem;
}
.process-step p { color: #475569; font-size: 0.875rem; }

.benefits-section { background: white; }
.benefits-media img { width: 100%; border-radius: 1.5rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
.benefit-list { display: flex; flex-direction: column; gap: 2rem; }
.benefit-item { display: flex; gap: 1rem; }
.benefit-check { color: #10b981; margin-top: 0.25rem; }
.benefit-item h4 { margin: 0 0 0.25rem; }
.benefit-item p { margin: 0; color: #475569; }

.about-section { background: #f8fafc; }
.about-grid {
    max-width: 56rem;
    margin: 0 auto 4rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}
.about-card { background: white; padding: 2rem; border-radius: 1rem; border: 1px solid #f1f5f9; }
.about-card h3 { display: flex; align-items: center; gap: 0.75rem; font-size: 1.5rem; }
.about-card .icon { color: #059669; }
.about-card p { color: #475569; line-height: 1.7; }
.mission-card {
    position: relative;
    max-width: 56rem;
    margin: 0 auto;
    background: #064e3b;
    color: white;
    padding: 3rem;
    border-radius: 40px;
    overflow: hidden;
}
.mission-watermark { position: absolute; top: 0; right: 0; padding: 2rem; opacity: 0.2; }
.mission-watermark .icon { width: 8rem; height: 8rem; }
.mission-card h3 { font-size: 1.9rem; font-style: italic; }
.mission-card > p { font-size: 1.2rem; color: #d1fae5; line-height: 1.7; }
.values-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
    padding-top: 2rem;
    border-top: 1px solid #065f46;
}
.value-label { font-weight: 700; font-size: 1.1rem; margin: 0; }
.value-sub { color: #34d399; font-size: 0.875rem; margin: 0.25rem 0 0; }

.partners-section { background: white; border-top: 1px solid #f1f5f9; border-bottom: 1px solid #f1f5f9; }
.partners-title {
    text-align: center;
    color: #64748b;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
    margin-bottom: 3rem;
}
.partners-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    gap: 3rem 6rem;
    opacity: 0.5;
    filter: grayscale(1);
}
.partner-name { font-size: 1.5rem; font-weight: 900; color: #94a3b8; }

.booking-section { background: white; }
.booking-card {
    max-width: 72rem;
    margin: 0 auto;
    background: #0f172a;
    border-radius: 48px;
    overflow: hidden;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    display: flex;
}
.booking-info, .booking-panel { width: 50%; padding: 5rem; }
.booking-info { color: white; display: flex; flex-direction: column; justify-content: center; }
.booking-info h2 { font-size: 3rem; }
.booking-info .lead { color: #cbd5e1; }
.contact-lines { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-line { display: flex; align-items: center; gap: 1rem; }
.contact-icon {
    width: 48px;
    height: 48px;
    background: #059669;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.contact-label { font-size: 0.875rem; color: #94a3b8; margin: 0; }
.contact-value { font-size: 1.25rem; font-weight: 700; margin: 0.25rem 0 0; }
.service-area { margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #1e293b; color: #94a3b8; font-size: 0.875rem; }
.booking-panel { background: white; }

.booking-form { display: flex; flex-direction: column; gap: 1.5rem; }
.booking-form h3 { font-size: 1.5rem; margin: 0 0 0.5rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.form-field label { display: block; font-size: 0.875rem; font-weight: 700; color: #334155; margin-bottom: 0.5rem; }
.form-field input, .form-field select {
    width: 100%;
    background: #f8fafc;
    border: 1px solid #e2e8f0;
    padding: 0.75rem;
    border-radius: 0.75rem;
    font-size: 1rem;
    outline: none;
    transition: box-shadow 0.2s;
}
.form-field input:focus, .form-field select:focus { box-shadow: 0 0 0 2px #10b981; }
.submit-button {
    width: 100%;
    padding: 1rem;
    border-radius: 0.75rem;
    font-size: 1.1rem;
    font-weight: 700;
    box-shadow: 0 10px 15px rgba(16, 185, 129, 0.15);
}
.submit-button.sending { opacity: 0.7; cursor: not-allowed; }
.form-note { font-size: 0.75rem; color: #94a3b8; text-align: center; margin: 0; }

.booking-success {
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    animation: fadeIn 0.5s ease-out;
}
.success-icon {
    width: 80px;
    height: 80px;
    background: #d1fae5;
    color: #059669;
    border-radius: 999px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
}
.success-icon .icon { width: 40px; height: 40px; }
.booking-success h3 { font-size: 1.9rem; margin: 0 0 1rem; }
.booking-success p { color: #475569; margin-bottom: 2rem; }
.send-another { background: none; border: none; color: #047857; font-weight: 700; cursor: pointer; font-size: 1rem; }
.send-another:hover { text-decoration: underline; }

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

.faq-section { background: #f8fafc; }
.faq-section h2 { text-align: center; margin-bottom: 4rem; }
.faq-list { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.faq-item { background: white; border: 1px solid #e2e8f0; border-radius: 1rem; overflow: hidden; }
.faq-question {
    width: 100%;
    padding: 1.5rem 2rem;
    background: none;
    border: none;
    text-align: left;
    display: flex;
    justify-content: space-between;
    align-items: center;
    cursor: pointer;
    font: inherit;
}
.question-text { font-size: 1.1rem; font-weight: 700; color: #0f172a; transition: color 0.2s; }
.faq-question:hover .question-text { color: #047857; }
.faq-toggle { color: #94a3b8; transition: transform 0.3s; }
.faq-item.open .faq-toggle { transform: rotate(45deg); color: #059669; }
.faq-answer { padding: 0 2rem 2rem; animation: slideDown 0.3s ease-out; }
.faq-answer p { margin: 0; color: #475569; line-height: 1.7; }

.site-footer { background: #0f172a; color: #94a3b8; padding: 5rem 1.5rem; border-top: 1px solid #1e293b; }
.footer-grid {
    max-width: 1200px;
    margin: 0 auto 4rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 3rem;
}
.footer-brand { display: flex; align-items: center; gap: 0.5rem; color: white; font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
.footer-brand .icon { width: 32px; height: 32px; color: #10b981; }
.site-footer h4 { color: white; margin: 0 0 1.5rem; }
.site-footer ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; }
.site-footer a { color: inherit; text-decoration: none; transition: color 0.2s; }
.site-footer a:hover { color: #34d399; }
.footer-contact li { display: flex; gap: 0.75rem; }
.footer-contact .icon { width: 20px; height: 20px; color: #10b981; }
.social-row { display: flex; gap: 1rem; }
.social-dot {
    width: 40px;
    height: 40px;
    background: #1e293b;
    border-radius: 999px;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    transition: background 0.2s;
}
.social-dot:hover { background: #059669; }
.social-dot div { width: 20px; height: 20px; background: #475569; border-radius: 2px; }
.footer-bottom { max-width: 1200px; margin: 0 auto; padding-top: 2rem; border-top: 1px solid #1e293b; text-align: center; font-size: 0.875rem; }

.mobile-booking-cta { display: none; }

@media (min-width: 1024px) {
    .mobile-menu { display: none; }
}

@media (max-width: 1023.98px) {
    .desktop-nav { display: none; }
    .burger-menu { display: block; }
    .hero-backdrop { display: none; }
    .hero-grid, .solution-grid, .benefits-section { grid-template-columns: 1fr; }
    .services-grid { grid-template-columns: repeat(2, 1fr); }
    .booking-card { flex-direction: column; }
    .booking-info, .booking-panel { width: 100%; padding: 3rem; }
}

@media (max-width: 768px) {
    .hero h1 { font-size: 3rem; }
    .hero-stat { display: none; }
    .problem-grid, .services-grid, .steps-grid, .about-grid, .form-row, .footer-grid { grid-template-columns: 1fr; }
    .steps-line { display: none; }
    .services-header { flex-direction: column; align-items: flex-start; }
    .values-grid { grid-template-columns: repeat(2, 1fr); }
    .mobile-booking-cta {
        display: block;
        position: fixed;
        bottom: 1.5rem;
        left: 1.5rem;
        right: 1.5rem;
        z-index: 40;
    }
    .mobile-booking-cta a {
        background: #059669;
        color: white;
        width: 100%;
        padding: 1rem;
        border-radius: 0.75rem;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        text-decoration: none;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::STYLES;

    #[test]
    fn mobile_menu_hidden_on_wide_screens() {
        let wide = STYLES
            .find("@media (min-width: 1024px)")
            .expect("wide-screen media query");
        assert!(STYLES[wide..].contains(".mobile-menu { display: none; }"));
    }

    #[test]
    fn narrow_breakpoint_does_not_overlap_wide() {
        assert!(STYLES.contains("@media (max-width: 1023.98px)"));
        assert!(!STYLES.contains("@media (max-width: 1024px)"));
    }
}
