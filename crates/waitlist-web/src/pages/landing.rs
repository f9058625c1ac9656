//! Landing Page

use leptos::prelude::*;

use crate::binding::PageCounters;
use crate::components::{Stat, WaitlistForm};

#[component]
pub fn LandingPage() -> impl IntoView {
    let members = RwSignal::new("1,234".to_string());
    let satisfaction = RwSignal::new("98%".to_string());
    let hours_saved = RwSignal::new("12,500".to_string());
    provide_context(PageCounters(vec![members, satisfaction, hours_saved]));

    view! {
        <div class="landing">
            <header class="hero">
                <h1>"Compound"</h1>
                <p class="tagline">
                    "Small habits, compounded. Be first in line when we open the doors."
                </p>
                <WaitlistForm button_label="Join Waitlist" />
            </header>

            <section class="stats">
                <Stat value=members label="Early members" />
                <Stat value=hours_saved label="Hours saved in beta" />
                <Stat value=satisfaction label="Would recommend" />
            </section>

            <section class="features">
                <div class="feature-card">
                    <h3>"Track"</h3>
                    <p>"Log the habits that matter in seconds a day."</p>
                </div>
                <div class="feature-card">
                    <h3>"Compound"</h3>
                    <p>"See how tiny daily gains add up over months."</p>
                </div>
                <div class="feature-card">
                    <h3>"Share"</h3>
                    <p>"Keep each other honest with a small circle of friends."</p>
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to start compounding?"</h2>
                <WaitlistForm button_label="Get Early Access" form_class="cta-form" />
            </section>
        </div>
    }
}
