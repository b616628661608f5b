use log::warn;
use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::icons::{Icon, IconKind};
use crate::components::ui::{Button, ButtonVariant, Checkbox};
use crate::config;
use crate::counter::CounterConfig;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="brand">
                <Icon kind={IconKind::Logo} />
                <span class="brand-name">{config::BRAND_NAME}</span>
            </div>
            <Button variant={ButtonVariant::Outline} class="header-login">
                {"Log In"}
            </Button>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="hero-copy">
            <h1 class="hero-title">
                {"Save Money."}
                <br />
                {"Make Money."}
            </h1>
            <p class="hero-lead">{"Members like you have already cashed out:"}</p>
            <AnimatedCounter config={CounterConfig::default()} />
            <p class="hero-caption">{"in cash back from using Swagbucks"}</p>
        </div>
    }
}

#[function_component(SignupCard)]
pub fn signup_card() -> Html {
    html! {
        <div class="signup-card">
            <h2>{"Join for free!"}</h2>

            <div class="terms-row">
                <Checkbox id="terms" class="terms-checkbox" />
                <label for="terms" class="terms-label">
                    {"I agree to the "}
                    <a href="#">{"Terms of Use"}</a>
                    {" and to receive marketing email messages from Swagbucks, and I accept the "}
                    <a href="#">{"Privacy Policy"}</a>
                    {"."}
                </label>
            </div>

            <Button variant={ButtonVariant::Outline} class="signup-button signup-google">
                <Icon kind={IconKind::Google} />
                {"Continue with Google"}
            </Button>

            <Button variant={ButtonVariant::Default} class="signup-button signup-apple">
                <Icon kind={IconKind::Apple} />
                {"Continue with Apple"}
            </Button>

            <div class="or-divider">
                <span>{"OR"}</span>
            </div>

            <Button variant={ButtonVariant::Outline} class="signup-button signup-email">
                <Icon kind={IconKind::Mail} />
                {"Continue with Email"}
            </Button>

            <p class="login-hint">
                {"Already have an account? "}
                <a href="#">{"Log In"}</a>
            </p>
        </div>
    }
}

#[function_component(WaveDivider)]
pub fn wave_divider() -> Html {
    html! {
        <div class="wave-divider">
            <svg viewBox="0 0 1200 120" preserveAspectRatio="none">
                <path d="M0,50 Q300,0 600,50 T1200,50 L1200,120 L0,120 Z" fill="white"></path>
            </svg>
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="how-it-works">
            <div class="how-it-works-inner">
                <h2>{"How it Works"}</h2>
                <p>
                    {"After signing up, tell us about yourself to get personalized offers. \
                      Redeem gift cards to your favorite retailers like Amazon and Walmart \
                      or get cash back from PayPal."}
                </p>
                <div class="section-rule"></div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            match web_sys::window() {
                Some(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
                None => warn!("No window available, skipping scroll reset"),
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Header />

            <section class="hero">
                <div class="hero-glow">
                    <div class="glow glow-blue"></div>
                    <div class="glow glow-teal"></div>
                </div>

                <div class="hero-content">
                    <Hero />
                    <div class="signup-column">
                        <SignupCard />
                    </div>
                </div>

                <WaveDivider />
            </section>

            <HowItWorks />

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .site-header {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .logo-tile {
                    width: 2rem;
                    height: 2rem;
                    background: #ffffff;
                    border-radius: 0.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .logo-mark {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #0f766e;
                }

                .brand-name {
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 1.125rem;
                }

                .ui-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.6rem 1rem;
                    border-radius: 0.375rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .ui-button--default {
                    background: #111827;
                    color: #ffffff;
                    border: 1px solid #111827;
                }

                .ui-button--default:hover {
                    background: #1f2937;
                }

                .ui-button--outline {
                    background: #ffffff;
                    color: #111827;
                    border: 1px solid #d1d5db;
                }

                .ui-button--outline:hover {
                    background: #f9fafb;
                }

                .header-login.ui-button--outline {
                    background: transparent;
                    color: #ffffff;
                    border-color: #ffffff;
                }

                .header-login.ui-button--outline:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                    background: linear-gradient(to bottom right, #115e59, #0f766e, #1e3a8a);
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }

                .glow {
                    position: absolute;
                    width: 18rem;
                    height: 18rem;
                    border-radius: 50%;
                    mix-blend-mode: multiply;
                    filter: blur(64px);
                }

                .glow-blue {
                    top: 5rem;
                    left: 2.5rem;
                    background: #60a5fa;
                }

                .glow-teal {
                    bottom: 5rem;
                    right: 2.5rem;
                    background: #2dd4bf;
                }

                .hero-content {
                    position: relative;
                    height: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .hero-copy {
                    flex: 1;
                    max-width: 28rem;
                    color: #ffffff;
                    z-index: 10;
                }

                .hero-title {
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 2rem;
                }

                .hero-lead {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 1.5rem;
                }

                .counter-card {
                    background: linear-gradient(to right, #2563eb, #1d4ed8);
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .counter-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    letter-spacing: 0.05em;
                    font-variant-numeric: tabular-nums;
                }

                .hero-caption {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .signup-column {
                    flex: 1;
                    max-width: 28rem;
                    display: flex;
                    justify-content: flex-end;
                    z-index: 10;
                }

                .signup-card {
                    width: 100%;
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .signup-card h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .terms-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .ui-checkbox {
                    position: relative;
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    margin-top: 0.25rem;
                    flex-shrink: 0;
                }

                .ui-checkbox input {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    cursor: pointer;
                    margin: 0;
                }

                .ui-checkbox .checkmark {
                    display: block;
                    width: 100%;
                    height: 100%;
                    border: 1px solid #111827;
                    border-radius: 0.2rem;
                    pointer-events: none;
                }

                .ui-checkbox.checked .checkmark {
                    background: #111827;
                }

                .terms-label {
                    font-size: 0.75rem;
                    color: #4b5563;
                }

                .signup-card a {
                    color: #2563eb;
                    text-decoration: none;
                }

                .signup-card a:hover {
                    text-decoration: underline;
                }

                .signup-button {
                    width: 100%;
                }

                .signup-google {
                    margin-bottom: 0.75rem;
                }

                .signup-apple {
                    margin-bottom: 1rem;
                }

                .or-divider {
                    position: relative;
                    text-align: center;
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .or-divider::before {
                    content: '';
                    position: absolute;
                    top: 50%;
                    left: 0;
                    right: 0;
                    border-top: 1px solid #d1d5db;
                }

                .or-divider span {
                    position: relative;
                    padding: 0 0.5rem;
                    background: #ffffff;
                }

                .login-hint {
                    text-align: center;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-top: 1.5rem;
                }

                .login-hint a {
                    font-weight: 500;
                }

                .wave-divider {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 6rem;
                }

                .wave-divider svg {
                    width: 100%;
                    height: 100%;
                }

                .how-it-works {
                    padding: 5rem 1.5rem;
                    background: #ffffff;
                }

                .how-it-works-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .how-it-works h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    color: #111827;
                    margin-bottom: 3rem;
                }

                .how-it-works p {
                    text-align: center;
                    color: #4b5563;
                    font-size: 1.125rem;
                    line-height: 1.75;
                }

                .section-rule {
                    margin-top: 3rem;
                    border-top: 1px solid #e5e7eb;
                }

                @media (min-width: 768px) {
                    .hero-content {
                        padding: 0 3rem;
                    }

                    .hero-title {
                        font-size: 3.75rem;
                    }

                    .counter-value {
                        font-size: 3rem;
                    }

                    .how-it-works {
                        padding: 5rem 3rem;
                    }

                    .how-it-works h2 {
                        font-size: 3rem;
                    }
                }

                @media (max-width: 767px) {
                    .hero {
                        height: auto;
                        min-height: 100vh;
                        padding: 6rem 0 8rem;
                    }

                    .hero-content {
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .signup-column {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
