//! Email + password sign-in.

use leptos::prelude::*;

use crate::components::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::ui::input::{Input, Label};
use crate::state::auth::AuthState;

/// Where a successful sign-in lands.
pub const AFTER_LOGIN_PATH: &str = "/account/dashboard";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let alive = crate::util::alive::alive_until_cleanup();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Enter your email and password.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&email_value, &password_value).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(user) => {
                        auth.set(AuthState::loaded(Some(user)));
                        navigate(AFTER_LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, password_value);
        }
    };

    view! {
        <div class="login-page">
            <Card class="login-card">
                <CardHeader>
                    <a href="/" class="login-card__logo">
                        <img src="/envesti-logo.svg" alt="Envesti Solutions" />
                    </a>
                    <CardTitle>"Sign In"</CardTitle>
                    <CardDescription>"Enter your email below to access your account"</CardDescription>
                </CardHeader>
                <CardContent>
                    <form class="login-form" on:submit=on_submit>
                        <div class="form-field">
                            <Label for_id="email">"Email"</Label>
                            <Input value=email id="email" input_type="email" placeholder="you@example.com" required=true />
                        </div>
                        <div class="form-field">
                            <Label for_id="password">"Password"</Label>
                            <Input value=password id="password" input_type="password" required=true />
                        </div>
                        {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                        <Button
                            kind="submit"
                            variant=ButtonVariant::GradientHorizontal
                            size=ButtonSize::Lg
                            class="login-form__submit"
                            disabled=Signal::derive(move || busy.get())
                        >
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </Button>
                    </form>
                </CardContent>
            </Card>
        </div>
    }
}
