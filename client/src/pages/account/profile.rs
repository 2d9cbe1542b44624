//! The viewer's own profile: view, first-time creation, and edits, plus a
//! session details panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The row is read fresh from `/api/profile` on mount. A missing row is not
//! an error: the page offers "Build Your Profile" instead. Session details
//! (IP, location, timezone, user agent) are best-effort and fall back to
//! "Unknown" when a lookup fails.

use leptos::prelude::*;
use records::Profile;
use records::profile::{role_badge_label, role_tone};

use crate::components::ui::badge::Badge;
use crate::components::ui::button::{Button, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::ui::input::Label;
use crate::pages::account::PageHeader;
use crate::state::auth::AuthState;
use crate::state::profile::{ProfileField, ProfileMode, ProfilePageState, SessionMeta, heading};
use crate::util::format::long_date;

const ACCOUNT_STATISTICS: [(&str, &str); 3] =
    [("0", "Kids Assigned"), ("0", "Notes Created"), ("0", "Training Completed")];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(ProfilePageState::default());
    let meta = RwSignal::new(SessionMeta::default());
    #[cfg(feature = "hydrate")]
    let alive = crate::util::alive::alive_until_cleanup();

    #[cfg(feature = "hydrate")]
    {
        let profile_alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_profile().await.map_err(|e| e.message);
            if profile_alive.is_alive() {
                state.update(|s| s.loaded(result));
            }
        });
        let meta_alive = alive.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_session_meta().await;
            if meta_alive.is_alive() {
                meta.set(fetched);
            }
        });
    }

    let open_form = Callback::new(move |_: leptos::ev::MouseEvent| state.update(ProfilePageState::open_form));
    let close_form = Callback::new(move |_: leptos::ev::MouseEvent| state.update(ProfilePageState::close_form));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((draft, exists)) = state.try_update(|s| {
            s.saving = true;
            (s.draft.clone(), s.profile.is_some())
        }) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_profile(&draft, exists).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(profile) => state.update(|s| s.stored(profile)),
                    Err(e) => {
                        leptos::logging::warn!("profile save failed: {}", e.message);
                        state.update(|s| s.failed(e.message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, exists);
    };

    let email = move || auth.with(|a| a.user.as_ref().and_then(|u| u.email.clone()));
    let user_id = move || auth.with(|a| a.user.as_ref().map(|u| u.id.clone()));

    move || match state.with(ProfilePageState::mode) {
        ProfileMode::Loading => view! {
            <div class="account-page">
                <div class="skeleton skeleton--title"></div>
                <div class="two-col">
                    <div class="skeleton skeleton--panel"></div>
                    <div class="skeleton skeleton--panel"></div>
                </div>
            </div>
        }
        .into_any(),
        ProfileMode::Failed => {
            let message = state.with(|s| s.error.clone().unwrap_or_default());
            view! {
                <div class="account-page">
                    <h1 class="page-header__title">"Profile"</h1>
                    <Card>
                        <CardContent>
                            <p class="form-error">{format!("Error loading profile: {message}")}</p>
                        </CardContent>
                    </Card>
                </div>
            }
            .into_any()
        }
        ProfileMode::Missing => view! {
            <div class="account-page">
                <PageHeader title="Profile" description="Complete your profile to get started" />
                <Card>
                    <CardContent class="build-profile">
                        <div class="build-profile__icon">"👤"</div>
                        <h2 class="build-profile__title">"Build Your Profile"</h2>
                        <p class="build-profile__text">
                            "Complete your profile information to access all features and personalize your experience."
                        </p>
                        <Button on_click=open_form>"✏️ Create Profile"</Button>
                        <p class="build-profile__note">
                            "This will help us customize your experience and connect you with the right team."
                        </p>
                    </CardContent>
                </Card>
                <SessionDetails meta=meta user_id=Signal::derive(user_id) />
            </div>
        }
        .into_any(),
        mode @ (ProfileMode::Creating | ProfileMode::Editing) => {
            let (title, description) = if mode == ProfileMode::Creating {
                ("Create Profile", "Fill in your information to get started")
            } else {
                ("Edit Profile", "Update your personal information")
            };
            view! {
                <div class="account-page">
                    <PageHeader title=title description=description>
                        <Button variant=ButtonVariant::Outline on_click=close_form>"✕ Cancel"</Button>
                    </PageHeader>
                    <Card>
                        <CardHeader>
                            <CardTitle class="card__title--icon">"👤 Profile Information"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <form class="form" on:submit=on_submit>
                                <div class="form__row">
                                    {draft_input(state, ProfileField::FirstName, "first_name", "First Name", "text", "Enter your first name")}
                                    {draft_input(state, ProfileField::LastName, "last_name", "Last Name", "text", "Enter your last name")}
                                </div>
                                {draft_input(state, ProfileField::PhoneNumber, "phone_number", "Phone Number", "tel", "Enter your phone number")}
                                <div class="form__actions">
                                    <Button kind="submit" disabled=Signal::derive(move || state.with(|s| s.saving))>
                                        {move || format!("💾 {}", state.with(ProfilePageState::submit_label))}
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Outline
                                        disabled=Signal::derive(move || state.with(|s| s.saving))
                                        on_click=close_form
                                    >
                                        "Cancel"
                                    </Button>
                                </div>
                            </form>
                        </CardContent>
                    </Card>
                </div>
            }
            .into_any()
        }
        ProfileMode::Viewing => {
            let Some(profile) = state.with(|s| s.profile.clone()) else {
                return view! { <p class="muted">"Loading profile..."</p> }.into_any();
            };
            view! {
                <div class="account-page">
                    <PageHeader title="Profile" description="Manage your account information and preferences">
                        <Button variant=ButtonVariant::Outline on_click=open_form>"✏️ Edit Profile"</Button>
                    </PageHeader>
                    <div class="two-col">
                        {personal_card(&profile, email())}
                        {organization_card(&profile)}
                    </div>
                    <Card>
                        <CardHeader>
                            <CardTitle class="card__title--icon">"👥 Account Statistics"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <div class="summary-grid summary-grid--three">
                                {ACCOUNT_STATISTICS
                                    .iter()
                                    .map(|(value, label)| view! {
                                        <div class="summary-grid__cell">
                                            <div class="summary-grid__value">{*value}</div>
                                            <div class="summary-grid__label">{*label}</div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </CardContent>
                    </Card>
                </div>
            }
            .into_any()
        }
    }
}

fn draft_input(
    state: RwSignal<ProfilePageState>,
    field: ProfileField,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__field">
            <Label for_id=id>{label}</Label>
            <input
                id=id
                type=input_type
                class="input"
                placeholder=placeholder
                prop:value=move || state.with(|s| field.get(&s.draft).to_owned())
                on:input=move |ev| state.update(|s| field.set(&mut s.draft, event_target_value(&ev)))
            />
        </div>
    }
}

fn personal_card(profile: &Profile, email: Option<String>) -> impl IntoView {
    let name = heading(profile, email.as_deref());
    let phone = profile.phone_number.clone().filter(|p| !p.is_empty());
    let since = long_date(profile.created_at.as_deref());
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="card__title--icon">"👤 Personal Information"</CardTitle>
            </CardHeader>
            <CardContent class="personal">
                <div class="personal__identity">
                    <div class="personal__avatar">"👤"</div>
                    <div>
                        <h3 class="personal__name">{name}</h3>
                        <p class="muted">{email}</p>
                    </div>
                </div>
                {phone.map(|p| view! { <div class="personal__line">{format!("📞 {p}")}</div> })}
                <div class="personal__line">{format!("📅 Member since: {since}")}</div>
            </CardContent>
        </Card>
    }
}

fn organization_card(profile: &Profile) -> impl IntoView {
    let section = |title: &'static str, value: Option<String>| {
        value.filter(|v| !v.is_empty()).map(|v| view! {
            <div class="affiliation">
                <h4 class="affiliation__label">{title}</h4>
                <div class="affiliation__value">{v}</div>
            </div>
        })
    };
    let role = profile.role.clone().filter(|r| !r.is_empty()).map(|role| {
        let tone = role_tone(Some(&role)).as_str();
        view! {
            <div class="affiliation">
                <h4 class="affiliation__label">"Role"</h4>
                <div class="affiliation__value">
                    "🛡️ " <Badge tone=tone>{role_badge_label(&role)}</Badge>
                </div>
            </div>
        }
    });
    let organization = section("Organization", profile.organization.clone());
    let team = section("Team", profile.team.clone());
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="card__title--icon">"🏢 Organization & Role"</CardTitle>
            </CardHeader>
            <CardContent>
                {organization}
                {team}
                {role}
            </CardContent>
        </Card>
    }
}

#[component]
fn SessionDetails(meta: RwSignal<SessionMeta>, user_id: Signal<Option<String>>) -> impl IntoView {
    let item = move |label: &'static str, value: Signal<String>, mono: bool| {
        view! {
            <div class="session__item">
                <span class="session__label">{label}</span>
                <p class=if mono { "session__value session__value--mono" } else { "session__value" }>
                    {move || value.get()}
                </p>
            </div>
        }
    };
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="card__title--icon">"🛡️ Session Information"</CardTitle>
            </CardHeader>
            <CardContent class="session">
                <div class="session__grid">
                    {item("User ID:", Signal::derive(move || user_id.get().unwrap_or_else(|| "Loading...".to_owned())), true)}
                    {item("IP Address:", Signal::derive(move || meta.with(|m| m.ip.clone())), true)}
                    {item("Location:", Signal::derive(move || meta.with(|m| m.location.clone())), false)}
                    {item("Timezone:", Signal::derive(move || meta.with(|m| m.timezone.clone())), false)}
                </div>
                {item("User Agent:", Signal::derive(move || meta.with(|m| m.user_agent.clone())), true)}
            </CardContent>
        </Card>
    }
}
