//! Static profile-side cards: member info, music provider, and featured coach.

use leptos::prelude::*;

#[component]
pub fn UserInfoCard() -> impl IntoView {
    view! {
        <div class="user-info-card__avatar">
            <i class="fas fa-user"></i>
        </div>
        <div class="user-info-card__details">
            <h3>"Alex Morgan"</h3>
            <p>"Athlete · Member since 2023"</p>
        </div>
        <div class="user-info-card__stats">
            <Stat label="Workouts" value="128"/>
            <Stat label="Streak" value="12 days"/>
            <Stat label="Goals" value="4/5"/>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat__value">{value}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}

#[component]
pub fn MusicProviderCard() -> impl IntoView {
    view! {
        <h3 class="card-title">"Workout Music"</h3>
        <div class="music-provider__row">
            <i class="fab fa-spotify"></i>
            <div>
                <span class="music-provider__name">"Spotify"</span>
                <span class="music-provider__status">"Connected"</span>
            </div>
        </div>
    }
}

#[component]
pub fn FitnessStarCard() -> impl IntoView {
    view! {
        <h3 class="card-title">"Fitness Star of the Week"</h3>
        <div class="fitness-star__row">
            <i class="fas fa-star"></i>
            <div>
                <span class="fitness-star__name">"Jordan Lee"</span>
                <span class="fitness-star__note">"Completed 6 sessions and a new deadlift PR"</span>
            </div>
        </div>
    }
}
