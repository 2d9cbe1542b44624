//! KPI tile for the account pages.

use leptos::prelude::*;

use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    /// Delta shown before the description, e.g. "+3".
    pub change: Option<&'static str>,
    pub description: &'static str,
}

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <Card class="stat">
            <CardHeader class="stat__header">
                <CardTitle class="stat__title">{stat.title}</CardTitle>
                <span class="stat__icon">{stat.icon}</span>
            </CardHeader>
            <CardContent>
                <div class="stat__value">{stat.value}</div>
                <p class="stat__description">
                    {stat.change.map(|c| view! { <span class="stat__change">{c}</span> " " })}
                    {stat.description}
                </p>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn StatGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
        </div>
    }
}
