use leptos::prelude::*;

use crate::content::stats::Stat;

/// Two-by-two grid of headline numbers.
#[component]
pub fn StatGrid(stats: &'static [Stat], #[prop(optional)] class: &'static str) -> impl IntoView {
    let class_name = if class.is_empty() { "stat-grid".to_owned() } else { format!("stat-grid {class}") };
    view! {
        <div class=class_name>
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat">
                            <div class=format!("stat__value {}", stat.accent.text_class())>{stat.value}</div>
                            <div class="stat__label">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
