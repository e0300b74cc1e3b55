use leptos::prelude::*;

/// Tab strip for switching between panels by index
#[component]
pub fn Tabs(
    /// Labels, one per tab
    labels: Vec<&'static str>,
    /// Currently active tab index
    active: RwSignal<usize>,
    /// Prefix for the ids linking tabs to their panels
    id_prefix: &'static str,
    /// Additional CSS classes for the container
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("tabs-list {class}") role="tablist">
            {labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    let is_active = move || active.get() == index;
                    view! {
                        <button
                            type="button"
                            class="tab-item"
                            class:tab-active=is_active
                            role="tab"
                            id=format!("{id_prefix}-tab-{index}")
                            aria-selected=move || is_active().to_string()
                            aria-controls=format!("{id_prefix}-panel-{index}")
                            on:click=move |_| active.set(index)
                        >
                            <span class="tab-label">{label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Tab panel content component
#[component]
pub fn TabPanel(
    /// Index of the tab this panel belongs to
    index: usize,
    active: RwSignal<usize>,
    id_prefix: &'static str,
    children: Children,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let is_active = move || active.get() == index;

    view! {
        <div
            class=format!("tab-panel {class}")
            role="tabpanel"
            id=format!("{id_prefix}-panel-{index}")
            aria-labelledby=format!("{id_prefix}-tab-{index}")
            style:display=move || if is_active() { "block" } else { "none" }
            aria-hidden=move || (!is_active()).to_string()
        >
            {children()}
        </div>
    }
}
