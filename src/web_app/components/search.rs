// web_app/components/search.rs - Search input components
//
// - SearchBar: query input with submit button
// - FilterPanel: the five numeric filter fields plus clear control
// - StatsBar: aggregate counters in the page header

use leptos::prelude::*;

use crate::web_app::model::{source_label, Stats, KNOWN_SOURCES};

/// Search bar with free-text query input
///
/// Submitting the form (button or Enter in the field) applies the
/// trimmed query and fires `on_search`.
#[component]
pub fn SearchBar(
    /// Applied search query
    query: RwSignal<String>,
    /// Callback when search is triggered
    on_search: Callback<()>,
) -> impl IntoView {
    // Local state so typing does not touch the applied query
    let local_query = RwSignal::new(query.get_untracked());

    // Sync local with external when external changes (e.g. clear)
    Effect::new(move || {
        local_query.set(query.get());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        query.set(local_query.get().trim().to_string());
        on_search.run(());
    };

    view! {
        <form on:submit=on_submit class="w-full">
            <div class="flex gap-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder="Search by title, address or description..."
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-emerald-100 focus:border-emerald-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || local_query.get()
                        on:input=move |ev| local_query.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-emerald-600 text-white rounded-xl \
                           hover:bg-emerald-700 active:bg-emerald-800 transition-all \
                           font-semibold shadow-md"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}

/// One labeled numeric filter field
#[component]
fn FilterField(
    /// Field label
    label: &'static str,
    /// Placeholder text
    placeholder: &'static str,
    /// Raw input value
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 flex-1 min-w-[8rem]">
            <span class="text-xs font-semibold text-gray-500 uppercase tracking-wide">{label}</span>
            <input
                type="number"
                placeholder=placeholder
                class="px-3 py-2 border border-gray-200 rounded-lg text-sm \
                       focus:ring-2 focus:ring-emerald-100 focus:border-emerald-500 outline-none"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Filter panel with the five search filters
///
/// Fields hold raw strings; empty means unset. Values only take effect
/// on the next search.
#[component]
pub fn FilterPanel(
    /// Price bounds in rubles per month
    min_price: RwSignal<String>,
    max_price: RwSignal<String>,
    /// Area bounds in square meters
    min_area: RwSignal<String>,
    max_area: RwSignal<String>,
    /// Exact room count
    rooms: RwSignal<String>,
    /// Clear filters callback
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-end gap-4 mt-4 pt-4 border-t border-gray-100">
            <FilterField label="Min price" placeholder="from ₽" value=min_price />
            <FilterField label="Max price" placeholder="to ₽" value=max_price />
            <FilterField label="Min area" placeholder="from m²" value=min_area />
            <FilterField label="Max area" placeholder="to m²" value=max_area />
            <FilterField label="Rooms" placeholder="exactly" value=rooms />
            <button
                type="button"
                class="px-4 py-2 text-sm font-semibold text-emerald-600 \
                       hover:text-emerald-800 hover:underline uppercase tracking-wide"
                on:click=move |_| on_clear.run(())
            >
                "Clear Filters"
            </button>
        </div>
    }
}

/// One counter cell in the stats bar
#[component]
fn StatCell(
    /// Counter label
    label: String,
    /// Rendered counter value
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center px-4">
            <span class="text-lg font-bold text-gray-900">{move || value.get()}</span>
            <span class="text-xs text-gray-500 uppercase tracking-wide">{label}</span>
        </div>
    }
}

/// Aggregate counters: listings, offers, and per-source offer counts
///
/// Until stats arrive (or when the fetch failed) every cell shows a
/// placeholder dash.
#[component]
pub fn StatsBar(
    /// Stats when loaded, None otherwise
    stats: Signal<Option<Stats>>,
) -> impl IntoView {
    let total_products = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.total_products.to_string())
            .unwrap_or_else(|| "–".to_string())
    });
    let total_offers = Signal::derive(move || {
        stats
            .get()
            .map(|s| s.total_offers.to_string())
            .unwrap_or_else(|| "–".to_string())
    });

    view! {
        <div class="flex items-center divide-x divide-gray-200">
            <StatCell label="Listings".to_string() value=total_products />
            <StatCell label="Offers".to_string() value=total_offers />
            {KNOWN_SOURCES
                .into_iter()
                .map(|source| {
                    let value = Signal::derive(move || {
                        stats
                            .get()
                            .map(|s| {
                                s.offers_by_source
                                    .get(source)
                                    .copied()
                                    .unwrap_or(0)
                                    .to_string()
                            })
                            .unwrap_or_else(|| "–".to_string())
                    });
                    view! {
                        <StatCell label=source_label(source).to_string() value=value />
                    }
                })
                .collect_view()}
        </div>
    }
}
