// web_app/pages/search.rs - Search page component
//
// Owns all view state: the applied query/filter snapshot, the stats and
// listing resources, and the detail modal selection.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{get_listing, get_stats, search_listings};

/// Main search page component
///
/// Orchestrates the aggregator frontend:
/// - Stats counters in the header
/// - Search bar and filter panel
/// - Results grid
/// - Listing detail modal
#[component]
pub fn SearchPage() -> impl IntoView {
    // Applied search query (set on submit, not while typing)
    let query = RwSignal::new(String::new());

    // Raw filter field state
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let min_area = RwSignal::new(String::new());
    let max_area = RwSignal::new(String::new());
    let rooms = RwSignal::new(String::new());

    let filter_inputs = Signal::derive(move || FilterInputs {
        min_price: min_price.get(),
        max_price: max_price.get(),
        min_area: min_area.get(),
        max_area: max_area.get(),
        rooms: rooms.get(),
    });

    // Snapshot of the last-applied search; typing into the filter fields
    // does not refetch until the next submit
    let applied = RwSignal::new((String::new(), SearchFilters::default()));
    let search_trigger = RwSignal::new(0_u32);

    // Header counters, fetched once at load; a failure leaves the
    // placeholder cells in place
    let stats = Resource::new(
        || (),
        |_| async move {
            match get_stats().await {
                Ok(stats) => Some(stats),
                Err(e) => {
                    tracing::error!("stats fetch failed: {}", e);
                    None
                }
            }
        },
    );
    let stats_view = Signal::derive(move || stats.get().flatten());

    // Listing search; the initial run is the unfiltered default request.
    // Keying on the snapshot + trigger means a newer search replaces any
    // still-running one, so stale responses never render.
    let listings = Resource::new(
        move || (applied.get(), search_trigger.get()),
        move |((query, filters), _)| async move { search_listings(query, filters).await },
    );

    // Derived signals for results data; a failed fetch renders exactly
    // like an empty result set
    let results = Signal::derive(move || {
        listings
            .get()
            .and_then(|r: Result<SearchResponse, ServerFnError>| r.ok())
            .map(|r| r.results)
            .unwrap_or_default()
    });

    let total = Signal::derive(move || {
        listings
            .get()
            .and_then(|r| r.ok())
            .map(|r| r.total)
            .unwrap_or(0)
    });

    let on_search = Callback::new(move |()| {
        applied.set((query.get(), filter_inputs.get_untracked().to_filters()));
        search_trigger.update(|t| *t += 1);
    });

    let on_clear_filters = Callback::new(move |()| {
        query.set(String::new());
        min_price.set(String::new());
        max_price.set(String::new());
        min_area.set(String::new());
        max_area.set(String::new());
        rooms.set(String::new());
        applied.set((String::new(), SearchFilters::default()));
        search_trigger.update(|t| *t += 1);
    });

    // Listing detail modal state
    let selected_id = RwSignal::new(None::<i32>);
    let on_listing_click = Callback::new(move |id: i32| {
        selected_id.set(Some(id));
    });
    let on_close_modal = Callback::new(move |()| {
        selected_id.set(None);
    });

    let detail = Resource::new(
        move || selected_id.get(),
        move |id| async move {
            match id {
                Some(id) => Some(get_listing(id).await),
                None => None,
            }
        },
    );

    // A failed detail fetch raises a blocking alert and leaves the modal
    // closed; runs client-side only
    Effect::new(move || {
        if let Some(Some(Err(e))) = detail.get() {
            tracing::error!("detail fetch failed: {}", e);
            if let Some(window) = leptos::web_sys::window() {
                let _ = window.alert_with_message("Failed to load listing details");
            }
            selected_id.set(None);
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex flex-wrap items-center justify-between gap-4">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🏠"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-emerald-600 to-teal-600">
                            "Rent Radar"
                        </h1>
                    </div>
                    <StatsBar stats=stats_view />
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Search bar and filters
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <SearchBar query=query on_search=on_search />
                    <FilterPanel
                        min_price=min_price
                        max_price=max_price
                        min_area=min_area
                        max_area=max_area
                        rooms=rooms
                        on_clear=on_clear_filters
                    />
                </section>

                // Results; while a search is in flight only the loading
                // indicator is visible
                <Suspense fallback=move || view! {
                    <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                        <Loading message="Searching listings..." />
                    </div>
                }>
                    {move || {
                        listings.get().map(|response| {
                            if let Err(e) = &response {
                                tracing::error!("listings fetch failed: {}", e);
                            }
                            view! {
                                <ResultsGrid
                                    results=results
                                    total=total
                                    on_listing_click=on_listing_click
                                />
                            }
                        })
                    }}
                </Suspense>
            </main>

            // Listing detail modal; only one can be open, and a newer
            // selection replaces its content
            {move || {
                detail
                    .get()
                    .flatten()
                    .and_then(|result| result.ok())
                    .map(|listing| view! {
                        <ModalWrapper title="Listing Details" on_close=on_close_modal>
                            <ListingDetailView detail=listing />
                        </ModalWrapper>
                    })
            }}
        </div>
    }
}
