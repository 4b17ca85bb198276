// web_app/components/listing.rs - Listing display components
//
// - ListingCard: grid card for search results
// - ListingDetailView: full detail with cross-site offers, shown in the modal
// - ResultsGrid: result list with count caption and empty state

use leptos::prelude::*;

use super::common::{Badge, PriceTag};
use crate::web_app::model::{source_label, ListingDetail, ListingSummary};

/// Image area of a card: the listing photo, or a placeholder glyph when
/// there is no URL or the image fails to load
#[component]
fn ListingImage(
    /// Optional image URL
    image_url: Option<String>,
) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <div class="h-48 bg-gray-100 flex items-center justify-center text-gray-300 overflow-hidden">
            {move || match image_url.clone() {
                Some(url) if !failed.get() => view! {
                    <img
                        src=url
                        alt=""
                        class="w-full h-full object-cover"
                        on:error=move |_| failed.set(true)
                    />
                }.into_any(),
                _ => view! { <span class="text-4xl">"🏠"</span> }.into_any(),
            }}
        </div>
    }
}

/// Listing card for the results grid
#[component]
pub fn ListingCard(
    /// The listing to display
    listing: ListingSummary,
    /// Click handler for opening the detail modal
    on_click: Callback<i32>,
) -> impl IntoView {
    let listing_id = listing.id;

    let offers_badge = if listing.offers_count == 1 {
        "1 offer".to_string()
    } else {
        format!("{} offers", listing.offers_count)
    };

    view! {
        <div
            class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                   transition-all duration-300 cursor-pointer border border-gray-100 \
                   flex flex-col h-full overflow-hidden"
            on:click=move |_| on_click.run(listing_id)
        >
            <ListingImage image_url=listing.image_url.clone() />

            <div class="p-5 flex flex-col flex-1">
                <h3 class="font-bold text-gray-900 mb-2 line-clamp-2 text-lg group-hover:text-emerald-600 transition-colors">
                    {listing.canonical_title.clone()}
                </h3>

                <p class="text-gray-600 text-sm mb-3">
                    "📍 " {listing.canonical_address.clone()}
                </p>

                <div class="flex gap-4 text-sm text-gray-600 mb-3">
                    <span>"🛏 " {listing.rooms} " rooms"</span>
                    <span>"📐 " {listing.area} " m²"</span>
                </div>

                <div class="mt-auto flex justify-between items-center pt-3 border-t border-gray-100">
                    <PriceTag price=listing.min_price suffix="/mo" highlight=true />
                    <Badge variant="green">{offers_badge}</Badge>
                </div>
            </div>
        </div>
    }
}

/// Full listing detail, shown inside the modal
#[component]
pub fn ListingDetailView(
    /// The listing to display
    detail: ListingDetail,
) -> impl IntoView {
    let offers_heading = format!("Cross-site offers ({})", detail.offers.len());

    view! {
        <div class="space-y-6">
            // Header
            <div>
                <h2 class="text-2xl font-bold text-gray-900 leading-tight mb-1">
                    {detail.canonical_title.clone()}
                </h2>
                <p class="text-gray-600">"📍 " {detail.canonical_address.clone()}</p>
            </div>

            // Labeled facts
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 bg-gray-50 rounded-xl p-4 border border-gray-100 text-sm">
                <div>
                    <span class="text-gray-500 block text-xs uppercase">"Rooms"</span>
                    <span class="font-medium text-gray-900">{detail.rooms}</span>
                </div>
                <div>
                    <span class="text-gray-500 block text-xs uppercase">"Area"</span>
                    <span class="font-medium text-gray-900">{detail.area} " m²"</span>
                </div>
                <div>
                    <span class="text-gray-500 block text-xs uppercase">"Type"</span>
                    <span class="font-medium text-gray-900">{detail.property_type.clone()}</span>
                </div>
                <div>
                    <span class="text-gray-500 block text-xs uppercase">"Min price"</span>
                    <PriceTag price=detail.min_price />
                </div>
            </div>

            // Optional description
            {detail.description.clone().map(|text| view! {
                <div>
                    <h3 class="text-lg font-bold text-gray-900 mb-2">"Description"</h3>
                    <p class="text-gray-600 leading-relaxed">{text}</p>
                </div>
            })}

            // Optional attributes
            {
                let attributes = detail.attributes.clone();
                (!attributes.is_empty()).then(|| view! {
                    <div class="bg-gray-50 rounded-xl p-4 border border-gray-100">
                        <h3 class="text-lg font-bold text-gray-900 mb-3">"Details"</h3>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-3 text-sm">
                            {attributes.into_iter().map(|attr| view! {
                                <div class="flex justify-between border-b border-gray-200 pb-2 last:border-0">
                                    <span class="text-gray-500">{attr.attribute_name}</span>
                                    <span class="font-medium text-gray-900">{attr.attribute_value}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                })
            }

            // All offers across source sites
            <div>
                <h3 class="text-lg font-bold text-gray-900 mb-3">{offers_heading}</h3>
                <div class="space-y-3">
                    {detail.offers.into_iter().map(|offer| view! {
                        <div class="flex flex-col gap-1 bg-white rounded-xl border border-gray-200 p-4">
                            <div class="flex justify-between items-center">
                                <Badge variant="blue">{source_label(&offer.website_name).to_string()}</Badge>
                                <PriceTag price=offer.price suffix="/mo" highlight=true />
                            </div>
                            <p class="text-gray-700">{offer.title.clone()}</p>
                            <a
                                href=offer.url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm font-semibold text-emerald-600 hover:text-emerald-800 hover:underline w-fit"
                            >
                                "Open listing →"
                            </a>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Results grid with count caption and empty state
#[component]
pub fn ResultsGrid(
    /// Listings to display
    results: Signal<Vec<ListingSummary>>,
    /// Total number of matches for the caption
    total: Signal<i64>,
    /// Click handler for opening a listing's detail
    on_listing_click: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            // Count caption; empty when there is nothing to count
            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let total = total.get();
                        if results.get().is_empty() {
                            String::new()
                        } else {
                            format!("Found: {}", total)
                        }
                    }}
                </span>
            </div>

            <Show
                when=move || !results.get().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"🏠"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"No listings found"</h3>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "Nothing matched your search. Try different terms or relax the filters."
                        </p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || results.get()
                        key=|listing| listing.id
                        children=move |listing| {
                            view! {
                                <ListingCard
                                    listing=listing
                                    on_click=on_listing_click
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::web_app::model::{ListingDetail, ListingSummary, Offer};

    fn sample_listing() -> ListingSummary {
        ListingSummary {
            id: 7,
            canonical_title: "2-room apartment, Svetlanskaya 15".to_string(),
            canonical_address: "Vladivostok, Svetlanskaya 15".to_string(),
            district: Some("Frunzensky".to_string()),
            rooms: 2,
            area: 54.0,
            property_type: "apartment".to_string(),
            min_price: 45000,
            image_url: None,
            offers_count: 3,
        }
    }

    fn sample_detail(offers: Vec<Offer>) -> ListingDetail {
        ListingDetail {
            id: 7,
            canonical_title: "2-room apartment".to_string(),
            canonical_address: "Svetlanskaya 15".to_string(),
            district: None,
            description: None,
            rooms: 2,
            area: 54.0,
            property_type: "apartment".to_string(),
            min_price: 45000,
            image_url: None,
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            offers,
            attributes: vec![],
        }
    }

    fn offer(id: i32, source: &str, price: i64) -> Offer {
        Offer {
            id,
            website_name: source.to_string(),
            title: format!("offer {}", id),
            price,
            url: format!("https://example.com/{}", id),
            date_parsed: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn test_offers_badge_singular_plural() {
        let mut listing = sample_listing();
        listing.offers_count = 1;
        let badge = if listing.offers_count == 1 {
            "1 offer".to_string()
        } else {
            format!("{} offers", listing.offers_count)
        };
        assert_eq!(badge, "1 offer");

        listing.offers_count = 3;
        let badge = if listing.offers_count == 1 {
            "1 offer".to_string()
        } else {
            format!("{} offers", listing.offers_count)
        };
        assert_eq!(badge, "3 offers");
    }

    #[test]
    fn test_placeholder_when_image_missing() {
        let listing = sample_listing();
        // No URL -> placeholder branch; an onerror event flips to the
        // same branch at runtime
        let failed = false;
        let shows_image = listing.image_url.is_some() && !failed;
        assert!(!shows_image);
    }

    #[test]
    fn test_offers_heading_matches_count() {
        let detail = sample_detail(vec![
            offer(1, "avito", 45000),
            offer(2, "farpost", 46000),
            offer(3, "zillow", 47000),
        ]);
        let heading = format!("Cross-site offers ({})", detail.offers.len());
        assert_eq!(heading, "Cross-site offers (3)");
    }

    #[test]
    fn test_caption_text() {
        let total = 12i64;
        let empty = false;
        let caption = if empty {
            String::new()
        } else {
            format!("Found: {}", total)
        };
        assert_eq!(caption, "Found: 12");

        let caption = if true { String::new() } else { format!("Found: {}", 0) };
        assert_eq!(caption, "");
    }
}
