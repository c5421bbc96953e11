use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardItem,
    CardList, CardTitle, Checkbox, Input,
};
use crate::config::EnvConfig;
use crate::itinerary::{HIGHLIGHTS, TIMELINE, TRAINS, TRIP_TAGLINE, TRIP_TITLE};
use crate::models::{ChecklistItem, LinkEntry, Page};
use crate::state::AppContext;
use crate::util::is_activation_key;
use crate::viewer::TicketViewer;
use icons::X;
use leptos::prelude::*;

#[component]
fn NavItem(page: Page) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;

    move || {
        let active = app_state.current_page() == page;
        let variant = if active {
            ButtonVariant::NavActive
        } else {
            ButtonVariant::Nav
        };

        view! {
            <Button
                variant=variant
                size=ButtonSize::Nav
                on:click=move |_| app_state.navigate(page)
            >
                {page.label()}
            </Button>
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let config = expect_context::<EnvConfig>();
    let menu_open = move || app_state.menu.get().is_open();

    let nav_items = || {
        Page::ALL
            .into_iter()
            .map(|page| view! { <NavItem page=page /> })
            .collect_view()
    };

    view! {
        <nav class="bg-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4 md:px-8">
                <div class="flex justify-between items-center py-6">
                    <h1 class="text-3xl font-extrabold text-blue-700 tracking-tight">
                        {config.site_title}
                    </h1>

                    <div class="hidden md:flex space-x-6">{nav_items()}</div>

                    <div class="md:hidden">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            attr:aria-label="Toggle navigation"
                            on:click=move |_| app_state.toggle_menu()
                        >
                            <Show when=menu_open fallback=|| view! { <span class="text-xl">"☰"</span> }>
                                <X />
                            </Show>
                        </Button>
                    </div>
                </div>

                <Show when=menu_open fallback=|| ().into_view()>
                    <div class="md:hidden bg-white shadow-md rounded-lg mt-2 mb-4 flex flex-col">
                        {nav_items()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="text-center mb-8">
            <h2 class="text-4xl font-extrabold text-blue-800 mb-4">{TRIP_TITLE}</h2>
            <p class="text-xl text-blue-600 max-w-2xl mx-auto">{TRIP_TAGLINE}</p>
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            <Card class="transform hover:scale-105 transition-transform">
                <CardHeader>
                    <CardTitle>"Trip Highlights"</CardTitle>
                </CardHeader>
                <CardContent>
                    <CardList class="space-y-1">
                        {HIGHLIGHTS
                            .into_iter()
                            .map(|highlight| {
                                view! {
                                    <CardItem>
                                        <span class="mr-2 text-blue-500">"✦"</span>
                                        {highlight}
                                    </CardItem>
                                }
                            })
                            .collect_view()}
                    </CardList>
                </CardContent>
            </Card>

            <Card class="transform hover:scale-105 transition-transform">
                <CardHeader>
                    <CardTitle>"Journey Timeline"</CardTitle>
                </CardHeader>
                <CardContent class="space-y-2">
                    {TIMELINE
                        .into_iter()
                        .map(|fact| {
                            view! {
                                <p>
                                    <strong>{format!("{}:", fact.label)}</strong>
                                    " "
                                    {fact.value}
                                </p>
                            }
                        })
                        .collect_view()}
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn TicketLinks() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let links = app_state.links;

    let on_upload = Callback::new(move |_: ()| app_state.upload_link());

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Ticket Links"</CardTitle>
            </CardHeader>
            <CardContent>
                <div class="flex mb-4">
                    <Input
                        id="ticket-link"
                        placeholder="Paste ticket folder link"
                        class="rounded-l-lg"
                        bind_value=app_state.link_input
                        on_enter=on_upload
                    />
                    <Button class="rounded-none rounded-r-lg" on:click=move |_| on_upload.run(())>
                        "Upload"
                    </Button>
                </div>

                <Show when=move || !links.with(|r| r.is_empty()) fallback=|| ().into_view()>
                    <h4 class="font-semibold mb-2 text-blue-700">"Uploaded Links"</h4>
                    <CardList>
                        {move || {
                            (0..links.with(|r| r.len()))
                                .map(|index| view! { <LinkRow index=index /> })
                                .collect_view()
                        }}
                    </CardList>
                </Show>
            </CardContent>
        </Card>
    }
}

#[component]
fn LinkRow(index: usize) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let links = app_state.links;
    let selected = move || links.with(|r| r.is_selected(index));
    let text = move || {
        links.with(|r| {
            r.entries()
                .get(index)
                .map(|e| e.text.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <li class=move || {
            if selected() {
                "flex items-center justify-between p-2 rounded bg-blue-100 ring-2 ring-blue-300"
            } else {
                "flex items-center justify-between p-2 rounded bg-blue-50 hover:bg-blue-100"
            }
        }>
            <Button
                variant=ButtonVariant::Link
                size=ButtonSize::Inline
                class="truncate flex-grow"
                attr:title=text
                on:click=move |_| app_state.select_link(index)
            >
                {LinkEntry::display_label(index)}
            </Button>
            <Button
                variant=ButtonVariant::Destructive
                size=ButtonSize::Icon
                class="ml-4"
                attr:aria-label=format!("Delete {}", LinkEntry::display_label(index))
                on:click=move |_| app_state.remove_link(index)
            >
                <X />
            </Button>
        </li>
    }
}

#[component]
pub fn PlanningPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let selected_link = Signal::derive(move || app_state.selected_link());

    view! {
        <div class="text-center mb-8">
            <h2 class="text-4xl font-extrabold text-blue-800">"Trip Planning"</h2>
            <p class="text-xl text-blue-600">"Manage your journey details"</p>
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            <Card>
                <CardHeader>
                    <CardTitle>"Train Details"</CardTitle>
                </CardHeader>
                <CardContent class="space-y-4">
                    {TRAINS
                        .into_iter()
                        .map(|leg| {
                            view! {
                                <div>
                                    <h4 class="font-bold">{leg.heading}</h4>
                                    <p>{leg.summary()}</p>
                                    {leg
                                        .stops
                                        .into_iter()
                                        .map(|stop| view! { <p>{format!("{}: {}", stop.time, stop.place)}</p> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </CardContent>
            </Card>

            <TicketLinks />
        </div>

        <TicketViewer link=selected_link />
    }
}

#[component]
fn ChecklistTile(item: ChecklistItem) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let checked = Signal::derive(move || app_state.is_checked(item));

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            app_state.toggle_item(item);
        }
    };

    view! {
        <div
            role="button"
            tabindex="0"
            aria-pressed=move || if checked.get() { "true" } else { "false" }
            class=move || {
                if checked.get() {
                    "p-4 rounded-lg shadow-md cursor-pointer transition-all duration-300 bg-green-100 border-2 border-green-300"
                } else {
                    "p-4 rounded-lg shadow-md cursor-pointer transition-all duration-300 bg-white hover:bg-blue-50"
                }
            }
            on:click=move |_| app_state.toggle_item(item)
            on:keydown=on_keydown
        >
            <div class="flex items-center">
                <Checkbox checked=checked />
                <span class=move || if checked.get() { "line-through text-gray-500" } else { "" }>
                    {item.label()}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn EssentialsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let packed = move || app_state.checklist.with(|c| c.checked_count());

    view! {
        <div class="text-center mb-8">
            <h2 class="text-4xl font-extrabold text-blue-800">"Packing Essentials"</h2>
            <p class="text-xl text-blue-600">"Your mountain adventure checklist"</p>
            <CardDescription class="mt-2">
                {move || format!("{} of {} packed", packed(), ChecklistItem::COUNT)}
            </CardDescription>
        </div>

        <div class="grid md:grid-cols-2 gap-6">
            {ChecklistItem::ALL
                .into_iter()
                .map(|item| view! { <ChecklistTile item=item /> })
                .collect_view()}
        </div>
    }
}
