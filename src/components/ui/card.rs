use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-white text-blue-800 flex flex-col gap-4 rounded-xl shadow-lg py-6"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h3, "text-2xl font-semibold text-blue-700"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-sm text-blue-600"}

    clx! {CardList, ul, "flex flex-col gap-2"}
    clx! {CardItem, li, "flex items-center [&_svg:not([class*='size-'])]:size-4 [&_svg]:shrink-0"}
}

#[allow(unused_imports)]
pub use components::*;
