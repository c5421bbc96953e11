use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap text-sm font-medium transition-all duration-300 disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-blue-500 hover:cursor-pointer touch-manipulation select-none",
        variants: {
            variant: {
                Default: "bg-blue-600 text-white rounded-lg hover:bg-blue-700",
                // Navbar entry for the page currently on screen.
                NavActive: "bg-blue-600 text-white rounded-lg shadow-md",
                Nav: "text-blue-800 rounded-lg hover:bg-blue-200 hover:text-blue-900",
                Ghost: "text-blue-700 rounded-md hover:text-blue-900",
                Destructive: "text-red-600 hover:text-red-800",
                Link: "text-blue-600 hover:underline justify-start",
            },
            size: {
                Default: "h-10 px-4 py-2",
                Nav: "w-full px-3 py-2",
                Icon: "size-8",
                Inline: "p-0",
            }
        },
        component: {
            element: button
        }
    }
}
