pub mod center;
pub mod global_context;
pub mod header;
pub mod left;

use contracts::shared::navigation::LayoutMode;
use leptos::prelude::*;

use global_context::AppGlobalContext;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |            Header            |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |       Content (Center)       |
/// +-----------+------------------------------+
/// ```
///
/// The content column is offset by the sidebar rail on desktop and spans
/// the full width on mobile, where the sidebar becomes an overlay.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    ctx.track_viewport();

    let layout = ctx.layout;

    view! {
        <div
            class="app-layout"
            class:app-layout--mobile=move || layout.with(|l| l.mode == LayoutMode::MobileFull)
            class:app-layout--collapsed=move || layout.with(|l| l.mode == LayoutMode::DesktopCollapsed)
        >
            <left::Sidebar />

            <div
                class="app-main"
                style:margin-left=move || layout.with(|l| l.content_offset.clone())
                style:width=move || layout.with(|l| l.content_width.clone())
            >
                <header::Header />
                <center::Center>
                    {children()}
                </center::Center>
            </div>
        </div>
    }
}
