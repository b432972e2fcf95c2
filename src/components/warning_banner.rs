//! Warning Banner Component
//!
//! Inline, self-clearing warning (e.g. blank todo text).

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn WarningBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.warning.get().map(|message| view! {
            <div class="warning-banner" role="alert">
                <span class="warning-text">{message}</span>
                <button class="warning-dismiss" on:click=move |_| ctx.dismiss_warning()>
                    "×"
                </button>
            </div>
        })
    }
}
