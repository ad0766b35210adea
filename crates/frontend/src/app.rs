//! Main application component with tab selection.

use yew::prelude::*;

use crate::components::TabBar;
use crate::tabs::{BalanceTab, DepositTab, HistoryTab, ReferralTab};

/// The four top-level views of the dashboard.
#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Balance,
    Deposit,
    Referral,
    History,
}

/// Main application component.
///
/// Holds the active tab and the user identifier read once from the page
/// query string. Tab switching is a pure local state change; the selected
/// tab component remounts and performs its own fetch.
#[function_component(App)]
pub fn app() -> Html {
    let tab = use_state(|| Tab::Balance);
    let user_id = use_memo((), |_| user_id_from_location());

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |next: Tab| tab.set(next))
    };

    let body = match *tab {
        Tab::Balance => html! { <BalanceTab user_id={(*user_id).clone()} /> },
        Tab::Deposit => html! { <DepositTab user_id={(*user_id).clone()} /> },
        Tab::Referral => html! { <ReferralTab user_id={(*user_id).clone()} /> },
        Tab::History => html! { <HistoryTab user_id={(*user_id).clone()} /> },
    };

    html! {
        <div class="app-container">
            <TabBar active={*tab} on_select={on_select} />
            { body }
        </div>
    }
}

/// Read the `user_id` query parameter from the hosting page URL.
///
/// The identifier is supplied by the embedding host application. When it is
/// absent the tabs issue requests with an empty value; there is no guard.
fn user_id_from_location() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("user_id"))
        .unwrap_or_default()
}
