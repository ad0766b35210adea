//! Top navigation bar component.

use yew::prelude::*;

use crate::app::Tab;

/// Properties for TabBar component.
#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

/// Tab selector shown at the top of the shell.
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    let button = |target: Tab, caption: &str| -> Html {
        let class = if props.active == target {
            "tab-button active"
        } else {
            "tab-button"
        };

        html! {
            <button {class} onclick={props.on_select.reform(move |_| target)}>
                { caption }
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { button(Tab::Balance, "💼 Баланс") }
            { button(Tab::Deposit, "💸 Пополнить") }
            { button(Tab::Referral, "👥 Партнёрка") }
            { button(Tab::History, "📜 История") }
        </div>
    }
}
