//! Deposit tab component.

use web_types::{IssuedLabel, PaymentMethod};
use yew::prelude::*;

use crate::api;

/// Properties for DepositTab.
#[derive(Properties, PartialEq)]
pub struct DepositTabProps {
    pub user_id: String,
}

/// Deposit tab component.
///
/// The user picks a payment method and an amount, then explicitly requests a
/// deposit address. Each request issues a fresh label and overwrites the
/// previous one in the display; the backend is the sole validator of the
/// amount.
#[function_component(DepositTab)]
pub fn deposit_tab(props: &DepositTabProps) -> Html {
    let method = use_state(|| PaymentMethod::Ton);
    let amount = use_state(String::new);
    let label = use_state(|| None::<IssuedLabel>);

    let on_method_change = {
        let method = method.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            method.set(match select.value().as_str() {
                "USDT" => PaymentMethod::Usdt,
                _ => PaymentMethod::Ton,
            });
        })
    };

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_generate = {
        let label = label.clone();
        let method = method.clone();
        let amount = amount.clone();
        let user_id = props.user_id.clone();

        Callback::from(move |_: MouseEvent| {
            let label = label.clone();
            let user_id = user_id.clone();
            let method = *method;
            let amount = (*amount).clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::generate_label(&user_id, method, &amount).await {
                    Ok(issued) => label.set(Some(issued)),
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to generate label: {}", e).into(),
                            );
                        })
                        .forget();
                    }
                }
            });
        })
    };

    html! {
        <div class="tab-panel">
            <h2>{"💸 Пополнение"}</h2>
            <select class="field" onchange={on_method_change}>
                <option value="TON" selected={*method == PaymentMethod::Ton}>{"TON"}</option>
                <option value="USDT" selected={*method == PaymentMethod::Usdt}>{"USDT (TRC20)"}</option>
            </select>
            <input
                type="number"
                class="field"
                placeholder="Сумма"
                value={(*amount).clone()}
                oninput={on_amount_input}
            />
            <button class="btn btn-primary" onclick={on_generate}>{"🚀 Получить адрес"}</button>
            if let Some(issued) = label.as_ref() {
                <p class="label-result">
                    { format!("Адрес: {}", issued.address) }
                    <br/>
                    { format!("Label: {}", issued.label) }
                </p>
            }
        </div>
    }
}
