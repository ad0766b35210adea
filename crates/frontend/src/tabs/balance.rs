//! Balance tab component.

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::api;

/// Properties for BalanceTab.
#[derive(Properties, PartialEq)]
pub struct BalanceTabProps {
    pub user_id: String,
}

/// Balance tab component.
///
/// Issues one balance request per mount and renders the two numeric fields,
/// defaulting to zero until the request resolves. The withdraw button is
/// presentational only for now.
#[function_component(BalanceTab)]
pub fn balance_tab(props: &BalanceTabProps) -> Html {
    let balance = use_state(|| 0.0_f64);
    let daily = use_state(|| 0.0_f64);

    {
        let balance = balance.clone();
        let daily = daily.clone();

        use_effect_with(props.user_id.clone(), move |user_id| {
            let alive = Rc::new(Cell::new(true));
            let task_alive = alive.clone();
            let user_id = user_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::get_balance(&user_id).await {
                    Ok(info) => {
                        // The tab may have been torn down while the request
                        // was in flight; drop the stale write.
                        if task_alive.get() {
                            balance.set(info.balance);
                            daily.set(info.daily_income);
                        }
                    }
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to fetch balance: {}", e).into(),
                            );
                        })
                        .forget();
                    }
                }
            });

            move || alive.set(false)
        });
    }

    html! {
        <div class="tab-panel">
            <h2>{"💼 Баланс"}</h2>
            <p>{ format!("Текущий: {} ₽", *balance) }</p>
            <p>{ format!("Сегодня начислено: +{} ₽", *daily) }</p>
            <button class="btn btn-primary">{"📤 Вывести средства"}</button>
        </div>
    }
}
