//! Operations history tab component.

use std::cell::Cell;
use std::rc::Rc;

use web_types::{OperationRecord, OperationsHistory};
use yew::prelude::*;

use crate::api;

/// Properties for HistoryTab.
#[derive(Properties, PartialEq)]
pub struct HistoryTabProps {
    pub user_id: String,
}

/// Operations history tab component.
///
/// Renders deposits and withdrawals in exactly the order supplied by the
/// service; no client-side sorting, filtering or pagination.
#[function_component(HistoryTab)]
pub fn history_tab(props: &HistoryTabProps) -> Html {
    let ops = use_state(OperationsHistory::default);

    {
        let ops = ops.clone();

        use_effect_with(props.user_id.clone(), move |user_id| {
            let alive = Rc::new(Cell::new(true));
            let task_alive = alive.clone();
            let user_id = user_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::get_operations(&user_id).await {
                    Ok(history) => {
                        if task_alive.get() {
                            ops.set(history);
                        }
                    }
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to fetch operations: {}", e).into(),
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
            <h2>{"📜 История"}</h2>
            <div>
                <h3>{"Депозиты"}</h3>
                { for ops.deposits.iter().map(operation_line) }
            </div>
            <div>
                <h3>{"Выводы"}</h3>
                { for ops.withdrawals.iter().map(operation_line) }
            </div>
        </div>
    }
}

fn operation_line(op: &OperationRecord) -> Html {
    html! {
        <div class="op-line">{ format!("{} {}", op.amount, op.currency) }</div>
    }
}
