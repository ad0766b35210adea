//! Referral tab component.

use std::cell::Cell;
use std::rc::Rc;

use web_types::ReferralInfo;
use yew::prelude::*;

use crate::api;

/// Properties for ReferralTab.
#[derive(Properties, PartialEq)]
pub struct ReferralTabProps {
    pub user_id: String,
}

/// Referral tab component.
///
/// Shows only the heading until the referral info resolves; there is no
/// refresh mechanism after the mount fetch.
#[function_component(ReferralTab)]
pub fn referral_tab(props: &ReferralTabProps) -> Html {
    let info = use_state(|| None::<ReferralInfo>);

    {
        let info = info.clone();

        use_effect_with(props.user_id.clone(), move |user_id| {
            let alive = Rc::new(Cell::new(true));
            let task_alive = alive.clone();
            let user_id = user_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::get_referral_info(&user_id).await {
                    Ok(data) => {
                        if task_alive.get() {
                            info.set(Some(data));
                        }
                    }
                    Err(e) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to fetch referral info: {}", e).into(),
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
            <h2>{"👥 Партнёрка"}</h2>
            if let Some(info) = info.as_ref() {
                <>
                    <p>{"Ваша ссылка:"}</p>
                    <div class="ref-link">{ &info.link }</div>
                    <p>{ format!("Приглашено: {}", info.count) }</p>
                    <p>{ format!("Доход: {} ₽", info.earned) }</p>
                </>
            }
        </div>
    }
}
