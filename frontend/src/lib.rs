pub mod components;
pub mod config;
pub mod hooks;
pub mod services;
pub mod styles;

use std::rc::Rc;

use rand::rngs::ThreadRng;
use shared::constants::welcome_message;
use shared::shared_wheel_game::{SessionConfig, UniformSegments};
use shared::validation::PlayerProfile;
use shared::wheel_session::{ResultMessage, SessionOrchestrator, SpinReport};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{FormView, WheelPanel};
use crate::config::prize_url;
use crate::services::wheel_view::WheelHandles;
use crate::services::{GlooPacer, GlooPrizeClient, YewWheelView};

pub type BrowserSession =
    SessionOrchestrator<YewWheelView, GlooPrizeClient, GlooPacer, UniformSegments<ThreadRng>>;

#[function_component(App)]
pub fn app() -> Html {
    let visible = use_state(|| false);
    let attempts_left = use_state(|| 0u32);
    let is_spinning = use_state(|| false);
    let message = use_state(ResultMessage::cleared);
    let rotation = use_state(|| 0.0f64);

    let session: Rc<BrowserSession> = {
        let handles = WheelHandles {
            visible: visible.setter(),
            attempts_left: attempts_left.setter(),
            is_spinning: is_spinning.setter(),
            message: message.setter(),
            rotation: rotation.setter(),
        };
        use_memo((), move |_| {
            let config = SessionConfig::default();
            let view = YewWheelView::new(handles, config.spin_duration);
            SessionOrchestrator::new(
                config,
                view,
                GlooPrizeClient::new(prize_url()),
                GlooPacer,
                UniformSegments::default(),
            )
        })
    };

    let on_login = {
        let session = session.clone();
        Callback::from(move |profile: PlayerProfile| {
            session.login(profile);
        })
    };

    let on_spin = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let session = session.clone();
            spawn_local(async move {
                match session.spin().await {
                    Ok(SpinReport::Completed(outcome)) => {
                        log::debug!("spin finished on segment {}", outcome.segment_index);
                    }
                    Ok(SpinReport::Ignored) => {}
                    Err(err) => log::error!("spin aborted: {}", err),
                }
            });
        })
    };

    let on_back = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            session.back_to_form();
        })
    };

    let greeting = session
        .profile()
        .map(|profile| welcome_message(profile.name()))
        .unwrap_or_default();

    html! {
        <div class="min-h-screen w-full">
            <div class={styles::CONTAINER}>
                <div class={styles::FLEX_CENTER}>
                    if *visible {
                        <WheelPanel
                            wheel={session.config().wheel.clone()}
                            greeting={greeting}
                            attempts_left={*attempts_left}
                            is_spinning={*is_spinning}
                            rotation={*rotation}
                            message={(*message).clone()}
                            on_spin={on_spin}
                            on_back={on_back}
                        />
                    } else {
                        <FormView on_login={on_login} />
                    }
                </div>
            </div>
        </div>
    }
}
