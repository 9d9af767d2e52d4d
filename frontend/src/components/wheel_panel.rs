use shared::shared_wheel_game::WheelConfig;
use shared::wheel_session::ResultMessage;
use yew::prelude::*;

use super::wheel_canvas::WheelCanvas;
use super::wheel_utils::spin_button_label;
use crate::styles;

pub const BACK_LABEL: &str = "Back to form";

#[derive(Properties, PartialEq)]
pub struct WheelPanelProps {
    pub wheel: WheelConfig,
    pub greeting: String,
    pub attempts_left: u32,
    pub is_spinning: bool,
    pub rotation: f64,
    pub message: ResultMessage,
    pub on_spin: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(WheelPanel)]
pub fn wheel_panel(props: &WheelPanelProps) -> Html {
    let spin_disabled = props.is_spinning || props.attempts_left == 0;

    let on_spin = {
        let on_spin = props.on_spin.clone();
        Callback::from(move |_: MouseEvent| on_spin.emit(()))
    };
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class={styles::WHEEL_CARD}>
            <div class={styles::HEADER}>
                <h2 class={styles::TEXT_H2}>{&props.greeting}</h2>
            </div>

            <div class="relative mx-auto mb-8 flex justify-center items-center">
                <div class="w-full max-w-[450px] mx-auto">
                    <WheelCanvas
                        wheel={props.wheel.clone()}
                        rotation={props.rotation}
                        is_spinning={props.is_spinning}
                    />
                </div>
            </div>

            <div class="flex justify-center mt-4">
                <div class="w-full max-w-[300px]">
                    <button
                        onclick={on_spin}
                        disabled={spin_disabled}
                        class={if spin_disabled { styles::SPIN_BUTTON_DISABLED } else { styles::SPIN_BUTTON }}
                    >
                        {spin_button_label(props.attempts_left, props.is_spinning)}
                    </button>
                </div>
            </div>

            <div class="mt-6 min-h-[3rem]">
                if !props.message.is_empty() {
                    <p class={styles::message_class(props.message.kind)}>{&props.message.text}</p>
                }
            </div>

            <div class="mt-4 text-center">
                <a
                    onclick={on_back}
                    class={if props.is_spinning { styles::BACK_LINK_DISABLED } else { styles::BACK_LINK }}
                >
                    {BACK_LABEL}
                </a>
            </div>
        </div>
    }
}
