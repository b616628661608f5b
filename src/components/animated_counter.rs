use log::debug;
use yew::prelude::*;

use crate::counter::{format_counter, CounterConfig, CounterDriver};
use crate::scheduler::IntervalScheduler;

/// Animates from zero to `config.target` while the calling component is
/// mounted. Returns the value to display.
#[hook]
pub fn use_animated_counter(config: CounterConfig) -> u64 {
    let value = use_state(|| 0u64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |config: &CounterConfig| {
                debug!("Counter mounted");
                let driver = CounterDriver::start(&IntervalScheduler, *config, move |current| {
                    value.set(current)
                });

                // Unmount (or a new config) drops the driver, which cancels the interval
                move || {
                    drop(driver);
                    debug!("Counter unmounted");
                }
            },
            config,
        );
    }

    *value
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    #[prop_or_default]
    pub config: CounterConfig,
    #[prop_or(AttrValue::Static("$ "))]
    pub prefix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let value = use_animated_counter(props.config);

    html! {
        <div class="counter-card">
            <div class="counter-value">
                { format!("{}{}", props.prefix, format_counter(value)) }
            </div>
        </div>
    }
}
